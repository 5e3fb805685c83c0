pub mod console;
pub mod form;
pub mod listing;
pub mod screen;
pub mod store;

// Re-export key types for convenience
pub use console::AdminConsole;
pub use form::{FormController, FormMode};
pub use listing::{list_page, ListQuery};
pub use screen::Screen;
pub use store::EntityStore;

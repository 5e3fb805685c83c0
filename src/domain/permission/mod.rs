//! Permission aggregate

pub mod model;

mod dto_form;

pub use dto_form::PermissionForm;
pub use model::Permission;

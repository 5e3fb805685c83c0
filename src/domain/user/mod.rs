//! User aggregate
//!
//! Contains the User entity and its add / edit form.

pub mod model;

mod dto_form;

pub use dto_form::UserForm;
pub use model::{User, UserStatus};

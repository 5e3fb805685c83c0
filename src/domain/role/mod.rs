//! Role aggregate

pub mod model;

mod dto_form;

pub use dto_form::RoleForm;
pub use model::{available_role_names, Role};

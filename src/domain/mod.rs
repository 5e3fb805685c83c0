pub mod entity;
pub mod permission;
pub mod role;
pub mod role_name;
pub mod user;

// Re-export commonly used types
pub use entity::{Draft, Entity, RecordId};
pub use permission::{Permission, PermissionForm};
pub use role::{available_role_names, Role, RoleForm};
pub use role_name::RoleName;
pub use user::{User, UserForm, UserStatus};

pub use crate::shared::{DomainError, DomainResult};

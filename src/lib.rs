//! # Admin Console Core
//!
//! State, validation and listing logic behind an administrative console for
//! users, roles and permissions.
//!
//! ## Architecture
//!
//! - **domain**: Records, their add/edit forms and validation rules
//! - **application**: Generic entity store, form controller, list filter and
//!   the per-entity screens built from them
//! - **infrastructure**: Key-value storage port with in-memory and JSON file
//!   backends
//! - **shared**: Errors, field-level validation results, pagination types
//! - **config** / **logging**: TOML configuration and tracing setup

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod shared;

pub use config::{default_config_path, AppConfig};
pub use logging::init_tracing;

pub use application::{AdminConsole, EntityStore, FormController, ListQuery, Screen};
pub use domain::{Entity, Permission, RecordId, Role, RoleName, User, UserStatus};
pub use infrastructure::{InMemoryStore, JsonFileStore, KeyValueStore};
pub use shared::{DomainError, DomainResult, FieldErrors, PaginatedResult, SearchScope};

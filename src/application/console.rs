//! Admin console: the three management screens over one storage port

use std::sync::Arc;

use tracing::info;

use super::screen::Screen;
use crate::config::{AppConfig, ListingConfig};
use crate::domain::{Permission, Role, User};
use crate::infrastructure::{open_storage, KeyValueStore};
use crate::shared::{DomainResult, SearchScope};

pub struct AdminConsole {
    users: Screen<User>,
    roles: Screen<Role>,
    permissions: Screen<Permission>,
}

impl AdminConsole {
    /// Load all three collections from `storage`.
    ///
    /// Only the users screen honours `listing.user_search_scope`; roles and
    /// permissions always search the whole collection.
    pub fn open(storage: Arc<dyn KeyValueStore>, listing: &ListingConfig) -> DomainResult<Self> {
        let page_size = listing.page_size;
        let console = Self {
            users: Screen::open(storage.clone(), page_size, listing.user_search_scope)?,
            roles: Screen::open(storage.clone(), page_size, SearchScope::Collection)?,
            permissions: Screen::open(storage, page_size, SearchScope::Collection)?,
        };
        info!(
            users = console.users.records().len(),
            roles = console.roles.records().len(),
            permissions = console.permissions.records().len(),
            "Admin console loaded"
        );
        Ok(console)
    }

    /// Open the storage backend named in `config` and load from it.
    pub fn from_config(config: &AppConfig) -> DomainResult<Self> {
        let storage = open_storage(&config.storage)?;
        Self::open(storage, &config.listing)
    }

    pub fn users(&self) -> &Screen<User> {
        &self.users
    }

    pub fn users_mut(&mut self) -> &mut Screen<User> {
        &mut self.users
    }

    pub fn roles(&self) -> &Screen<Role> {
        &self.roles
    }

    pub fn roles_mut(&mut self) -> &mut Screen<Role> {
        &mut self.roles
    }

    pub fn permissions(&self) -> &Screen<Permission> {
        &self.permissions
    }

    pub fn permissions_mut(&mut self) -> &mut Screen<Permission> {
        &mut self.permissions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{StorageBackend, StorageConfig};
    use crate::infrastructure::InMemoryStore;

    fn add_user(console: &mut AdminConsole, username: &str, role: &str) {
        let users = console.users_mut();
        users.begin_add();
        users.set_field("username", username).unwrap();
        users.set_field("email", format!("{}@example.com", username)).unwrap();
        users.set_field("password", "secret1").unwrap();
        users.set_field("role", role).unwrap();
        users.set_field("status", "Active").unwrap();
        users.on_submit_add().unwrap();
    }

    #[test]
    fn state_survives_reopening_the_console() {
        let storage = Arc::new(InMemoryStore::new());
        let listing = ListingConfig::default();
        {
            let mut console = AdminConsole::open(storage.clone(), &listing).unwrap();
            add_user(&mut console, "alice", "Admin");
            let roles = console.roles_mut();
            roles.set_field("name", "Admin").unwrap();
            roles.on_submit_add().unwrap();
        }

        let console = AdminConsole::open(storage, &listing).unwrap();
        assert_eq!(console.users().records().len(), 1);
        assert_eq!(console.roles().records()[0].name, "Admin");
        assert!(console.permissions().records().is_empty());
    }

    #[test]
    fn renaming_a_role_does_not_cascade_to_users() {
        let storage = Arc::new(InMemoryStore::new());
        let mut console = AdminConsole::open(storage, &ListingConfig::default()).unwrap();
        add_user(&mut console, "alice", "Editor");

        let roles = console.roles_mut();
        roles.set_field("name", "Editor").unwrap();
        let role = roles.on_submit_add().unwrap();
        roles.begin_edit(role.id).unwrap();
        roles.set_field("name", "Publisher").unwrap();
        roles.on_submit_edit().unwrap();

        assert_eq!(console.users().records()[0].role, "Editor");
    }

    #[test]
    fn user_search_scope_comes_from_config() {
        let storage = Arc::new(InMemoryStore::new());
        let listing = ListingConfig {
            page_size: 2,
            user_search_scope: SearchScope::Page,
        };
        let mut console = AdminConsole::open(storage, &listing).unwrap();
        add_user(&mut console, "anna", "Viewer");
        add_user(&mut console, "ben", "Viewer");
        add_user(&mut console, "cleo", "Admin");

        let users = console.users_mut();
        users.on_search_change("admin");
        assert!(users.current_page().items.is_empty());
        users.on_page_change(2);
        assert_eq!(users.current_page().items[0].username, "cleo");
        assert_eq!(console.roles().page_size(), 2);
    }

    #[test]
    fn memory_backend_from_config() {
        let config = AppConfig {
            storage: StorageConfig {
                backend: StorageBackend::Memory,
                data_dir: None,
            },
            ..AppConfig::default()
        };
        let console = AdminConsole::from_config(&config).unwrap();
        assert!(console.users().records().is_empty());
        assert_eq!(console.users().page_size(), 5);
    }

    #[test]
    fn file_backend_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            storage: StorageConfig {
                backend: StorageBackend::File,
                data_dir: Some(dir.path().to_path_buf()),
            },
            ..AppConfig::default()
        };
        {
            let mut console = AdminConsole::from_config(&config).unwrap();
            add_user(&mut console, "dora", "Support");
        }
        assert!(dir.path().join("users.json").exists());
        let console = AdminConsole::from_config(&config).unwrap();
        assert_eq!(console.users().records()[0].username, "dora");
    }
}

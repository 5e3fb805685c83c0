use serde::{Deserialize, Serialize};

use super::RoleForm;
use crate::domain::entity::{Entity, RecordId};
use crate::domain::role_name::RoleName;
use crate::shared::DomainResult;

/// Role model
///
/// `permissions` is a free-text summary; it is not linked to the
/// permission collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub permissions: String,
}

impl Entity for Role {
    type Draft = RoleForm;

    const STORAGE_KEY: &'static str = "roles";
    const NAME: &'static str = "Role";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: RoleForm) -> DomainResult<Self> {
        Ok(Self {
            id,
            name: draft.name,
            description: draft.description,
            permissions: draft.permissions,
        })
    }

    fn to_draft(&self) -> RoleForm {
        RoleForm {
            name: self.name.clone(),
            description: self.description.clone(),
            permissions: self.permissions.clone(),
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.description.as_str(),
            self.permissions.as_str(),
        ]
    }
}

/// Role names from the fixed set that no existing role uses yet.
///
/// The role form offers only these when adding a role.
pub fn available_role_names(roles: &[Role]) -> Vec<RoleName> {
    RoleName::ALL
        .into_iter()
        .filter(|name| !roles.iter().any(|r| r.name == name.as_str()))
        .collect()
}

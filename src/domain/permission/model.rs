use serde::{Deserialize, Serialize};

use super::PermissionForm;
use crate::domain::entity::{Entity, RecordId};
use crate::shared::DomainResult;

/// Permission model
///
/// Associated with a role by name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub role: String,
}

impl Entity for Permission {
    type Draft = PermissionForm;

    const STORAGE_KEY: &'static str = "permissions";
    const NAME: &'static str = "Permission";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: PermissionForm) -> DomainResult<Self> {
        Ok(Self {
            id,
            name: draft.name,
            description: draft.description,
            role: draft.role,
        })
    }

    fn to_draft(&self) -> PermissionForm {
        PermissionForm {
            name: self.name.clone(),
            description: self.description.clone(),
            role: self.role.clone(),
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_is_not_searchable() {
        let p = Permission {
            id: 1,
            name: "Export reports".into(),
            description: "Download CSV files".into(),
            role: "Manager".into(),
        };
        assert!(p.matches("csv"));
        assert!(p.matches("export"));
        assert!(!p.matches("manager"));
    }
}

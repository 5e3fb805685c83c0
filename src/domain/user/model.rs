use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UserForm;
use crate::domain::entity::{Entity, RecordId};
use crate::shared::{DomainError, DomainResult};

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            other => Err(DomainError::Validation(format!("Unknown status: {}", other))),
        }
    }
}

/// User model
///
/// The password is kept and serialized in plain text; the stored
/// collection shape depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub status: UserStatus,
}

impl Entity for User {
    type Draft = UserForm;

    const STORAGE_KEY: &'static str = "users";
    const NAME: &'static str = "User";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: UserForm) -> DomainResult<Self> {
        let status = draft.status.parse()?;
        Ok(Self {
            id,
            username: draft.username,
            email: draft.email,
            password: draft.password,
            role: draft.role,
            status,
        })
    }

    fn to_draft(&self) -> UserForm {
        UserForm {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: self.role.clone(),
            status: self.status.to_string(),
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.username.as_str(), self.email.as_str(), self.role.as_str()]
    }
}

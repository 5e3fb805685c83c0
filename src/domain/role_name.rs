//! Fixed set of role names offered by every form

use std::fmt;
use std::str::FromStr;

use validator::ValidationError;

use crate::shared::{error_with_message, DomainError};

/// Role names selectable in the user, role and permission forms.
///
/// Records store the name as plain text; nothing links a user's or a
/// permission's role to a `Role` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleName {
    Admin,
    Contributor,
    Editor,
    Viewer,
    Moderator,
    Developer,
    Support,
    Manager,
    Tester,
    Analyst,
}

impl RoleName {
    pub const ALL: [RoleName; 10] = [
        RoleName::Admin,
        RoleName::Contributor,
        RoleName::Editor,
        RoleName::Viewer,
        RoleName::Moderator,
        RoleName::Developer,
        RoleName::Support,
        RoleName::Manager,
        RoleName::Tester,
        RoleName::Analyst,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::Admin => "Admin",
            RoleName::Contributor => "Contributor",
            RoleName::Editor => "Editor",
            RoleName::Viewer => "Viewer",
            RoleName::Moderator => "Moderator",
            RoleName::Developer => "Developer",
            RoleName::Support => "Support",
            RoleName::Manager => "Manager",
            RoleName::Tester => "Tester",
            RoleName::Analyst => "Analyst",
        }
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("Unknown role name: {}", s)))
    }
}

/// Form rule: a role name from the fixed set must be selected.
pub(crate) fn validate_role_selected(value: &str) -> Result<(), ValidationError> {
    if value.parse::<RoleName>().is_ok() {
        Ok(())
    } else {
        Err(error_with_message("role", "Please select a role."))
    }
}

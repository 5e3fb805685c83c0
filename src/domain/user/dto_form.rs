use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationError};

use crate::domain::entity::Draft;
use crate::domain::role_name::validate_role_selected;
use crate::shared::error_with_message;

/// `local@domain.tld` with a 2–4 character final label. Deliberately loose:
/// it accepts some malformed addresses and rejects longer TLDs.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$")
        .expect("email pattern is a valid regex")
});

/// Add / edit form for a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct UserForm {
    #[validate(length(min = 3, message = "Username must be at least 3 characters long."))]
    pub username: String,
    #[validate(custom(function = "validate_email_pattern"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    pub password: String,
    #[validate(custom(function = "validate_role_selected"))]
    pub role: String,
    #[validate(custom(function = "validate_status_selected"))]
    pub status: String,
}

fn validate_email_pattern(value: &str) -> Result<(), ValidationError> {
    if EMAIL_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(error_with_message("email", "Invalid email address."))
    }
}

fn validate_status_selected(value: &str) -> Result<(), ValidationError> {
    match value {
        "Active" | "Inactive" => Ok(()),
        _ => Err(error_with_message("status", "Please select a status.")),
    }
}

impl Draft for UserForm {
    const FIELDS: &'static [&'static str] = &["username", "email", "password", "role", "status"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "username" => Some(&self.username),
            "email" => Some(&self.email),
            "password" => Some(&self.password),
            "role" => Some(&self.role),
            "status" => Some(&self.status),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "username" => Some(&mut self.username),
            "email" => Some(&mut self.email),
            "password" => Some(&mut self.password),
            "role" => Some(&mut self.role),
            "status" => Some(&mut self.status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, email: &str, password: &str, role: &str, status: &str) -> UserForm {
        UserForm {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            role: role.into(),
            status: status.into(),
        }
    }

    #[test]
    fn every_failing_field_is_reported() {
        let errors = form("ab", "bad", "123", "", "").field_errors();
        assert_eq!(errors.len(), 5);
        assert_eq!(
            errors.get("username"),
            Some("Username must be at least 3 characters long.")
        );
        assert_eq!(errors.get("email"), Some("Invalid email address."));
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters.")
        );
        assert_eq!(errors.get("role"), Some("Please select a role."));
        assert_eq!(errors.get("status"), Some("Please select a status."));
    }

    #[test]
    fn valid_form_has_no_errors() {
        let errors = form("alice", "a@b.co", "secret1", "Admin", "Active").field_errors();
        assert!(errors.is_empty(), "unexpected errors: {}", errors);
    }

    #[test]
    fn legacy_analyst_spelling_must_be_reselected() {
        let errors = form("alice", "a@b.co", "secret1", "Ananlyst", "Active").field_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("role"), Some("Please select a role."));
    }

    #[test]
    fn empty_form_fails_everything() {
        assert_eq!(UserForm::default().field_errors().len(), 5);
    }

    #[test]
    fn email_pattern_keeps_its_quirks() {
        assert!(validate_email_pattern("first.last-name@mail.example.org").is_ok());
        assert!(validate_email_pattern("a_b@x-y.io").is_ok());
        // Final label longer than four characters.
        assert!(validate_email_pattern("someone@example.museum").is_err());
        // Loose local part is accepted.
        assert!(validate_email_pattern("..@example.com").is_ok());
        assert!(validate_email_pattern("no-at-sign.com").is_err());
        assert!(validate_email_pattern("user@localhost").is_err());
        assert!(validate_email_pattern("plus+tag@example.com").is_err());
    }

    #[test]
    fn lengths_are_inclusive_minimums() {
        let errors = form("abc", "a@b.co", "123456", "Viewer", "Inactive").field_errors();
        assert!(errors.is_empty());
    }

    #[test]
    fn status_must_be_a_known_value() {
        let errors = form("alice", "a@b.co", "secret1", "Admin", "active").field_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("status"));
    }

    #[test]
    fn set_field_rejects_unknown_names() {
        let mut draft = UserForm::default();
        draft.set_field("email", "x@y.com".into()).unwrap();
        assert_eq!(draft.field("email"), Some("x@y.com"));
        assert!(draft.set_field("nickname", "x".into()).is_err());
    }
}

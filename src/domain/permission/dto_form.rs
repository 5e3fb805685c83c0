use validator::Validate;

use crate::domain::entity::Draft;
use crate::domain::role_name::validate_role_selected;

/// Add / edit form for a permission
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct PermissionForm {
    #[validate(length(min = 1, message = "Permission name is required."))]
    pub name: String,
    pub description: String,
    #[validate(custom(function = "validate_role_selected"))]
    pub role: String,
}

impl Draft for PermissionForm {
    const FIELDS: &'static [&'static str] = &["name", "description", "role"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "description" => Some(&self.description),
            "role" => Some(&self.role),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "name" => Some(&mut self.name),
            "description" => Some(&mut self.description),
            "role" => Some(&mut self.role),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_role_are_required() {
        let errors = PermissionForm::default().field_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("Permission name is required."));
        assert_eq!(errors.get("role"), Some("Please select a role."));
    }

    #[test]
    fn description_is_optional() {
        let form = PermissionForm {
            name: "Edit posts".into(),
            description: String::new(),
            role: "Editor".into(),
        };
        assert!(form.field_errors().is_empty());
    }
}

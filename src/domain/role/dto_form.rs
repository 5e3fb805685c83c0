use validator::Validate;

use crate::domain::entity::Draft;

/// Add / edit form for a role
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct RoleForm {
    #[validate(length(min = 1, message = "Role name is required."))]
    pub name: String,
    pub description: String,
    pub permissions: String,
}

impl Draft for RoleForm {
    const FIELDS: &'static [&'static str] = &["name", "description", "permissions"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "description" => Some(&self.description),
            "permissions" => Some(&self.permissions),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "name" => Some(&mut self.name),
            "description" => Some(&mut self.description),
            "permissions" => Some(&mut self.permissions),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_name_is_required() {
        let errors = RoleForm::default().field_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("Role name is required."));

        let form = RoleForm {
            name: "Auditor".into(),
            ..Default::default()
        };
        assert!(form.field_errors().is_empty());
    }
}

//! Form controller: draft editing, validation and submission

use std::marker::PhantomData;

use tracing::debug;

use super::store::EntityStore;
use crate::domain::{Draft, Entity, RecordId};
use crate::shared::{DomainError, DomainResult, FieldErrors};

/// Whether a submit creates a record or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(RecordId),
}

/// Draft record plus the validation errors of the last submit.
#[derive(Debug)]
pub struct FormController<E: Entity> {
    mode: FormMode,
    draft: E::Draft,
    errors: FieldErrors,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Default for FormController<E> {
    fn default() -> Self {
        Self::add()
    }
}

impl<E: Entity> FormController<E> {
    /// Empty form for a new record.
    pub fn add() -> Self {
        Self {
            mode: FormMode::Add,
            draft: E::Draft::default(),
            errors: FieldErrors::new(),
            _entity: PhantomData,
        }
    }

    /// Form prefilled with a copy of `record`.
    pub fn edit(record: &E) -> Self {
        Self {
            mode: FormMode::Edit(record.id()),
            draft: record.to_draft(),
            errors: FieldErrors::new(),
            _entity: PhantomData,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &E::Draft {
        &self.draft
    }

    /// Errors recorded by the last rejected submit.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Update one draft field. Nothing else changes.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> DomainResult<()> {
        self.draft.set_field(name, value.into())
    }

    /// Every currently failing field with its message.
    pub fn validate(&self) -> FieldErrors {
        self.draft.field_errors()
    }

    /// Validate, then add or update through `store` depending on the mode.
    ///
    /// A rejected draft leaves the store untouched and keeps the draft for
    /// correction. A successful submit clears the errors and resets to an
    /// empty add form.
    pub fn submit(&mut self, store: &mut EntityStore<E>) -> DomainResult<E> {
        let errors = self.validate();
        if !errors.is_empty() {
            debug!(entity = E::NAME, failing = errors.len(), "Form rejected");
            self.errors = errors.clone();
            return Err(DomainError::InvalidFields(errors));
        }

        let saved = match self.mode {
            FormMode::Add => store.add(self.draft.clone())?,
            FormMode::Edit(id) => store
                .update(id, self.draft.clone())?
                .ok_or_else(|| DomainError::NotFound {
                    entity: E::NAME,
                    field: "id",
                    value: id.to_string(),
                })?,
        };

        self.reset();
        Ok(saved)
    }

    /// Back to an empty add form.
    pub fn reset(&mut self) {
        self.mode = FormMode::Add;
        self.draft = E::Draft::default();
        self.errors = FieldErrors::new();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{Role, User, UserForm, UserStatus};
    use crate::infrastructure::InMemoryStore;

    fn user_store() -> EntityStore<User> {
        EntityStore::load(Arc::new(InMemoryStore::new())).unwrap()
    }

    fn fill_valid_user(form: &mut FormController<User>, username: &str) {
        form.set_field("username", username).unwrap();
        form.set_field("email", format!("{}@example.com", username)).unwrap();
        form.set_field("password", "secret1").unwrap();
        form.set_field("role", "Admin").unwrap();
        form.set_field("status", "Active").unwrap();
    }

    #[test]
    fn set_field_only_touches_the_draft() {
        let mut form = FormController::<User>::add();
        form.set_field("username", "ab").unwrap();
        assert_eq!(form.draft().username, "ab");
        assert!(form.errors().is_empty());
        assert!(form.set_field("age", "3").is_err());
    }

    #[test]
    fn rejected_submit_mutates_nothing() {
        let mut store = user_store();
        let mut form = FormController::<User>::add();
        form.set_field("username", "ab").unwrap();
        form.set_field("email", "bad").unwrap();
        form.set_field("password", "123").unwrap();

        let err = form.submit(&mut store).unwrap_err();
        let errors = err.field_errors().unwrap();
        assert_eq!(errors.len(), 5);
        assert_eq!(form.errors(), errors);
        assert!(store.is_empty());
        // Draft is kept for correction.
        assert_eq!(form.draft().username, "ab");
    }

    #[test]
    fn add_submit_creates_and_resets() {
        let mut store = user_store();
        let mut form = FormController::<User>::add();
        fill_valid_user(&mut form, "alice");

        let saved = form.submit(&mut store).unwrap();
        assert_eq!(saved.id, 1);
        assert_eq!(saved.status, UserStatus::Active);
        assert_eq!(store.len(), 1);
        assert_eq!(form.mode(), FormMode::Add);
        assert_eq!(form.draft(), &UserForm::default());
    }

    #[test]
    fn errors_clear_after_a_successful_retry() {
        let mut store = user_store();
        let mut form = FormController::<User>::add();
        assert!(form.submit(&mut store).is_err());
        assert_eq!(form.errors().len(), 5);

        fill_valid_user(&mut form, "bob");
        form.submit(&mut store).unwrap();
        assert!(form.errors().is_empty());
    }

    #[test]
    fn edit_submit_updates_in_place() {
        let mut store = user_store();
        let mut form = FormController::<User>::add();
        fill_valid_user(&mut form, "alice");
        form.submit(&mut store).unwrap();
        fill_valid_user(&mut form, "bob");
        form.submit(&mut store).unwrap();

        let alice = store.get(1).unwrap().clone();
        let mut edit = FormController::edit(&alice);
        assert_eq!(edit.mode(), FormMode::Edit(1));
        assert_eq!(edit.draft().password, "secret1");
        edit.set_field("status", "Inactive").unwrap();

        let saved = edit.submit(&mut store).unwrap();
        assert_eq!(saved.id, 1);
        assert_eq!(saved.status, UserStatus::Inactive);
        assert_eq!(saved.username, "alice");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(2).unwrap().username, "bob");
        assert_eq!(edit.mode(), FormMode::Add);
    }

    #[test]
    fn editing_a_deleted_record_reports_not_found() {
        let mut store: EntityStore<Role> =
            EntityStore::load(Arc::new(InMemoryStore::new())).unwrap();
        let mut form = FormController::<Role>::add();
        form.set_field("name", "Admin").unwrap();
        let role = form.submit(&mut store).unwrap();

        let mut edit = FormController::edit(&role);
        store.delete(role.id).unwrap();
        edit.set_field("description", "gone").unwrap();

        let err = edit.submit(&mut store).unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Role", .. }));
        assert!(store.is_empty());
    }
}

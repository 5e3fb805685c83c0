//! Management screen state for one record type
//!
//! Ties a store, a form and the current search/page together and exposes
//! the callbacks a presentation layer wires to its controls. Every getter
//! re-derives from the latest collection.

use std::sync::Arc;

use tracing::debug;

use super::form::{FormController, FormMode};
use super::listing::{list_page, ListQuery};
use super::store::EntityStore;
use crate::domain::{available_role_names, Entity, RecordId, Role, RoleName};
use crate::infrastructure::KeyValueStore;
use crate::shared::{DomainError, DomainResult, FieldErrors, PaginatedResult, SearchScope};

pub struct Screen<E: Entity> {
    store: EntityStore<E>,
    form: FormController<E>,
    search: String,
    page: u32,
    page_size: u32,
    scope: SearchScope,
    pending_delete: Option<RecordId>,
}

impl<E: Entity> Screen<E> {
    pub fn new(store: EntityStore<E>, page_size: u32, scope: SearchScope) -> Self {
        Self {
            store,
            form: FormController::add(),
            search: String::new(),
            page: 1,
            page_size,
            scope,
            pending_delete: None,
        }
    }

    /// Load the collection and start on page 1 with no search.
    pub fn open(
        storage: Arc<dyn KeyValueStore>,
        page_size: u32,
        scope: SearchScope,
    ) -> DomainResult<Self> {
        Ok(Self::new(EntityStore::load(storage)?, page_size, scope))
    }

    pub fn store(&self) -> &EntityStore<E> {
        &self.store
    }

    pub fn records(&self) -> &[E] {
        self.store.records()
    }

    pub fn form(&self) -> &FormController<E> {
        &self.form
    }

    /// Validation errors shown next to the form fields.
    pub fn errors(&self) -> &FieldErrors {
        self.form.errors()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn query(&self) -> ListQuery {
        ListQuery::new(self.search.clone(), self.page, self.page_size).with_scope(self.scope)
    }

    /// The records to display for the current search and page.
    pub fn current_page(&self) -> PaginatedResult<E> {
        list_page(self.store.records(), &self.query())
    }

    // ── Form ────────────────────────────────────────────────────

    /// Open an empty add form.
    pub fn begin_add(&mut self) {
        self.form = FormController::add();
    }

    /// Open the edit form prefilled from the record with `id`.
    pub fn begin_edit(&mut self, id: RecordId) -> DomainResult<()> {
        let record = self.store.get(id).ok_or_else(|| DomainError::NotFound {
            entity: E::NAME,
            field: "id",
            value: id.to_string(),
        })?;
        self.form = FormController::edit(record);
        Ok(())
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> DomainResult<()> {
        self.form.set_field(name, value)
    }

    /// Close the form, discarding the draft and its errors.
    pub fn cancel_form(&mut self) {
        self.form.reset();
    }

    pub fn on_submit_add(&mut self) -> DomainResult<E> {
        if self.form.mode() != FormMode::Add {
            return Err(DomainError::Validation("Form is not in add mode".into()));
        }
        self.form.submit(&mut self.store)
    }

    pub fn on_submit_edit(&mut self) -> DomainResult<E> {
        if self.form.mode() == FormMode::Add {
            return Err(DomainError::Validation("No record selected for editing".into()));
        }
        self.form.submit(&mut self.store)
    }

    // ── Delete ──────────────────────────────────────────────────

    /// Remember `id` for confirmation and return the record to show in
    /// the confirmation prompt. Unknown ids clear any pending request.
    pub fn on_request_delete(&mut self, id: RecordId) -> Option<&E> {
        let record = self.store.get(id);
        self.pending_delete = record.map(|r| r.id());
        record
    }

    pub fn pending_delete(&self) -> Option<RecordId> {
        self.pending_delete
    }

    /// Delete the pending record. No-op when nothing is pending.
    pub fn on_confirm_delete(&mut self) -> DomainResult<Option<E>> {
        match self.pending_delete.take() {
            Some(id) => self.store.delete(id),
            None => Ok(None),
        }
    }

    pub fn on_cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    // ── Navigation ──────────────────────────────────────────────

    /// Jump to `page`. Bounds are the caller's concern; an out-of-range
    /// page simply shows no records.
    pub fn on_page_change(&mut self, page: u32) {
        debug!(entity = E::NAME, page, "Page changed");
        self.page = page;
    }

    /// Replace the search text. The current page is kept.
    pub fn on_search_change(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }
}

impl Screen<Role> {
    /// Fixed role names not yet taken by a role record.
    pub fn available_role_names(&self) -> Vec<RoleName> {
        available_role_names(self.store.records())
    }
}

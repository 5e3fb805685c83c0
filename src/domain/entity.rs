//! Traits shared by every managed record type
//!
//! One generic store, form controller and list filter serve users, roles
//! and permissions. Each record type plugs in through [`Entity`], and its
//! editable form through [`Draft`].

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::shared::{DomainError, DomainResult, FieldErrors};

/// Store-assigned record identifier (positive, unique per collection).
pub type RecordId = u32;

/// Editable form state for one record type.
pub trait Draft: Clone + Default + fmt::Debug + Validate {
    /// Form field names in display order.
    const FIELDS: &'static [&'static str];

    /// Current value of a field, `None` for unknown names.
    fn field(&self, name: &str) -> Option<&str>;

    /// Mutable slot for a field, `None` for unknown names.
    fn field_mut(&mut self, name: &str) -> Option<&mut String>;

    /// Overwrite one field. Unknown names are rejected.
    fn set_field(&mut self, name: &str, value: String) -> DomainResult<()> {
        match self.field_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(DomainError::Validation(format!("Unknown field: {}", name))),
        }
    }

    /// Every failing field with its message; empty when the draft is valid.
    fn field_errors(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => errors.into(),
        }
    }
}

/// A record kept in an entity collection and mirrored to storage.
pub trait Entity: Clone + fmt::Debug + Serialize + DeserializeOwned {
    type Draft: Draft;

    /// Storage key holding the JSON array of this collection.
    const STORAGE_KEY: &'static str;

    /// Human-readable type name used in errors and logs.
    const NAME: &'static str;

    fn id(&self) -> RecordId;

    /// Finalize a validated draft under the given id.
    fn from_draft(id: RecordId, draft: Self::Draft) -> DomainResult<Self>;

    /// Copy every field into a draft for edit mode.
    fn to_draft(&self) -> Self::Draft;

    /// Text fields the free-text search looks at.
    fn search_fields(&self) -> Vec<&str>;

    /// Whether any searchable field contains `needle`, ignoring case.
    ///
    /// `needle` must already be lower-cased.
    fn matches(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

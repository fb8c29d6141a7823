//! Author record.
//!
//! # Invariants
//! - `name` is non-empty and never changes once the record exists.
//! - `id` is never the nil uuid.

use crate::model::validation::{validate_author_name, validate_id, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of an author.
pub type AuthorId = Uuid;

/// A person who writes articles.
///
/// Owns no other entity; articles point at it by [`AuthorId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthorRecord")]
pub struct Author {
    id: AuthorId,
    name: String,
}

#[derive(Deserialize)]
struct AuthorRecord {
    id: AuthorId,
    name: String,
}

impl TryFrom<AuthorRecord> for Author {
    type Error = ValidationError;

    fn try_from(record: AuthorRecord) -> Result<Self, Self::Error> {
        Self::with_id(record.id, record.name)
    }
}

impl Author {
    /// Creates an author with a generated id.
    ///
    /// # Errors
    /// - `EmptyAuthorName` when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an author with a caller-provided id.
    pub fn with_id(id: AuthorId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_id(id)?;
        validate_author_name(&name)?;
        Ok(Self { id, name })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

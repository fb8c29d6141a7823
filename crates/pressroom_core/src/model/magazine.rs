//! Magazine record.
//!
//! # Invariants
//! - `name` is 2..=16 characters long at all times.
//! - `category` is never empty.
//! - Setters leave the record untouched when validation fails.

use crate::model::validation::{
    validate_category, validate_id, validate_magazine_name, ValidationError,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a magazine.
pub type MagazineId = Uuid;

/// A publication that articles appear in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MagazineRecord")]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

#[derive(Deserialize)]
struct MagazineRecord {
    id: MagazineId,
    name: String,
    category: String,
}

impl TryFrom<MagazineRecord> for Magazine {
    type Error = ValidationError;

    fn try_from(record: MagazineRecord) -> Result<Self, Self::Error> {
        Self::with_id(record.id, record.name, record.category)
    }
}

impl Magazine {
    /// Creates a magazine with a generated id.
    ///
    /// # Errors
    /// - `MagazineNameLength` when `name` is outside 2..=16 characters.
    /// - `EmptyCategory` when `category` is empty.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), name, category)
    }

    /// Creates a magazine with a caller-provided id.
    pub fn with_id(
        id: MagazineId,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();
        validate_id(id)?;
        validate_magazine_name(&name)?;
        validate_category(&category)?;
        Ok(Self { id, name, category })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_magazine_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        let category = category.into();
        validate_category(&category)?;
        self.category = category;
        Ok(())
    }
}

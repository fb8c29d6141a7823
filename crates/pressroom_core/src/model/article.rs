//! Article record linking one author to one magazine.
//!
//! # Invariants
//! - `title` is 5..=50 characters long and fixed once registered.
//! - `author_id` and `magazine_id` are always set; whether they resolve to
//!   registered entities is checked by the catalog on every write.

use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use crate::model::validation::{validate_id, validate_title, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of an article.
pub type ArticleId = Uuid;

/// A piece written by an author for a magazine.
///
/// Holds non-owning references to both sides of the relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ArticleRecord")]
pub struct Article {
    id: ArticleId,
    author_id: AuthorId,
    magazine_id: MagazineId,
    title: String,
}

#[derive(Deserialize)]
struct ArticleRecord {
    id: ArticleId,
    author_id: AuthorId,
    magazine_id: MagazineId,
    title: String,
}

impl TryFrom<ArticleRecord> for Article {
    type Error = ValidationError;

    fn try_from(record: ArticleRecord) -> Result<Self, Self::Error> {
        Self::with_id(
            record.id,
            record.author_id,
            record.magazine_id,
            record.title,
        )
    }
}

impl Article {
    /// Creates an unregistered article with a generated id.
    ///
    /// Only the title is checked here; references are resolved when the
    /// article is written to a catalog.
    pub fn new(
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), author_id, magazine_id, title)
    }

    /// Creates an article with a caller-provided id.
    pub fn with_id(
        id: ArticleId,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_id(id)?;
        validate_title(&title)?;
        Ok(Self {
            id,
            author_id,
            magazine_id,
            title,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.magazine_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Points the article at another author.
    ///
    /// Takes effect in a catalog only through `update_article`, which
    /// rejects ids that are not registered.
    pub fn set_author(&mut self, author_id: AuthorId) {
        self.author_id = author_id;
    }

    /// Points the article at another magazine.
    pub fn set_magazine(&mut self, magazine_id: MagazineId) {
        self.magazine_id = magazine_id;
    }
}

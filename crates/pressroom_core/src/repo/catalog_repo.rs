//! Catalog repository contracts and in-memory registry implementation.
//!
//! # Responsibility
//! - Provide append-only registries for authors, magazines and articles.
//! - Enforce referential integrity and article-title immutability on writes.
//!
//! # Invariants
//! - Registries keep insertion order; nothing is ever removed.
//! - A rejected write leaves every registry exactly as it was.
//! - Every stored article references a stored author and a stored magazine.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::{ErrorKind, ValidationError};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Entity family named in repository errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Author,
    Magazine,
    Article,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Author => write!(f, "author"),
            Self::Magazine => write!(f, "magazine"),
            Self::Article => write!(f, "article"),
        }
    }
}

/// Generic repository error for catalog writes and lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ValidationError),
    NotFound { entity: EntityKind, id: Uuid },
    DuplicateId { entity: EntityKind, id: Uuid },
}

impl RepoError {
    /// Returns the validation kind when this error wraps a field or
    /// reference rejection.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Validation(err) => Some(err.kind()),
            Self::NotFound { .. } | Self::DuplicateId { .. } => None,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::DuplicateId { entity, id } => write!(f, "{entity} already registered: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound { .. } | Self::DuplicateId { .. } => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for author registration and lookup.
///
/// There is no update path: author names are fixed once registered.
pub trait AuthorRepository {
    fn create_author(&mut self, author: Author) -> RepoResult<AuthorId>;
    fn get_author(&self, id: AuthorId) -> Option<&Author>;
    fn list_authors(&self) -> &[Author];
}

/// Repository interface for magazine registration, mutation and lookup.
pub trait MagazineRepository {
    fn create_magazine(&mut self, magazine: Magazine) -> RepoResult<MagazineId>;
    fn update_magazine(&mut self, magazine: Magazine) -> RepoResult<()>;
    fn get_magazine(&self, id: MagazineId) -> Option<&Magazine>;
    /// Magazines in registration order.
    fn list_magazines(&self) -> &[Magazine];
}

/// Repository interface for the article registry.
pub trait ArticleRepository {
    fn create_article(&mut self, article: Article) -> RepoResult<ArticleId>;
    fn update_article(&mut self, article: Article) -> RepoResult<()>;
    fn get_article(&self, id: ArticleId) -> Option<&Article>;
    /// Every registered article in insertion order.
    fn list_articles(&self) -> &[Article];
}

/// Everything the catalog service needs from storage.
pub trait CatalogRepository: AuthorRepository + MagazineRepository + ArticleRepository {}

impl<T> CatalogRepository for T where
    T: AuthorRepository + MagazineRepository + ArticleRepository
{
}

/// Owned, process-local registry of all catalog entities.
///
/// Lookups are linear scans; the catalog is meant for small in-memory
/// object graphs, not querying at scale.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn article_position(&self, id: ArticleId) -> Option<usize> {
        self.articles.iter().position(|article| article.id() == id)
    }

    fn magazine_position(&self, id: MagazineId) -> Option<usize> {
        self.magazines.iter().position(|magazine| magazine.id() == id)
    }

    fn check_references(&self, article: &Article) -> RepoResult<()> {
        if self.get_author(article.author_id()).is_none() {
            return Err(ValidationError::UnknownAuthor(article.author_id()).into());
        }
        if self.get_magazine(article.magazine_id()).is_none() {
            return Err(ValidationError::UnknownMagazine(article.magazine_id()).into());
        }
        Ok(())
    }
}

impl AuthorRepository for InMemoryCatalog {
    fn create_author(&mut self, author: Author) -> RepoResult<AuthorId> {
        let id = author.id();
        if self.get_author(id).is_some() {
            return Err(rejected(
                "author_create",
                RepoError::DuplicateId {
                    entity: EntityKind::Author,
                    id,
                },
            ));
        }

        self.authors.push(author);
        debug!("event=author_create module=repo status=ok author_id={id}");
        Ok(id)
    }

    fn get_author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.iter().find(|author| author.id() == id)
    }

    fn list_authors(&self) -> &[Author] {
        &self.authors
    }
}

impl MagazineRepository for InMemoryCatalog {
    fn create_magazine(&mut self, magazine: Magazine) -> RepoResult<MagazineId> {
        let id = magazine.id();
        if self.magazine_position(id).is_some() {
            return Err(rejected(
                "magazine_create",
                RepoError::DuplicateId {
                    entity: EntityKind::Magazine,
                    id,
                },
            ));
        }

        self.magazines.push(magazine);
        debug!("event=magazine_create module=repo status=ok magazine_id={id}");
        Ok(id)
    }

    fn update_magazine(&mut self, magazine: Magazine) -> RepoResult<()> {
        let id = magazine.id();
        let Some(index) = self.magazine_position(id) else {
            return Err(rejected(
                "magazine_update",
                RepoError::NotFound {
                    entity: EntityKind::Magazine,
                    id,
                },
            ));
        };

        self.magazines[index] = magazine;
        debug!("event=magazine_update module=repo status=ok magazine_id={id}");
        Ok(())
    }

    fn get_magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazine_position(id).map(|index| &self.magazines[index])
    }

    fn list_magazines(&self) -> &[Magazine] {
        &self.magazines
    }
}

impl ArticleRepository for InMemoryCatalog {
    fn create_article(&mut self, article: Article) -> RepoResult<ArticleId> {
        let id = article.id();
        if self.article_position(id).is_some() {
            return Err(rejected(
                "article_create",
                RepoError::DuplicateId {
                    entity: EntityKind::Article,
                    id,
                },
            ));
        }
        self.check_references(&article)
            .map_err(|err| rejected("article_create", err))?;

        self.articles.push(article);
        debug!(
            "event=article_create module=repo status=ok article_id={id} registry_len={}",
            self.articles.len()
        );
        Ok(id)
    }

    fn update_article(&mut self, article: Article) -> RepoResult<()> {
        let id = article.id();
        let Some(index) = self.article_position(id) else {
            return Err(rejected(
                "article_update",
                RepoError::NotFound {
                    entity: EntityKind::Article,
                    id,
                },
            ));
        };
        if self.articles[index].title() != article.title() {
            return Err(rejected(
                "article_update",
                ValidationError::ImmutableField { field: "title" }.into(),
            ));
        }
        self.check_references(&article)
            .map_err(|err| rejected("article_update", err))?;

        self.articles[index] = article;
        debug!("event=article_update module=repo status=ok article_id={id}");
        Ok(())
    }

    fn get_article(&self, id: ArticleId) -> Option<&Article> {
        self.article_position(id).map(|index| &self.articles[index])
    }

    fn list_articles(&self) -> &[Article] {
        &self.articles
    }
}

fn rejected(event: &str, err: RepoError) -> RepoError {
    warn!("event={event} module=repo status=rejected error={err}");
    err
}

//! Core domain logic for the pressroom catalog.
//! Authors, magazines and the articles linking them, held in memory with
//! validation on every write.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::magazine::{Magazine, MagazineId};
pub use model::validation::{ErrorKind, ValidationError};
pub use repo::catalog_repo::{
    ArticleRepository, AuthorRepository, CatalogRepository, EntityKind, InMemoryCatalog,
    MagazineRepository, RepoError, RepoResult,
};
pub use service::catalog_service::{CatalogService, CONTRIBUTING_AUTHOR_MIN_ARTICLES};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

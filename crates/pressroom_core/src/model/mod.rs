//! Catalog domain model: authors, magazines and the articles linking them.
//!
//! # Responsibility
//! - Define the plain records held by the catalog.
//! - Guard every field at construction and mutation time.
//!
//! # Invariants
//! - Every record is identified by a stable, non-nil uuid.
//! - A record that exists satisfies its field bounds; there is no way to
//!   build or mutate one into an invalid state.

pub mod article;
pub mod author;
pub mod magazine;
pub mod validation;

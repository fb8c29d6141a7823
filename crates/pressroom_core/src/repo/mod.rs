//! Repository layer: registry contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Define use-case oriented access contracts for catalog entities.
//! - Keep registry bookkeeping out of the service layer.
//!
//! # Invariants
//! - Writes re-check references and fixed fields before mutating anything.
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateId`) in
//!   addition to validation failures.

pub mod catalog_repo;

//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Derive reverse views and rankings from the registries.

pub mod catalog_service;

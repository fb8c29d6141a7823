//! Field guards and validation error kinds shared by all catalog records.
//!
//! # Responsibility
//! - Own the length/emptiness bounds for author, magazine and article fields.
//! - Classify every rejection as a type, value or immutability failure.
//!
//! # Invariants
//! - Lengths are measured in Unicode scalar values, never bytes.
//! - Guards are pure: they never touch registry state.

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Minimum length of an author name.
pub const AUTHOR_NAME_MIN_CHARS: usize = 1;
/// Inclusive bounds of a magazine name.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
/// Inclusive bounds of an article title.
pub const TITLE_MIN_CHARS: usize = 5;
pub const TITLE_MAX_CHARS: usize = 50;

/// Coarse classification callers match on when recovering from a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A reference does not resolve to an entity of the required kind.
    Type,
    /// Right type, but the value is out of range or empty.
    Value,
    /// The field is fixed after registration.
    Immutable,
}

/// Rejection produced by a field guard or a reference check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NilId,
    EmptyAuthorName,
    MagazineNameLength { chars: usize },
    EmptyCategory,
    TitleLength { chars: usize },
    UnknownAuthor(Uuid),
    UnknownMagazine(Uuid),
    ImmutableField { field: &'static str },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownAuthor(_) | Self::UnknownMagazine(_) => ErrorKind::Type,
            Self::ImmutableField { .. } => ErrorKind::Immutable,
            Self::NilId
            | Self::EmptyAuthorName
            | Self::MagazineNameLength { .. }
            | Self::EmptyCategory
            | Self::TitleLength { .. } => ErrorKind::Value,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "id must not be the nil uuid"),
            Self::EmptyAuthorName => write!(f, "author name cannot be empty"),
            Self::MagazineNameLength { chars } => write!(
                f,
                "magazine name must be between {MAGAZINE_NAME_MIN_CHARS} and \
                 {MAGAZINE_NAME_MAX_CHARS} characters, got {chars}"
            ),
            Self::EmptyCategory => write!(f, "magazine category cannot be empty"),
            Self::TitleLength { chars } => write!(
                f,
                "title must be between {TITLE_MIN_CHARS} and {TITLE_MAX_CHARS} characters, \
                 got {chars}"
            ),
            Self::UnknownAuthor(id) => write!(f, "author must be a registered author: {id}"),
            Self::UnknownMagazine(id) => {
                write!(f, "magazine must be a registered magazine: {id}")
            }
            Self::ImmutableField { field } => {
                write!(f, "`{field}` cannot be changed after registration")
            }
        }
    }
}

impl Error for ValidationError {}

pub type ValidationResult<T> = Result<T, ValidationError>;

pub fn validate_id(id: Uuid) -> ValidationResult<()> {
    if id.is_nil() {
        return Err(ValidationError::NilId);
    }
    Ok(())
}

pub fn validate_author_name(name: &str) -> ValidationResult<()> {
    if name.chars().count() < AUTHOR_NAME_MIN_CHARS {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

pub fn validate_magazine_name(name: &str) -> ValidationResult<()> {
    let chars = name.chars().count();
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&chars) {
        return Err(ValidationError::MagazineNameLength { chars });
    }
    Ok(())
}

pub fn validate_category(category: &str) -> ValidationResult<()> {
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

pub fn validate_title(title: &str) -> ValidationResult<()> {
    let chars = title.chars().count();
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&chars) {
        return Err(ValidationError::TitleLength { chars });
    }
    Ok(())
}

//! Error types for catalog loading.
//!
//! Only invalid configuration is an error. Unknown tags, ambiguous suffixes
//! and dangling hierarchy references are normal data and never surface here.

use thiserror::Error;

use crate::model::Category;

/// Error codes for catalog configuration failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// C001: Malformed identifier
    MalformedId,
    /// C002: Duplicate identifier
    DuplicateId,
    /// C003: Missing or unknown category
    InvalidCategory,
    /// C004: Category disagrees with the identifier root
    CategoryMismatch,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "C001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::MalformedId => "C001",
            ErrorCode::DuplicateId => "C002",
            ErrorCode::InvalidCategory => "C003",
            ErrorCode::CategoryMismatch => "C004",
        }
    }
}

/// Error raised while building a [`TagRegistry`](crate::TagRegistry) from a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    // === C001: Malformed identifier ===
    #[error("[C001] tag definition at position {position} has an empty id")]
    EmptyId { position: usize },

    #[error("[C001] tag id {id:?} contains an empty segment")]
    EmptySegment { id: String },

    // === C002: Duplicate identifier ===
    #[error("[C002] tag id {id:?} is defined more than once")]
    DuplicateId { id: String },

    // === C003: Missing or unknown category ===
    #[error("[C003] tag {id:?} has no category")]
    MissingCategory { id: String },

    #[error("[C003] tag {id:?} has unknown category {name:?}")]
    UnknownCategory { id: String, name: String },

    // === C004: Category mismatch ===
    #[error("[C004] tag {id:?} is declared as {declared} but its id is rooted at {root}")]
    CategoryMismatch {
        id: String,
        declared: Category,
        root: Category,
    },
}

impl CatalogError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::EmptyId { .. } | CatalogError::EmptySegment { .. } => {
                ErrorCode::MalformedId
            }
            CatalogError::DuplicateId { .. } => ErrorCode::DuplicateId,
            CatalogError::MissingCategory { .. } | CatalogError::UnknownCategory { .. } => {
                ErrorCode::InvalidCategory
            }
            CatalogError::CategoryMismatch { .. } => ErrorCode::CategoryMismatch,
        }
    }
}

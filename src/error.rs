//! Error types for resi
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::InvalidField;
use crate::domain::invariant::InvariantViolation;
use crate::domain::ports::SnapshotError;
use crate::domain::value_objects::EntityKind;

/// Result type alias for resi operations
pub type ResiResult<T> = Result<T, ResiError>;

/// Main error type for store commands and queries
#[derive(Error, Debug)]
pub enum ResiError {
    /// No entity with this id
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// Input rejected by validation
    #[error("invalid {field}: {message}")]
    InvalidInput { field: String, message: String },

    /// Command would break a lifecycle or settlement invariant
    #[error(transparent)]
    InvariantViolation(#[from] InvariantViolation),

    /// Loading or saving the snapshot failed
    #[error("persistence error: {0}")]
    Persistence(#[from] SnapshotError),

    /// Configuration could not be loaded
    #[error("config error in {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl ResiError {
    pub fn not_found(kind: EntityKind, id: impl ToString) -> Self {
        ResiError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ResiError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ResiError::NotFound { .. })
    }
}

impl From<InvalidField> for ResiError {
    fn from(err: InvalidField) -> Self {
        ResiError::InvalidInput {
            field: err.field.to_string(),
            message: err.message,
        }
    }
}

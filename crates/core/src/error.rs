//! Error types for turning drafts into records.

use sf_protocol::{Field, FieldError};
use thiserror::Error;

/// Errors that can occur while building a [`sf_protocol::Record`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// One or more fields failed validation.
    #[error("{} invalid field(s): {}", .errors.len(), summarize(.errors))]
    Invalid { errors: Vec<FieldError> },

    /// The input could not be read as a draft.
    #[error("Malformed form input: {reason}")]
    Malformed { reason: String },

    /// A value passed validation but could not be converted.
    #[error("Field {field} has an unusable value {value:?}")]
    Unconvertible { field: Field, value: String },
}

impl RecordError {
    /// Field errors carried by this error, if it is a validation failure.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            RecordError::Invalid { errors } => errors,
            _ => &[],
        }
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Type alias for Result with RecordError.
pub type RecordResult<T> = Result<T, RecordError>;

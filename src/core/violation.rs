//! Rule violations reported by validating interceptors.

use thiserror::Error;

/// A domain rule broken by a dispatched action.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("Field '{field}' contains banned term '{term}'")]
    BannedTerm { field: String, term: String },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}

impl Violation {
    /// Shorthand for a custom rule failure.
    pub fn custom(message: impl Into<String>) -> Self {
        Violation::CustomCheckFailed {
            message: message.into(),
        }
    }
}

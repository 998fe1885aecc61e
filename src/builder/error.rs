//! Build errors for the store builder.

use thiserror::Error;

/// Errors that can occur when building a store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Reducer not specified. Call .reducer(reducer) before .build()")]
    MissingReducer,
}

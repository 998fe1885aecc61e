//! Builder API for ergonomic store construction.
//!
//! This module provides a fluent builder for stores and a macro for
//! implementing `Action` on application enums with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod store;

pub use error::BuildError;
pub use store::StoreBuilder;

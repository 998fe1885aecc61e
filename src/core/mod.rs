//! Core container types.
//!
//! This module contains the pure building blocks a store is made of:
//! - Actions, messages and deferred thunks
//! - Reducers (pure transition functions)
//! - Rule violations reported by validating interceptors
//! - Forward/revert pairs for optimistic updates
//! - The dispatch journal written by the logging interceptor

mod action;
mod compensate;
mod history;
mod reducer;
mod violation;

pub use action::{Action, Message, Pending, Thunk};
pub use compensate::{optimistic, Compensated};
pub use history::{DispatchLog, LogEntry};
pub use reducer::Reducer;
pub use violation::Violation;

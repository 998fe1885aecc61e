//! Dispatch outcomes and errors.

use crate::core::{Pending, Violation};
use std::fmt;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Successful outcome of a dispatch.
pub enum Dispatched {
    /// The action reached the reducer and observers were notified.
    Applied,

    /// A thunk was started; its asynchronous remainder must be driven.
    Pending(Pending),

    /// An interceptor consumed the message without forwarding it.
    Swallowed,
}

impl Dispatched {
    /// Await the pending remainder of a thunk, if any.
    pub async fn settle(self) {
        if let Dispatched::Pending(pending) = self {
            pending.await;
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Dispatched::Applied)
    }

    pub fn into_pending(self) -> Option<Pending> {
        match self {
            Dispatched::Pending(pending) => Some(pending),
            _ => None,
        }
    }
}

impl fmt::Debug for Dispatched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispatched::Applied => f.write_str("Applied"),
            Dispatched::Pending(_) => f.write_str("Pending"),
            Dispatched::Swallowed => f.write_str("Swallowed"),
        }
    }
}

/// An action vetoed by an interceptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Kind of the rejected action
    pub action: &'static str,
    /// Name of the vetoing interceptor
    pub interceptor: &'static str,
    /// Every rule the action broke
    pub violations: NonEmptyVec<Violation>,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rejected by {}", self.action, self.interceptor)?;
        for violation in self.violations.iter() {
            write!(f, "; {violation}")?;
        }
        Ok(())
    }
}

/// Errors returned by `Store::dispatch`.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Action {0}")]
    Rejected(Rejection),

    #[error("Thunk reached the reducer; add a ThunkInterceptor ahead of interceptors expecting plain actions")]
    UnhandledThunk,
}

impl DispatchError {
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            DispatchError::Rejected(rejection) => Some(rejection),
            DispatchError::UnhandledThunk => None,
        }
    }
}

/// Result of a dispatch.
pub type DispatchResult = Result<Dispatched, DispatchError>;

//! Dispatch journal.
//!
//! Provides an immutable, ordered record of dispatched actions together with
//! the state each one produced.

use chrono::{DateTime, Utc};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use super::action::Action;

/// Record of a single logged dispatch.
///
/// `state` is the state observed right after the inner dispatch returned,
/// shared with the store rather than copied.
pub struct LogEntry<S, A> {
    /// The dispatched action
    pub action: A,
    /// State after the dispatch
    pub state: Rc<S>,
    /// When the dispatch finished
    pub timestamp: DateTime<Utc>,
    /// Whether the inner dispatch succeeded
    pub applied: bool,
}

impl<S, A: Clone> Clone for LogEntry<S, A> {
    fn clone(&self) -> Self {
        Self {
            action: self.action.clone(),
            state: Rc::clone(&self.state),
            timestamp: self.timestamp,
            applied: self.applied,
        }
    }
}

impl<S: fmt::Debug, A: fmt::Debug> fmt::Debug for LogEntry<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogEntry")
            .field("action", &self.action)
            .field("state", &self.state)
            .field("timestamp", &self.timestamp)
            .field("applied", &self.applied)
            .finish()
    }
}

/// Ordered log of dispatches.
///
/// The log is immutable from the outside: `record` returns a new log with the
/// entry added. A `Journal` appends to its own log in place.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use std::rc::Rc;
/// use tether::core::{Action, DispatchLog, LogEntry};
///
/// #[derive(Clone, Debug)]
/// struct Tick;
///
/// impl Action for Tick {
///     fn kind(&self) -> &'static str {
///         "TICK"
///     }
/// }
///
/// let log = DispatchLog::new();
/// let log = log.record(LogEntry {
///     action: Tick,
///     state: Rc::new(1u32),
///     timestamp: Utc::now(),
///     applied: true,
/// });
///
/// assert_eq!(log.kinds(), vec!["TICK"]);
/// ```
pub struct DispatchLog<S, A> {
    entries: Vec<LogEntry<S, A>>,
}

impl<S, A: Clone> Clone for DispatchLog<S, A> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<S: fmt::Debug, A: fmt::Debug> fmt::Debug for DispatchLog<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchLog")
            .field("entries", &self.entries)
            .finish()
    }
}

impl<S, A: Action> Default for DispatchLog<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A: Action> DispatchLog<S, A> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new log.
    ///
    /// The existing log is left unchanged.
    pub fn record(&self, entry: LogEntry<S, A>) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// Append in place, dropping the oldest entries beyond `limit`.
    pub(crate) fn push(&mut self, entry: LogEntry<S, A>, limit: Option<usize>) {
        self.entries.push(entry);
        if let Some(limit) = limit {
            let excess = self.entries.len().saturating_sub(limit);
            self.entries.drain(..excess);
        }
    }

    /// Action kinds in dispatch order.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.action.kind()).collect()
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&LogEntry<S, A>> {
        self.entries.last()
    }

    /// Time between the first and the last entry.
    ///
    /// Returns `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn entries(&self) -> &[LogEntry<S, A>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Structured logging of dispatches.

use crate::core::{Action, DispatchLog, LogEntry, Message};
use crate::store::{DispatchResult, Dispatched, Interceptor, Next, Store};
use chrono::Utc;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to the dispatch log a [`Logger`] writes to.
///
/// Entries are appended in place. A bounded journal keeps only the newest
/// `limit` entries.
pub struct Journal<S, A> {
    log: Rc<RefCell<DispatchLog<S, A>>>,
    limit: Option<usize>,
}

impl<S, A> Clone for Journal<S, A> {
    fn clone(&self) -> Self {
        Self {
            log: Rc::clone(&self.log),
            limit: self.limit,
        }
    }
}

impl<S, A: Action> Default for Journal<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A: Action> Journal<S, A> {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(DispatchLog::new())),
            limit: None,
        }
    }

    /// Journal retaining at most `limit` entries.
    pub fn bounded(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::new()
        }
    }

    /// Copy of the log as it stands now.
    pub fn snapshot(&self) -> DispatchLog<S, A> {
        self.log.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.borrow().is_empty()
    }

    fn append(&self, entry: LogEntry<S, A>) {
        self.log.borrow_mut().push(entry, self.limit);
    }
}

/// Emits `{ action, resulting state }` after the inner dispatch returns.
///
/// The record is a `tracing` event at INFO on the `tether::logger` target,
/// with the state rendered as JSON. The logger measures whatever sits inside
/// it in the chain and never alters the message or the result.
pub struct Logger<S, A> {
    journal: Option<Journal<S, A>>,
}

impl<S, A: Action> Default for Logger<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A: Action> Logger<S, A> {
    /// Log to `tracing` only.
    pub fn new() -> Self {
        Self { journal: None }
    }

    /// Log to `tracing` and append every record to `journal`.
    pub fn with_journal(journal: Journal<S, A>) -> Self {
        Self {
            journal: Some(journal),
        }
    }
}

impl<S, A> Interceptor<S, A> for Logger<S, A>
where
    S: Serialize + 'static,
    A: Action,
{
    fn name(&self) -> &'static str {
        "logger"
    }

    fn intercept(
        &self,
        store: &Store<S, A>,
        message: Message<S, A>,
        next: Next<'_, S, A>,
    ) -> DispatchResult {
        let action = message.as_action().cloned();
        let result = next.run(message);

        let Some(action) = action else {
            return result;
        };

        let state = store.state();
        let applied = matches!(result, Ok(Dispatched::Applied));
        let rendered = serde_json::to_string(&*state)
            .unwrap_or_else(|err| format!("<unserializable state: {err}>"));
        tracing::info!(
            target: "tether::logger",
            kind = action.kind(),
            action = ?action,
            state = %rendered,
            applied,
            "dispatched"
        );

        if let Some(journal) = &self.journal {
            journal.append(LogEntry {
                action,
                state,
                timestamp: Utc::now(),
                applied,
            });
        }

        result
    }
}

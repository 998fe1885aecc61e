//! Remote data service boundary.
//!
//! The application only needs a handful of asynchronous, fallible calls;
//! [`InMemoryApi`] implements them without any I/O for demos and tests.

use crate::app::model::{Goal, IdGenerator, Todo, UuidIds};
use std::cell::{Cell, RefCell};
use thiserror::Error;

/// Errors reported by the remote data service
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Remote service unavailable during '{operation}'")]
    Unavailable { operation: &'static str },

    #[error("No record with id '{id}'")]
    NotFound { id: String },
}

/// Asynchronous remote data service.
///
/// Futures are awaited on the store's thread, so implementations need not be
/// `Send`.
#[allow(async_fn_in_trait)]
pub trait TodoApi {
    async fn fetch_todos(&self) -> Result<Vec<Todo>, ApiError>;

    async fn fetch_goals(&self) -> Result<Vec<Goal>, ApiError>;

    async fn save_todo(&self, name: &str) -> Result<Todo, ApiError>;

    async fn save_goal(&self, name: &str) -> Result<Goal, ApiError>;

    async fn delete_todo(&self, id: &str) -> Result<(), ApiError>;

    async fn delete_goal(&self, id: &str) -> Result<(), ApiError>;

    async fn save_todo_toggle(&self, id: &str) -> Result<(), ApiError>;

    /// Fetch both lists; fails if either fetch fails.
    async fn fetch_all(&self) -> Result<(Vec<Todo>, Vec<Goal>), ApiError> {
        let todos = self.fetch_todos().await?;
        let goals = self.fetch_goals().await?;
        Ok((todos, goals))
    }
}

/// In-memory service with switchable failure.
pub struct InMemoryApi<G: IdGenerator = UuidIds> {
    ids: G,
    todos: RefCell<Vec<Todo>>,
    goals: RefCell<Vec<Goal>>,
    offline: Cell<bool>,
}

impl InMemoryApi<UuidIds> {
    pub fn new() -> Self {
        Self::with_ids(UuidIds)
    }
}

impl Default for InMemoryApi<UuidIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> InMemoryApi<G> {
    pub fn with_ids(ids: G) -> Self {
        Self {
            ids,
            todos: RefCell::new(Vec::new()),
            goals: RefCell::new(Vec::new()),
            offline: Cell::new(false),
        }
    }

    /// Replace the stored records.
    pub fn seed(self, todos: Vec<Todo>, goals: Vec<Goal>) -> Self {
        *self.todos.borrow_mut() = todos;
        *self.goals.borrow_mut() = goals;
        self
    }

    /// While offline every call fails with [`ApiError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    pub fn stored_todos(&self) -> Vec<Todo> {
        self.todos.borrow().clone()
    }

    pub fn stored_goals(&self) -> Vec<Goal> {
        self.goals.borrow().clone()
    }

    fn ensure_online(&self, operation: &'static str) -> Result<(), ApiError> {
        if self.offline.get() {
            tracing::debug!(operation, "in-memory api offline");
            Err(ApiError::Unavailable { operation })
        } else {
            Ok(())
        }
    }
}

impl<G: IdGenerator> TodoApi for InMemoryApi<G> {
    async fn fetch_todos(&self) -> Result<Vec<Todo>, ApiError> {
        self.ensure_online("fetch_todos")?;
        Ok(self.stored_todos())
    }

    async fn fetch_goals(&self) -> Result<Vec<Goal>, ApiError> {
        self.ensure_online("fetch_goals")?;
        Ok(self.stored_goals())
    }

    async fn save_todo(&self, name: &str) -> Result<Todo, ApiError> {
        self.ensure_online("save_todo")?;
        let todo = Todo::new(self.ids.next_id(), name);
        self.todos.borrow_mut().push(todo.clone());
        Ok(todo)
    }

    async fn save_goal(&self, name: &str) -> Result<Goal, ApiError> {
        self.ensure_online("save_goal")?;
        let goal = Goal::new(self.ids.next_id(), name);
        self.goals.borrow_mut().push(goal.clone());
        Ok(goal)
    }

    async fn delete_todo(&self, id: &str) -> Result<(), ApiError> {
        self.ensure_online("delete_todo")?;
        let mut todos = self.todos.borrow_mut();
        let before = todos.len();
        todos.retain(|t| t.id != id);
        if todos.len() == before {
            return Err(ApiError::NotFound { id: id.to_string() });
        }
        Ok(())
    }

    async fn delete_goal(&self, id: &str) -> Result<(), ApiError> {
        self.ensure_online("delete_goal")?;
        let mut goals = self.goals.borrow_mut();
        let before = goals.len();
        goals.retain(|g| g.id != id);
        if goals.len() == before {
            return Err(ApiError::NotFound { id: id.to_string() });
        }
        Ok(())
    }

    async fn save_todo_toggle(&self, id: &str) -> Result<(), ApiError> {
        self.ensure_online("save_todo_toggle")?;
        let mut todos = self.todos.borrow_mut();
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::NotFound { id: id.to_string() })?;
        todo.complete = !todo.complete;
        Ok(())
    }
}

//! Todo and goal records and the application state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A todo item; `complete` is toggled by the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub name: String,
    pub complete: bool,
}

impl Todo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            complete: false,
        }
    }
}

/// A goal; unlike todos, goals are never completed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
}

impl Goal {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Whole application state.
///
/// `loading` stays `true` until the initial data has been received.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub todos: Vec<Todo>,
    pub goals: Vec<Goal>,
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            goals: Vec::new(),
            loading: true,
        }
    }
}

/// Source of identifiers for newly created records.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs in their 32-character simple form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_state_is_loading_and_empty() {
        let state = AppState::default();

        assert!(state.loading);
        assert!(state.todos.is_empty());
        assert!(state.goals.is_empty());
    }

    #[test]
    fn new_todo_starts_incomplete() {
        assert!(!Todo::new("1", "Walk the dog").complete);
    }

    #[test]
    fn uuid_ids_are_unique() {
        let ids = UuidIds;
        let generated: HashSet<String> = (0..100).map(|_| ids.next_id()).collect();

        assert_eq!(generated.len(), 100);
        assert!(generated.iter().all(|id| id.len() == 32));
    }

    #[test]
    fn state_serializes_correctly() {
        let state = AppState {
            todos: vec![Todo::new("1", "A")],
            goals: vec![Goal::new("2", "B")],
            loading: false,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: AppState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}

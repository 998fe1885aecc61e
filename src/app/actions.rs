//! The application's closed set of actions and their creators.

use crate::action_kinds;
use crate::app::model::{Goal, Todo};
use crate::core::Compensated;
use serde::{Deserialize, Serialize};

/// Every transition the todo/goal application knows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppAction {
    AddTodo { todo: Todo },
    RemoveTodo { id: String },
    ToggleTodo { id: String },
    AddGoal { goal: Goal },
    RemoveGoal { id: String },
    /// Replaces both lists wholesale and ends loading.
    ReceiveData { todos: Vec<Todo>, goals: Vec<Goal> },
}

action_kinds! {
    AppAction {
        AddTodo => "ADD_TODO",
        RemoveTodo => "REMOVE_TODO",
        ToggleTodo => "TOGGLE_TODO",
        AddGoal => "ADD_GOAL",
        RemoveGoal => "REMOVE_GOAL",
        ReceiveData => "RECEIVE_DATA",
    }
}

pub fn add_todo(todo: Todo) -> AppAction {
    AppAction::AddTodo { todo }
}

pub fn remove_todo(id: impl Into<String>) -> AppAction {
    AppAction::RemoveTodo { id: id.into() }
}

pub fn toggle_todo(id: impl Into<String>) -> AppAction {
    AppAction::ToggleTodo { id: id.into() }
}

pub fn add_goal(goal: Goal) -> AppAction {
    AppAction::AddGoal { goal }
}

pub fn remove_goal(id: impl Into<String>) -> AppAction {
    AppAction::RemoveGoal { id: id.into() }
}

pub fn receive_data(todos: Vec<Todo>, goals: Vec<Goal>) -> AppAction {
    AppAction::ReceiveData { todos, goals }
}

impl AppAction {
    /// Remove `todo`; reverting adds it back.
    pub fn delete_todo(todo: &Todo) -> Compensated<AppAction> {
        Compensated::new(remove_todo(todo.id.clone()), add_todo(todo.clone()))
    }

    /// Flip `complete`; toggling is its own inverse.
    pub fn flip_todo(id: &str) -> Compensated<AppAction> {
        Compensated::new(toggle_todo(id), toggle_todo(id))
    }

    /// Remove `goal`; reverting adds it back.
    pub fn delete_goal(goal: &Goal) -> Compensated<AppAction> {
        Compensated::new(remove_goal(goal.id.clone()), add_goal(goal.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Action;

    #[test]
    fn kinds_match_wire_names() {
        assert_eq!(add_todo(Todo::new("1", "a")).kind(), "ADD_TODO");
        assert_eq!(remove_todo("1").kind(), "REMOVE_TODO");
        assert_eq!(toggle_todo("1").kind(), "TOGGLE_TODO");
        assert_eq!(add_goal(Goal::new("1", "a")).kind(), "ADD_GOAL");
        assert_eq!(remove_goal("1").kind(), "REMOVE_GOAL");
        assert_eq!(receive_data(vec![], vec![]).kind(), "RECEIVE_DATA");
    }

    #[test]
    fn serialized_action_is_tagged_with_kind() {
        let json = serde_json::to_value(toggle_todo("7")).unwrap();

        assert_eq!(json, serde_json::json!({ "type": "TOGGLE_TODO", "id": "7" }));
    }

    #[test]
    fn delete_todo_reverts_with_original_record() {
        let todo = Todo {
            id: "3".to_string(),
            name: "Call mom".to_string(),
            complete: true,
        };

        let pair = AppAction::delete_todo(&todo);

        assert_eq!(pair.forward, remove_todo("3"));
        assert_eq!(pair.revert, add_todo(todo));
    }

    #[test]
    fn flip_todo_is_its_own_inverse() {
        let pair = AppAction::flip_todo("9");

        assert_eq!(pair.forward, pair.revert);
    }
}

//! Slice reducers and the combined application reducer.
//!
//! Each slice reducer owns one field of [`AppState`] and returns a new value
//! for it; the combined reducer assembles the next state from the slices.

use crate::app::actions::AppAction;
use crate::app::model::{AppState, Goal, Todo};

pub fn todos(state: &[Todo], action: &AppAction) -> Vec<Todo> {
    match action {
        AppAction::AddTodo { todo } => {
            let mut next = state.to_vec();
            next.push(todo.clone());
            next
        }
        AppAction::RemoveTodo { id } => state.iter().filter(|t| &t.id != id).cloned().collect(),
        AppAction::ToggleTodo { id } => state
            .iter()
            .map(|t| {
                if &t.id == id {
                    Todo {
                        complete: !t.complete,
                        ..t.clone()
                    }
                } else {
                    t.clone()
                }
            })
            .collect(),
        AppAction::ReceiveData { todos, .. } => todos.clone(),
        AppAction::AddGoal { .. } | AppAction::RemoveGoal { .. } => state.to_vec(),
    }
}

pub fn goals(state: &[Goal], action: &AppAction) -> Vec<Goal> {
    match action {
        AppAction::AddGoal { goal } => {
            let mut next = state.to_vec();
            next.push(goal.clone());
            next
        }
        AppAction::RemoveGoal { id } => state.iter().filter(|g| &g.id != id).cloned().collect(),
        AppAction::ReceiveData { goals, .. } => goals.clone(),
        AppAction::AddTodo { .. } | AppAction::RemoveTodo { .. } | AppAction::ToggleTodo { .. } => {
            state.to_vec()
        }
    }
}

pub fn loading(state: bool, action: &AppAction) -> bool {
    match action {
        AppAction::ReceiveData { .. } => false,
        _ => state,
    }
}

/// Combined reducer for the whole application.
pub fn app_reducer(state: &AppState, action: &AppAction) -> AppState {
    AppState {
        todos: todos(&state.todos, action),
        goals: goals(&state.goals, action),
        loading: loading(state.loading, action),
    }
}

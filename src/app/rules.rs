//! Validation rules for the todo/goal application.

use crate::app::actions::AppAction;
use crate::interceptors::{Validator, ValidatorBuilder};

/// Name field inspected by the banned-term rule.
fn record_name(action: &AppAction) -> Option<(&'static str, &str)> {
    match action {
        AppAction::AddTodo { todo } => Some(("todo.name", todo.name.as_str())),
        AppAction::AddGoal { goal } => Some(("goal.name", goal.name.as_str())),
        _ => None,
    }
}

/// Veto new todos and goals whose name contains any banned term.
pub fn checker(banned_terms: &[String]) -> Validator<AppAction> {
    ValidatorBuilder::new()
        .forbid_terms(banned_terms, record_name)
        .build()
}

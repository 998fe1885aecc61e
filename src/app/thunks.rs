//! Asynchronous application workflows, dispatched as thunks.
//!
//! Creation waits for the server and dispatches the confirmed record once.
//! Deletion and toggling are optimistic: the local change lands immediately
//! and is compensated if the server call fails.

use crate::app::actions::{add_goal, add_todo, receive_data, AppAction};
use crate::app::api::TodoApi;
use crate::app::model::{AppState, Goal, Todo};
use crate::core::{optimistic, Thunk};
use crate::store::{DispatchError, Store};
use std::rc::Rc;

/// Notice shown when a remote call fails.
pub const ERROR_NOTICE: &str = "An error occurred. Try again.";

/// Notice shown when the store vetoes a new record.
pub const REJECTION_NOTICE: &str = "Nope. That's a bad idea.";

/// Thunk type used by the application.
pub type AppThunk = Thunk<AppState, AppAction>;

/// User-facing notices.
pub trait Notifier {
    fn notice(&self, message: &str);
}

/// Emits notices as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notice(&self, message: &str) {
        tracing::warn!(target: "tether::notice", "{message}");
    }
}

/// Collaborators shared by every workflow.
pub struct Services<Api> {
    pub api: Rc<Api>,
    pub notifier: Rc<dyn Notifier>,
}

impl<Api> Clone for Services<Api> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            notifier: Rc::clone(&self.notifier),
        }
    }
}

impl<Api: TodoApi + 'static> Services<Api> {
    pub fn new(api: Api, notifier: impl Notifier + 'static) -> Self {
        Self {
            api: Rc::new(api),
            notifier: Rc::new(notifier),
        }
    }

    /// Fetch both lists and replace the state with them.
    ///
    /// On failure the store keeps loading and the user is notified.
    pub fn handle_initial_data(&self) -> AppThunk {
        let Services { api, notifier } = self.clone();

        Thunk::new(move |store: Store<AppState, AppAction>| async move {
            match api.fetch_all().await {
                Ok((todos, goals)) => {
                    dispatch_or_notify(&store, receive_data(todos, goals), &*notifier)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "initial fetch failed");
                    notifier.notice(ERROR_NOTICE);
                }
            }
        })
    }

    /// Save a todo, then add the server-confirmed record.
    ///
    /// `on_saved` runs before the record is dispatched, typically to clear an
    /// input field.
    pub fn handle_add_todo(
        &self,
        name: impl Into<String>,
        on_saved: impl FnOnce() + 'static,
    ) -> AppThunk {
        let Services { api, notifier } = self.clone();
        let name = name.into();

        Thunk::new(move |store: Store<AppState, AppAction>| async move {
            match api.save_todo(&name).await {
                Ok(todo) => {
                    on_saved();
                    dispatch_or_notify(&store, add_todo(todo), &*notifier);
                }
                Err(err) => {
                    tracing::warn!(error = %err, name = %name, "saving todo failed");
                    notifier.notice(ERROR_NOTICE);
                }
            }
        })
    }

    /// Save a goal, then add the server-confirmed record.
    pub fn handle_add_goal(
        &self,
        name: impl Into<String>,
        on_saved: impl FnOnce() + 'static,
    ) -> AppThunk {
        let Services { api, notifier } = self.clone();
        let name = name.into();

        Thunk::new(move |store: Store<AppState, AppAction>| async move {
            match api.save_goal(&name).await {
                Ok(goal) => {
                    on_saved();
                    dispatch_or_notify(&store, add_goal(goal), &*notifier);
                }
                Err(err) => {
                    tracing::warn!(error = %err, name = %name, "saving goal failed");
                    notifier.notice(ERROR_NOTICE);
                }
            }
        })
    }

    /// Remove `todo` now; add it back if the server refuses.
    pub fn handle_delete_todo(&self, todo: &Todo) -> AppThunk {
        let Services { api, notifier } = self.clone();
        let id = todo.id.clone();

        optimistic(
            AppAction::delete_todo(todo),
            async move { api.delete_todo(&id).await },
            move |_| notifier.notice(ERROR_NOTICE),
        )
    }

    /// Remove `goal` now; add it back if the server refuses.
    pub fn handle_delete_goal(&self, goal: &Goal) -> AppThunk {
        let Services { api, notifier } = self.clone();
        let id = goal.id.clone();

        optimistic(
            AppAction::delete_goal(goal),
            async move { api.delete_goal(&id).await },
            move |_| notifier.notice(ERROR_NOTICE),
        )
    }

    /// Flip a todo now; flip it back if the server refuses.
    pub fn handle_toggle(&self, id: impl Into<String>) -> AppThunk {
        let Services { api, notifier } = self.clone();
        let id = id.into();
        let compensated = AppAction::flip_todo(&id);

        optimistic(
            compensated,
            async move { api.save_todo_toggle(&id).await },
            move |_| notifier.notice(ERROR_NOTICE),
        )
    }
}

fn dispatch_or_notify(
    store: &Store<AppState, AppAction>,
    action: AppAction,
    notifier: &dyn Notifier,
) {
    match store.dispatch(action) {
        Ok(_) => {}
        Err(DispatchError::Rejected(_)) => notifier.notice(REJECTION_NOTICE),
        Err(err) => tracing::error!(error = %err, "dispatch from workflow failed"),
    }
}

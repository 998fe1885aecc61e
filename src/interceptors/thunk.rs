//! Async resolution of deferred dispatches.

use crate::core::{Action, Message};
use crate::store::{DispatchResult, Dispatched, Interceptor, Next, Store};

/// Starts thunks instead of forwarding them.
///
/// A thunk reaching this interceptor is handed a store handle and started; the
/// dispatch returns [`Dispatched::Pending`] with its asynchronous remainder.
/// Plain actions pass through untouched. Place it ahead of every interceptor
/// that expects plain actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThunkInterceptor;

impl<S: 'static, A: Action> Interceptor<S, A> for ThunkInterceptor {
    fn name(&self) -> &'static str {
        "thunk"
    }

    fn intercept(
        &self,
        store: &Store<S, A>,
        message: Message<S, A>,
        next: Next<'_, S, A>,
    ) -> DispatchResult {
        match message {
            Message::Thunk(thunk) => {
                tracing::debug!("starting thunk");
                Ok(Dispatched::Pending(thunk.start(store.clone())))
            }
            action => next.run(action),
        }
    }
}

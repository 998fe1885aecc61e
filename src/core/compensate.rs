//! Optimistic updates with colocated compensation.
//!
//! An optimistic update applies a tentative transition before a remote
//! operation completes, and applies the inverse transition if the operation
//! fails. Keeping both halves in one [`Compensated`] value means the inverse
//! is defined next to the action it undoes.

use crate::core::action::{Action, Thunk};
use crate::store::Dispatched;
use std::fmt::Display;
use std::future::Future;

/// A forward action paired with the action that undoes it.
#[derive(Clone, Debug, PartialEq)]
pub struct Compensated<A> {
    pub forward: A,
    pub revert: A,
}

impl<A> Compensated<A> {
    pub fn new(forward: A, revert: A) -> Self {
        Self { forward, revert }
    }
}

/// Build a thunk running the two-phase optimistic protocol.
///
/// 1. `forward` is dispatched immediately, when the thunk starts.
/// 2. If it was applied, `operation` is awaited.
/// 3. On failure `on_failure` sees the error and `revert` is dispatched.
///
/// A rejected `forward` skips the operation entirely.
///
/// # Example
///
/// ```rust
/// use tether::core::{optimistic, Action, Compensated};
/// use tether::interceptors::ThunkInterceptor;
/// use tether::store::{Interceptor, Store};
///
/// #[derive(Clone, Debug)]
/// enum Step {
///     Up,
///     Down,
/// }
///
/// impl Action for Step {
///     fn kind(&self) -> &'static str {
///         match self {
///             Self::Up => "UP",
///             Self::Down => "DOWN",
///         }
///     }
/// }
///
/// let reducer = |level: &i32, step: &Step| match step {
///     Step::Up => level + 1,
///     Step::Down => level - 1,
/// };
/// let chain: Vec<Box<dyn Interceptor<i32, Step>>> = vec![Box::new(ThunkInterceptor)];
/// let store = Store::new(reducer, chain);
///
/// let thunk = optimistic(
///     Compensated::new(Step::Up, Step::Down),
///     async { Err::<(), _>("offline") },
///     |_err| {},
/// );
/// let pending = store.dispatch(thunk).unwrap();
/// assert_eq!(*store.state(), 1);
///
/// block_on(pending.settle());
/// assert_eq!(*store.state(), 0);
/// # fn block_on<F: std::future::Future>(future: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread()
/// #         .build()
/// #         .unwrap()
/// #         .block_on(future)
/// # }
/// ```
pub fn optimistic<S, A, T, E, Op, F>(
    compensated: Compensated<A>,
    operation: Op,
    on_failure: F,
) -> Thunk<S, A>
where
    S: 'static,
    A: Action,
    E: Display + 'static,
    Op: Future<Output = Result<T, E>> + 'static,
    F: FnOnce(&E) + 'static,
{
    let Compensated { forward, revert } = compensated;

    Thunk::new(move |store| {
        let kind = forward.kind();
        let applied = matches!(store.dispatch(forward), Ok(Dispatched::Applied));

        async move {
            if !applied {
                tracing::debug!(kind, "optimistic update not applied; skipping operation");
                return;
            }

            if let Err(err) = operation.await {
                tracing::warn!(kind, error = %err, "operation failed; reverting optimistic update");
                on_failure(&err);
                if let Err(dispatch_err) = store.dispatch(revert) {
                    tracing::warn!(kind, error = %dispatch_err, "compensating dispatch failed");
                }
            }
        }
    })
}

//! Actions and the messages a store accepts.
//!
//! A store is driven by [`Message`]s: either a plain [`Action`] that a reducer
//! folds into state, or a [`Thunk`], a deferred computation that dispatches
//! concrete actions later.

use crate::store::Store;
use std::fmt::{self, Debug};
use std::future::Future;
use std::pin::Pin;

/// Trait for actions that can be dispatched to a store.
///
/// Actions are plain values describing an intended transition. The set of
/// kinds is closed and owned by the application; the store never inspects
/// anything but [`Action::kind`], and only for diagnostics.
///
/// # Example
///
/// ```rust
/// use tether::core::Action;
///
/// #[derive(Clone, Debug)]
/// enum CounterAction {
///     Increment,
///     Add(i64),
/// }
///
/// impl Action for CounterAction {
///     fn kind(&self) -> &'static str {
///         match self {
///             Self::Increment => "INCREMENT",
///             Self::Add(_) => "ADD",
///         }
///     }
/// }
///
/// assert_eq!(CounterAction::Add(2).kind(), "ADD");
/// ```
pub trait Action: Clone + Debug + 'static {
    /// Discriminator used in logs and rejections.
    fn kind(&self) -> &'static str;
}

/// Future returned for a started thunk.
///
/// Futures are not `Send`: a store lives on a single thread, so pending
/// dispatches must be awaited there or spawned on a local executor.
pub type Pending = Pin<Box<dyn Future<Output = ()>>>;

/// A deferred computation that dispatches actions later.
///
/// The closure runs synchronously when the thunk reaches the thunk
/// interceptor; anything it dispatches before returning its future (an
/// optimistic update, for example) is applied immediately. The returned future
/// carries the asynchronous remainder.
///
/// # Example
///
/// ```rust
/// use tether::core::{Action, Thunk};
///
/// #[derive(Clone, Debug)]
/// struct Ping;
///
/// impl Action for Ping {
///     fn kind(&self) -> &'static str {
///         "PING"
///     }
/// }
///
/// let thunk: Thunk<u32, Ping> = Thunk::new(|store| {
///     let _ = store.dispatch(Ping);
///     async move {
///         let _ = store.dispatch(Ping);
///     }
/// });
/// ```
pub struct Thunk<S, A> {
    run: Box<dyn FnOnce(Store<S, A>) -> Pending>,
}

impl<S: 'static, A: Action> Thunk<S, A> {
    /// Wrap a computation receiving the store handle.
    pub fn new<F, Fut>(computation: F) -> Self
    where
        F: FnOnce(Store<S, A>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        Thunk {
            run: Box::new(move |store| Box::pin(computation(store))),
        }
    }

    /// Start the computation, returning its asynchronous remainder.
    pub fn start(self, store: Store<S, A>) -> Pending {
        (self.run)(store)
    }
}

impl<S, A> Debug for Thunk<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Thunk")
    }
}

/// Anything a store can dispatch.
pub enum Message<S, A> {
    /// A concrete transition request.
    Action(A),
    /// A deferred computation, resolved by the thunk interceptor.
    Thunk(Thunk<S, A>),
}

impl<S, A: Action> Message<S, A> {
    /// Kind of the wrapped action, or `"THUNK"` for deferred computations.
    pub fn kind(&self) -> &'static str {
        match self {
            Message::Action(action) => action.kind(),
            Message::Thunk(_) => "THUNK",
        }
    }

    /// Borrow the plain action, if this is one.
    pub fn as_action(&self) -> Option<&A> {
        match self {
            Message::Action(action) => Some(action),
            Message::Thunk(_) => None,
        }
    }
}

impl<S, A: Debug> Debug for Message<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Action(action) => f.debug_tuple("Action").field(action).finish(),
            Message::Thunk(_) => f.write_str("Thunk"),
        }
    }
}

impl<S, A: Action> From<A> for Message<S, A> {
    fn from(action: A) -> Self {
        Message::Action(action)
    }
}

impl<S, A> From<Thunk<S, A>> for Message<S, A> {
    fn from(thunk: Thunk<S, A>) -> Self {
        Message::Thunk(thunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Start,
        Stop { reason: String },
    }

    impl Action for TestAction {
        fn kind(&self) -> &'static str {
            match self {
                Self::Start => "START",
                Self::Stop { .. } => "STOP",
            }
        }
    }

    #[test]
    fn action_converts_into_message() {
        let message: Message<(), TestAction> = TestAction::Start.into();

        assert_eq!(message.kind(), "START");
        assert_eq!(message.as_action(), Some(&TestAction::Start));
    }

    #[test]
    fn thunk_message_has_no_plain_action() {
        let thunk: Thunk<(), TestAction> = Thunk::new(|_store| async {});
        let message: Message<(), TestAction> = thunk.into();

        assert_eq!(message.kind(), "THUNK");
        assert!(message.as_action().is_none());
    }

    #[test]
    fn message_debug_shows_payload() {
        let message: Message<(), TestAction> = TestAction::Stop {
            reason: "done".to_string(),
        }
        .into();

        assert_eq!(
            format!("{message:?}"),
            "Action(Stop { reason: \"done\" })"
        );
    }
}

//! Interceptor chain.
//!
//! Interceptors wrap the "dispatch onward" step. The chain is fixed when the
//! store is built: messages travel from the first interceptor to the last and
//! then to the reducer, and anything an interceptor does after calling
//! [`Next::run`] happens in the reverse order.

use crate::core::Message;
use crate::store::error::DispatchResult;
use crate::store::store::Store;

/// Middleware around dispatch.
///
/// An interceptor may forward the message unchanged with `next.run(message)`,
/// forward a transformed message, start asynchronous work and dispatch again
/// later through `store`, or return without calling `next` at all, in which
/// case its return value becomes the dispatch result and no transition
/// happens.
///
/// # Example
///
/// ```rust
/// use tether::core::{Action, Message};
/// use tether::store::{DispatchResult, Interceptor, Next, Store};
///
/// #[derive(Clone, Debug)]
/// struct Add(u32);
///
/// impl Action for Add {
///     fn kind(&self) -> &'static str {
///         "ADD"
///     }
/// }
///
/// /// Doubles every amount before it reaches the reducer.
/// struct Double;
///
/// impl Interceptor<u32, Add> for Double {
///     fn name(&self) -> &'static str {
///         "double"
///     }
///
///     fn intercept(
///         &self,
///         _store: &Store<u32, Add>,
///         message: Message<u32, Add>,
///         next: Next<'_, u32, Add>,
///     ) -> DispatchResult {
///         match message {
///             Message::Action(Add(n)) => next.run(Add(n * 2).into()),
///             other => next.run(other),
///         }
///     }
/// }
///
/// let chain: Vec<Box<dyn Interceptor<u32, Add>>> = vec![Box::new(Double)];
/// let store = Store::new(|total: &u32, add: &Add| total + add.0, chain);
///
/// store.dispatch(Add(4)).unwrap();
/// assert_eq!(*store.state(), 8);
/// ```
pub trait Interceptor<S, A> {
    /// Name reported in logs and rejections.
    fn name(&self) -> &'static str;

    /// Handle one message on its way to the reducer.
    fn intercept(&self, store: &Store<S, A>, message: Message<S, A>, next: Next<'_, S, A>)
        -> DispatchResult;
}

/// Continuation for the rest of the chain.
///
/// Consumed by [`Next::run`], so an interceptor forwards at most once. To
/// dispatch more than once, go through the store handle instead, which
/// re-enters the chain from the start.
pub struct Next<'a, S, A> {
    store: &'a Store<S, A>,
    rest: &'a [Box<dyn Interceptor<S, A>>],
}

impl<'a, S: 'static, A: crate::core::Action> Next<'a, S, A> {
    pub(crate) fn new(store: &'a Store<S, A>, rest: &'a [Box<dyn Interceptor<S, A>>]) -> Self {
        Self { store, rest }
    }

    /// Pass the message to the next interceptor, or to the reducer when none
    /// are left.
    pub fn run(self, message: Message<S, A>) -> DispatchResult {
        match self.rest.split_first() {
            Some((head, rest)) => {
                tracing::trace!(interceptor = head.name(), kind = message.kind(), "intercept");
                head.intercept(self.store, message, Next::new(self.store, rest))
            }
            None => self.store.apply(message),
        }
    }
}

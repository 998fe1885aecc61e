//! The state container.

use crate::core::{Action, Message, Reducer};
use crate::store::chain::{Interceptor, Next};
use crate::store::error::{DispatchError, DispatchResult, Dispatched};
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};

type Observer = Rc<dyn Fn()>;

struct Inner<S, A> {
    state: RefCell<Rc<S>>,
    reducer: Box<dyn Reducer<S, A>>,
    interceptors: Vec<Box<dyn Interceptor<S, A>>>,
    observers: RefCell<Vec<(u64, Observer)>>,
    next_observer_id: Cell<u64>,
}

/// Single-threaded state container.
///
/// A store holds exactly one state value, replaces it by running actions
/// through its reducer, and notifies observers after every transition.
/// `Store` is a handle: clones share the same container, and the container is
/// dropped with its last handle.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tether::core::Action;
/// use tether::store::Store;
///
/// #[derive(Clone, Debug)]
/// enum Counter {
///     Increment,
///     Reset,
/// }
///
/// impl Action for Counter {
///     fn kind(&self) -> &'static str {
///         match self {
///             Self::Increment => "INCREMENT",
///             Self::Reset => "RESET",
///         }
///     }
/// }
///
/// let store = Store::new(
///     |count: &u32, action: &Counter| match action {
///         Counter::Increment => count + 1,
///         Counter::Reset => 0,
///     },
///     Vec::new(),
/// );
///
/// let renders = Rc::new(Cell::new(0));
/// let seen = Rc::clone(&renders);
/// let subscription = store.subscribe(move || seen.set(seen.get() + 1));
///
/// store.dispatch(Counter::Increment).unwrap();
/// store.dispatch(Counter::Increment).unwrap();
/// assert_eq!(*store.state(), 2);
///
/// subscription.unsubscribe();
/// store.dispatch(Counter::Reset).unwrap();
/// assert_eq!(renders.get(), 2);
/// ```
pub struct Store<S, A> {
    inner: Rc<Inner<S, A>>,
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: fmt::Debug, A> fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.inner.state.borrow())
            .field("interceptors", &self.inner.interceptors.len())
            .field("observers", &self.inner.observers.borrow().len())
            .finish()
    }
}

impl<S: 'static, A: Action> Store<S, A> {
    /// Create a store from a reducer and a fixed interceptor chain.
    ///
    /// The reducer's initial state is established immediately. Interceptors
    /// run in the given order on the way in and in reverse on the way out.
    pub fn new<R>(reducer: R, interceptors: Vec<Box<dyn Interceptor<S, A>>>) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        let initial = reducer.initial();
        tracing::debug!(interceptors = interceptors.len(), "store initialized");

        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(Rc::new(initial)),
                reducer: Box::new(reducer),
                interceptors,
                observers: RefCell::new(Vec::new()),
                next_observer_id: Cell::new(0),
            }),
        }
    }

    /// Current state.
    ///
    /// Returns the value committed by the last transition; a transition in
    /// progress is never visible.
    pub fn state(&self) -> Rc<S> {
        Rc::clone(&self.inner.state.borrow())
    }

    /// Register an observer, called with no arguments after every transition.
    ///
    /// Registering the same closure twice registers it twice.
    pub fn subscribe<F>(&self, observer: F) -> Subscription<S, A>
    where
        F: Fn() + 'static,
    {
        let id = self.inner.next_observer_id.get();
        self.inner.next_observer_id.set(id + 1);
        self.inner
            .observers
            .borrow_mut()
            .push((id, Rc::new(observer)));

        Subscription {
            store: Rc::downgrade(&self.inner),
            id,
            active: Cell::new(true),
        }
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }

    /// Dispatch a plain action or a thunk.
    ///
    /// The message runs through the interceptor chain and, if forwarded all
    /// the way, through the reducer. Plain actions are fully applied, with
    /// observers notified, by the time this returns. The result is whatever
    /// the outermost interceptor returned.
    pub fn dispatch(&self, message: impl Into<Message<S, A>>) -> DispatchResult {
        Next::new(self, &self.inner.interceptors).run(message.into())
    }

    /// Raw transition step at the end of the chain.
    pub(crate) fn apply(&self, message: Message<S, A>) -> DispatchResult {
        let action = match message {
            Message::Action(action) => action,
            Message::Thunk(_) => {
                tracing::warn!("thunk reached the reducer without a thunk interceptor");
                return Err(DispatchError::UnhandledThunk);
            }
        };

        let current = self.state();
        let next = self.inner.reducer.reduce(&current, &action);
        *self.inner.state.borrow_mut() = Rc::new(next);
        tracing::trace!(kind = action.kind(), "transition applied");

        self.notify();
        Ok(Dispatched::Applied)
    }

    /// Call every observer registered when the cycle starts.
    ///
    /// Observers subscribed or unsubscribed during the cycle take effect from
    /// the next one. A panicking observer is logged and skipped.
    fn notify(&self) {
        let snapshot: Vec<Observer> = self
            .inner
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();

        for (position, observer) in snapshot.iter().enumerate() {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| observer())) {
                tracing::error!(
                    position,
                    reason = panic_reason(payload.as_ref()),
                    "observer panicked; continuing notification"
                );
            }
        }
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic payload"
    }
}

/// Handle returned by [`Store::subscribe`].
///
/// Dropping the handle keeps the observer registered; call
/// [`Subscription::unsubscribe`] to remove it. The handle does not keep the
/// store alive.
pub struct Subscription<S, A> {
    store: Weak<Inner<S, A>>,
    id: u64,
    active: Cell<bool>,
}

impl<S, A> Subscription<S, A> {
    /// Remove exactly this registration. Later calls do nothing.
    pub fn unsubscribe(&self) {
        if !self.active.replace(false) {
            return;
        }
        if let Some(inner) = self.store.upgrade() {
            inner.observers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get() && self.store.strong_count() > 0
    }
}

impl<S, A> fmt::Debug for Subscription<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

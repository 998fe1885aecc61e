//! Tether: a single-threaded, predictable state container
//!
//! A [`Store`](store::Store) owns one state value. The only way to change it is
//! to dispatch an action, which a pure reducer folds into the next state;
//! observers are notified after every transition. An ordered chain of
//! interceptors wraps each dispatch and may veto, log, or defer it.
//!
//! # Core Concepts
//!
//! - **Action**: a value describing an intended transition
//! - **Reducer**: a pure function from `(state, action)` to the next state
//! - **Thunk**: a deferred computation dispatching actions later
//! - **Interceptor**: middleware around dispatch (thunk, validation, logging)
//! - **Compensated**: an optimistic action paired with its inverse
//!
//! # Example
//!
//! ```rust
//! use tether::app::actions::{add_todo, toggle_todo};
//! use tether::app::{build_store, AppConfig, Todo};
//!
//! let store = build_store(&AppConfig::default()).unwrap();
//!
//! store.dispatch(add_todo(Todo::new("0", "Walk the dog"))).unwrap();
//! store.dispatch(toggle_todo("0")).unwrap();
//!
//! assert!(store.state().todos[0].complete);
//! assert!(store.dispatch(add_todo(Todo::new("1", "Buy bitcoin"))).is_err());
//! ```

pub mod app;
pub mod builder;
pub mod core;
pub mod interceptors;
pub mod store;

// Re-export commonly used types
pub use builder::{BuildError, StoreBuilder};
pub use self::core::{optimistic, Action, Compensated, Message, Reducer, Thunk};
pub use interceptors::{Logger, ThunkInterceptor, Validator, ValidatorBuilder};
pub use store::{DispatchError, Dispatched, Interceptor, Store, Subscription};

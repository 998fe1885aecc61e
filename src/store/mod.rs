//! The store: state, observers, and the interceptor chain.
//!
//! # Key Concepts
//!
//! - **Store**: holds one state value and replaces it on every transition
//! - **Subscription**: removes one observer registration on demand
//! - **Interceptor**: middleware wrapping the dispatch step, fixed at construction
//! - **Dispatched / DispatchError**: the typed result of a dispatch
//!
//! Everything here is single-threaded: a store is shared through `Rc` and
//! observers and interceptors may re-enter `dispatch` freely.

mod chain;
mod error;
#[allow(clippy::module_inception)]
mod store;

pub use chain::{Interceptor, Next};
pub use error::{DispatchError, DispatchResult, Dispatched, Rejection};
pub use store::{Store, Subscription};

//! Builder for constructing stores.

use crate::builder::error::BuildError;
use crate::core::{Action, Reducer};
use crate::store::{Interceptor, Store};

/// Builder for constructing stores with a fluent API.
///
/// Interceptors are kept in the order they are added; the first one added is
/// the outermost.
pub struct StoreBuilder<S: 'static, A: Action> {
    reducer: Option<Box<dyn Reducer<S, A>>>,
    interceptors: Vec<Box<dyn Interceptor<S, A>>>,
}

impl<S: 'static, A: Action> StoreBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            reducer: None,
            interceptors: Vec::new(),
        }
    }

    /// Set the reducer (required).
    pub fn reducer<R>(mut self, reducer: R) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        self.reducer = Some(Box::new(reducer));
        self
    }

    /// Append an interceptor to the chain.
    pub fn interceptor<I>(mut self, interceptor: I) -> Self
    where
        I: Interceptor<S, A> + 'static,
    {
        self.interceptors.push(Box::new(interceptor));
        self
    }

    /// Append several boxed interceptors at once.
    pub fn interceptors(mut self, interceptors: Vec<Box<dyn Interceptor<S, A>>>) -> Self {
        self.interceptors.extend(interceptors);
        self
    }

    /// Build the store.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Store<S, A>, BuildError> {
        let reducer = self.reducer.ok_or(BuildError::MissingReducer)?;
        Ok(Store::new(BoxedReducer(reducer), self.interceptors))
    }
}

impl<S: 'static, A: Action> Default for StoreBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

struct BoxedReducer<S, A>(Box<dyn Reducer<S, A>>);

impl<S, A> Reducer<S, A> for BoxedReducer<S, A> {
    fn initial(&self) -> S {
        self.0.initial()
    }

    fn reduce(&self, state: &S, action: &A) -> S {
        self.0.reduce(state, action)
    }
}

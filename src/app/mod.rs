//! The todo/goal application built on the store.
//!
//! # Layout
//!
//! - [`model`]: records and the application state
//! - [`actions`]: the closed action set and its creators
//! - [`reducers`]: slice reducers combined by [`app_reducer`]
//! - [`rules`]: the banned-term [`checker`]
//! - [`api`]: the asynchronous remote service boundary
//! - [`thunks`]: workflows talking to the service
//! - [`view`]: binding render functions to state slices
//! - [`config`]: settings for [`build_store`]

pub mod actions;
pub mod api;
pub mod config;
pub mod model;
pub mod reducers;
pub mod rules;
pub mod thunks;
pub mod view;

pub use actions::AppAction;
pub use api::{ApiError, InMemoryApi, TodoApi};
pub use config::{AppConfig, ConfigError};
pub use model::{AppState, Goal, IdGenerator, Todo, UuidIds};
pub use reducers::app_reducer;
pub use rules::checker;
pub use thunks::{AppThunk, Notifier, Services, TracingNotifier, ERROR_NOTICE, REJECTION_NOTICE};
pub use view::connect;

use crate::builder::{BuildError, StoreBuilder};
use crate::interceptors::{Logger, ThunkInterceptor};
use crate::store::Store;

/// Build the application store.
///
/// The chain is thunk resolution, then the banned-term checker, then the
/// logger when `config.log_dispatches` is set.
pub fn build_store(config: &AppConfig) -> Result<Store<AppState, AppAction>, BuildError> {
    let builder = StoreBuilder::new()
        .reducer(app_reducer)
        .interceptor(ThunkInterceptor)
        .interceptor(checker(&config.banned_terms));

    let builder = if config.log_dispatches {
        builder.interceptor(Logger::<AppState, AppAction>::new())
    } else {
        builder
    };

    builder.build()
}

//! Stock interceptors.
//!
//! - [`ThunkInterceptor`]: resolves deferred computations; goes first
//! - [`Validator`]: vetoes plain actions breaking domain rules
//! - [`Logger`]: emits `{ action, resulting state }` after each dispatch
//!
//! # Example
//!
//! ```rust
//! use tether::core::Action;
//! use tether::interceptors::{Logger, ThunkInterceptor, ValidatorBuilder};
//! use tether::store::{Interceptor, Store};
//!
//! #[derive(Clone, Debug)]
//! struct Rename(String);
//!
//! impl Action for Rename {
//!     fn kind(&self) -> &'static str {
//!         "RENAME"
//!     }
//! }
//!
//! fn name(action: &Rename) -> Option<(&'static str, &str)> {
//!     Some(("name", action.0.as_str()))
//! }
//!
//! let chain: Vec<Box<dyn Interceptor<String, Rename>>> = vec![
//!     Box::new(ThunkInterceptor),
//!     Box::new(
//!         ValidatorBuilder::new()
//!             .forbid_terms(&["bitcoin".to_string()], name)
//!             .build(),
//!     ),
//!     Box::new(Logger::<String, Rename>::new()),
//! ];
//! let store = Store::new(|_: &String, r: &Rename| r.0.clone(), chain);
//!
//! assert!(store.dispatch(Rename("Ada".into())).is_ok());
//! assert!(store.dispatch(Rename("Bitcoin Ada".into())).is_err());
//! assert_eq!(*store.state(), "Ada");
//! ```

mod logger;
mod thunk;
mod validation;

pub use logger::{Journal, Logger};
pub use thunk::ThunkInterceptor;
pub use validation::{Rule, Validator, ValidatorBuilder};

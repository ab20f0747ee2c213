//! Control structures for call-by-need evaluation.
//!
//! - [`Thunk`]: a memoized deferred computation, evaluated at most once
//! - [`Deferred`]: a one-shot suspended accumulator used by right folds
//!
//! # Examples
//!
//! ```rust
//! use lazy_stream::control::Thunk;
//!
//! let thunk = Thunk::new(|| 6 * 7);
//! assert!(!thunk.is_forced());
//! assert_eq!(*thunk.force(), 42);
//! assert!(thunk.is_forced());
//! ```

mod deferred;
mod thunk;

pub use deferred::Deferred;
pub use thunk::{Thunk, ThunkState};

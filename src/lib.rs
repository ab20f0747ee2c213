//! # lazy-stream
//!
//! A memoized, lazily evaluated cons-stream for Rust.
//!
//! ## Overview
//!
//! [`LazyStream`](stream::LazyStream) is an immutable singly-linked sequence
//! whose elements and tails are computed on demand and cached. It supports:
//!
//! - **Construction**: `empty`, `cons`, `of`, and the generators `constant`,
//!   `from` and `unfold` for infinite streams
//! - **Folds**: `fold_right` with a suspended accumulator, and the
//!   short-circuiting `exists` / `for_all` built on it
//! - **Traversal**: `take`, `drop`, `take_while`, `find`, `starts_with`
//! - **Transformation**: `map`, `filter`, `append`, `flat_map`, `zip_with`
//! - **Materialization**: the stack-safe `to_list_eager` and the recursive
//!   reference `to_list_recursive`
//!
//! ## Diagnostics
//!
//! Traversals can be traced step by step with
//! [`TraceConfig`](trace::TraceConfig). The configuration is passed
//! explicitly; nothing is global.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` / `Deserialize` for streams as sequences
//!
//! ## Example
//!
//! ```rust
//! use lazy_stream::prelude::*;
//!
//! let stream = LazyStream::of(vec![1, 2, 3, 4, 5]);
//! assert_eq!(stream.take(2).to_list_eager(), vec![1, 2]);
//! assert_eq!(stream.drop(1).take(2).to_list_eager(), vec![2, 3]);
//! assert!(stream.exists(|x| *x > 2));
//! assert!(stream.for_all(|x| *x > 0));
//!
//! let squares = LazyStream::from(1).map(|x| x * x);
//! assert_eq!(squares.find(|x| *x > 50), Some(64));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use lazy_stream::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::error::*;
    pub use crate::stream::*;
    pub use crate::trace::*;
}

pub mod control;
pub mod error;
pub mod stream;
pub mod trace;

//! Lazily evaluated, memoized cons-streams.
//!
//! This module provides [`LazyStream`], an immutable singly-linked sequence
//! whose element and remainder are both computed on demand and cached.
//!
//! # Overview
//!
//! A stream is either [`LazyStream::Empty`] or a [`LazyStream::Cons`] node
//! holding two shared [`Thunk`]s: one for the element and one for the rest
//! of the stream. Each thunk runs at most once, so a stream can be traversed
//! any number of times while its elements are computed only once.
//!
//! | Operation            | Forces                                   |
//! |----------------------|------------------------------------------|
//! | `take(n)`            | nothing until the result is consumed     |
//! | `drop(n)`            | the first `n` tails                      |
//! | `exists` / `for_all` | up to the first deciding element         |
//! | `find`               | up to the first match                    |
//! | `to_list_eager`      | everything (must be finite)              |
//!
//! # Examples
//!
//! ```rust
//! use lazy_stream::stream::LazyStream;
//!
//! let stream = LazyStream::of(vec![1, 2, 3, 4, 5]);
//! assert_eq!(stream.take(2).to_list_eager(), vec![1, 2]);
//! assert_eq!(stream.drop(3).to_list_eager(), vec![4, 5]);
//! assert!(stream.exists(|x| *x > 4));
//!
//! // Infinite streams are fine as long as consumption is bounded
//! let naturals = LazyStream::from(0);
//! assert_eq!(naturals.drop(10).take(3).to_list_eager(), vec![10, 11, 12]);
//! ```
//!
//! # Stack Usage
//!
//! [`LazyStream::fold_right`] and everything built on it recurse once per
//! visited element, as does [`LazyStream::to_list_recursive`]. On long
//! streams they can exhaust the call stack. [`LazyStream::to_list_eager`],
//! [`LazyStream::find`], [`LazyStream::drop`], [`LazyStream::take`] and
//! dropping a stream are iterative.

mod fold;
mod generate;
mod materialize;
mod traced;
mod traversal;

pub use materialize::Iter;
pub use traced::Traced;

use std::fmt;
use std::iter::FromIterator;
use std::rc::Rc;

use crate::control::Thunk;
use crate::trace::TraceConfig;

/// A lazily evaluated, memoized, immutable stream.
///
/// Match on it by reference; the variants own `Rc` handles, so cloning a
/// stream shares the memo cells of every node.
///
/// # Thread Safety
///
/// This type is NOT thread-safe: nodes are `Rc`s around `RefCell` memo
/// cells and are neither `Send` nor `Sync`.
///
/// # Examples
///
/// ```rust
/// use lazy_stream::stream::LazyStream;
///
/// let stream = LazyStream::cons(|| 1, || LazyStream::cons(|| 2, LazyStream::empty));
/// match &stream {
///     LazyStream::Cons(head, _) => assert_eq!(*head.force(), 1),
///     LazyStream::Empty => unreachable!(),
/// }
/// assert_eq!(stream.to_list_eager(), vec![1, 2]);
/// ```
pub enum LazyStream<T> {
    /// The terminal stream.
    Empty,
    /// An element and the rest of the stream, both deferred.
    Cons(Rc<Thunk<T>>, Rc<Thunk<LazyStream<T>>>),
}

impl<T> LazyStream<T> {
    /// Returns the empty stream.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Builds a node from a deferred element and a deferred remainder.
    ///
    /// Neither closure runs until the corresponding part is forced, and
    /// each runs at most once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let stream: LazyStream<i32> = LazyStream::cons(|| 1, || panic!("never forced"));
    /// assert_eq!(stream.head_option(), Some(1));
    /// ```
    pub fn cons<H, R>(head: H, tail: R) -> Self
    where
        H: FnOnce() -> T + 'static,
        R: FnOnce() -> Self + 'static,
    {
        Self::Cons(Rc::new(Thunk::new(head)), Rc::new(Thunk::new(tail)))
    }

    /// Builds a node from an already computed element and a deferred
    /// remainder.
    pub fn cons_value<R>(head: T, tail: R) -> Self
    where
        R: FnOnce() -> Self + 'static,
    {
        Self::Cons(Rc::new(Thunk::evaluated(head)), Rc::new(Thunk::new(tail)))
    }

    /// Returns `true` if this is the terminal stream.
    ///
    /// Does not force anything.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Forces and returns the remainder of a `Cons` node.
    pub(crate) fn forced_tail(tail: &Rc<Thunk<Self>>) -> Self {
        tail.force().clone()
    }

    /// Applies the diagnostic `config` to the traversals of this stream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    /// use lazy_stream::trace::TraceConfig;
    ///
    /// let stream = LazyStream::of(vec![1, 2, 3]);
    /// let config = TraceConfig::enabled();
    /// assert_eq!(stream.traced(&config).find(|x| *x == 2), Some(2));
    /// ```
    #[inline]
    pub const fn traced(&self, config: &TraceConfig) -> Traced<'_, T> {
        Traced::new(self, *config)
    }

    /// Detaches the forced remainder if no other handle shares it.
    fn take_unshared_tail(&mut self) -> Option<Self> {
        match self {
            Self::Cons(_, tail) => Rc::get_mut(tail).and_then(Thunk::take_forced),
            Self::Empty => None,
        }
    }
}

impl<T: Clone + 'static> LazyStream<T> {
    /// Builds a finite stream from an ordered collection.
    ///
    /// The items are collected eagerly, but each node (and each element
    /// clone) is only built when reached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let stream = LazyStream::of(vec!["a", "b"]);
    /// assert_eq!(stream.to_list_eager(), vec!["a", "b"]);
    /// ```
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let items: Rc<[T]> = items.into_iter().collect();
        Self::of_from(items, 0)
    }

    fn of_from(items: Rc<[T]>, index: usize) -> Self {
        if index >= items.len() {
            return Self::Empty;
        }
        let element_source = Rc::clone(&items);
        Self::cons(
            move || element_source[index].clone(),
            move || Self::of_from(items, index + 1),
        )
    }

    /// Forces the first node and returns its element and remainder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let (head, tail) = LazyStream::of(vec![1, 2]).uncons().unwrap();
    /// assert_eq!(head, 1);
    /// assert_eq!(tail.to_list_eager(), vec![2]);
    /// ```
    pub fn uncons(&self) -> Option<(T, Self)> {
        match self {
            Self::Empty => None,
            Self::Cons(head, tail) => Some((head.value(), Self::forced_tail(tail))),
        }
    }
}

impl<T> Clone for LazyStream<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Cons(head, tail) => Self::Cons(Rc::clone(head), Rc::clone(tail)),
        }
    }
}

impl<T> Default for LazyStream<T> {
    fn default() -> Self {
        Self::Empty
    }
}

// A fully forced stream is a chain of nested thunks. Dropping it node by
// node keeps the stack flat regardless of length.
impl<T> Drop for LazyStream<T> {
    fn drop(&mut self) {
        let mut next = self.take_unshared_tail();
        while let Some(mut stream) = next {
            next = stream.take_unshared_tail();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LazyStream<T> {
    /// Shows the already forced prefix without forcing anything.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = formatter.debug_list();
        let mut current = self.clone();
        loop {
            let next = match &current {
                Self::Empty => break,
                Self::Cons(head, tail) => {
                    match head.get() {
                        Some(value) => list.entry(&*value),
                        None => list.entry(&format_args!("?")),
                    };
                    match tail.get() {
                        Some(rest) => rest.clone(),
                        None => {
                            list.entry(&format_args!(".."));
                            break;
                        }
                    }
                }
            };
            current = next;
        }
        list.finish()
    }
}

impl<T: Clone + 'static> FromIterator<T> for LazyStream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

static_assertions::assert_not_impl_any!(LazyStream<i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn counting_stream(length: usize, forced: &Rc<Cell<usize>>) -> LazyStream<usize> {
        fn build(index: usize, length: usize, forced: Rc<Cell<usize>>) -> LazyStream<usize> {
            if index == length {
                return LazyStream::Empty;
            }
            let counter = Rc::clone(&forced);
            LazyStream::cons(
                move || {
                    counter.set(counter.get() + 1);
                    index
                },
                move || build(index + 1, length, forced),
            )
        }
        build(0, length, Rc::clone(forced))
    }

    #[rstest]
    fn test_empty_is_empty() {
        let stream: LazyStream<i32> = LazyStream::empty();
        assert!(stream.is_empty());
        assert!(stream.uncons().is_none());
    }

    #[rstest]
    fn test_cons_defers_both_parts() {
        let stream: LazyStream<i32> = LazyStream::cons(|| panic!("head"), || panic!("tail"));
        assert!(!stream.is_empty());
    }

    #[rstest]
    fn test_of_preserves_order() {
        let stream = LazyStream::of(vec![1, 2, 3]);
        assert_eq!(stream.to_list_eager(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_of_builds_nodes_on_demand() {
        let stream = LazyStream::of(vec![1, 2, 3]);
        let LazyStream::Cons(head, tail) = &stream else {
            panic!("expected a node");
        };
        assert!(!head.is_forced());
        assert!(!tail.is_forced());
    }

    #[rstest]
    fn test_heads_forced_once_across_traversals() {
        let forced = Rc::new(Cell::new(0));
        let stream = counting_stream(4, &forced);

        assert_eq!(stream.to_list_eager(), vec![0, 1, 2, 3]);
        assert_eq!(stream.to_list_eager(), vec![0, 1, 2, 3]);
        assert_eq!(forced.get(), 4);
    }

    #[rstest]
    fn test_clones_share_memo_cells() {
        let forced = Rc::new(Cell::new(0));
        let stream = counting_stream(3, &forced);
        let copy = stream.clone();

        let _ = stream.to_list_eager();
        let _ = copy.to_list_eager();
        assert_eq!(forced.get(), 3);
    }

    #[rstest]
    fn test_uncons() {
        let (head, tail) = LazyStream::of(vec![7, 8]).uncons().unwrap();
        assert_eq!(head, 7);
        assert_eq!(tail.to_list_eager(), vec![8]);
    }

    #[rstest]
    fn test_debug_shows_forced_prefix_only() {
        let stream = LazyStream::of(vec![1, 2, 3]);
        assert_eq!(format!("{stream:?}"), "[?, ..]");

        let _ = stream.take(1).to_list_eager();
        assert_eq!(format!("{stream:?}"), "[1, ..]");

        let _ = stream.to_list_eager();
        assert_eq!(format!("{stream:?}"), "[1, 2, 3]");
    }

    #[rstest]
    fn test_drop_long_forced_stream() {
        let stream: LazyStream<usize> = (0..100_000).collect();
        assert_eq!(stream.to_list_eager().len(), 100_000);
        drop(stream);
    }

    #[rstest]
    fn test_of_and_collect_agree() {
        let built = LazyStream::of(vec![1, 2, 3]);
        let collected: LazyStream<i32> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(built.to_list_eager(), collected.to_list_eager());
    }
}

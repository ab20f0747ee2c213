//! Right folds and the operations derived from them.
//!
//! The accumulator for the rest of the stream is handed to the combining
//! function as a [`Deferred`]. Ignoring it ends the traversal there, which
//! is how `exists` and `for_all` short-circuit; capturing it in a new
//! stream node is how `map` and `take_while_via_fold_right` stay lazy.

use std::rc::Rc;

use super::LazyStream;
use crate::control::{Deferred, Thunk};
use crate::trace::TraceConfig;

impl<T: Clone + 'static> LazyStream<T> {
    /// Folds the stream from the right.
    ///
    /// `combine` receives each element together with the suspended fold of
    /// the remainder. Forcing the [`Deferred`] continues the fold; not
    /// forcing it stops the traversal without touching the rest of the
    /// stream, which makes this usable on infinite streams.
    ///
    /// # Stack Usage
    ///
    /// Recursion depth equals the number of elements visited, so folding a
    /// long stream all the way to the end can overflow the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let stream = LazyStream::of(vec![1, 2, 3]);
    /// let sum = stream.fold_right(0, |element, rest| element + rest.force());
    /// assert_eq!(sum, 6);
    ///
    /// // The first element short-circuits the infinite remainder
    /// let first_even = LazyStream::from(1).fold_right(None, |element, rest| {
    ///     if element % 2 == 0 { Some(element) } else { rest.force() }
    /// });
    /// assert_eq!(first_even, Some(2));
    /// ```
    pub fn fold_right<'a, B, F>(&self, zero: B, combine: F) -> B
    where
        B: 'a,
        F: Fn(T, Deferred<'a, B>) -> B + 'a,
    {
        self.fold_right_with(zero, combine, TraceConfig::disabled(), "fold_right")
    }

    pub(crate) fn fold_right_with<'a, B, F>(
        &self,
        zero: B,
        combine: F,
        config: TraceConfig,
        operation: &'static str,
    ) -> B
    where
        B: 'a,
        F: Fn(T, Deferred<'a, B>) -> B + 'a,
    {
        Self::fold_right_from(self.clone(), zero, Rc::new(combine), config, operation, 0)
    }

    fn fold_right_from<'a, B, F>(
        stream: Self,
        zero: B,
        combine: Rc<F>,
        config: TraceConfig,
        operation: &'static str,
        index: usize,
    ) -> B
    where
        B: 'a,
        F: Fn(T, Deferred<'a, B>) -> B + 'a,
    {
        match &stream {
            Self::Empty => {
                config.finish(operation, "end of stream");
                zero
            }
            Self::Cons(head, tail) => {
                config.step(operation, index);
                let element = head.value();
                let tail = Rc::clone(tail);
                let next = Rc::clone(&combine);
                let rest = Deferred::new(move || {
                    Self::fold_right_from(
                        Self::forced_tail(&tail),
                        zero,
                        next,
                        config,
                        operation,
                        index + 1,
                    )
                });
                combine(element, rest)
            }
        }
    }

    /// Returns `true` if any element satisfies `predicate`.
    ///
    /// Stops at the first match; nothing after it is forced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// assert!(LazyStream::of(vec![1, 2, 3]).exists(|x| *x > 2));
    /// assert!(LazyStream::from(0).exists(|x| *x == 100));
    /// ```
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.exists_with(predicate, TraceConfig::disabled())
    }

    pub(crate) fn exists_with<P>(&self, predicate: P, config: TraceConfig) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.fold_right_with(
            false,
            move |element, rest| predicate(&element) || rest.force(),
            config,
            "exists",
        )
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Stops at the first failure. Returns `true` for the empty stream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let stream = LazyStream::of(vec![1, 2, 3]);
    /// assert!(stream.for_all(|x| *x > 0));
    /// assert!(!stream.for_all(|x| *x > 1));
    /// ```
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.for_all_with(predicate, TraceConfig::disabled())
    }

    pub(crate) fn for_all_with<P>(&self, predicate: P, config: TraceConfig) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.fold_right_with(
            true,
            move |element, rest| predicate(&element) && rest.force(),
            config,
            "for_all",
        )
    }

    /// Returns the first element, forcing only the head.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let stream: LazyStream<i32> = LazyStream::cons(|| 1, || panic!("tail"));
    /// assert_eq!(stream.head_option(), Some(1));
    /// assert_eq!(LazyStream::<i32>::empty().head_option(), None);
    /// ```
    pub fn head_option(&self) -> Option<T> {
        self.head_option_with(TraceConfig::disabled())
    }

    pub(crate) fn head_option_with(&self, config: TraceConfig) -> Option<T> {
        self.fold_right_with(None, |element, _| Some(element), config, "head_option")
    }

    /// Returns the longest prefix whose elements satisfy `predicate`.
    ///
    /// Built on [`fold_right`](Self::fold_right). Produces the same elements
    /// as [`take_while`](Self::take_while).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let stream = LazyStream::from(1).take_while_via_fold_right(|x| *x < 4);
    /// assert_eq!(stream.to_list_eager(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn take_while_via_fold_right<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.take_while_via_fold_right_with(predicate, TraceConfig::disabled())
    }

    pub(crate) fn take_while_via_fold_right_with<P>(&self, predicate: P, config: TraceConfig) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.fold_right_with(
            Self::Empty,
            move |element, rest: Deferred<'static, Self>| {
                if predicate(&element) {
                    Self::cons_value(element, move || rest.force())
                } else {
                    config.finish("take_while_via_fold_right", "predicate failed");
                    Self::Empty
                }
            },
            config,
            "take_while_via_fold_right",
        )
    }

    /// Lazily applies `function` to every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let doubled = LazyStream::from(1).map(|x| x * 2);
    /// assert_eq!(doubled.take(3).to_list_eager(), vec![2, 4, 6]);
    /// ```
    pub fn map<U, F>(&self, function: F) -> LazyStream<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> U + 'static,
    {
        self.fold_right(
            LazyStream::Empty,
            move |element, rest: Deferred<'static, LazyStream<U>>| {
                LazyStream::cons_value(function(element), move || rest.force())
            },
        )
    }

    /// Lazily keeps the elements satisfying `predicate`.
    ///
    /// Reaching the next kept element forces every rejected element before
    /// it, so filtering an infinite stream that never matches again does
    /// not terminate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let evens = LazyStream::from(0).filter(|x| x % 2 == 0);
    /// assert_eq!(evens.take(3).to_list_eager(), vec![0, 2, 4]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.fold_right(Self::Empty, move |element, rest: Deferred<'static, Self>| {
            if predicate(&element) {
                Self::cons_value(element, move || rest.force())
            } else {
                rest.force()
            }
        })
    }

    /// Lazily maps each element to a stream and concatenates the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let stream = LazyStream::of(vec![1, 2]).flat_map(|x| LazyStream::of(vec![x, x * 10]));
    /// assert_eq!(stream.to_list_eager(), vec![1, 10, 2, 20]);
    /// ```
    pub fn flat_map<U, F>(&self, function: F) -> LazyStream<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> LazyStream<U> + 'static,
    {
        self.fold_right(
            LazyStream::Empty,
            move |element, rest: Deferred<'static, LazyStream<U>>| {
                LazyStream::append_from(function(element), Box::new(move || rest.force()))
            },
        )
    }

    /// Lazily concatenates `other` after this stream.
    ///
    /// Nothing of `other` is forced before this stream is exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let joined = LazyStream::of(vec![1, 2]).append(&LazyStream::of(vec![3]));
    /// assert_eq!(joined.to_list_eager(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        let other = other.clone();
        Self::append_from(self.clone(), Box::new(move || other))
    }

    fn append_from(stream: Self, rest: Box<dyn FnOnce() -> Self>) -> Self {
        match &stream {
            Self::Empty => rest(),
            Self::Cons(head, tail) => {
                let tail = Rc::clone(tail);
                Self::Cons(
                    Rc::clone(head),
                    Rc::new(Thunk::new(move || {
                        Self::append_from(Self::forced_tail(&tail), rest)
                    })),
                )
            }
        }
    }
}

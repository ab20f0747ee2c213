//! Bounded and conditional traversal: `find`, `take`, `drop`, `take_while`,
//! `starts_with`.

use std::rc::Rc;

use super::LazyStream;
use crate::control::Thunk;
use crate::trace::TraceConfig;

impl<T: Clone + 'static> LazyStream<T> {
    /// Returns the first element satisfying `predicate`.
    ///
    /// Scans iteratively, so the stack stays flat however far the match is.
    /// Does not terminate on an infinite stream without a match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let stream = LazyStream::of(vec![1, 2, 3, 4]);
    /// assert_eq!(stream.find(|x| x % 2 == 0), Some(2));
    /// assert_eq!(stream.find(|x| *x > 10), None);
    /// ```
    pub fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.find_with(predicate, TraceConfig::disabled())
    }

    pub(crate) fn find_with<P>(&self, predicate: P, config: TraceConfig) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        let mut current = self.clone();
        let mut index = 0;
        loop {
            let next = match &current {
                Self::Empty => {
                    config.finish("find", "end of stream");
                    return None;
                }
                Self::Cons(head, tail) => {
                    config.step("find", index);
                    if predicate(&*head.force()) {
                        config.finish("find", "match");
                        return Some(head.value());
                    }
                    Self::forced_tail(tail)
                }
            };
            current = next;
            index += 1;
        }
    }

    /// Returns a stream of at most the first `count` elements.
    ///
    /// Nothing is forced by the call itself. Consuming the result forces
    /// exactly the elements it yields: `take(0)` never touches the source
    /// head, and reaching the last element never forces the one after it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let stream = LazyStream::of(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(stream.take(2).to_list_eager(), vec![1, 2]);
    /// assert_eq!(stream.take(10).to_list_eager(), vec![1, 2, 3, 4, 5]);
    /// assert!(stream.take(0).is_empty());
    /// ```
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        self.take_with(count, TraceConfig::disabled())
    }

    pub(crate) fn take_with(&self, count: usize, config: TraceConfig) -> Self {
        Self::take_from(self, count, config, 0)
    }

    fn take_from(stream: &Self, count: usize, config: TraceConfig, index: usize) -> Self {
        if count == 0 {
            config.finish("take", "count reached");
            return Self::Empty;
        }
        match stream {
            Self::Empty => {
                config.finish("take", "end of stream");
                Self::Empty
            }
            Self::Cons(head, _) if count == 1 => {
                config.step("take", index);
                Self::Cons(Rc::clone(head), Rc::new(Thunk::evaluated(Self::Empty)))
            }
            Self::Cons(head, tail) => {
                config.step("take", index);
                let tail = Rc::clone(tail);
                Self::Cons(
                    Rc::clone(head),
                    Rc::new(Thunk::new(move || {
                        Self::take_from(&Self::forced_tail(&tail), count - 1, config, index + 1)
                    })),
                )
            }
        }
    }

    /// Skips the first `count` elements.
    ///
    /// Forces the first `count` tails (but none of the skipped elements).
    /// Dropping past the end yields the empty stream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let stream = LazyStream::of(vec![1, 2, 3]);
    /// assert_eq!(stream.drop(1).to_list_eager(), vec![2, 3]);
    /// assert!(stream.drop(5).is_empty());
    /// ```
    #[must_use]
    pub fn drop(&self, count: usize) -> Self {
        self.drop_with(count, TraceConfig::disabled())
    }

    pub(crate) fn drop_with(&self, count: usize, config: TraceConfig) -> Self {
        let mut current = self.clone();
        for index in 0..count {
            let next = match &current {
                Self::Empty => {
                    config.finish("drop", "end of stream");
                    break;
                }
                Self::Cons(_, tail) => {
                    config.step("drop", index);
                    Self::forced_tail(tail)
                }
            };
            current = next;
        }
        current
    }

    /// Returns the longest prefix whose elements satisfy `predicate`.
    ///
    /// Checks the first element immediately; every later element is checked
    /// only when the result is consumed that far.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let small = LazyStream::from(1).take_while(|x| *x <= 3);
    /// assert_eq!(small.to_list_eager(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.take_while_with(predicate, TraceConfig::disabled())
    }

    pub(crate) fn take_while_with<P>(&self, predicate: P, config: TraceConfig) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self::take_while_from(self, Rc::new(predicate), config, 0)
    }

    fn take_while_from<P>(stream: &Self, predicate: Rc<P>, config: TraceConfig, index: usize) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        match stream {
            Self::Cons(head, tail) if predicate(&*head.force()) => {
                config.step("take_while", index);
                let tail = Rc::clone(tail);
                Self::Cons(
                    Rc::clone(head),
                    Rc::new(Thunk::new(move || {
                        Self::take_while_from(&Self::forced_tail(&tail), predicate, config, index + 1)
                    })),
                )
            }
            _ => {
                config.finish("take_while", "predicate failed or end of stream");
                Self::Empty
            }
        }
    }

    /// Returns `true` if `prefix` is a prefix of this stream.
    ///
    /// The empty stream is a prefix of every stream. Forces at most as many
    /// elements of each stream as `prefix` has.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let naturals = LazyStream::from(1);
    /// assert!(naturals.starts_with(&LazyStream::of(vec![1, 2, 3])));
    /// assert!(!naturals.starts_with(&LazyStream::of(vec![2])));
    /// ```
    pub fn starts_with(&self, prefix: &Self) -> bool
    where
        T: PartialEq,
    {
        self.starts_with_with(prefix, TraceConfig::disabled())
    }

    pub(crate) fn starts_with_with(&self, prefix: &Self, config: TraceConfig) -> bool
    where
        T: PartialEq,
    {
        let mut stream = self.clone();
        let mut expected = prefix.clone();
        let mut index = 0;
        loop {
            let (next_stream, next_expected) = match (&stream, &expected) {
                (_, Self::Empty) => return true,
                (Self::Empty, Self::Cons(..)) => {
                    config.finish("starts_with", "stream shorter than prefix");
                    return false;
                }
                (Self::Cons(head, tail), Self::Cons(expected_head, expected_tail)) => {
                    config.step("starts_with", index);
                    if *head.force() != *expected_head.force() {
                        config.finish("starts_with", "mismatch");
                        return false;
                    }
                    let next_expected = Self::forced_tail(expected_tail);
                    if next_expected.is_empty() {
                        config.finish("starts_with", "prefix exhausted");
                        return true;
                    }
                    (Self::forced_tail(tail), next_expected)
                }
            };
            stream = next_stream;
            expected = next_expected;
            index += 1;
        }
    }
}

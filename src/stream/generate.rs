//! Infinite and generated streams: `constant`, `ones`, `from`, `unfold`,
//! `zip_with`.

use std::ops::Add;
use std::rc::Rc;

use super::LazyStream;
use crate::control::Thunk;

impl<T: Clone + 'static> LazyStream<T> {
    /// Returns an infinite stream repeating `value`.
    ///
    /// Every node shares a single element cell, so `value` is stored once.
    /// Nodes are only built as far as the stream is consumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let sevens = LazyStream::constant(7);
    /// assert_eq!(sevens.take(3).to_list_eager(), vec![7, 7, 7]);
    /// assert!(sevens.exists(|x| *x == 7));
    /// ```
    pub fn constant(value: T) -> Self {
        Self::repeat_cell(Rc::new(Thunk::evaluated(value)))
    }

    fn repeat_cell(head: Rc<Thunk<T>>) -> Self {
        let next = Rc::clone(&head);
        Self::Cons(head, Rc::new(Thunk::new(move || Self::repeat_cell(next))))
    }

    /// Builds a stream from a seed.
    ///
    /// `function` maps the current state to the next element and state, or
    /// to `None` to end the stream. The first step runs immediately; each
    /// later step runs when its node is reached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let fibonacci = LazyStream::unfold((0_u64, 1_u64), |(current, next)| {
    ///     Some((current, (next, current + next)))
    /// });
    /// assert_eq!(fibonacci.take(7).to_list_eager(), vec![0, 1, 1, 2, 3, 5, 8]);
    ///
    /// let countdown = LazyStream::unfold(3, |n| (n > 0).then(|| (n, n - 1)));
    /// assert_eq!(countdown.to_list_eager(), vec![3, 2, 1]);
    /// ```
    pub fn unfold<S, F>(state: S, function: F) -> Self
    where
        S: 'static,
        F: Fn(S) -> Option<(T, S)> + 'static,
    {
        Self::unfold_from(state, Rc::new(function))
    }

    fn unfold_from<S, F>(state: S, function: Rc<F>) -> Self
    where
        S: 'static,
        F: Fn(S) -> Option<(T, S)> + 'static,
    {
        match function(state) {
            Some((element, next_state)) => {
                Self::cons_value(element, move || Self::unfold_from(next_state, function))
            }
            None => Self::Empty,
        }
    }

    /// Combines two streams element by element, stopping at the shorter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let sums = LazyStream::from(1).zip_with(&LazyStream::of(vec![10, 20]), |a, b| a + b);
    /// assert_eq!(sums.to_list_eager(), vec![11, 22]);
    /// ```
    pub fn zip_with<U, V, F>(&self, other: &LazyStream<U>, function: F) -> LazyStream<V>
    where
        U: Clone + 'static,
        V: Clone + 'static,
        F: Fn(T, U) -> V + 'static,
    {
        LazyStream::unfold(
            (self.clone(), other.clone()),
            move |(left, right): (Self, LazyStream<U>)| {
                let (left_element, left_rest) = left.uncons()?;
                let (right_element, right_rest) = right.uncons()?;
                Some((function(left_element, right_element), (left_rest, right_rest)))
            },
        )
    }
}

impl<T> LazyStream<T>
where
    T: Copy + Add<Output = T> + From<u8> + 'static,
{
    /// Returns the infinite stream `start, start + 1, start + 2, ...`.
    ///
    /// Overflowing the element type panics in debug builds, like ordinary
    /// integer arithmetic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// assert_eq!(LazyStream::from(5).take(3).to_list_eager(), vec![5, 6, 7]);
    /// ```
    pub fn from(start: T) -> Self {
        Self::cons_value(start, move || Self::from(start + T::from(1)))
    }

    /// Returns an infinite stream of ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let ones: LazyStream<i32> = LazyStream::ones();
    /// assert_eq!(ones.take(2).to_list_eager(), vec![1, 1]);
    /// assert!(ones.map(|x| x + 1).exists(|x| *x % 2 == 0));
    /// ```
    pub fn ones() -> Self {
        Self::constant(T::from(1))
    }
}

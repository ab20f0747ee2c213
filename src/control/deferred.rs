//! Suspended accumulators for right folds.

use std::fmt;

/// A suspended, not yet computed result of folding the rest of a stream.
///
/// [`LazyStream::fold_right`](crate::stream::LazyStream::fold_right) hands
/// one of these to its combining function in place of a forced
/// accumulator. Calling [`Deferred::force`] continues the fold; dropping it
/// instead stops the traversal without touching the remainder.
///
/// When the combining function is `'static`, so is the `Deferred`, and it
/// can be captured by the tail of a new stream node. This is what keeps
/// folds such as `map` or `take_while_via_fold_right` lazy.
///
/// # Examples
///
/// ```rust
/// use lazy_stream::control::Deferred;
///
/// let rest = Deferred::new(|| 40 + 2);
/// assert_eq!(rest.force(), 42);
/// ```
pub struct Deferred<'a, B> {
    computation: Box<dyn FnOnce() -> B + 'a>,
}

impl<'a, B> Deferred<'a, B> {
    /// Suspends `computation`.
    #[inline]
    pub fn new<F>(computation: F) -> Self
    where
        F: FnOnce() -> B + 'a,
    {
        Self {
            computation: Box::new(computation),
        }
    }

    /// Runs the suspended computation.
    #[inline]
    pub fn force(self) -> B {
        (self.computation)()
    }
}

impl<B> fmt::Debug for Deferred<'_, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Deferred(<suspended>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    fn test_deferred_runs_only_when_forced() {
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        let deferred = Deferred::new(move || flag.set(true));

        assert!(!ran.get());
        deferred.force();
        assert!(ran.get());
    }

    #[rstest]
    fn test_deferred_may_borrow() {
        let base = 40;
        let deferred = Deferred::new(|| base + 2);
        assert_eq!(deferred.force(), 42);
    }

    #[rstest]
    fn test_deferred_dropped_never_runs() {
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        drop(Deferred::new(move || flag.set(true)));
        assert!(!ran.get());
    }
}

//! Call-by-need memo cells.
//!
//! This module provides [`Thunk<T>`], a deferred computation that runs at
//! most once and caches its result. Stream nodes hold their element and
//! their remainder behind thunks shared through `Rc`.
//!
//! # Examples
//!
//! ```rust
//! use lazy_stream::control::Thunk;
//!
//! let thunk = Thunk::new(|| {
//!     println!("Computing...");
//!     42
//! });
//!
//! // No output yet - computation is deferred
//! assert!(!thunk.is_forced());
//!
//! // Now "Computing..." is printed
//! assert_eq!(*thunk.force(), 42);
//!
//! // No recomputation - result is memoized
//! assert_eq!(*thunk.force(), 42);
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;

type Computation<T> = Box<dyn FnOnce() -> T>;

/// The internal state of a [`Thunk`].
///
/// `Evaluating` is the computed flag's "in progress" position: it is set
/// while the computation runs so a re-entrant force can be detected
/// instead of silently recomputing.
pub enum ThunkState<T> {
    /// Not forced yet. Holds the computation.
    Pending(Computation<T>),
    /// The computation is currently running.
    Evaluating,
    /// Forced. Holds the cached result.
    Forced(T),
    /// The computation panicked. The thunk is unusable.
    Poisoned,
}

/// A deferred computation evaluated at most once.
///
/// # Thread Safety
///
/// This type is NOT thread-safe. The memo cell is a `RefCell` and the
/// computation is not `Send`.
///
/// # Examples
///
/// ```rust
/// use lazy_stream::control::Thunk;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let call_count = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&call_count);
/// let thunk = Thunk::new(move || {
///     counter.set(counter.get() + 1);
///     "done"
/// });
///
/// assert_eq!(call_count.get(), 0);
/// let _ = thunk.force();
/// let _ = thunk.force();
/// assert_eq!(call_count.get(), 1);
/// ```
pub struct Thunk<T> {
    state: RefCell<ThunkState<T>>,
}

/// Marks the thunk poisoned if the computation unwinds before completing.
struct PoisonOnUnwind<'a, T> {
    state: &'a RefCell<ThunkState<T>>,
    completed: bool,
}

impl<T> Drop for PoisonOnUnwind<'_, T> {
    fn drop(&mut self) {
        if !self.completed {
            *self.state.borrow_mut() = ThunkState::Poisoned;
        }
    }
}

impl<T> Thunk<T> {
    /// Creates a thunk that will run `computation` on first force.
    #[inline]
    pub fn new<F>(computation: F) -> Self
    where
        F: FnOnce() -> T + 'static,
    {
        Self {
            state: RefCell::new(ThunkState::Pending(Box::new(computation))),
        }
    }

    /// Creates a thunk that is already forced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::control::Thunk;
    ///
    /// let thunk = Thunk::evaluated(7);
    /// assert!(thunk.is_forced());
    /// ```
    #[inline]
    pub const fn evaluated(value: T) -> Self {
        Self {
            state: RefCell::new(ThunkState::Forced(value)),
        }
    }

    /// Forces the computation and returns a reference to the cached value.
    ///
    /// # Panics
    ///
    /// - If the thunk is poisoned by an earlier panicking computation.
    /// - If the thunk is forced again from inside its own computation.
    ///   Such a cycle can never produce a value.
    pub fn force(&self) -> Ref<'_, T> {
        let needs_evaluation = match &*self.state.borrow() {
            ThunkState::Forced(_) => false,
            ThunkState::Pending(_) => true,
            ThunkState::Evaluating => panic!("Thunk forced re-entrantly by its own computation"),
            ThunkState::Poisoned => panic!("Thunk instance has been poisoned"),
        };

        if needs_evaluation {
            self.evaluate();
        }

        Ref::map(self.state.borrow(), |state| match state {
            ThunkState::Forced(value) => value,
            _ => unreachable!("Thunk should be forced at this point"),
        })
    }

    /// Runs the pending computation and caches its result.
    ///
    /// The state is `Evaluating` while the computation runs and no borrow is
    /// held, so the computation may force other thunks freely.
    fn evaluate(&self) {
        let ThunkState::Pending(computation) =
            std::mem::replace(&mut *self.state.borrow_mut(), ThunkState::Evaluating)
        else {
            unreachable!()
        };

        let mut guard = PoisonOnUnwind {
            state: &self.state,
            completed: false,
        };
        let value = computation();
        *self.state.borrow_mut() = ThunkState::Forced(value);
        guard.completed = true;
    }

    /// Returns the cached value without forcing.
    pub fn get(&self) -> Option<Ref<'_, T>> {
        let state = self.state.borrow();
        if matches!(&*state, ThunkState::Forced(_)) {
            Some(Ref::map(state, |s| match s {
                ThunkState::Forced(value) => value,
                _ => unreachable!(),
            }))
        } else {
            None
        }
    }

    /// Returns whether the value has been computed.
    #[inline]
    pub fn is_forced(&self) -> bool {
        matches!(&*self.state.borrow(), ThunkState::Forced(_))
    }

    /// Returns whether the computation panicked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::control::Thunk;
    /// use std::panic::{AssertUnwindSafe, catch_unwind};
    ///
    /// let thunk: Thunk<i32> = Thunk::new(|| panic!("boom"));
    /// let _ = catch_unwind(AssertUnwindSafe(|| thunk.force()));
    /// assert!(thunk.is_poisoned());
    /// ```
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), ThunkState::Poisoned)
    }

    /// Moves the cached value out of a forced thunk, leaving it poisoned.
    ///
    /// Returns `None` and leaves the thunk untouched if it is not forced.
    /// Requires exclusive access, so it only applies to unshared thunks.
    pub fn take_forced(&mut self) -> Option<T> {
        let state = self.state.get_mut();
        if !matches!(state, ThunkState::Forced(_)) {
            return None;
        }
        match std::mem::replace(state, ThunkState::Poisoned) {
            ThunkState::Forced(value) => Some(value),
            _ => unreachable!(),
        }
    }
}

impl<T: Clone> Thunk<T> {
    /// Forces the computation and returns a clone of the cached value.
    #[inline]
    pub fn value(&self) -> T {
        self.force().clone()
    }
}

impl<T: fmt::Debug> fmt::Debug for Thunk<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            ThunkState::Forced(value) => formatter.debug_tuple("Thunk").field(value).finish(),
            ThunkState::Pending(_) => formatter.debug_tuple("Thunk").field(&"<pending>").finish(),
            ThunkState::Evaluating => formatter
                .debug_tuple("Thunk")
                .field(&"<evaluating>")
                .finish(),
            ThunkState::Poisoned => formatter.debug_tuple("Thunk").field(&"<poisoned>").finish(),
        }
    }
}

static_assertions::assert_not_impl_any!(Thunk<i32>: Send, Sync);

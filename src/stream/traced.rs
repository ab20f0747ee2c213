//! Traversals with diagnostic tracing applied.

use super::LazyStream;
use crate::control::Deferred;
use crate::trace::TraceConfig;

/// A borrowed stream paired with a [`TraceConfig`].
///
/// Every method mirrors the [`LazyStream`] method of the same name and
/// returns the same value. When the configuration is enabled, each internal
/// step additionally emits a `tracing` event; streams returned by `take`
/// and `take_while` keep tracing as they are consumed.
///
/// # Examples
///
/// ```rust
/// use lazy_stream::stream::LazyStream;
/// use lazy_stream::trace::TraceConfig;
///
/// let stream = LazyStream::of(vec![1, 2, 3]);
/// let traced = stream.traced(&TraceConfig::enabled());
///
/// assert!(traced.exists(|x| *x == 2));
/// assert_eq!(traced.drop(1).to_list_eager(), vec![2, 3]);
/// ```
pub struct Traced<'s, T> {
    stream: &'s LazyStream<T>,
    config: TraceConfig,
}

impl<'s, T> Traced<'s, T> {
    pub(crate) const fn new(stream: &'s LazyStream<T>, config: TraceConfig) -> Self {
        Self { stream, config }
    }

    /// Returns the configuration in effect.
    pub const fn config(&self) -> TraceConfig {
        self.config
    }
}

impl<T: Clone + 'static> Traced<'_, T> {
    /// Traced [`LazyStream::fold_right`].
    pub fn fold_right<'a, B, F>(&self, zero: B, combine: F) -> B
    where
        B: 'a,
        F: Fn(T, Deferred<'a, B>) -> B + 'a,
    {
        self.stream
            .fold_right_with(zero, combine, self.config, "fold_right")
    }

    /// Traced [`LazyStream::exists`].
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.stream.exists_with(predicate, self.config)
    }

    /// Traced [`LazyStream::for_all`].
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.stream.for_all_with(predicate, self.config)
    }

    /// Traced [`LazyStream::head_option`].
    pub fn head_option(&self) -> Option<T> {
        self.stream.head_option_with(self.config)
    }

    /// Traced [`LazyStream::find`].
    pub fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.stream.find_with(predicate, self.config)
    }

    /// Traced [`LazyStream::take`]. Steps are traced as the result is
    /// consumed.
    pub fn take(&self, count: usize) -> LazyStream<T> {
        self.stream.take_with(count, self.config)
    }

    /// Traced [`LazyStream::drop`].
    pub fn drop(&self, count: usize) -> LazyStream<T> {
        self.stream.drop_with(count, self.config)
    }

    /// Traced [`LazyStream::take_while`].
    pub fn take_while<P>(&self, predicate: P) -> LazyStream<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.stream.take_while_with(predicate, self.config)
    }

    /// Traced [`LazyStream::take_while_via_fold_right`].
    pub fn take_while_via_fold_right<P>(&self, predicate: P) -> LazyStream<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.stream
            .take_while_via_fold_right_with(predicate, self.config)
    }

    /// Traced [`LazyStream::starts_with`].
    pub fn starts_with(&self, prefix: &LazyStream<T>) -> bool
    where
        T: PartialEq,
    {
        self.stream.starts_with_with(prefix, self.config)
    }

    /// Traced [`LazyStream::to_list_eager`].
    pub fn to_list_eager(&self) -> Vec<T> {
        self.stream.to_list_eager_with(self.config)
    }

    /// Traced [`LazyStream::to_list_recursive`].
    pub fn to_list_recursive(&self) -> Vec<T> {
        self.stream.to_list_recursive_with(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn stream() -> LazyStream<i32> {
        LazyStream::of(vec![5, 3, 8, 1, 9, 2])
    }

    #[rstest]
    #[case(TraceConfig::enabled())]
    #[case(TraceConfig::disabled())]
    fn test_traced_matches_untraced(stream: LazyStream<i32>, #[case] config: TraceConfig) {
        let traced = stream.traced(&config);

        assert_eq!(
            traced.fold_right(0, |element, rest| element + rest.force()),
            stream.fold_right(0, |element, rest| element + rest.force())
        );
        assert_eq!(traced.exists(|x| *x > 8), stream.exists(|x| *x > 8));
        assert_eq!(traced.for_all(|x| *x > 0), stream.for_all(|x| *x > 0));
        assert_eq!(traced.head_option(), stream.head_option());
        assert_eq!(traced.find(|x| *x < 3), stream.find(|x| *x < 3));
        assert_eq!(
            traced.take(4).to_list_eager(),
            stream.take(4).to_list_eager()
        );
        assert_eq!(
            traced.drop(2).to_list_eager(),
            stream.drop(2).to_list_eager()
        );
        assert_eq!(
            traced.take_while(|x| *x > 2).to_list_eager(),
            stream.take_while(|x| *x > 2).to_list_eager()
        );
        assert_eq!(
            traced.take_while_via_fold_right(|x| *x > 2).to_list_eager(),
            stream.take_while_via_fold_right(|x| *x > 2).to_list_eager()
        );
        assert_eq!(
            traced.starts_with(&LazyStream::of(vec![5, 3])),
            stream.starts_with(&LazyStream::of(vec![5, 3]))
        );
        assert_eq!(traced.to_list_eager(), stream.to_list_eager());
        assert_eq!(traced.to_list_recursive(), stream.to_list_recursive());
    }

    #[rstest]
    fn test_traced_keeps_config(stream: LazyStream<i32>) {
        let config = TraceConfig::enabled();
        assert_eq!(stream.traced(&config).config(), config);
    }
}

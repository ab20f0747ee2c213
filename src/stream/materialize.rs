//! Eager materialization and iteration.

use std::iter::FusedIterator;

use super::LazyStream;
use crate::trace::TraceConfig;

impl<T: Clone + 'static> LazyStream<T> {
    /// Forces the whole stream and collects its elements in order.
    ///
    /// Iterative, so the stack stays flat for any length. Does not
    /// terminate on an infinite stream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let stream: LazyStream<u32> = (0..100_000).collect();
    /// assert_eq!(stream.to_list_eager().len(), 100_000);
    /// ```
    pub fn to_list_eager(&self) -> Vec<T> {
        self.to_list_eager_with(TraceConfig::disabled())
    }

    pub(crate) fn to_list_eager_with(&self, config: TraceConfig) -> Vec<T> {
        let mut elements = Vec::new();
        let mut current = self.clone();
        loop {
            let next = match &current {
                Self::Empty => break,
                Self::Cons(head, tail) => {
                    config.step("to_list_eager", elements.len());
                    elements.push(head.value());
                    Self::forced_tail(tail)
                }
            };
            current = next;
        }
        config.finish("to_list_eager", "end of stream");
        elements
    }

    /// Forces the whole stream by plain recursion.
    ///
    /// Produces the same result as [`to_list_eager`](Self::to_list_eager)
    /// but recurses once per element, so long streams overflow the stack.
    /// Kept as the reference formulation.
    pub fn to_list_recursive(&self) -> Vec<T> {
        self.to_list_recursive_with(TraceConfig::disabled())
    }

    pub(crate) fn to_list_recursive_with(&self, config: TraceConfig) -> Vec<T> {
        let mut elements = Vec::new();
        Self::collect_recursive(self, &mut elements, config);
        config.finish("to_list_recursive", "end of stream");
        elements
    }

    fn collect_recursive(stream: &Self, elements: &mut Vec<T>, config: TraceConfig) {
        if let Self::Cons(head, tail) = stream {
            config.step("to_list_recursive", elements.len());
            elements.push(head.value());
            Self::collect_recursive(&Self::forced_tail(tail), elements, config);
        }
    }

    /// Returns an iterator over clones of the elements.
    ///
    /// Elements are forced one at a time as the iterator advances.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::LazyStream;
    ///
    /// let total: u64 = LazyStream::from(1_u64).iter().take(4).sum();
    /// assert_eq!(total, 10);
    /// ```
    pub fn iter(&self) -> Iter<T> {
        Iter {
            current: self.clone(),
        }
    }
}

/// An iterator over the elements of a [`LazyStream`].
///
/// Created by [`LazyStream::iter`] or `IntoIterator`.
pub struct Iter<T> {
    current: LazyStream<T>,
}

impl<T: Clone + 'static> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let (element, rest) = match &self.current {
            LazyStream::Empty => return None,
            LazyStream::Cons(head, tail) => (head.value(), LazyStream::forced_tail(tail)),
        };
        self.current = rest;
        Some(element)
    }
}

impl<T: Clone + 'static> FusedIterator for Iter<T> {}

impl<T: Clone + 'static> IntoIterator for LazyStream<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter { current: self }
    }
}

impl<T: Clone + 'static> IntoIterator for &LazyStream<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// serde
// =============================================================================

/// Serializes the forced elements as a sequence.
///
/// The whole stream is forced; serializing an infinite stream does not
/// terminate.
#[cfg(feature = "serde")]
impl<T: serde::Serialize + Clone + 'static> serde::Serialize for LazyStream<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(None)?;
        for element in self {
            seq.serialize_element(&element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct LazyStreamVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> LazyStreamVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for LazyStreamVisitor<T>
where
    T: serde::Deserialize<'de> + Clone + 'static,
{
    type Value = LazyStream<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(LazyStream::of(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for LazyStream<T>
where
    T: serde::Deserialize<'de> + Clone + 'static,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(LazyStreamVisitor::new())
    }
}

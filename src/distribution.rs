//! A `Distribution` counts how many times each distinct value occurs in a
//! sequence.  It is built in a single forward pass; each distinct value owns
//! one counter in a hash map, which is incremented in place whenever the value
//! is seen again.
//!
//! The iteration order of a distribution is the hash map's and carries no
//! meaning.  Use `top` or `into_top` to get entries in ranking order.

use std::hash::Hash;

use hashbrown::{Equivalent, HashMap};
use tracing::trace;

use crate::{Frequency, Selector};

/// The number of occurrences of every distinct value of a sequence.
#[derive(Clone, Debug)]
pub struct Distribution<T> {
    // Distinct value => number of occurrences (never 0).
    counts: HashMap<T, usize>,
    // Number of values seen, i.e. the sum of all counts.
    total: usize,
}

impl<T> Default for Distribution<T> {
    fn default() -> Self {
        Self {
            counts: HashMap::default(),
            total: 0,
        }
    }
}

impl<T: Hash + Eq> Distribution<T> {
    /// Returns an empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an empty distribution with room for `distinct` values.
    pub fn with_capacity(distinct: usize) -> Self {
        Self {
            counts: HashMap::with_capacity(distinct),
            total: 0,
        }
    }

    /// Counts one more occurrence of `value` and returns its updated count.
    #[inline]
    pub fn see(&mut self, value: T) -> usize {
        let count = self.counts.entry(value).or_insert(0);
        *count += 1;
        self.total += 1;
        *count
    }

    /// Returns the number of times `value` has been seen, 0 if never.
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Returns the number of distinct values.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no values have been seen.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the number of values seen, counting repeats.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns an iterator over the entries, in no particular order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Frequency<&T>> + '_ {
        self.counts
            .iter()
            .map(|(value, &count)| Frequency::new(value, count))
    }

    /// Consumes the distribution, returning its entries in no particular order.
    pub fn into_entries(self) -> impl ExactSizeIterator<Item = Frequency<T>> {
        self.counts.into_iter().map(Frequency::from)
    }
}

impl<T: Hash + Eq + Ord> Distribution<T> {
    /// Returns the `k` most frequent entries, most frequent first,
    /// leaving the distribution as it is.
    pub fn top(&self, k: usize) -> Vec<Frequency<T>>
    where
        T: Clone,
    {
        Selector::default()
            .select(self.iter(), k)
            .iter()
            .map(|entry| entry.cloned())
            .collect()
    }

    /// Consumes the distribution, returning its `k` most frequent entries,
    /// most frequent first.
    pub fn into_top(self, k: usize) -> Vec<Frequency<T>> {
        Selector::default().select(self.into_entries(), k)
    }
}

impl<T: Hash + Eq> Extend<T> for Distribution<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.see(value);
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for Distribution<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut distribution = Self::new();
        distribution.extend(values);
        trace!(
            distinct = distribution.len(),
            total = distribution.total(),
            "built distribution"
        );
        distribution
    }
}

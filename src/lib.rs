//! Finds the most frequent values in a sequence of values.
//!
//! Given any sequence of values and a list size K, `top_frequent` counts every
//! distinct value in one pass and returns the K values with the highest
//! counts, as `Frequency` entries (value plus count), most frequent first.
//!
//! ```
//! use top_frequent::{Frequency, top_frequent};
//!
//! let words = "the cat saw the dog and the dog saw me".split(' ');
//! let top = top_frequent(words, 3);
//! assert_eq!(top, [
//!     Frequency::new("the", 3),
//!     Frequency::new("dog", 2),
//!     Frequency::new("saw", 2),
//! ]);
//! ```
//!
//! The result is completely determined by the counts: entries are ordered by
//! descending count, and entries with the same count by ascending value.
//! It never depends on the order in which values arrive or on hash map order.
//!
//! Missing values can be counted by using `Option<T>` values.  `None` is
//! counted like any other value, and on a frequency tie it ranks ahead of
//! every present value, because `None < Some(_)`.
//!
//! The work is done in two steps, which can also be used separately:
//! a `Distribution` counts the values, and a `Selector` picks the top entries
//! from it.  The selector either sorts all of the distinct values or keeps a
//! bounded working set of the best K seen so far; see `Strategy`.
//!
//! List sizes are `usize`, so they cannot be negative.  Callers holding a
//! signed size can use `try_top_frequent`, which rejects negative sizes with a
//! `NegativeSize` error instead of treating them as 0.

use std::hash::Hash;

use anyhow::ensure;

mod distribution;
mod frequency;
mod selector;

pub use distribution::Distribution;
pub use frequency::{Frequency, rank};
pub use selector::{DEFAULT_THRESHOLD, Selector, Strategy};

/// Returns the `size` most frequent of `values`, most frequent first.
/// Values with equal counts are ordered by ascending value.
/// The result has `size` entries, or fewer if there are fewer distinct values.
pub fn top_frequent<T, I>(values: I, size: usize) -> Vec<Frequency<T>>
where
    T: Hash + Eq + Ord,
    I: IntoIterator<Item = T>,
{
    Selector::default().top_frequent(values, size)
}

/// Like `top_frequent`, but for a signed `size`.
/// A negative size is an error, reported before any value is consumed.
pub fn try_top_frequent<T, I>(values: I, size: i64) -> anyhow::Result<Vec<Frequency<T>>>
where
    T: Hash + Eq + Ord,
    I: IntoIterator<Item = T>,
{
    ensure!(size >= 0, NegativeSize(size));
    // A size too large for usize covers every distinct value anyway.
    let size = usize::try_from(size).unwrap_or(usize::MAX);
    Ok(top_frequent(values, size))
}

/// The error for a negative list size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("size of the list must be >= 0, got {0}")]
pub struct NegativeSize(pub i64);

/// Adds `top_frequent` to every iterator, e.g. `words.top_frequent(10)`.
pub trait TopFrequentExt: Iterator + Sized {
    /// Returns the `size` most frequent items of this iterator, most frequent first.
    fn top_frequent(self, size: usize) -> Vec<Frequency<Self::Item>>
    where
        Self::Item: Hash + Eq + Ord,
    {
        crate::top_frequent(self, size)
    }
}

impl<I: Iterator> TopFrequentExt for I {}

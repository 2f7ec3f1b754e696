//! A `Frequency` is one entry of a distribution: a value and the number
//! of times it was seen.
//!
//! Entries are ranked by descending count, and entries with equal counts
//! are ranked by ascending value.  Since every value appears in at most one
//! entry of a distribution, this is a total order over the entries, so a
//! full sort and any bounded selection agree on which entries are the top K
//! and in what order.
//!
//! "Smaller ranks higher": the entry that `Ord` considers the minimum is
//! the most frequent one, so sorting a `Vec<Frequency<T>>` in ascending
//! order puts the most frequent value first.
//!
//! Missing values are modelled as `Option<T>`.  `None` sorts before every
//! `Some`, so on a frequency tie the missing value ranks ahead of any
//! present value.

use std::cmp::Ordering;
use std::fmt::Debug;

/// A value together with the number of times it occurred.  The count of an
/// entry produced by a `Distribution` is always at least 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frequency<T> {
    value: T,
    count: usize,
}

impl<T> Frequency<T> {
    /// Returns a new entry for `value` seen `count` times.
    #[inline]
    pub fn new(value: T, count: usize) -> Self {
        Self { value, count }
    }

    /// Returns the value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the number of times the value occurred.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Splits the entry into its value and count.
    #[inline]
    pub fn into_parts(self) -> (T, usize) {
        (self.value, self.count)
    }

    /// Returns an entry that borrows this one's value.
    #[inline]
    pub fn by_ref(&self) -> Frequency<&T> {
        Frequency::new(&self.value, self.count)
    }
}

impl<T: Clone> Frequency<&T> {
    /// Returns an entry that owns a clone of the borrowed value.
    #[inline]
    pub fn cloned(&self) -> Frequency<T> {
        Frequency::new(self.value.clone(), self.count)
    }
}

impl<T> Frequency<Option<T>> {
    /// Returns true if this entry counts the missing value.
    #[inline]
    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}

impl<T> From<(T, usize)> for Frequency<T> {
    fn from((value, count): (T, usize)) -> Self {
        Self::new(value, count)
    }
}

/// The ranking order of entries: higher counts first, then ascending values.
/// Returns `Less` if `a` ranks ahead of `b`.
#[inline]
pub fn rank<T: Ord>(a: &Frequency<T>, b: &Frequency<T>) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value))
}

impl<T: Ord> Ord for Frequency<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        rank(self, other)
    }
}

impl<T: Ord> PartialOrd for Frequency<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Shows entries as `value×count`, which keeps long result lists readable.
impl<T: Debug> Debug for Frequency<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}×{}", self.value, self.count)
    }
}

//! Selects the top K entries of a collection, in ranking order.
//!
//! Entries may be anything `Ord`; the smallest entry ranks highest, which is
//! how `Frequency` orders itself (highest count first).  The result is the K
//! smallest entries in ascending order, or all of them if there are fewer
//! than K.
//!
//! There are two ways to do the work:
//!
//! * `FullSort` collects every entry, sorts them, and truncates to K.
//!   O(d log d) for d entries, but with a small constant and no bookkeeping.
//! * `WorkingSet` keeps a heap of the best K entries seen so far, with the
//!   worst of them on top.  The first K entries seed the heap; after that each
//!   entry is compared against the worst member and replaces it if it ranks
//!   higher.  O(d log K), which pays off when d is much larger than K.
//!
//! `Adaptive` (the default) picks between them, and also short-circuits the
//! trivial sizes: K = 0 returns nothing and K = 1 is a single minimum scan.
//!
//! For a total order in which equal entries are indistinguishable (which is
//! the case for the entries of a distribution, since every value appears once)
//! all strategies return exactly the same list.

use std::collections::BinaryHeap;
use std::hash::Hash;

use tracing::debug;

use crate::{Distribution, Frequency};

/// Number of entries up to which `Adaptive` just sorts everything.
pub const DEFAULT_THRESHOLD: usize = 1024;

/// How the selector finds the top K entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Sort all entries, then truncate.
    FullSort,
    /// Keep a bounded heap of the best K entries seen so far.
    WorkingSet,
    /// Sort when there are at most `threshold` entries (or K covers them all),
    /// otherwise use the working set.
    Adaptive { threshold: usize },
}

impl Strategy {
    /// Returns an adaptive strategy with the given cutover.
    pub const fn adaptive(threshold: usize) -> Self {
        Self::Adaptive { threshold }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::adaptive(DEFAULT_THRESHOLD)
    }
}

// What a selection actually does once the sizes are known.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Plan {
    Nothing,
    Best,
    FullSort,
    WorkingSet,
}

/// Selects the top entries of a collection using a configured `Strategy`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    strategy: Strategy,
}

impl Selector {
    /// Returns a selector that uses the given strategy.
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Returns the configured strategy.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the `k` highest-ranked entries (the smallest under `Ord`),
    /// best first.  Returns fewer than `k` entries only if there are fewer
    /// than `k` entries in all.
    pub fn select<E, I>(&self, entries: I, k: usize) -> Vec<E>
    where
        E: Ord,
        I: IntoIterator<Item = E>,
        I::IntoIter: ExactSizeIterator,
    {
        let entries = entries.into_iter();
        let distinct = entries.len();
        let plan = self.plan(distinct, k);
        debug!(strategy = ?self.strategy, ?plan, distinct, k, "selecting top entries");
        match plan {
            Plan::Nothing => Vec::new(),
            Plan::Best => entries.min().into_iter().collect(),
            Plan::FullSort => full_sort(entries, k),
            Plan::WorkingSet => working_set(entries, distinct, k),
        }
    }

    /// Counts `values` and returns the `size` most frequent of them, most
    /// frequent first.  Values with equal counts are ordered by ascending value.
    pub fn top_frequent<T, I>(&self, values: I, size: usize) -> Vec<Frequency<T>>
    where
        T: Hash + Eq + Ord,
        I: IntoIterator<Item = T>,
    {
        let distribution: Distribution<T> = values.into_iter().collect();
        self.select(distribution.into_entries(), size)
    }

    fn plan(&self, distinct: usize, k: usize) -> Plan {
        if k == 0 {
            return Plan::Nothing;
        }
        match self.strategy {
            Strategy::FullSort => Plan::FullSort,
            Strategy::WorkingSet => Plan::WorkingSet,
            Strategy::Adaptive { .. } if k == 1 => Plan::Best,
            Strategy::Adaptive { threshold } if k >= distinct || distinct <= threshold => {
                Plan::FullSort
            }
            Strategy::Adaptive { .. } => Plan::WorkingSet,
        }
    }
}

fn full_sort<E: Ord>(entries: impl Iterator<Item = E>, k: usize) -> Vec<E> {
    let mut all: Vec<E> = entries.collect();
    all.sort_unstable();
    all.truncate(k);
    all
}

fn working_set<E: Ord>(mut entries: impl Iterator<Item = E>, distinct: usize, k: usize) -> Vec<E> {
    // Max-heap, so the worst of the retained entries is on top.
    let mut heap = BinaryHeap::with_capacity(k.min(distinct));
    heap.extend(entries.by_ref().take(k));
    for entry in entries {
        // The heap is full here, since there were more than k entries.
        if let Some(mut worst) = heap.peek_mut()
            && entry < *worst
        {
            *worst = entry; // sifts down when `worst` is dropped
        }
    }
    heap.into_sorted_vec()
}

#[cfg(test)]
mod tests {

    use super::*;
    use proptest::prelude::{any, prop, prop_assert_eq, proptest};

    const STRATEGIES: [Strategy; 4] = [
        Strategy::FullSort,
        Strategy::WorkingSet,
        Strategy::adaptive(0),
        Strategy::adaptive(DEFAULT_THRESHOLD),
    ];

    #[test]
    fn plans() {
        let adaptive = Selector::new(Strategy::adaptive(100));
        assert_eq!(adaptive.plan(1000, 0), Plan::Nothing);
        assert_eq!(adaptive.plan(1000, 1), Plan::Best);
        assert_eq!(adaptive.plan(1000, 10), Plan::WorkingSet);
        assert_eq!(adaptive.plan(1000, 1000), Plan::FullSort);
        assert_eq!(adaptive.plan(1000, 5000), Plan::FullSort);
        assert_eq!(adaptive.plan(100, 10), Plan::FullSort);
        assert_eq!(adaptive.plan(101, 10), Plan::WorkingSet);

        let sort = Selector::new(Strategy::FullSort);
        assert_eq!(sort.plan(1000, 0), Plan::Nothing);
        assert_eq!(sort.plan(1000, 1), Plan::FullSort);

        let heap = Selector::new(Strategy::WorkingSet);
        assert_eq!(heap.plan(0, 0), Plan::Nothing);
        assert_eq!(heap.plan(1000, 1), Plan::WorkingSet);
        assert_eq!(heap.plan(3, 10), Plan::WorkingSet);
    }

    #[test]
    fn default_is_adaptive() {
        assert_eq!(
            Selector::default().strategy(),
            Strategy::Adaptive { threshold: DEFAULT_THRESHOLD }
        );
    }

    #[test]
    fn smallest_first() {
        let data = vec![5u32, 3, 9, 1, 7, 3];
        for strategy in STRATEGIES {
            let selector = Selector::new(strategy);
            assert_eq!(selector.select(data.clone(), 0), [0u32; 0]);
            assert_eq!(selector.select(data.clone(), 1), [1]);
            assert_eq!(selector.select(data.clone(), 3), [1, 3, 3]);
            assert_eq!(selector.select(data.clone(), 6), [1, 3, 3, 5, 7, 9]);
            assert_eq!(selector.select(data.clone(), 100), [1, 3, 3, 5, 7, 9]);
        }
    }

    #[test]
    fn empty_input() {
        for strategy in STRATEGIES {
            let selected = Selector::new(strategy).select(Vec::<u32>::new(), 3);
            assert!(selected.is_empty());
        }
    }

    #[test]
    fn huge_k_does_not_allocate_k() {
        let selected = Selector::new(Strategy::WorkingSet).select(vec![2u32, 1], usize::MAX);
        assert_eq!(selected, [1, 2]);
    }

    #[test]
    fn leaves_borrowed_entries_alone() {
        let data = vec![4u32, 2, 8, 6];
        let selected = Selector::new(Strategy::WorkingSet).select(data.iter(), 2);
        assert_eq!(selected, [&2u32, &4]);
        assert_eq!(data, [4, 2, 8, 6]);
    }

    fn via_sort(mut data: Vec<u32>, k: usize) -> Vec<u32> {
        data.sort();
        data.truncate(k);
        data
    }

    proptest! {
        #[test]
        fn proptest_strategies_match_sort(
            data in prop::collection::vec(any::<u32>(), 0..500),
            k in 0usize..40,
        ) {
            let expected = via_sort(data.clone(), k);
            for strategy in STRATEGIES {
                let selected = Selector::new(strategy).select(data.clone(), k);
                prop_assert_eq!(&selected, &expected);
            }
        }
    }
}

//! Common prefix skipping quicksort.
//!
//! Each range is handled in three steps:
//! 1. **Scan**: measure how many more leading symbols all keys in the range
//!    share beyond the depth already known, and advance the depth past them.
//! 2. **Partition**: split the range around a random pivot, comparing only
//!    from the new depth.
//! 3. **Descend**: both sides inherit the new depth, since every key in them
//!    still carries the shared prefix.
//!
//! The descent keeps an explicit work-list instead of recursing. The larger
//! side of each split is deferred and the loop carries on with the smaller
//! one, so at most `log2(n)` ranges are ever waiting.
//!
//! The main entry points are [`prefixsort`] and [`prefixsort_mut`].

use crate::compare::compare_from;
use crate::config::{PartitionScheme, SortOptions};
use crate::core::{IndexedKey, KeyAccessor, SortEntry, indexed_keys};
use crate::error::SortError;
use crate::partition::{three_way_counted, two_way_counted};
use crate::scan::scan_counted;
use crate::stats::SortStats;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::ops::Range;

/// Performs an index-based sort on the provided collection.
///
/// The collection is not modified. The returned vector holds the indices that
/// put it in ascending order.
///
/// # Examples
///
/// ```
/// use prefixsort::prefixsort;
///
/// let data = vec!["banana", "apple", "cherry"];
/// let indices = prefixsort(&data);
///
/// assert_eq!(indices, vec![1, 0, 2]); // apple, banana, cherry
/// ```
pub fn prefixsort<T: KeyAccessor + ?Sized>(provider: &T) -> Vec<usize> {
    Sorter::default().sort_indices(provider).0
}

/// Sorts a mutable slice in place.
///
/// Equal keys may be reordered relative to each other.
///
/// # Examples
///
/// ```
/// use prefixsort::prefixsort_mut;
///
/// let mut data = vec!["banana", "band", "bee", "absolute", "abstract", "apple"];
/// prefixsort_mut(&mut data);
///
/// assert_eq!(data, vec!["absolute", "abstract", "apple", "banana", "band", "bee"]);
/// ```
pub fn prefixsort_mut<T: AsRef<[u8]>>(data: &mut [T]) {
    Sorter::default().sort(data);
}

/// Sorts an owned vector and hands it back.
pub fn sorted<T: AsRef<[u8]>>(mut data: Vec<T>) -> Vec<T> {
    prefixsort_mut(&mut data);
    data
}

/// Sorts a slice whose slots may be empty, refusing to start if any is.
///
/// On error the slice is untouched.
///
/// # Examples
///
/// ```
/// use prefixsort::{SortError, try_prefixsort_mut};
///
/// let mut data = vec![Some("b"), None, Some("a")];
/// assert_eq!(
///     try_prefixsort_mut(&mut data),
///     Err(SortError::MissingKey { index: 1 })
/// );
/// assert_eq!(data, vec![Some("b"), None, Some("a")]);
/// ```
pub fn try_prefixsort_mut<T: AsRef<[u8]>>(data: &mut [Option<T>]) -> Result<(), SortError> {
    Sorter::default().try_sort(data).map(|_| ())
}

/// Rearranges `data` so that position `i` receives the element previously at
/// `indices[i]`.
///
/// `indices` must be a permutation of `0..data.len()`; anything else is
/// rejected before `data` is touched.
pub fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) -> Result<(), SortError> {
    if indices.len() != data.len() {
        return Err(SortError::LengthMismatch {
            data: data.len(),
            indices: indices.len(),
        });
    }

    let mut seen = vec![false; indices.len()];
    for &index in &indices {
        match seen.get_mut(index) {
            Some(slot) if !*slot => *slot = true,
            _ => return Err(SortError::InvalidPermutation { index }),
        }
    }

    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current; // Mark as placed
            current = next;
        }
        indices[current] = current;
    }

    Ok(())
}

/// A reusable sorter that owns its pivot generator.
///
/// Use [`Sorter::new`] with a seeded [`SortOptions`] for repeatable runs, or
/// [`Sorter::with_rng`] to supply any generator.
///
/// # Examples
///
/// ```
/// use prefixsort::{SortOptions, Sorter};
///
/// let mut sorter = Sorter::new(SortOptions::new().seed(1));
/// let mut urls = vec![
///     "https://example.com/b",
///     "https://example.com/a",
///     "https://example.com/c",
/// ];
/// let stats = sorter.sort(&mut urls);
///
/// assert_eq!(urls[0], "https://example.com/a");
/// assert_eq!(stats.skipped_prefix, 20);
/// ```
#[derive(Clone, Debug)]
pub struct Sorter<R = StdRng> {
    rng: R,
    scheme: PartitionScheme,
}

impl Sorter<StdRng> {
    /// Creates a sorter from options, seeding from the OS unless a seed is set.
    pub fn new(options: SortOptions) -> Self {
        let rng = match options.pivot_seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            scheme: options.partition_scheme(),
        }
    }
}

impl Default for Sorter<StdRng> {
    fn default() -> Self {
        Self::new(SortOptions::default())
    }
}

impl<R: Rng> Sorter<R> {
    /// Creates a sorter drawing pivots from `rng`. Any seed in `options` is ignored.
    pub fn with_rng(rng: R, options: SortOptions) -> Self {
        Self {
            rng,
            scheme: options.partition_scheme(),
        }
    }

    /// Sorts `keys` in place and reports the work done.
    pub fn sort<T: AsRef<[u8]>>(&mut self, keys: &mut [T]) -> SortStats {
        self.sort_entries(keys)
    }

    fn sort_entries<E: SortEntry>(&mut self, entries: &mut [E]) -> SortStats {
        let mut stats = SortStats::default();
        cps_quicksort(entries, self.scheme, &mut self.rng, &mut stats);
        stats
    }

    /// Computes the ordering permutation of `provider` without modifying it.
    ///
    /// Each key travels with a cached copy of its next
    /// [`PREFIX_CACHE_SIZE`](crate::core::PREFIX_CACHE_SIZE) bytes, so most
    /// comparisons never touch the key data.
    pub fn sort_indices<T: KeyAccessor + ?Sized>(
        &mut self,
        provider: &T,
    ) -> (Vec<usize>, SortStats) {
        let mut entries = indexed_keys(provider);
        let stats = self.sort_entries(&mut entries);
        (entries.into_iter().map(|e| e.index).collect(), stats)
    }

    /// Sorts `keys` in place, failing with [`SortError::MissingKey`] before
    /// moving anything if a slot is empty.
    pub fn try_sort<T: AsRef<[u8]>>(
        &mut self,
        keys: &mut [Option<T>],
    ) -> Result<SortStats, SortError> {
        if let Some(index) = keys.iter().position(Option::is_none) {
            return Err(SortError::MissingKey { index });
        }

        let mut entries: Vec<IndexedKey<'_>> = keys
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.as_ref()
                    .map(|key| IndexedKey::new(index, AsRef::<[u8]>::as_ref(key)))
            })
            .collect();
        let stats = self.sort_entries(&mut entries);
        let order: Vec<usize> = entries.into_iter().map(|e| e.index).collect();

        apply_permutation(keys, order)?;
        Ok(stats)
    }
}

/// A range still to be sorted, with the depth its keys are known to share.
#[derive(Clone, Debug)]
struct Pending {
    range: Range<usize>,
    depth: usize,
}

/// Common Prefix Skipping Quicksort driver.
fn cps_quicksort<E: SortEntry, R: Rng>(
    keys: &mut [E],
    scheme: PartitionScheme,
    rng: &mut R,
    stats: &mut SortStats,
) {
    let mut work: Vec<Pending> = Vec::new();
    let mut current = Pending {
        range: 0..keys.len(),
        depth: 0,
    };

    loop {
        if current.range.len() < 2 {
            match work.pop() {
                Some(next) => {
                    current = next;
                    continue;
                }
                None => break,
            }
        }

        let start = current.range.start;
        let slice = &mut keys[current.range.clone()];

        let common = scan_counted(slice, current.depth, stats);
        stats.skipped_prefix += common as u64;
        let depth = current.depth + common;
        if common > 0 {
            slice.iter_mut().for_each(|entry| entry.refresh(depth));
        }

        let (left, right) = match scheme {
            PartitionScheme::TwoWay => {
                let pivot = start + two_way_counted(slice, depth, rng, stats);
                (start..pivot, pivot + 1..current.range.end)
            }
            PartitionScheme::ThreeWay => {
                let band = three_way_counted(slice, depth, rng, stats);
                (start..start + band.start, start + band.end..current.range.end)
            }
        };

        let (smaller, larger) = if left.len() <= right.len() {
            (left, right)
        } else {
            (right, left)
        };

        if larger.len() > 1 {
            work.push(Pending {
                range: larger,
                depth,
            });
            stats.observe_pending(work.len());
        }
        current = Pending {
            range: smaller,
            depth,
        };
    }
}

/// Returns `true` if `keys` is in ascending order.
pub fn is_sorted<T: AsRef<[u8]>>(keys: &[T]) -> bool {
    keys.windows(2)
        .all(|pair| compare_from(pair[0].as_ref(), pair[1].as_ref(), 0) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(scheme: PartitionScheme, seed: u64) -> Sorter {
        Sorter::new(SortOptions::new().scheme(scheme).seed(seed))
    }

    #[test]
    fn sorts_scenario() {
        for scheme in [PartitionScheme::TwoWay, PartitionScheme::ThreeWay] {
            for seed in 0..16 {
                let mut data = vec!["banana", "band", "bee", "absolute", "abstract", "apple"];
                seeded(scheme, seed).sort(&mut data);
                assert_eq!(
                    data,
                    vec!["absolute", "abstract", "apple", "banana", "band", "bee"]
                );
            }
        }
    }

    #[test]
    fn empty_and_singleton() {
        let mut empty: Vec<String> = vec![];
        let stats = Sorter::default().sort(&mut empty);
        assert!(empty.is_empty());
        assert_eq!(stats, SortStats::default());

        let mut one = vec!["x"];
        Sorter::default().sort(&mut one);
        assert_eq!(one, vec!["x"]);
    }

    #[test]
    fn same_seed_same_work() {
        let input: Vec<String> = (0..200).map(|i| format!("key/{}", (i * 37) % 101)).collect();

        let mut a = input.clone();
        let mut b = input;
        let stats_a = seeded(PartitionScheme::TwoWay, 9).sort(&mut a);
        let stats_b = seeded(PartitionScheme::TwoWay, 9).sort(&mut b);

        assert_eq!(a, b);
        assert_eq!(stats_a, stats_b);
    }

    #[test]
    fn work_list_stays_logarithmic() {
        let input: Vec<String> = (0..4096).map(|i| format!("{:05}", (i * 7919) % 4096)).collect();
        for scheme in [PartitionScheme::TwoWay, PartitionScheme::ThreeWay] {
            let mut data = input.clone();
            let stats = seeded(scheme, 3).sort(&mut data);
            assert!(is_sorted(&data));
            assert!(stats.max_pending <= 4096usize.ilog2() as usize);
        }
    }

    #[test]
    fn three_way_settles_duplicates_in_one_step() {
        let mut data = vec!["dup"; 100];
        let stats = seeded(PartitionScheme::ThreeWay, 0).sort(&mut data);
        assert_eq!(stats.partitions, 1);
        assert_eq!(stats.scans, 1);
    }

    #[test]
    fn index_sort_resolves_most_comparisons_from_cache() {
        let words: Vec<String> = (0..2_000)
            .map(|i| format!("https://example.org/{:08}/{}", (i * 7919) % 2_000, i % 3))
            .collect();
        let (indices, stats) = seeded(PartitionScheme::TwoWay, 5).sort_indices(&words);

        let ordered: Vec<&String> = indices.iter().map(|&i| &words[i]).collect();
        assert!(is_sorted(&ordered));
        assert!(stats.cache_resolved * 2 > stats.comparisons);
    }

    #[test]
    fn caches_follow_the_depth() {
        // Every key opens with more zero bytes than a cache holds, so only
        // caches reloaded at the shared depth can tell the keys apart.
        let mut keys: Vec<Vec<u8>> = (0..64u8)
            .map(|i| {
                let mut key = vec![0u8; 20];
                key.extend_from_slice(&[63 - i, 0]);
                key
            })
            .collect();
        keys.push(vec![0; 20]);
        let (indices, stats) = seeded(PartitionScheme::ThreeWay, 8).sort_indices(&keys);

        let mut expected = keys.clone();
        expected.sort();
        let actual: Vec<Vec<u8>> = indices.iter().map(|&i| keys[i].clone()).collect();
        assert_eq!(actual, expected);
        assert!(stats.skipped_prefix >= 20);
        assert!(stats.cache_resolved > 0);
    }

    #[test]
    fn permutation_is_validated_first() {
        let mut data = vec!['a', 'b', 'c'];
        assert_eq!(
            apply_permutation(&mut data, vec![0, 1]),
            Err(SortError::LengthMismatch {
                data: 3,
                indices: 2
            })
        );
        assert_eq!(
            apply_permutation(&mut data, vec![0, 0, 2]),
            Err(SortError::InvalidPermutation { index: 0 })
        );
        assert_eq!(
            apply_permutation(&mut data, vec![0, 3, 1]),
            Err(SortError::InvalidPermutation { index: 3 })
        );
        assert_eq!(data, vec!['a', 'b', 'c']);

        apply_permutation(&mut data, vec![1, 2, 0]).unwrap();
        assert_eq!(data, vec!['b', 'c', 'a']);
    }
}

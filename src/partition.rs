//! Randomized in-place partitioning, compared from a fixed depth.
//!
//! [`partition_two_way`] is the scheme the driver uses by default. Keys equal to
//! the pivot may end up on either side of it. [`partition_three_way`] gathers
//! them into a band of their own instead, which pays off on heavily duplicated
//! input.

use crate::compare::compare_entries;
use crate::core::SortEntry;
use crate::stats::SortStats;
use rand::Rng;
use std::cmp::Ordering;
use std::ops::Range;

/// Partitions `keys` around a pivot chosen uniformly at random and returns the
/// pivot's final position.
///
/// All keys must share their first `depth` symbols; only what follows is
/// compared. Afterwards every key left of the returned position compares less
/// than or equal to the pivot, and every key right of it greater than or equal.
///
/// Ranges of fewer than two keys are left alone and yield 0.
///
/// # Examples
///
/// ```
/// use prefixsort::partition_two_way;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut keys = vec!["pd", "pa", "pc", "pb"];
/// let mut rng = StdRng::seed_from_u64(7);
/// let p = partition_two_way(&mut keys, 1, &mut rng);
///
/// assert!(keys[..p].iter().all(|k| *k <= keys[p]));
/// assert!(keys[p + 1..].iter().all(|k| *k >= keys[p]));
/// ```
pub fn partition_two_way<T: AsRef<[u8]>, R: Rng>(
    keys: &mut [T],
    depth: usize,
    rng: &mut R,
) -> usize {
    two_way_counted(keys, depth, rng, &mut SortStats::default())
}

/// Partitions `keys` into less-than, equal-to and greater-than bands around a
/// random pivot, and returns the range of the equal band.
///
/// Equality is judged from `depth` onward, so under the shared-prefix
/// precondition every key in the band is identical to the pivot and needs no
/// further sorting.
///
/// An empty range yields `0..0`.
pub fn partition_three_way<T: AsRef<[u8]>, R: Rng>(
    keys: &mut [T],
    depth: usize,
    rng: &mut R,
) -> Range<usize> {
    three_way_counted(keys, depth, rng, &mut SortStats::default())
}

/// Moves a randomly chosen key to the front, where it serves as the pivot.
#[inline]
fn place_pivot<T, R: Rng>(keys: &mut [T], rng: &mut R) {
    let chosen = rng.random_range(0..keys.len());
    keys.swap(0, chosen);
}

pub(crate) fn two_way_counted<E: SortEntry, R: Rng>(
    keys: &mut [E],
    depth: usize,
    rng: &mut R,
    stats: &mut SortStats,
) -> usize {
    let len = keys.len();
    if len < 2 {
        return 0;
    }
    stats.partitions += 1;

    place_pivot(keys, rng);

    // i > 0 at all times, so j >= i - 1 never underflows.
    let mut i = 1;
    let mut j = len - 1;
    loop {
        while i <= j && compare_entries(&keys[i], &keys[0], depth, stats) == Ordering::Less {
            i += 1;
        }
        while i <= j && compare_entries(&keys[j], &keys[0], depth, stats) == Ordering::Greater {
            j -= 1;
        }

        if i > j {
            break;
        }
        keys.swap(i, j);
        i += 1;
        j -= 1;
    }

    keys.swap(0, j);
    j
}

pub(crate) fn three_way_counted<E: SortEntry, R: Rng>(
    keys: &mut [E],
    depth: usize,
    rng: &mut R,
    stats: &mut SortStats,
) -> Range<usize> {
    let len = keys.len();
    if len == 0 {
        return 0..0;
    }
    stats.partitions += 1;

    place_pivot(keys, rng);

    // keys[..lt] < pivot, keys[lt..i] == pivot, keys[gt..] > pivot.
    // keys[lt] always holds a key equal to the pivot.
    let mut lt = 0;
    let mut i = 1;
    let mut gt = len;
    while i < gt {
        match compare_entries(&keys[i], &keys[lt], depth, stats) {
            Ordering::Less => {
                keys.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                keys.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }

    lt..gt
}

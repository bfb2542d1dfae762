//! Common prefix scanning.
//!
//! Before a range is partitioned, the scanner measures how many more symbols,
//! beyond the current depth, every key in the range has in common. The driver
//! adds that to the depth so that no comparison inside the range ever looks at
//! those symbols again.

use crate::compare::suffix;
use crate::core::SortEntry;
use crate::stats::SortStats;

/// Computes the length of the prefix shared by all `keys` beyond `depth`.
///
/// The first key is the reference. Each other key is matched against it
/// starting at `depth`, and the match is never run further than the shortest
/// match seen so far. Once that bound reaches zero the scan stops early.
///
/// An empty range yields 0. A single key yields its whole remaining length,
/// `len - depth` (0 if the key is shorter than `depth`).
///
/// # Examples
///
/// ```
/// use prefixsort::common_prefix_len;
///
/// assert_eq!(common_prefix_len(&["band", "banana", "bandana"], 0), 3);
/// assert_eq!(common_prefix_len(&["band", "banana", "bandana"], 1), 2);
/// assert_eq!(common_prefix_len(&["bandana"], 3), 4);
/// ```
pub fn common_prefix_len<T: AsRef<[u8]>>(keys: &[T], depth: usize) -> usize {
    scan_counted(keys, depth, &mut SortStats::default())
}

pub(crate) fn scan_counted<E: SortEntry>(
    keys: &[E],
    depth: usize,
    stats: &mut SortStats,
) -> usize {
    stats.scans += 1;

    let (reference, rest) = match keys.split_first() {
        Some((first, rest)) => (suffix(first.key(), depth), rest),
        None => return 0,
    };

    let mut bound = reference.len();
    for key in rest {
        let current = suffix(key.key(), depth);
        let limit = bound.min(current.len());

        let mut run = 0;
        while run < limit {
            stats.symbol_compares += 1;
            if reference[run] != current[run] {
                break;
            }
            run += 1;
        }

        bound = run;
        if bound == 0 {
            return 0;
        }
    }

    bound
}

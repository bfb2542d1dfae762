//! Depth-offset comparison.

use crate::core::{PREFIX_CACHE_SIZE, SortEntry};
use crate::stats::SortStats;
use std::cmp::Ordering;

/// Returns the part of `key` from `depth` onward, or the empty slice when the
/// key is shorter than `depth`.
#[inline(always)]
pub(crate) fn suffix(key: &[u8], depth: usize) -> &[u8] {
    key.get(depth..).unwrap_or(&[])
}

/// Compares two keys while treating their first `depth` symbols as equal.
///
/// Only the suffixes starting at `depth` are inspected. A suffix that is a
/// strict prefix of the other orders first, and a key shorter than `depth`
/// contributes an empty suffix.
///
/// # Examples
///
/// ```
/// use prefixsort::compare_from;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_from(b"ab", b"abc", 2), Ordering::Less);
/// assert_eq!(compare_from(b"ab", b"ab", 2), Ordering::Equal);
/// // The leading symbols are never looked at.
/// assert_eq!(compare_from(b"zb", b"aa", 1), Ordering::Greater);
/// ```
pub fn compare_from(a: &[u8], b: &[u8], depth: usize) -> Ordering {
    compare_counted(a, b, depth, &mut SortStats::default())
}

#[inline(always)]
pub(crate) fn compare_counted(
    a: &[u8],
    b: &[u8],
    depth: usize,
    stats: &mut SortStats,
) -> Ordering {
    stats.comparisons += 1;
    walk(suffix(a, depth), suffix(b, depth), stats)
}

/// Compares two sort entries from `depth`, using their prefix caches first.
///
/// Caches hold the next `PREFIX_CACHE_SIZE` bytes zero-padded, so differing
/// caches already decide the order. Equal caches are ambiguous when either
/// key ends inside the cached window (`"ab"` and `"ab\0"` look alike), and
/// then the whole suffix is walked; otherwise the walk starts past the window.
#[inline(always)]
pub(crate) fn compare_entries<E: SortEntry>(
    a: &E,
    b: &E,
    depth: usize,
    stats: &mut SortStats,
) -> Ordering {
    let (cache_a, cache_b) = match (a.cached(), b.cached()) {
        (Some(cache_a), Some(cache_b)) => (cache_a, cache_b),
        _ => return compare_counted(a.key(), b.key(), depth, stats),
    };

    stats.comparisons += 1;
    if cache_a != cache_b {
        stats.cache_resolved += 1;
        return cache_a.cmp(&cache_b);
    }

    let (key_a, key_b) = (a.key(), b.key());
    let window_end = depth + PREFIX_CACHE_SIZE;
    if key_a.len() < window_end || key_b.len() < window_end {
        return walk(suffix(key_a, depth), suffix(key_b, depth), stats);
    }

    walk(&key_a[window_end..], &key_b[window_end..], stats)
}

/// Lexicographic order of two byte runs, shorter run first on a tie.
#[inline(always)]
fn walk(a: &[u8], b: &[u8], stats: &mut SortStats) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        stats.symbol_compares += 1;
        if x != y {
            return x.cmp(y);
        }
    }

    a.len().cmp(&b.len())
}

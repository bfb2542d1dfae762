//! Work counters collected while sorting.

use cuneiform::cuneiform;

/// Counters describing how much work a sort did.
///
/// Every comparator call, scanner pass and partition step bumps one of these,
/// so the block sits on its own cache line.
#[cuneiform]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Number of depth-offset comparisons performed by the partitioner.
    pub comparisons: u64,
    /// Number of symbol pairs inspected, by both comparator and scanner.
    pub symbol_compares: u64,
    /// Comparisons decided by prefix caches alone, without reading the keys.
    pub cache_resolved: u64,
    /// Number of common-prefix scans.
    pub scans: u64,
    /// Number of partition steps.
    pub partitions: u64,
    /// Sum of all depth increments found by the scanner.
    pub skipped_prefix: u64,
    /// Peak number of ranges waiting on the driver's work-list.
    pub max_pending: usize,
}

impl SortStats {
    pub(crate) fn observe_pending(&mut self, pending: usize) {
        if pending > self.max_pending {
            self.max_pending = pending;
        }
    }
}

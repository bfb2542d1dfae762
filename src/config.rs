//! Sort options.

/// How each range is split around its pivot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PartitionScheme {
    /// Two output regions. Keys equal to the pivot may land on either side.
    #[default]
    TwoWay,
    /// Three output regions. Keys equal to the pivot are settled in one step.
    ThreeWay,
}

/// Options for a [`Sorter`](crate::Sorter).
///
/// # Examples
///
/// ```
/// use prefixsort::{PartitionScheme, SortOptions};
///
/// let options = SortOptions::new()
///     .scheme(PartitionScheme::ThreeWay)
///     .seed(42);
///
/// assert_eq!(options.pivot_seed(), Some(42));
/// assert_eq!(options.partition_scheme(), PartitionScheme::ThreeWay);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortOptions {
    scheme: PartitionScheme,
    seed: Option<u64>,
}

impl SortOptions {
    /// Returns the default options: two-way partitioning, OS-seeded pivots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the partition scheme.
    pub fn scheme(mut self, scheme: PartitionScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Fixes the pivot sequence, making every sort with these options repeatable.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the partition scheme these options select.
    pub fn partition_scheme(&self) -> PartitionScheme {
        self.scheme
    }

    /// Returns the fixed pivot seed, or `None` when pivots are seeded from the OS.
    pub fn pivot_seed(&self) -> Option<u64> {
        self.seed
    }
}

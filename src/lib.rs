//! # prefixsort
//!
//! `prefixsort` sorts strings, byte arrays, and anything else that exposes its
//! key as bytes, using a randomized quicksort that skips prefixes the keys
//! are already known to share.
//!
//! Keys such as URLs, file paths or dictionary words often agree on long
//! leading runs. Before partitioning a range, the sorter measures how far all
//! of its keys agree and from then on compares only what follows. Both halves
//! of the split inherit that depth, so a shared prefix is read once per range
//! rather than once per comparison.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! For standard collections like `Vec<String>` or `Vec<Vec<u8>>`, use
//! [`prefixsort`] (index-based) or [`prefixsort_mut`] (in-place).
//!
//! ```rust
//! use prefixsort::prefixsort_mut;
//!
//! let mut paths = vec!["/usr/lib/b.so", "/usr/lib/a.so", "/usr/bin/sh"];
//! prefixsort_mut(&mut paths);
//!
//! assert_eq!(paths, vec!["/usr/bin/sh", "/usr/lib/a.so", "/usr/lib/b.so"]);
//! ```
//!
//! ### Repeatable Runs
//!
//! Pivots are drawn at random. A [`Sorter`] built from seeded
//! [`SortOptions`] draws the same pivots every time and reports the work it
//! did as [`SortStats`].
//!
//! ```rust
//! use prefixsort::{PartitionScheme, SortOptions, Sorter};
//!
//! let options = SortOptions::new().seed(7).scheme(PartitionScheme::ThreeWay);
//! let mut sorter = Sorter::new(options);
//!
//! let mut words = vec!["band", "banana", "bandana"];
//! let stats = sorter.sort(&mut words);
//!
//! assert_eq!(words, vec!["banana", "band", "bandana"]);
//! assert!(stats.skipped_prefix >= 3);
//! ```
//!
//! ### Custom Types
//!
//! Implement [`KeyAccessor`] to sort a collection by index without copying
//! its keys.
//!
//! ```rust
//! use prefixsort::{prefixsort, KeyAccessor};
//!
//! struct Column {
//!     data: Vec<u8>,
//!     offsets: Vec<usize>,
//! }
//!
//! impl KeyAccessor for Column {
//!     fn get_key(&self, index: usize) -> &[u8] {
//!         &self.data[self.offsets[index]..self.offsets[index + 1]]
//!     }
//!
//!     fn len(&self) -> usize {
//!         self.offsets.len() - 1
//!     }
//! }
//!
//! let column = Column {
//!     data: b"foobarbaz".to_vec(),
//!     offsets: vec![0, 3, 6, 9],
//! };
//!
//! assert_eq!(prefixsort(&column), vec![1, 2, 0]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Expected**: O(n log n) comparisons, each starting past the prefix its
//!   range is known to share.
//! - **Auxiliary space**: the work-list never holds more than `log2(n)`
//!   ranges; [`prefixsort`] also allocates one entry per key (index, key slice
//!   and an 8-byte prefix cache).
//! - **Stability**: not stable. Equal keys may be reordered.

pub mod algo;
pub mod compare;
pub mod config;
pub mod core;
pub mod error;
pub mod partition;
pub mod scan;
pub mod stats;

pub use algo::{
    Sorter, apply_permutation, is_sorted, prefixsort, prefixsort_mut, sorted, try_prefixsort_mut,
};
pub use compare::compare_from;
pub use config::{PartitionScheme, SortOptions};
pub use crate::core::KeyAccessor;
pub use error::SortError;
pub use partition::{partition_three_way, partition_two_way};
pub use scan::common_prefix_len;
pub use stats::SortStats;

pub mod prelude {
    pub use crate::algo::{Sorter, prefixsort, prefixsort_mut, sorted};
    pub use crate::config::{PartitionScheme, SortOptions};
    pub use crate::core::KeyAccessor;
    pub use crate::error::SortError;
}

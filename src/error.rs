//! Error type for input validation.
//!
//! Sorting itself cannot fail. Errors only come out of the checked entry points,
//! which validate their input completely before moving a single element.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error returned by the validating entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// A slot in the collection holds no key.
    MissingKey {
        /// Position of the first empty slot.
        index: usize,
    },

    /// A permutation does not have one entry per element.
    LengthMismatch {
        /// Number of elements in the collection.
        data: usize,
        /// Number of entries in the permutation.
        indices: usize,
    },

    /// A permutation entry is out of range or repeats an earlier entry.
    InvalidPermutation {
        /// The offending entry.
        index: usize,
    },
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MissingKey { index } => write!(f, "Missing key at position {index}"),
            Self::LengthMismatch { data, indices } => {
                write!(
                    f,
                    "Length mismatch: collection has {data} elements, permutation has {indices}"
                )
            }
            Self::InvalidPermutation { index } => {
                write!(f, "Invalid permutation entry: {index} (out of range or repeated)")
            }
        }
    }
}

impl Error for SortError {}

//! Key access for index-based sorting.
//!
//! [`KeyAccessor`] lets [`prefixsort`](crate::prefixsort) order a collection
//! without moving or copying its elements. Anything that can hand out a byte
//! slice per index can be sorted this way.

use crate::compare::suffix;
use std::collections::VecDeque;

/// Number of key bytes held in an entry's prefix cache.
pub const PREFIX_CACHE_SIZE: usize = 8;

/// A trait for accessing key data from a collection without copying.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use prefixsort::core::KeyAccessor;
///
/// struct Paths {
///     data: Vec<String>,
/// }
///
/// impl KeyAccessor for Paths {
///     fn get_key(&self, index: usize) -> &[u8] {
///         self.data[index].as_bytes()
///     }
///
///     fn len(&self) -> usize {
///         self.data.len()
///     }
/// }
/// ```
pub trait KeyAccessor {
    /// Returns a byte slice representing the key at the given index.
    fn get_key(&self, index: usize) -> &[u8];

    /// Returns the number of items in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the `PREFIX_CACHE_SIZE` bytes of the key at `index` starting at
    /// `offset`, packed big-endian so that integer order matches byte order.
    ///
    /// Bytes past the end of the key read as 0. Implementors with their own
    /// storage layout may override this to avoid building the slice.
    #[inline(always)]
    fn get_u64_prefix(&self, index: usize, offset: usize) -> u64 {
        load_u64_prefix(self.get_key(index), offset)
    }
}

/// Packs up to `PREFIX_CACHE_SIZE` bytes of `key` from `offset` into a
/// big-endian `u64`, zero-padded on the right.
#[inline(always)]
pub(crate) fn load_u64_prefix(key: &[u8], offset: usize) -> u64 {
    let window = suffix(key, offset);
    let take = window.len().min(PREFIX_CACHE_SIZE);
    let mut buf = [0u8; PREFIX_CACHE_SIZE];
    buf[..take].copy_from_slice(&window[..take]);
    u64::from_be_bytes(buf)
}

/// Anything the driver can sort: a key, possibly with a cached window of it.
///
/// Plain keys carry no cache. [`IndexedKey`] caches the next
/// `PREFIX_CACHE_SIZE` bytes past the current depth, which the driver
/// reloads whenever the depth advances.
pub(crate) trait SortEntry {
    fn key(&self) -> &[u8];

    /// The cached bytes at the current depth, if this entry keeps any.
    #[inline(always)]
    fn cached(&self) -> Option<u64> {
        None
    }

    #[inline(always)]
    fn refresh(&mut self, _depth: usize) {}
}

impl<T: AsRef<[u8]>> SortEntry for T {
    #[inline(always)]
    fn key(&self) -> &[u8] {
        self.as_ref()
    }
}

impl<T: AsRef<[u8]>> KeyAccessor for [T] {
    fn get_key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Explicit Vec impl so callers can pass `&vec` without `.as_slice()`.
impl<T: AsRef<[u8]>> KeyAccessor for Vec<T> {
    fn get_key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: AsRef<[u8]>> KeyAccessor for VecDeque<T> {
    fn get_key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

/// A key borrowed from a [`KeyAccessor`], tagged with its original position.
///
/// The index-based sort shuffles these instead of the collection itself.
/// `cache` always holds the key's bytes at the depth of the range the entry
/// currently sits in.
#[derive(Clone, Copy, Debug)]
pub(crate) struct IndexedKey<'a> {
    pub index: usize,
    pub key: &'a [u8],
    pub cache: u64,
}

impl<'a> IndexedKey<'a> {
    pub fn new(index: usize, key: &'a [u8]) -> Self {
        Self {
            index,
            key,
            cache: load_u64_prefix(key, 0),
        }
    }
}

impl SortEntry for IndexedKey<'_> {
    #[inline(always)]
    fn key(&self) -> &[u8] {
        self.key
    }

    #[inline(always)]
    fn cached(&self) -> Option<u64> {
        Some(self.cache)
    }

    #[inline(always)]
    fn refresh(&mut self, depth: usize) {
        self.cache = load_u64_prefix(self.key, depth);
    }
}

/// Collects every key of `provider` together with its index and first cache.
pub(crate) fn indexed_keys<T: KeyAccessor + ?Sized>(provider: &T) -> Vec<IndexedKey<'_>> {
    (0..provider.len())
        .map(|index| IndexedKey {
            index,
            key: provider.get_key(index),
            cache: provider.get_u64_prefix(index, 0),
        })
        .collect()
}

//! ChainedHashTable: fixed-bucket hash table chaining collisions through
//! per-bucket singly linked lists.

use crate::reentrancy::ReentryCheck;
use crate::singly_linked_list::{NodeRef, SinglyLinkedList};
use core::fmt;

/// Construction failure: the table cannot exist with these parameters.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// `bucket_count` was zero; bucket dispatch would divide by zero.
    ZeroBuckets,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroBuckets => f.write_str("bucket count must be greater than zero"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Hash table with a fixed number of buckets and separate chaining.
///
/// `H` maps a payload to a hash value, `M` decides whether two payloads are
/// the same element. `M` must be an equivalence relation consistent with
/// `H`: payloads equal under `M` must hash identically under `H`. That is a
/// precondition, not runtime-checked; breaking it makes lookups and
/// removals miss elements placed in another bucket, but never corrupts the
/// table.
///
/// No two stored elements are ever equal under `M`; inserting a duplicate
/// is a no-op. `len()` is maintained incrementally and always equals the
/// sum of the bucket chain lengths.
pub struct ChainedHashTable<T, H, M> {
    buckets: Vec<SinglyLinkedList<T>>,
    hash: H,
    matches: M,
    len: usize,
    reentry: ReentryCheck,
}

impl<T, H, M> ChainedHashTable<T, H, M>
where
    H: Fn(&T) -> i64,
    M: Fn(&T, &T) -> bool,
{
    /// Create a table with `bucket_count` buckets, building every bucket
    /// chain eagerly. O(bucket_count). Fails fast on a zero bucket count.
    pub fn new(bucket_count: usize, hash: H, matches: M) -> Result<Self, ConfigError> {
        if bucket_count == 0 {
            return Err(ConfigError::ZeroBuckets);
        }
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, SinglyLinkedList::new);
        Ok(Self {
            buckets,
            hash,
            matches,
            len: 0,
            reentry: ReentryCheck::new(),
        })
    }

    /// Bucket index for a payload. `rem_euclid` keeps the index in range
    /// and non-negative for any hash value, including negative ones.
    fn bucket_of(&self, probe: &T) -> usize {
        (self.hash)(probe).rem_euclid(self.buckets.len() as i64) as usize
    }

    /// Linear scan of one bucket for the first element matching `probe`.
    /// Returns the matching node and its predecessor (`None` when the
    /// match is the chain head), which is exactly what `remove_after`
    /// needs to unlink it.
    fn scan(&self, idx: usize, probe: &T) -> Option<(Option<NodeRef>, NodeRef)> {
        let bucket = &self.buckets[idx];
        let mut prev = None;
        let mut cursor = bucket.head();
        while let Some(node) = cursor {
            let data = bucket
                .get(node)
                .expect("cursor handles stay live during the scan");
            if (self.matches)(data, probe) {
                return Some((prev, node));
            }
            prev = Some(node);
            cursor = bucket.next(node);
        }
        None
    }

    /// Insert `payload` unless an element equal under the match function
    /// is already stored. Returns `true` when the payload was added,
    /// `false` for the duplicate no-op. O(1) expected, O(chain length)
    /// worst case.
    pub fn insert(&mut self, payload: T) -> bool {
        let _g = self.reentry.lock();
        let idx = self.bucket_of(&payload);
        if self.scan(idx, &payload).is_some() {
            return false;
        }
        let bucket = &mut self.buckets[idx];
        let tail = bucket.tail();
        bucket
            .insert_after(tail, payload)
            .expect("bucket tail handle is live");
        self.len += 1;
        true
    }

    /// Remove the element matching `probe` and return the stored payload
    /// itself. `None` when no element in the probe's bucket matches.
    pub fn remove(&mut self, probe: &T) -> Option<T> {
        let _g = self.reentry.lock();
        let idx = self.bucket_of(probe);
        let (prev, _node) = self.scan(idx, probe)?;
        let data = self.buckets[idx]
            .remove_after(prev)
            .expect("scan just found the node to unlink");
        self.len -= 1;
        Some(data)
    }

    /// Borrow the stored element matching `probe`, if any. Never mutates.
    pub fn lookup(&self, probe: &T) -> Option<&T> {
        let _g = self.reentry.lock();
        let idx = self.bucket_of(probe);
        let (_prev, node) = self.scan(idx, probe)?;
        self.buckets[idx].get(node)
    }

    pub fn contains(&self, probe: &T) -> bool {
        self.lookup(probe).is_some()
    }

    /// Number of stored elements; a running count, never recomputed by
    /// traversal. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets, fixed for the table's lifetime.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

impl<T, H, M> fmt::Debug for ChainedHashTable<T, H, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashTable")
            .field("bucket_count", &self.buckets.len())
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

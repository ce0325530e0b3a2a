//! chained-table: a single-threaded, fixed-bucket chained hash table
//! whose collision chains are arena-backed singly linked lists.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: build ChainedHashTable in safe, verifiable layers so each piece
//!   can be reasoned about independently.
//! - Layers:
//!   - SinglyLinkedList<T>: ordered chain of nodes stored in a slotmap
//!     arena; stable `NodeRef` handles give O(1) insert-after and
//!     remove-after splicing without an ownership graph of boxed nodes.
//!   - ChainedHashTable<T, H, M>: fixed array of bucket lists plus a
//!     caller-supplied hash/match strategy pair; dispatches every
//!     operation to `hash(x) mod bucket_count` and resolves collisions by
//!     a linear, match-driven scan of that one bucket; includes a
//!     debug-only reentrancy guard to keep internals consistent while the
//!     caller's closures run.
//!
//! Constraints
//! - Single-threaded: the table is `!Send`/`!Sync` by design (no atomics).
//! - Fixed bucket count for the table's lifetime: no resizing, no
//!   rehashing, no load-factor policy.
//! - Duplicate suppression lives in the table, not the list: the list
//!   accepts any payload, the table refuses a second payload equal under
//!   the match function.
//! - The element count is maintained incrementally; it is never
//!   recomputed by traversal.
//! - Reentrancy: disallowed during critical sections of ChainedHashTable
//!   (only the caller's `H`/`M` closures may run); the list layer never
//!   calls user code and needs no guard.
//!
//! Why this split?
//! - Localize invariants: the list owns head/tail/chain coherence, the
//!   table owns bucket placement, uniqueness, and the running count.
//! - The only subtle operations are the splicing primitives
//!   (`insert_after`/`remove_after`) and the predecessor-tracking scan
//!   that feeds them; keeping them in one small layer each makes both
//!   easy to test in isolation.
//! - No unsafe anywhere: structural indexing uses the arena's
//!   generational keys, so a stale `NodeRef` never aliases a fresh node.
//!
//! Hash/match contract
//! - `M` must be an equivalence relation and consistent with `H`: payloads
//!   equal under `M` must produce the same hash under `H`. This is a
//!   documented precondition, not runtime-checked; violating it makes
//!   lookups and removals miss elements but never corrupts the structure.
//! - Hash values may be negative or exceed the bucket count; the bucket
//!   index is always reduced with `rem_euclid`, so it stays in range.
//!
//! Notes and non-goals
//! - No iteration-order guarantee across buckets; the list layer's `iter`
//!   is ordered head to tail within one chain only.
//! - No persistence, no wire format, no concurrency support. Callers that
//!   must share a table across threads serialize access externally.
//! - Public API surface is `ChainedHashTable`, `SinglyLinkedList`, and
//!   `NodeRef`; the reentrancy guard is an implementation detail.

pub mod chained_hash_table;
mod chained_hash_table_proptest;
mod reentrancy;
pub mod singly_linked_list;

// Public surface
pub use chained_hash_table::{ChainedHashTable, ConfigError};
pub use singly_linked_list::{NodeRef, SinglyLinkedList};

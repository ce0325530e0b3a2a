#![cfg(test)]

// Property tests for ChainedHashTable kept inside the crate so they can
// check the internal count-versus-chains invariant directly.

use crate::chained_hash_table::ChainedHashTable;
use proptest::prelude::*;
use std::collections::HashSet;

type Hash = fn(&i32) -> i64;
type Match = fn(&i32, &i32) -> bool;
type Table = ChainedHashTable<i32, Hash, Match>;

// Hash shapes worth exercising: well-spread, all-colliding, and negative.
#[derive(Clone, Copy, Debug)]
enum HashKind {
    Identity,
    Constant,
    Negated,
}

fn hash_fn(kind: HashKind) -> Hash {
    match kind {
        HashKind::Identity => |v| *v as i64,
        HashKind::Constant => |_| 0,
        HashKind::Negated => |v| -(*v as i64),
    }
}

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// payloads, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize),
    Remove(usize),
    Lookup(usize),
    Contains(usize),
}

fn arb_scenario() -> impl Strategy<Value = (HashKind, usize, Vec<i32>, Vec<OpI>)> {
    let kind = prop_oneof![
        Just(HashKind::Identity),
        Just(HashKind::Constant),
        Just(HashKind::Negated),
    ];
    (kind, 1usize..=8, proptest::collection::vec(-50i32..50, 1..=12)).prop_flat_map(
        |(kind, buckets, pool)| {
            let idx = 0..pool.len();
            let op = prop_oneof![
                idx.clone().prop_map(OpI::Insert),
                idx.clone().prop_map(OpI::Remove),
                idx.clone().prop_map(OpI::Lookup),
                idx.prop_map(OpI::Contains),
            ];
            proptest::collection::vec(op, 1..80)
                .prop_map(move |ops| (kind, buckets, pool.clone(), ops))
        },
    )
}

// Property: State-machine equivalence against std::collections::HashSet.
// Invariants exercised across random operation sequences, bucket counts,
// and hash shapes (including the all-collide constant hash):
// - `insert` returns true exactly when the element was absent.
// - `remove` returns the stored payload exactly when present.
// - `lookup`/`contains` parity with the model; the borrowed payload is
//   equal to the probe.
// - `len`/`is_empty` parity after every operation, and `len` equals the
//   number of distinct elements ever visible.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((kind, buckets, pool, ops) in arb_scenario()) {
        let eq: Match = |a, b| a == b;
        let mut sut: Table = ChainedHashTable::new(buckets, hash_fn(kind), eq)
            .expect("bucket count is at least one");
        let mut model: HashSet<i32> = HashSet::new();

        for op in ops {
            match op {
                OpI::Insert(i) => {
                    let v = pool[i];
                    let added = sut.insert(v);
                    prop_assert_eq!(added, model.insert(v), "insert parity for {}", v);
                }
                OpI::Remove(i) => {
                    let v = pool[i];
                    let removed = sut.remove(&v);
                    let was_present = model.remove(&v);
                    prop_assert_eq!(removed.is_some(), was_present, "remove parity for {}", v);
                    if let Some(out) = removed {
                        prop_assert_eq!(out, v, "remove must return the stored payload");
                    }
                }
                OpI::Lookup(i) => {
                    let v = pool[i];
                    let found = sut.lookup(&v);
                    prop_assert_eq!(found.is_some(), model.contains(&v));
                    if let Some(stored) = found {
                        prop_assert_eq!(*stored, v);
                    }
                }
                OpI::Contains(i) => {
                    let v = pool[i];
                    prop_assert_eq!(sut.contains(&v), model.contains(&v));
                }
            }

            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
        }

        // Everything the model holds must be reachable at the end.
        for v in &model {
            prop_assert_eq!(sut.lookup(v), Some(v));
        }
    }
}

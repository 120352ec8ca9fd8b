//! AFL Fuzz harness for the skip map
//!
//! Drives a map with arbitrary operations and checks after every step that
//! it agrees with a `BTreeMap` fed the same operations:
//! 1. Lookups, inserts and removes return the same values
//! 2. Lengths agree
//! 3. Iteration yields the same pairs in the same order
//!
//! The first byte seeds level selection, so crashes replay exactly.

use std::collections::BTreeMap;

use afl::fuzz;
use rand::SeedableRng;
use rand::rngs::StdRng;
use skipmap::SkipMap;
use skipmap::compare::Natural;

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    Insert { key: u8, value: u8 },
    Remove { key: u8 },
    Get { key: u8 },
    Clear,
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 8;
        let rest = &bytes[1..];

        return match op_type {
            0..=3 if rest.len() >= 2 => {
                let op = FuzzOp::Insert { key: rest[0], value: rest[1] };
                Some((op, &rest[2..]))
            }
            4 | 5 if !rest.is_empty() => Some((FuzzOp::Remove { key: rest[0] }, &rest[1..])),
            6 if !rest.is_empty() => Some((FuzzOp::Get { key: rest[0] }, &rest[1..])),
            7 => Some((FuzzOp::Clear, rest)),
            _ => None,
        };
    }
}

fn main() {
    fuzz!(|data: &[u8]| {
        let Some((&seed, mut remaining)) = data.split_first() else {
            return;
        };

        let mut map = SkipMap::with_rng(Natural, StdRng::seed_from_u64(seed as u64));
        let mut model = BTreeMap::new();

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Insert { key, value } => {
                    assert_eq!(map.insert(key, value), model.insert(key, value), "{:?}", op);
                }
                FuzzOp::Remove { key } => {
                    assert_eq!(map.remove(&key), model.remove(&key), "{:?}", op);
                }
                FuzzOp::Get { key } => {
                    assert_eq!(map.get(&key), model.get(&key), "{:?}", op);
                }
                FuzzOp::Clear => {
                    map.clear();
                    model.clear();
                }
            }

            assert_eq!(map.len(), model.len(), "length diverged after {:?}", op);
        }

        assert!(
            map.iter().eq(model.iter()),
            "contents diverged:\n{}",
            map.dump()
        );
    });
}

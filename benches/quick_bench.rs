//! Quick single-run benchmark for development iteration.

use std::collections::BTreeMap;
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use skipmap::SkipMap;
use skipmap::compare::Natural;

const COUNT: u64 = 1_000_000;

fn main() {
    let mut rng = StdRng::seed_from_u64(0);
    let shuffle: Vec<u64> = (0..COUNT).map(|_| rng.gen_range(0..COUNT)).collect();

    println!("=== insert {} keys ===", COUNT);

    let start = Instant::now();
    let mut map = SkipMap::with_rng(Natural, StdRng::seed_from_u64(1));
    for k in 0..COUNT {
        map.insert(k, k);
    }
    let skip_time = start.elapsed();
    println!("  SkipMap tail:   {:?} ({} levels)", skip_time, map.levels());

    let start = Instant::now();
    let mut btree = BTreeMap::new();
    for k in 0..COUNT {
        btree.insert(k, k);
    }
    println!("  BTreeMap tail:  {:?}", start.elapsed());

    println!("\n=== get {} random keys ===", COUNT);

    let start = Instant::now();
    for &k in &shuffle {
        let v = map.get(&k);
        assert_eq!(v, Some(&k), "invalid state for key {}", k);
    }
    let get_time = start.elapsed();
    println!("  SkipMap:   {:?}", get_time);
    println!("  per call:  {:?}", get_time / COUNT as u32);

    let start = Instant::now();
    for &k in &shuffle {
        let v = btree.get(&k);
        assert_eq!(v, Some(&k), "invalid state for key {}", k);
    }
    println!("  BTreeMap:  {:?}", start.elapsed());

    println!("\n=== remove {} keys ===", COUNT);

    let start = Instant::now();
    for k in 0..COUNT {
        map.remove(&k);
    }
    println!("  SkipMap:   {:?}", start.elapsed());
    assert!(map.is_empty());
}

//! Scenario tests for the public map API.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use skipmap::SkipMap;
use skipmap::compare::ByKey;
use skipmap::compare::Natural;

fn seeded<K: Ord, V>(seed: u64) -> SkipMap<K, V, Natural, StdRng> {
    return SkipMap::with_rng(Natural, StdRng::seed_from_u64(seed));
}

// =============================================================================
// Basic lookups
// =============================================================================

#[test]
fn put_then_get() {
    let mut map = seeded(1);
    map.insert(5, "five");
    assert_eq!(map.get(&5), Some(&"five"));
    assert_eq!(map.len(), 1);
}

#[test]
fn iterates_in_key_order() {
    let mut map = seeded(2);
    for k in [9, 1, 3, 7, 5, 2, 8, 4, 6] {
        map.insert(k, ());
    }
    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn second_put_replaces_value() {
    let mut map = seeded(3);
    map.insert(1, "a");
    map.insert(1, "b");
    assert_eq!(map.get(&1), Some(&"b"));
    assert_eq!(map.len(), 1);
}

#[test]
fn remove_on_empty_map() {
    let mut map: SkipMap<i32, &str, Natural, StdRng> = seeded(4);
    assert_eq!(map.remove(&1), None);
    assert_eq!(map.len(), 0);
}

#[test]
fn missing_keys_are_not_found() {
    let mut map = seeded(5);
    for i in 1..10 {
        map.insert(i, i);
    }
    for i in 1..10 {
        assert_eq!(map.get(&i), Some(&i));
        assert_eq!(map.get(&(i * 100)), None);
    }
}

// =============================================================================
// Bulk insert and remove
// =============================================================================

#[test]
fn sequential_insert_then_reverse_remove() {
    let mut map = seeded(6);
    for i in 0..1000 {
        map.insert(i, i * 2);
    }
    assert_eq!(map.len(), 1000);

    for i in (0..1000).rev() {
        let before = map.len();
        assert_eq!(map.remove(&i), Some(i * 2), "remove {}", i);
        assert_eq!(map.len(), before - 1);
        assert_eq!(map.get(&i), None);
    }
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
}

#[test]
fn increasing_and_shuffled_inserts_agree() {
    let n = 5000;
    let mut rng = StdRng::seed_from_u64(7);
    let mut shuffled: Vec<u32> = (0..n).collect();
    shuffled.shuffle(&mut rng);

    let mut ascending = seeded(8);
    for k in 0..n {
        ascending.insert(k, k + 1);
    }
    let mut random = seeded(9);
    for &k in &shuffled {
        random.insert(k, k + 1);
    }

    for k in 0..n {
        assert_eq!(ascending.get(&k), Some(&(k + 1)));
        assert_eq!(random.get(&k), Some(&(k + 1)));
    }
    let expected: Vec<_> = (0..n).collect();
    assert_eq!(ascending.keys().copied().collect::<Vec<_>>(), expected);
    assert_eq!(random.keys().copied().collect::<Vec<_>>(), expected);
}

#[test]
fn descending_inserts() {
    let mut map = seeded(10);
    for k in (0..2000).rev() {
        map.insert(k, ());
    }
    assert_eq!(map.first_key_value(), Some((&0, &())));
    assert_eq!(map.last_key_value(), Some((&1999, &())));
    assert!(map.keys().copied().eq(0..2000));
}

#[test]
fn random_keys_with_duplicates() {
    let n = 20_000;
    let mut rng = StdRng::seed_from_u64(11);
    let keys: Vec<u32> = (0..n).map(|_| rand::Rng::gen_range(&mut rng, 0..n)).collect();

    let mut map = seeded(12);
    for &k in &keys {
        map.insert(k, k);
    }
    let mut distinct = keys.clone();
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(map.len(), distinct.len());

    for &k in &keys {
        assert_eq!(map.get(&k), Some(&k));
    }
    for &k in &keys {
        map.remove(&k);
    }
    assert!(map.is_empty());
}

// =============================================================================
// Comparators and configuration
// =============================================================================

#[test]
fn string_keys() {
    let mut map = seeded(13);
    for word in ["pear", "apple", "fig", "banana"] {
        map.insert(word.to_string(), word.len());
    }
    let keys: Vec<_> = map.keys().cloned().collect();
    assert_eq!(keys, vec!["apple", "banana", "fig", "pear"]);
    assert_eq!(map.get(&"fig".to_string()), Some(&3));
}

#[test]
fn projected_comparator() {
    #[derive(Debug, Clone, PartialEq)]
    struct User {
        id: u64,
        name: &'static str,
    }

    let cmp = ByKey::new(Natural, |u: &User| u.id);
    let mut map = SkipMap::with_rng(cmp, StdRng::seed_from_u64(14));
    map.insert(User { id: 3, name: "carol" }, "admin");
    map.insert(User { id: 1, name: "alice" }, "user");

    let lookup = User { id: 3, name: "" };
    assert_eq!(map.get(&lookup), Some(&"admin"));
    let names: Vec<_> = map.keys().map(|u| u.name).collect();
    assert_eq!(names, vec!["alice", "carol"]);
}

#[test]
fn custom_config() {
    let config = skipmap::Config::new(1 << 10, 0.5).unwrap();
    let mut map = SkipMap::with_config(Natural, config, StdRng::seed_from_u64(15));
    assert_eq!(map.levels(), 10);
    for i in 0..5000 {
        map.insert(i, ());
    }
    assert!(map.levels() > 10);
    assert!((0..5000).all(|i| map.contains_key(&i)));
}

#[test]
fn bad_config_is_rejected() {
    assert!(matches!(
        skipmap::Config::new(0, 0.5),
        Err(skipmap::Error::InvalidCapacity(0))
    ));
    let err = skipmap::Config::new(8, 1.5).unwrap_err();
    assert_eq!(err.to_string(), "invalid promotion probability 1.5: must be in (0, 1)");
}

#[test]
fn huge_level_count_is_rejected() {
    // p this close to 1 would need tens of millions of levels
    assert!(matches!(
        skipmap::Config::new(1 << 32, 0.999_999),
        Err(skipmap::Error::TooManyLevels(_))
    ));
    assert!(matches!(
        skipmap::Config::new(u64::MAX, 1.0 - 1e-15),
        Err(skipmap::Error::TooManyLevels(_))
    ));
    let err = skipmap::Config::new(1 << 57, 0.55).unwrap_err();
    assert_eq!(err.to_string(), "config needs 66 levels, max is 64");

    let config = skipmap::Config::new(1 << 56, 0.55).unwrap();
    let mut map = SkipMap::with_config(Natural, config, StdRng::seed_from_u64(17));
    for k in 0..100 {
        map.insert(k, k);
    }
    assert_eq!(map.levels(), skipmap::config::MAX_LEVELS);
    assert_eq!(map.get(&42), Some(&42));
}

#[test]
fn same_seed_same_structure() {
    let mut a = seeded(16);
    let mut b = seeded(16);
    for k in [4, 8, 15, 16, 23, 42] {
        a.insert(k, ());
        b.insert(k, ());
    }
    assert_eq!(a.dump(), b.dump());
}

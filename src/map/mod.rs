//! Skip list map.
//!
//! A probabilistic substitute for a balanced tree: keys are kept in a sorted
//! linked list, and each node also carries a random number of "express lane"
//! pointers that skip over runs of smaller nodes. No rebalancing ever
//! happens; balance is statistical.
//!
//! ```text
//! Level 2: HEAD ---------------> 3 ----------------------------> NIL
//! Level 1: HEAD ------> 2 -----> 3 ---------------> 6 ---------> NIL
//! Level 0: HEAD -> 1 -> 2 -> 3 -> 4 -> 5 -> 6 -> 7 -> NIL
//! ```
//!
//! # Operations
//!
//! - `get(key)`: O(log n) expected - descend from the top level, advancing
//!   while the next key is smaller
//! - `insert(key, value)`: O(log n) expected - same descent, remembering the
//!   last node per level in `path`, then splice a node of random level
//! - `remove(key)`: O(log n) expected - same descent, unlink at every level
//! - `len()`: O(1)
//!
//! Worst case is O(n) if the random levels come out degenerate.
//!
//! # Levels
//!
//! The number of levels L is fixed by a [`Config`] at construction. A node's
//! level is drawn once, from the injected random source, and never changes.
//! If the map outgrows the capacity it was configured for, the capacity is
//! doubled and L is recomputed; existing nodes keep their levels.

mod iter;
mod node;

use std::cmp::Ordering;
use std::fmt;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::compare::Compare;
use crate::compare::Natural;
use crate::config::Config;
use crate::config::LevelTable;

pub use iter::IntoIter;
pub use iter::Iter;
pub use iter::Keys;
pub use iter::Values;

use node::Arena;
use node::HEAD;
use node::Idx;
use node::NIL;
use node::Node;

/// An ordered map backed by a skip list.
///
/// Keys are ordered by the comparator `C`; node levels are drawn from the
/// random source `R`. Not internally synchronized: share it behind a lock.
#[derive(Clone)]
pub struct SkipMap<K, V, C = Natural, R = StdRng> {
    /// Node storage.
    nodes: Arena<K, V>,
    /// Head sentinel: head[i] is the first node at level i. Length L.
    head: Vec<Idx>,
    /// Scratch for insert/remove: path[i] is the last node before the
    /// target key at level i. Length L, reused across calls.
    path: Vec<Idx>,
    /// Number of nodes.
    len: usize,
    /// Level cap and promotion probabilities.
    levels: LevelTable,
    cmp: C,
    rng: R,
}

impl<K, V, C: Compare<K>> SkipMap<K, V, C, StdRng> {
    /// Create an empty map with the default config and an entropy-seeded
    /// random source.
    pub fn new(cmp: C) -> Self {
        return Self::with_rng(cmp, StdRng::from_entropy());
    }
}

impl<K, V, C: Compare<K>, R: Rng> SkipMap<K, V, C, R> {
    /// Create an empty map with the default config, drawing node levels
    /// from `rng`. Seed it for reproducible structure.
    pub fn with_rng(cmp: C, rng: R) -> Self {
        return Self::with_config(cmp, Config::default(), rng);
    }

    /// Create an empty map with everything explicit.
    pub fn with_config(cmp: C, config: Config, rng: R) -> Self {
        let levels = LevelTable::new(config);
        let height = levels.levels();
        tracing::trace!(
            capacity = config.capacity(),
            probability = config.probability(),
            levels = height,
            "new skip map"
        );
        return SkipMap {
            nodes: Arena::new(),
            head: vec![NIL; height],
            path: vec![HEAD; height],
            len: 0,
            levels,
            cmp,
            rng,
        };
    }

    pub fn len(&self) -> usize {
        return self.len;
    }

    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// The current level cap L.
    pub fn levels(&self) -> usize {
        return self.head.len();
    }

    /// The config currently in effect, including any capacity growth.
    pub fn config(&self) -> Config {
        return self.levels.config();
    }

    pub fn comparator(&self) -> &C {
        return &self.cmp;
    }

    // --- Node access helpers ---

    fn key(&self, idx: Idx) -> &K {
        return &self.nodes.get(idx).key;
    }

    /// Forward pointer of a traversal position at `level`.
    fn next(&self, at: Idx, level: usize) -> Idx {
        if at == HEAD {
            return self.head[level];
        }
        return self.nodes.get(at).next[level];
    }

    fn set_next(&mut self, at: Idx, level: usize, to: Idx) {
        if at == HEAD {
            self.head[level] = to;
        } else {
            self.nodes.get_mut(at).next[level] = to;
        }
    }

    /// Whether `idx` is a real node holding `key`.
    fn matches(&self, idx: Idx, key: &K) -> bool {
        return idx != NIL && self.cmp.compare(self.key(idx), key) == Ordering::Equal;
    }

    // --- Traversal ---

    /// Descend from the top level, advancing while the next key is less
    /// than `key`. When no more progress is possible at level 0 the node
    /// ahead is the only one that can hold `key`; return it (or NIL).
    fn search(&self, key: &K) -> Idx {
        let mut at = HEAD;
        for level in (0..self.head.len()).rev() {
            loop {
                let next = self.next(at, level);
                if next == NIL || self.cmp.compare(self.key(next), key) != Ordering::Less {
                    break;
                }
                at = next;
            }
        }
        return self.next(at, 0);
    }

    /// Same as `search`, but records in `path` the rightmost position at
    /// each level that is left of `key`. Those are the nodes whose forward
    /// pointers an insert or remove has to rewrite.
    fn skip(&mut self, key: &K) -> Idx {
        let mut at = HEAD;
        for level in (0..self.head.len()).rev() {
            loop {
                let next = self.next(at, level);
                if next == NIL || self.cmp.compare(self.key(next), key) != Ordering::Less {
                    break;
                }
                at = next;
            }
            self.path[level] = at;
        }
        return self.next(at, 0);
    }

    // --- Core operations ---

    /// Look up the value stored for `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.search(key);
        if !self.matches(idx, key) {
            return None;
        }
        return Some(&self.nodes.get(idx).value);
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.search(key);
        if !self.matches(idx, key) {
            return None;
        }
        return Some(&mut self.nodes.get_mut(idx).value);
    }

    /// Look up the stored key and value for `key`. The stored key is the one
    /// first inserted; later inserts of an equal key only replace the value.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let idx = self.search(key);
        if !self.matches(idx, key) {
            return None;
        }
        let node = self.nodes.get(idx);
        return Some((&node.key, &node.value));
    }

    pub fn contains_key(&self, key: &K) -> bool {
        return self.matches(self.search(key), key);
    }

    /// Insert a key-value pair.
    ///
    /// If an equal key is already present its value is overwritten in place
    /// and the old value returned; the stored key and the structure are left
    /// alone. Otherwise a node of random level is spliced in and `None` is
    /// returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let found = self.skip(&key);
        if self.matches(found, &key) {
            let node = self.nodes.get_mut(found);
            return Some(std::mem::replace(&mut node.value, value));
        }

        if self.len as u64 >= self.levels.config().capacity() {
            self.grow();
        }

        let level = self.levels.random_level(&mut self.rng);
        let idx = self.nodes.alloc(Node::new(key, value, level));

        // Re-bind forward pointers at each level the new node occupies.
        for l in 0..level {
            let pred = self.path[l];
            let succ = self.next(pred, l);
            self.nodes.get_mut(idx).next[l] = succ;
            self.set_next(pred, l, idx);
        }

        self.len += 1;
        self.debug_check_splice(idx);
        return None;
    }

    /// Remove `key`, returning its value. Absent keys leave the map as is.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let found = self.skip(key);
        if !self.matches(found, key) {
            return None;
        }

        // Unlink at every level whose predecessor points at the node.
        for level in 0..self.head.len() {
            let pred = self.path[level];
            if self.next(pred, level) != found {
                continue;
            }
            let node = self.nodes.get(found);
            let succ = if level < node.level() { node.next[level] } else { NIL };
            self.set_next(pred, level, succ);
        }

        let node = self.nodes.free(found);
        self.len -= 1;
        return Some(node.value);
    }

    /// Remove everything. The level cap and random source are kept.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head.fill(NIL);
        self.len = 0;
    }

    /// The smallest key and its value.
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        let first = self.head[0];
        if first == NIL {
            return None;
        }
        let node = self.nodes.get(first);
        return Some((&node.key, &node.value));
    }

    /// The largest key and its value, found by running right along every
    /// level from the top.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        let mut at = HEAD;
        for level in (0..self.head.len()).rev() {
            loop {
                let next = self.next(at, level);
                if next == NIL {
                    break;
                }
                at = next;
            }
        }
        if at == HEAD {
            return None;
        }
        let node = self.nodes.get(at);
        return Some((&node.key, &node.value));
    }

    /// Double the assumed capacity and raise L to match. New top levels
    /// start empty, so the head is their predecessor for any key. Once L
    /// reaches `MAX_LEVELS` the map stays at that height.
    fn grow(&mut self) {
        let Some(config) = self.levels.config().doubled() else {
            return;
        };
        let levels = LevelTable::new(config);
        let height = levels.levels();
        if height > self.head.len() {
            self.head.resize(height, NIL);
            self.path.resize(height, HEAD);
        }
        tracing::debug!(
            len = self.len,
            capacity = levels.config().capacity(),
            levels = self.head.len(),
            "skip map outgrew its capacity"
        );
        self.levels = levels;
    }

    /// After a splice, the new node must sit strictly between its
    /// neighbours at every level it occupies.
    #[cfg(debug_assertions)]
    fn debug_check_splice(&self, idx: Idx) {
        let node = self.nodes.get(idx);
        for (level, &succ) in node.next.iter().enumerate() {
            let pred = self.path[level];
            assert_eq!(self.next(pred, level), idx, "splice missed level {}", level);
            if pred != HEAD {
                assert_eq!(
                    self.cmp.compare(self.key(pred), &node.key),
                    Ordering::Less,
                    "predecessor out of order at level {}",
                    level
                );
            }
            if succ != NIL {
                assert_eq!(
                    self.cmp.compare(&node.key, self.key(succ)),
                    Ordering::Less,
                    "successor out of order at level {}",
                    level
                );
            }
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn debug_check_splice(&self, _idx: Idx) {}
}

impl<K, V, C, R> SkipMap<K, V, C, R> {
    /// Iterate in key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        return Iter {
            slots: &self.nodes.slots,
            current: self.head[0],
            remaining: self.len,
        };
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        return Keys(self.iter());
    }

    pub fn values(&self) -> Values<'_, K, V> {
        return Values(self.iter());
    }
}

impl<K: fmt::Debug, V, C, R> SkipMap<K, V, C, R> {
    /// Render the level structure, one node per line with the keys its
    /// forward pointers lead to.
    ///
    /// ```text
    /// --- SkipMap (len 2, levels 3) ---
    /// HEAD  | 1 1 nil
    /// 1     | 5 nil
    /// 5     | nil
    /// ```
    pub fn dump(&self) -> String {
        let mut out = format!("--- SkipMap (len {}, levels {}) ---\n", self.len, self.head.len());
        out.push_str(&format!("{:<5} | {}\n", "HEAD", self.render_next(&self.head)));
        let mut idx = self.head[0];
        while idx != NIL {
            let node = self.nodes.get(idx);
            let key = format!("{:?}", node.key);
            out.push_str(&format!("{:<5} | {}\n", key, self.render_next(&node.next)));
            idx = node.next[0];
        }
        return out;
    }

    fn render_next(&self, next: &[Idx]) -> String {
        return next
            .iter()
            .map(|&idx| {
                if idx == NIL {
                    "nil".to_string()
                } else {
                    format!("{:?}", self.nodes.get(idx).key)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
    }
}

impl<K: Ord, V> Default for SkipMap<K, V> {
    fn default() -> Self {
        return SkipMap::new(Natural);
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C, R> fmt::Debug for SkipMap<K, V, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_map().entries(self.iter()).finish();
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SkipMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = SkipMap::default();
        map.extend(iter);
        return map;
    }
}

impl<K, V, C: Compare<K>, R: Rng> Extend<(K, V)> for SkipMap<K, V, C, R> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, C, R> IntoIterator for &'a SkipMap<K, V, C, R> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}

impl<K, V, C, R> IntoIterator for SkipMap<K, V, C, R> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        return IntoIter {
            current: self.head[0],
            remaining: self.len,
            slots: self.nodes.into_slots(),
        };
    }
}

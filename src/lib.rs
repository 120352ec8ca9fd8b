//! Skipmap - an ordered map backed by a skip list.
//!
//! Keys are kept in the order given by a caller-supplied comparator, with
//! expected O(log n) lookup, insert and remove and no rebalancing.
//!
//! # Quick Start
//!
//! ```
//! use skipmap::SkipMap;
//! use skipmap::compare::Natural;
//!
//! let mut map = SkipMap::new(Natural);
//! map.insert(5, "five");
//! map.insert(1, "one");
//!
//! assert_eq!(map.get(&5), Some(&"five"));
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.remove(&1), Some("one"));
//! assert_eq!(map.remove(&1), None);
//! ```
//!
//! For reproducible structure, seed the random source that picks node
//! levels:
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use skipmap::SkipMap;
//! use skipmap::compare::Reverse;
//! use skipmap::compare::Natural;
//!
//! let mut map = SkipMap::with_rng(Reverse(Natural), StdRng::seed_from_u64(7));
//! map.extend([(1, 'a'), (3, 'c'), (2, 'b')]);
//! assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//! ```

pub mod compare;
pub mod config;
pub mod error;
pub mod map;

pub use compare::Compare;
pub use config::Config;
pub use error::Error;
pub use error::Result;
pub use map::SkipMap;

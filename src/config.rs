//! Tuning for the skip list's level structure.
//!
//! Two constants shape a map: the number of elements it is sized for
//! (`capacity`, N) and the chance that a node is promoted one level higher
//! (`probability`, p). From these follow the level cap
//! `L = floor(ln N / ln(1/p))` and a promotion table `table[i] = p^i`.
//!
//! The defaults, N = 2^32 and p = 1/e, give 22 levels. Configs needing more
//! than [`MAX_LEVELS`] are rejected.

use rand::Rng;

use crate::error::Error;
use crate::error::Result;

/// Default assumed capacity.
pub const DEFAULT_CAPACITY: u64 = 1 << 32;

/// Default promotion probability, 1/e.
pub const DEFAULT_PROBABILITY: f64 = 1.0 / std::f64::consts::E;

/// Upper bound on L. A u64 capacity at p = 1/2 needs exactly this many.
pub const MAX_LEVELS: usize = 64;

/// Assumed capacity and promotion probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    capacity: u64,
    probability: f64,
}

impl Config {
    /// Validate and build a config.
    pub fn new(capacity: u64, probability: f64) -> Result<Config> {
        if capacity < 2 {
            return Err(Error::InvalidCapacity(capacity));
        }
        // Also rejects NaN.
        if !(probability > 0.0 && probability < 1.0) {
            return Err(Error::InvalidProbability(probability));
        }
        let config = Config { capacity, probability };
        let levels = config.levels();
        if levels > MAX_LEVELS {
            return Err(Error::TooManyLevels(levels));
        }
        return Ok(config);
    }

    pub fn capacity(&self) -> u64 {
        return self.capacity;
    }

    pub fn probability(&self) -> f64 {
        return self.probability;
    }

    /// The level cap L for this config, never less than 1.
    ///
    /// For a validated config this is at most [`MAX_LEVELS`].
    pub fn levels(&self) -> usize {
        let levels = (self.capacity as f64).ln() / (1.0 / self.probability).ln();
        // Exact powers of 1/p must not round down a level.
        return ((levels + 1e-9).floor() as usize).max(1);
    }

    /// The same probability sized for twice the capacity, or `None` once
    /// the capacity saturates or the level cap would pass [`MAX_LEVELS`].
    pub(crate) fn doubled(&self) -> Option<Config> {
        let capacity = self.capacity.saturating_mul(2);
        if capacity == self.capacity {
            return None;
        }
        let config = Config {
            capacity,
            probability: self.probability,
        };
        if config.levels() > MAX_LEVELS {
            return None;
        }
        return Some(config);
    }
}

impl Default for Config {
    fn default() -> Self {
        return Config {
            capacity: DEFAULT_CAPACITY,
            probability: DEFAULT_PROBABILITY,
        };
    }
}

/// The level cap plus the per-level promotion probabilities.
#[derive(Debug, Clone)]
pub(crate) struct LevelTable {
    config: Config,
    /// table[i] = p^i, one entry per level.
    table: Vec<f64>,
}

impl LevelTable {
    pub fn new(config: Config) -> LevelTable {
        let table = (0..config.levels())
            .map(|i| config.probability.powi(i as i32))
            .collect();
        return LevelTable { config, table };
    }

    pub fn config(&self) -> Config {
        return self.config;
    }

    /// The level cap L.
    pub fn levels(&self) -> usize {
        return self.table.len();
    }

    /// Pick a rank in `1..=L` for a new node.
    ///
    /// Draws u in [0, 1) and climbs while u is below the next level's
    /// promotion probability. `table[0]` is 1, so every node gets at least
    /// one level; the climb stops at L no matter what u is.
    pub fn random_level<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let u: f64 = rng.r#gen();
        let mut level = 0;
        while level < self.table.len() && u < self.table[level] {
            level += 1;
        }
        return level;
    }
}

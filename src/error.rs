//! Errors raised while configuring a map.
//!
//! Lookups and removals never fail: a missing key is reported as `None`.

/// Error returned when a [`Config`](crate::config::Config) is out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The assumed capacity must allow at least two elements.
    #[error("invalid capacity {0}: must be at least 2")]
    InvalidCapacity(u64),

    /// The promotion probability must lie strictly between 0 and 1.
    #[error("invalid promotion probability {0}: must be in (0, 1)")]
    InvalidProbability(f64),

    /// Capacity and probability together need more levels than supported.
    #[error("config needs {0} levels, max is {max}", max = crate::config::MAX_LEVELS)]
    TooManyLevels(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

/// Errors raised while configuring a map.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A map needs at least one bucket to compute an index.
    #[error("invalid capacity {0}: a map needs at least one bucket")]
    InvalidCapacity(usize),

    /// Load factor must be finite and in `(0, 1]`.
    #[error("invalid load factor {0}: expected a finite value in (0, 1]")]
    InvalidLoadFactor(f64),
}

impl Error {
    pub fn invalid_capacity(capacity: usize) -> Self {
        Error::InvalidCapacity(capacity)
    }

    pub fn invalid_load_factor(load_factor: f64) -> Self {
        Error::InvalidLoadFactor(load_factor)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

/// Contract violations the engines reject instead of corrupting their state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("a burst is already in flight")]
    BurstInFlight,
    #[error("buffer capacity must be at least 1")]
    ZeroCapacity,
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

pub type EngineResult<T> = Result<T, EngineError>;

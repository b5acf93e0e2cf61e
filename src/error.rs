use thiserror::Error;

/// Errors surfaced by vector construction, operation selection, and the
/// measurement harness.
#[derive(Debug, Error)]
pub enum ReduceError {
    #[error("failed to allocate vector storage for {len} elements")]
    Allocation { len: usize },
    #[error("index {index} out of bounds for vector of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("unknown combine operation symbol '{0}'")]
    UnknownOperation(char),
    #[error("repeat count must be at least 1")]
    InvalidRepeatCount,
    #[error("monotonic clock unavailable: {0}")]
    ClockUnavailable(String),
}

pub type ReduceResult<T> = Result<T, ReduceError>;

use thiserror::Error;

/// Coarse classification of a [`DynamicArrayError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An index was at or past the current length.
    OutOfRange,
    /// An argument was rejected before any state was touched.
    InvalidArgument,
}

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DynamicArrayError {
    #[error("Index {index} is out of bounds for length {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("Initializer of length {len} exceeds fixed capacity {capacity}")]
    CapacityExceeded { len: usize, capacity: usize },
    #[error("Array sizes must match for element-wise arithmetic ({left} != {right})")]
    SizeMismatch { left: usize, right: usize },
    #[error("Division by zero")]
    DivisionByZero,
}

impl DynamicArrayError {
    /// Collapses the variant into one of the two error kinds callers branch on.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::CapacityExceeded { .. } | Self::SizeMismatch { .. } | Self::DivisionByZero => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

pub type Result<T, E = DynamicArrayError> = std::result::Result<T, E>;

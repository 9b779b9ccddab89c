//! Growth buffer error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while sizing a growth buffer.
#[derive(Clone, Debug, PartialEq)]
pub enum BufferError {
    /// The allocator could not provide the requested storage.
    ///
    /// The buffer that reported this error is unchanged.
    AllocationFailed {
        /// Capacity (in elements) the buffer tried to reach.
        requested: usize,
        /// Size of that capacity in bytes, saturating at `usize::MAX`.
        bytes: usize,
    },
    /// The growth factor is NaN, infinite, or below 1.0.
    InvalidGrowthFactor {
        /// The rejected factor.
        value: f32,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested, bytes } => {
                write!(
                    f,
                    "allocation failed: requested capacity {requested} ({bytes} bytes)"
                )
            }
            Self::InvalidGrowthFactor { value } => {
                write!(f, "invalid growth factor {value}: must be finite and >= 1.0")
            }
        }
    }
}

impl Error for BufferError {}

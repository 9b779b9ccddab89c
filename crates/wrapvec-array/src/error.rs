//! Array-specific error types.

use std::error::Error;
use std::fmt;

use wrapvec_buffer::BufferError;

/// Errors that can occur during array operations.
///
/// Every operation that returns one of these leaves the array exactly as
/// it was before the call.
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayError {
    /// The operation needs at least one element.
    EmptyArray {
        /// Name of the rejected operation.
        operation: &'static str,
    },
    /// The buffer could not grow to hold the result.
    Allocation(BufferError),
    /// The construction config was rejected.
    Config(BufferError),
    /// A sub-array range whose normalized end precedes its start.
    InvalidRange {
        /// Normalized start position.
        start: usize,
        /// Normalized end position.
        end: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyArray { operation } => {
                write!(f, "cannot {operation} on an empty array")
            }
            Self::Allocation(err) => write!(f, "array growth failed: {err}"),
            Self::Config(err) => write!(f, "invalid array config: {err}"),
            Self::InvalidRange { start, end } => {
                write!(f, "invalid range: end {end} precedes start {start}")
            }
        }
    }
}

impl Error for ArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Allocation(err) | Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BufferError> for ArrayError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::InvalidGrowthFactor { .. } => Self::Config(err),
            BufferError::AllocationFailed { .. } => Self::Allocation(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_errors_map_to_variants() {
        let alloc = BufferError::AllocationFailed {
            requested: 10,
            bytes: 40,
        };
        assert!(matches!(
            ArrayError::from(alloc),
            ArrayError::Allocation(_)
        ));
        let config = BufferError::InvalidGrowthFactor { value: 0.5 };
        assert!(matches!(ArrayError::from(config), ArrayError::Config(_)));
    }

    #[test]
    fn display_names_operation() {
        let err = ArrayError::EmptyArray { operation: "pop" };
        assert_eq!(err.to_string(), "cannot pop on an empty array");
    }

    #[test]
    fn source_chains_buffer_error() {
        let err = ArrayError::Allocation(BufferError::AllocationFailed {
            requested: 1,
            bytes: 4,
        });
        assert!(err.source().is_some());
        assert!(ArrayError::InvalidRange { start: 2, end: 1 }.source().is_none());
    }
}

//! Stack error types.

use std::error::Error;
use std::fmt;

use wrapvec_buffer::BufferError;

/// Errors returned by [`DynStack`](crate::DynStack) operations.
///
/// A failed operation leaves the stack unchanged.
#[derive(Clone, Debug, PartialEq)]
pub enum StackError {
    /// `peek`, `top`, or a pop on a stack with no elements.
    EmptyStack {
        /// Name of the rejected operation.
        operation: &'static str,
    },
    /// The buffer could not grow to hold the pushed elements.
    Allocation(BufferError),
    /// The construction config was rejected.
    Config(BufferError),
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStack { operation } => {
                write!(f, "cannot {operation} on an empty stack")
            }
            Self::Allocation(err) => write!(f, "stack allocation failed: {err}"),
            Self::Config(err) => write!(f, "invalid stack config: {err}"),
        }
    }
}

impl Error for StackError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Allocation(err) | Self::Config(err) => Some(err),
            Self::EmptyStack { .. } => None,
        }
    }
}

impl From<BufferError> for StackError {
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
    fn display_names_operation() {
        let err = StackError::EmptyStack { operation: "pop" };
        assert_eq!(err.to_string(), "cannot pop on an empty stack");
        assert!(err.source().is_none());
    }

    #[test]
    fn buffer_errors_are_routed() {
        let alloc = BufferError::AllocationFailed {
            requested: 8,
            bytes: 64,
        };
        assert!(matches!(StackError::from(alloc.clone()), StackError::Allocation(_)));
        assert!(StackError::from(alloc).source().is_some());

        let config = BufferError::InvalidGrowthFactor { value: 0.5 };
        assert!(matches!(StackError::from(config), StackError::Config(_)));
    }
}

use std::error::Error;
use std::fmt;

/// Custom error type for vector and matrix contract violations.
///
/// Every variant is raised synchronously at the call that violates the
/// contract; there is no internal recovery or clamping. The enum derives
/// `PartialEq` so tests can assert on the exact failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinAlgError {
    /// Requested container size was zero.
    InvalidSize,
    /// Requested size exceeds the configured maximum for the container type.
    SizeExceeded { requested: usize, max: usize },
    /// Element access with an out-of-bounds coordinate.
    IndexOutOfRange { index: usize, size: usize },
    /// Binary vector operation between vectors of different lengths.
    SizeMismatch { left: usize, right: usize },
    /// Matrix operation between operands of incompatible dimensions.
    DimensionMismatch { left: usize, right: usize },
    /// A token in a textual read could not be parsed as an element.
    Parse { token: String },
    /// The textual source ran out before all elements were read.
    UnexpectedEof,
}

impl fmt::Display for LinAlgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinAlgError::InvalidSize => {
                write!(f, "Container size must be greater than zero")
            }
            LinAlgError::SizeExceeded { requested, max } => {
                write!(f, "Requested size {} exceeds maximum allowed size {}", requested, max)
            }
            LinAlgError::IndexOutOfRange { index, size } => {
                write!(f, "Index {} is out of range for size {}", index, size)
            }
            LinAlgError::SizeMismatch { left, right } => {
                write!(f, "Vectors must be of the same length ({} vs {})", left, right)
            }
            LinAlgError::DimensionMismatch { left, right } => {
                write!(f, "Operand dimensions do not match ({} vs {})", left, right)
            }
            LinAlgError::Parse { token } => {
                write!(f, "Could not parse element from token '{}'", token)
            }
            LinAlgError::UnexpectedEof => {
                write!(f, "Input ended before all elements were read")
            }
        }
    }
}

impl Error for LinAlgError {}

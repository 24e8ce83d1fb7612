//! Error types for fixedtext.

use std::fmt;

/// Result type alias for fixedtext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for fixedtext operations.
///
/// Editor operations clamp their positions and never fail; these errors come
/// from the lower-level string and line accessors that cannot clamp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Cluster or line index outside `[0, len)`.
    OutOfRange { index: usize, len: usize },
    /// Argument rejected by the operation (e.g. an empty replacement cluster).
    InvalidArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::InvalidArgument(s) => write!(f, "invalid argument: {s}"),
        }
    }
}

impl std::error::Error for Error {}

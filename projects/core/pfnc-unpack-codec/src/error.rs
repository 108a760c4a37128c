//! Error types for the unpacking codec.

use core::fmt;
use pfnc_unpack_formats::FormatError;
use thiserror::Error;

/// Result type for unpack operations
pub type UnpackResult<T> = Result<T, UnpackError>;

/// The input length an operation would have accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedLength {
    /// Any multiple of this many bytes.
    MultipleOf(usize),
    /// Exactly this many bytes.
    Exactly(usize),
}

impl fmt::Display for ExpectedLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultipleOf(size) => write!(f, "a multiple of {size} bytes"),
            Self::Exactly(size) => write!(f, "exactly {size} bytes"),
        }
    }
}

/// Errors that can occur while unpacking a raw buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnpackError {
    /// Raw buffer length is inconsistent with the declared format
    #[error("Raw buffer size mismatch: got {actual} bytes, expected {expected}")]
    SizeMismatch {
        /// Length of the buffer that was provided.
        actual: usize,
        /// Length the format would have accepted.
        expected: ExpectedLength,
    },

    /// Output slice does not have room for exactly the unpacked data
    #[error("Output length mismatch: got {actual} elements, expected {expected}")]
    OutputLength {
        /// Length of the output slice that was provided, in its own elements.
        actual: usize,
        /// Length the output slice must have.
        expected: usize,
    },

    /// Frame dimensions do not describe a whole number of samples for the format
    #[error("Invalid frame dimensions {width}x{height} for {symbolic}")]
    InvalidDimensions {
        /// Name of the format.
        symbolic: &'static str,
        /// Frame width in pixels.
        width: usize,
        /// Frame height in pixels.
        height: usize,
    },

    /// The descriptor has no packing scheme this codec can apply
    #[error("No packing scheme for pixel format {0}")]
    UnknownFormat(&'static str),

    /// Resolving the pixel format failed
    #[error(transparent)]
    Format(#[from] FormatError),
}

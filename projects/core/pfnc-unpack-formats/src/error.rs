//! Error types for format resolution and descriptor validation.

use thiserror::Error;

/// Result type for format operations
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors that can occur when resolving or validating pixel formats.
///
/// Resolution errors ([`FormatError::UnknownFormat`], [`FormatError::UnknownCode`]) are
/// normal outcomes for formats outside the catalog. The remaining variants describe
/// descriptors that break the model's invariants; for the built-in catalog these are
/// caught while compiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The symbolic name is not in the catalog
    #[error("Unknown pixel format name")]
    UnknownFormat,

    /// The numeric code is well formed, but not in the catalog
    #[error("Unknown pixel format code: {0:#010x}")]
    UnknownCode(u32),

    /// The numeric code's component class matches neither single nor multiple component
    #[error("Malformed pixel format code: {0:#010x}")]
    MalformedCode(u32),

    /// The unpacked storage element is narrower than the packed one
    #[error("Invalid storage for {symbolic}: unpacked width {unpacked_bits} bits is smaller than packed width {packed_bits} bits")]
    InvalidStorage {
        /// Name of the offending format.
        symbolic: &'static str,
        /// Width of the unpacked storage element.
        unpacked_bits: u32,
        /// Width of the packed storage element.
        packed_bits: u32,
    },

    /// Component count, bit width, layout and code disagree with each other
    #[error("Inconsistent component description for {symbolic}")]
    InconsistentComponents {
        /// Name of the offending format.
        symbolic: &'static str,
    },
}

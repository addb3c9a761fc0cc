//! Unified error type for the wrap cipher contexts.

use core::fmt;

/// Everything a wrap context can report.
///
/// All failures are recoverable values; nothing in this crate panics or
/// aborts on bad input. Validation errors are raised before any key
/// material or buffer is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapError {
    /// Supplied (or requested) key length differs from the variant's
    /// fixed key length. A previously expanded schedule is left intact.
    InvalidKeyLength,
    /// Supplied IV does not fit the context's IV buffer.
    InvalidIvLength,
    /// Input is empty, too short to unwrap, or not semiblock-aligned
    /// where the mode requires it.
    InvalidInputLength,
    /// Output buffer capacity is below what the transform needs.
    OutputBufferTooSmall,
    /// A transform or size query was attempted before any key was set.
    KeyNotSet,
    /// The wrap routine rejected the input (integrity check, padding
    /// check, or malformed ciphertext). Any partial output has been
    /// zeroized and must not be used.
    TransformFailed,
}

impl fmt::Display for WrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeyLength => write!(f, "invalid key length"),
            Self::InvalidIvLength => write!(f, "invalid iv length"),
            Self::InvalidInputLength => write!(f, "invalid input length"),
            Self::OutputBufferTooSmall => write!(f, "output buffer too small"),
            Self::KeyNotSet => write!(f, "key not set"),
            Self::TransformFailed => write!(f, "wrap transform failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WrapError {}

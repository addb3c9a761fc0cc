//! Length and alignment rules for the wrap transforms.
//!
//! Pure pre-checks applied before any cryptographic work. The wrap
//! routine itself remains the authority on the byte count it actually
//! produces; these rules only decide whether a call is worth making and
//! how large an output buffer must be.

use crate::error::WrapError;

/// The 64-bit half-block unit the wrap chaining operates on.
pub const SEMIBLOCK: usize = 8;

/// Fixed overhead of a wrapped blob: one semiblock of integrity prefix.
pub const WRAP_OVERHEAD: usize = SEMIBLOCK;

/// Transform direction, fixed per initialization call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Wrap: plaintext key material in, wrapped blob out.
    Encrypt,
    /// Unwrap: wrapped blob in, plaintext key material out.
    Decrypt,
}

/// Validate an input length for the given direction and padding mode.
///
/// - zero-length input is always illegal;
/// - unwrapping needs at least 16 bytes and semiblock alignment;
/// - fixed mode needs semiblock alignment in either direction.
pub fn check_input_len(direction: Direction, pad: bool, inlen: usize) -> Result<(), WrapError> {
    if inlen == 0 {
        return Err(WrapError::InvalidInputLength);
    }
    if direction == Direction::Decrypt && (inlen < 2 * SEMIBLOCK || inlen % SEMIBLOCK != 0) {
        return Err(WrapError::InvalidInputLength);
    }
    if !pad && inlen % SEMIBLOCK != 0 {
        return Err(WrapError::InvalidInputLength);
    }
    Ok(())
}

/// Required output capacity for a valid input length.
///
/// Encrypting always adds one semiblock of overhead, after rounding the
/// input up to a semiblock multiple in padded mode. Decrypting removes
/// exactly one semiblock in fixed mode; in padded mode the value is an
/// upper bound, since the true length is only known once the unwrap has
/// run and stripped the padding. Callers sizing a buffer from this in
/// padded mode over-allocate on purpose.
pub fn required_output_len(direction: Direction, pad: bool, inlen: usize) -> usize {
    match direction {
        Direction::Encrypt => {
            let body = if pad {
                inlen.div_ceil(SEMIBLOCK) * SEMIBLOCK
            } else {
                inlen
            };
            body + WRAP_OVERHEAD
        }
        Direction::Decrypt => inlen.saturating_sub(WRAP_OVERHEAD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_input_always_rejected() {
        for dir in [Direction::Encrypt, Direction::Decrypt] {
            for pad in [false, true] {
                assert_eq!(
                    check_input_len(dir, pad, 0),
                    Err(WrapError::InvalidInputLength)
                );
            }
        }
    }

    #[test]
    fn decrypt_needs_16_and_alignment() {
        for pad in [false, true] {
            assert!(check_input_len(Direction::Decrypt, pad, 8).is_err());
            assert!(check_input_len(Direction::Decrypt, pad, 15).is_err());
            assert!(check_input_len(Direction::Decrypt, pad, 17).is_err());
            assert!(check_input_len(Direction::Decrypt, pad, 16).is_ok());
            assert!(check_input_len(Direction::Decrypt, pad, 40).is_ok());
        }
    }

    #[test]
    fn fixed_mode_needs_alignment_both_directions() {
        assert!(check_input_len(Direction::Encrypt, false, 7).is_err());
        assert!(check_input_len(Direction::Encrypt, false, 8).is_ok());
        assert!(check_input_len(Direction::Encrypt, false, 33).is_err());
        assert!(check_input_len(Direction::Decrypt, false, 33).is_err());
    }

    #[test]
    fn padded_mode_encrypt_accepts_any_positive_length() {
        for inlen in [1, 7, 8, 9, 31, 32, 33] {
            assert!(check_input_len(Direction::Encrypt, true, inlen).is_ok());
        }
    }

    #[test]
    fn encrypt_sizes() {
        // fixed: exactly L + 8
        assert_eq!(required_output_len(Direction::Encrypt, false, 32), 40);
        assert_eq!(required_output_len(Direction::Encrypt, false, 8), 16);
        // padded: round up, then + 8
        assert_eq!(required_output_len(Direction::Encrypt, true, 7), 16);
        assert_eq!(required_output_len(Direction::Encrypt, true, 8), 16);
        assert_eq!(required_output_len(Direction::Encrypt, true, 9), 24);
        assert_eq!(required_output_len(Direction::Encrypt, true, 20), 32);
    }

    #[test]
    fn decrypt_sizes() {
        assert_eq!(required_output_len(Direction::Decrypt, false, 40), 32);
        // padded mode: upper bound, not exact
        assert_eq!(required_output_len(Direction::Decrypt, true, 16), 8);
    }
}

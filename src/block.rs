//! AES key schedules, bound to one direction.
//!
//! A wrap context owns exactly one expanded schedule: an encrypt
//! schedule when wrapping, a decrypt schedule when unwrapping, chosen
//! when the key is supplied. The wrap routines in [`crate::kw`] only
//! ever see a single-block closure, so they stay independent of the
//! concrete cipher.
//!
//! The `aes` crate's `zeroize` feature cleanses the expanded round keys
//! when a schedule is dropped.

use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128Dec, Aes128Enc, Aes192Dec, Aes192Enc, Aes256Dec, Aes256Enc, Block};

use crate::error::WrapError;
use crate::policy::Direction;

/// AES block width in bytes.
pub(crate) const BLOCK_BYTES: usize = 16;

/// One expanded AES key schedule, keyed by size and direction.
pub(crate) enum KeySchedule {
    Enc128(Aes128Enc),
    Enc192(Aes192Enc),
    Enc256(Aes256Enc),
    Dec128(Aes128Dec),
    Dec192(Aes192Dec),
    Dec256(Aes256Dec),
}

impl KeySchedule {
    /// Expand `key` for `direction`. The caller has already matched the
    /// key length against the variant's configured length; anything
    /// else is rejected here as well rather than trusted.
    pub(crate) fn expand(key: &[u8], direction: Direction) -> Result<Self, WrapError> {
        let schedule = match (key.len(), direction) {
            (16, Direction::Encrypt) => Self::Enc128(
                Aes128Enc::new_from_slice(key).map_err(|_| WrapError::InvalidKeyLength)?,
            ),
            (24, Direction::Encrypt) => Self::Enc192(
                Aes192Enc::new_from_slice(key).map_err(|_| WrapError::InvalidKeyLength)?,
            ),
            (32, Direction::Encrypt) => Self::Enc256(
                Aes256Enc::new_from_slice(key).map_err(|_| WrapError::InvalidKeyLength)?,
            ),
            (16, Direction::Decrypt) => Self::Dec128(
                Aes128Dec::new_from_slice(key).map_err(|_| WrapError::InvalidKeyLength)?,
            ),
            (24, Direction::Decrypt) => Self::Dec192(
                Aes192Dec::new_from_slice(key).map_err(|_| WrapError::InvalidKeyLength)?,
            ),
            (32, Direction::Decrypt) => Self::Dec256(
                Aes256Dec::new_from_slice(key).map_err(|_| WrapError::InvalidKeyLength)?,
            ),
            _ => return Err(WrapError::InvalidKeyLength),
        };
        Ok(schedule)
    }

    /// Run the bound single-block routine in place.
    pub(crate) fn apply(&self, bytes: &mut [u8; BLOCK_BYTES]) {
        let block = Block::from_mut_slice(bytes);
        match self {
            Self::Enc128(c) => c.encrypt_block(block),
            Self::Enc192(c) => c.encrypt_block(block),
            Self::Enc256(c) => c.encrypt_block(block),
            Self::Dec128(c) => c.decrypt_block(block),
            Self::Dec192(c) => c.decrypt_block(block),
            Self::Dec256(c) => c.decrypt_block(block),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn expand_rejects_odd_lengths() {
        for len in [0, 8, 15, 17, 31, 33, 64] {
            let key = vec![0u8; len];
            assert_eq!(
                KeySchedule::expand(&key, Direction::Encrypt).err(),
                Some(WrapError::InvalidKeyLength)
            );
        }
    }

    #[test]
    fn encrypt_then_decrypt_is_identity() {
        let key = [0x5Au8; 16];
        let enc = KeySchedule::expand(&key, Direction::Encrypt).unwrap();
        let dec = KeySchedule::expand(&key, Direction::Decrypt).unwrap();

        let mut block = *b"semiblock pair!!";
        let original = block;
        enc.apply(&mut block);
        assert_ne!(block, original);
        dec.apply(&mut block);
        assert_eq!(block, original);
    }
}

//! Wrap context: per-operation state, lifecycle, and transform dispatch.
//!
//! A context is created from a [`WrapVariant`](crate::WrapVariant),
//! initialized with a direction plus key and/or IV (re-entrant, so key
//! and IV can be rotated independently), then asked for output sizes
//! and fed exactly one input region per transform call. The transform
//! is not streaming: each call consumes a whole wrapped region.
//!
//! Contexts are single-owner. The `&mut self` transform surface makes
//! concurrent mutation unrepresentable; use one context per thread or
//! per operation.

use zeroize::Zeroize;

use crate::block::{KeySchedule, BLOCK_BYTES};
use crate::error::WrapError;
use crate::kw;
use crate::policy::{self, Direction};
use crate::variant::PAD_IV_LEN;

/// Capacity of the in-context IV buffer: the longest configured IV
/// (unpadded mode, one semiblock).
const IV_CAPACITY: usize = policy::SEMIBLOCK;

/// The four wrap routines, selected once per initialization from
/// `(direction, padding mode)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WrapAlgo {
    Wrap,
    WrapPad,
    Unwrap,
    UnwrapPad,
}

impl WrapAlgo {
    fn select(direction: Direction, pad: bool) -> Self {
        match (direction, pad) {
            (Direction::Encrypt, false) => Self::Wrap,
            (Direction::Encrypt, true) => Self::WrapPad,
            (Direction::Decrypt, false) => Self::Unwrap,
            (Direction::Decrypt, true) => Self::UnwrapPad,
        }
    }

    /// The single point where a wrap routine runs. `None` is the
    /// routine's rejection signal; the dispatcher maps it to
    /// [`WrapError::TransformFailed`].
    fn run(
        self,
        schedule: &KeySchedule,
        iv: Option<&[u8]>,
        out: &mut [u8],
        input: &[u8],
    ) -> Option<usize> {
        let block = |b: &mut [u8; BLOCK_BYTES]| schedule.apply(b);
        match self {
            Self::Wrap => kw::wrap_fixed(iv, out, input, &block),
            Self::WrapPad => kw::wrap_pad(iv, out, input, &block),
            Self::Unwrap => kw::unwrap_fixed(iv, out, input, &block),
            Self::UnwrapPad => kw::unwrap_pad(iv, out, input, &block),
        }
    }
}

/// Stateful cipher context for one key-wrap variant.
pub struct WrapContext {
    key_len: usize,
    iv_len: usize,
    pad: bool,
    direction: Option<Direction>,
    algo: Option<WrapAlgo>,
    schedule: Option<KeySchedule>,
    iv: [u8; IV_CAPACITY],
    iv_set: bool,
}

impl WrapContext {
    /// Zeroed context for a variant's configuration. The padding mode
    /// is derived from the configured IV length and never changes.
    pub(crate) fn new(key_len: usize, iv_len: usize) -> Self {
        Self {
            key_len,
            iv_len,
            pad: iv_len == PAD_IV_LEN,
            direction: None,
            algo: None,
            schedule: None,
            iv: [0u8; IV_CAPACITY],
            iv_set: false,
        }
    }

    /// Initialize for wrapping. See [`Self::decrypt_init`] for the
    /// shared key/IV contract.
    pub fn encrypt_init(
        &mut self,
        key: Option<&[u8]>,
        iv: Option<&[u8]>,
    ) -> Result<(), WrapError> {
        self.init(Direction::Encrypt, key, iv)
    }

    /// Initialize for unwrapping.
    ///
    /// Both parameters are optional and only the supplied ones are
    /// touched, so repeated calls rotate key and IV independently. A
    /// supplied key must match the variant's key length exactly; on
    /// mismatch the call fails and a previously expanded schedule stays
    /// usable. A supplied IV is copied as given; its width is the
    /// caller's contract and is only enforced when the transform runs.
    pub fn decrypt_init(
        &mut self,
        key: Option<&[u8]>,
        iv: Option<&[u8]>,
    ) -> Result<(), WrapError> {
        self.init(Direction::Decrypt, key, iv)
    }

    fn init(
        &mut self,
        direction: Direction,
        key: Option<&[u8]>,
        iv: Option<&[u8]>,
    ) -> Result<(), WrapError> {
        self.direction = Some(direction);
        self.algo = Some(WrapAlgo::select(direction, self.pad));

        if let Some(iv) = iv {
            if iv.len() > IV_CAPACITY {
                return Err(WrapError::InvalidIvLength);
            }
            self.iv[..iv.len()].copy_from_slice(iv);
            self.iv_len = iv.len();
            self.iv_set = true;
        }
        if let Some(key) = key {
            if key.len() != self.key_len {
                return Err(WrapError::InvalidKeyLength);
            }
            self.schedule = Some(KeySchedule::expand(key, direction)?);
        }
        Ok(())
    }

    /// Output capacity needed for an input of `inlen` bytes, without
    /// performing any cryptographic work.
    ///
    /// Exact for every path except padded-mode decryption, where it is
    /// an upper bound: the unpadded length is only known once
    /// [`Self::transform`] has run.
    pub fn required_output_len(&self, inlen: usize) -> Result<usize, WrapError> {
        let direction = self.direction.ok_or(WrapError::KeyNotSet)?;
        policy::check_input_len(direction, self.pad, inlen)?;
        Ok(policy::required_output_len(direction, self.pad, inlen))
    }

    /// Wrap or unwrap one whole input region into `out`, returning the
    /// number of bytes written.
    ///
    /// `out` must be at least `input.len()` bytes in either direction
    /// (a conservative capacity contract that holds without running the
    /// size query) and, when wrapping, at least the negotiated size
    /// from [`Self::required_output_len`].
    ///
    /// On any error the context state is unchanged; after
    /// [`WrapError::TransformFailed`] the output buffer has been
    /// zeroized by the failing routine and holds nothing usable.
    pub fn transform(&mut self, out: &mut [u8], input: &[u8]) -> Result<usize, WrapError> {
        if out.len() < input.len() {
            return Err(WrapError::OutputBufferTooSmall);
        }
        let direction = self.direction.ok_or(WrapError::KeyNotSet)?;
        policy::check_input_len(direction, self.pad, input.len())?;
        if out.len() < policy::required_output_len(direction, self.pad, input.len()) {
            return Err(WrapError::OutputBufferTooSmall);
        }
        let schedule = self.schedule.as_ref().ok_or(WrapError::KeyNotSet)?;
        let algo = self.algo.ok_or(WrapError::KeyNotSet)?;

        let iv = if self.iv_set {
            Some(&self.iv[..self.iv_len])
        } else {
            None
        };
        algo.run(schedule, iv, out, input)
            .ok_or(WrapError::TransformFailed)
    }

    /// Terminal no-op: the wrap transform consumes its whole input in
    /// one [`Self::transform`] call, so finalizing never produces
    /// bytes. Exists for protocol symmetry with generic cipher
    /// contexts and succeeds in any state.
    pub fn finalize(&mut self, _out: &mut [u8]) -> Result<usize, WrapError> {
        Ok(0)
    }

    /// Accepts only the variant's fixed key length; wrap ciphers do not
    /// support runtime key resizing.
    pub fn set_key_len(&mut self, len: usize) -> Result<(), WrapError> {
        if len != self.key_len {
            return Err(WrapError::InvalidKeyLength);
        }
        Ok(())
    }

    /// Configured key length in bytes.
    pub fn key_len(&self) -> usize {
        self.key_len
    }

    /// Current IV length in bytes (the configured length until an IV of
    /// a different width is supplied).
    pub fn iv_len(&self) -> usize {
        self.iv_len
    }

    /// Whether this context uses the padded (KWP) construction.
    pub fn is_padded(&self) -> bool {
        self.pad
    }

    /// Direction of the last initialization, if any.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }
}

impl Drop for WrapContext {
    fn drop(&mut self) {
        // Schedules zeroize themselves on drop (aes "zeroize" feature);
        // the IV buffer is ours to cleanse.
        self.iv.zeroize();
        self.iv_set = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::AES_128_WRAP;

    #[test]
    fn algo_selection_is_exhaustive() {
        assert_eq!(
            WrapAlgo::select(Direction::Encrypt, false),
            WrapAlgo::Wrap
        );
        assert_eq!(
            WrapAlgo::select(Direction::Encrypt, true),
            WrapAlgo::WrapPad
        );
        assert_eq!(
            WrapAlgo::select(Direction::Decrypt, false),
            WrapAlgo::Unwrap
        );
        assert_eq!(
            WrapAlgo::select(Direction::Decrypt, true),
            WrapAlgo::UnwrapPad
        );
    }

    #[test]
    fn transform_before_init_reports_key_not_set() {
        let mut ctx = AES_128_WRAP.create();
        let mut out = [0u8; 24];
        assert_eq!(
            ctx.transform(&mut out, &[0u8; 16]),
            Err(WrapError::KeyNotSet)
        );
        assert_eq!(ctx.required_output_len(16), Err(WrapError::KeyNotSet));
    }

    #[test]
    fn iv_only_init_still_needs_a_key() {
        let mut ctx = AES_128_WRAP.create();
        ctx.encrypt_init(None, Some(&[0u8; 8])).unwrap();
        let mut out = [0u8; 24];
        assert_eq!(
            ctx.transform(&mut out, &[0u8; 16]),
            Err(WrapError::KeyNotSet)
        );
    }

    #[test]
    fn oversized_iv_rejected() {
        let mut ctx = AES_128_WRAP.create();
        assert_eq!(
            ctx.encrypt_init(None, Some(&[0u8; 9])),
            Err(WrapError::InvalidIvLength)
        );
    }
}

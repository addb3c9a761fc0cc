//! The six wrap-cipher variants and their static parameters.
//!
//! Three AES key sizes crossed with the two constructions. A variant
//! only carries configuration; all state lives in the
//! [`WrapContext`]s it creates. Variant values are `const`, immutable,
//! and safe to share between any number of contexts and threads.

use crate::context::WrapContext;
use crate::policy::SEMIBLOCK;

/// Configured IV length signalling the padded (KWP) construction.
pub const PAD_IV_LEN: usize = 4;

/// Configured IV length of the fixed (KW) construction.
pub const NOPAD_IV_LEN: usize = SEMIBLOCK;

/// One entry of the variant registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapVariant {
    key_bits: usize,
    padded: bool,
}

/// Static per-variant parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantParams {
    /// Cipher name, e.g. `"AES-256-WRAP-PAD"`.
    pub name: &'static str,
    /// Fixed key length in bytes.
    pub key_len: usize,
    /// Configured IV length in bytes (8 fixed, 4 padded).
    pub iv_len: usize,
    /// Transform granularity in bytes: the wrap constructions are
    /// semiblock-oriented.
    pub block_size: usize,
    /// Whether the variant uses the padded construction.
    pub padded: bool,
}

impl WrapVariant {
    /// Factory behind the six registry constants.
    pub(crate) const fn new(key_bits: usize, padded: bool) -> Self {
        Self { key_bits, padded }
    }

    /// Create a fresh context configured for this variant. Creation
    /// cannot fail.
    pub fn create(&self) -> WrapContext {
        WrapContext::new(self.key_len(), self.iv_len())
    }

    /// Fixed key length in bytes.
    pub fn key_len(&self) -> usize {
        self.key_bits / 8
    }

    /// Fixed key length in bits.
    pub fn key_bits(&self) -> usize {
        self.key_bits
    }

    /// Configured IV length in bytes; doubles as the padding-mode
    /// signal (4 padded, 8 fixed).
    pub fn iv_len(&self) -> usize {
        if self.padded {
            PAD_IV_LEN
        } else {
            NOPAD_IV_LEN
        }
    }

    /// Whether the variant uses the padded construction.
    pub fn padded(&self) -> bool {
        self.padded
    }

    /// Cipher name of the variant.
    pub fn name(&self) -> &'static str {
        match (self.key_bits, self.padded) {
            (128, false) => "AES-128-WRAP",
            (192, false) => "AES-192-WRAP",
            (256, false) => "AES-256-WRAP",
            (128, true) => "AES-128-WRAP-PAD",
            (192, true) => "AES-192-WRAP-PAD",
            _ => "AES-256-WRAP-PAD",
        }
    }

    /// Read-only parameter block for this variant.
    pub fn params(&self) -> VariantParams {
        VariantParams {
            name: self.name(),
            key_len: self.key_len(),
            iv_len: self.iv_len(),
            block_size: SEMIBLOCK,
            padded: self.padded,
        }
    }

    /// Look a variant up by key size and padding mode.
    pub fn find(key_bits: usize, padded: bool) -> Option<&'static WrapVariant> {
        VARIANTS
            .iter()
            .find(|v| v.key_bits == key_bits && v.padded == padded)
    }

    /// Look a variant up by cipher name.
    pub fn find_by_name(name: &str) -> Option<&'static WrapVariant> {
        VARIANTS.iter().find(|v| v.name() == name)
    }
}

/// AES-128 fixed wrap (RFC 3394).
pub const AES_128_WRAP: WrapVariant = WrapVariant::new(128, false);
/// AES-192 fixed wrap (RFC 3394).
pub const AES_192_WRAP: WrapVariant = WrapVariant::new(192, false);
/// AES-256 fixed wrap (RFC 3394).
pub const AES_256_WRAP: WrapVariant = WrapVariant::new(256, false);
/// AES-128 padded wrap (RFC 5649).
pub const AES_128_WRAP_PAD: WrapVariant = WrapVariant::new(128, true);
/// AES-192 padded wrap (RFC 5649).
pub const AES_192_WRAP_PAD: WrapVariant = WrapVariant::new(192, true);
/// AES-256 padded wrap (RFC 5649).
pub const AES_256_WRAP_PAD: WrapVariant = WrapVariant::new(256, true);

/// The full registry.
pub static VARIANTS: [WrapVariant; 6] = [
    AES_128_WRAP,
    AES_192_WRAP,
    AES_256_WRAP,
    AES_128_WRAP_PAD,
    AES_192_WRAP_PAD,
    AES_256_WRAP_PAD,
];

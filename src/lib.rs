//! # aes-wrap
//!
//! AES key-wrap cipher contexts for protecting key material under a
//! key-encryption key.
//!
//! Six variants: 128/192/256-bit KEKs crossed with the two NIST
//! SP 800-38F constructions, KW (RFC 3394, input a multiple of
//! 8 bytes) and KWP (RFC 5649, input of any positive length).
//!
//! ## Quick Start
//!
//! ```rust
//! use aes_wrap::AES_256_WRAP;
//!
//! let kek = [0x01u8; 32];
//! let secret = [0x42u8; 32];
//!
//! let mut ctx = AES_256_WRAP.create();
//! ctx.encrypt_init(Some(&kek), None)?;
//! let mut wrapped = vec![0u8; ctx.required_output_len(secret.len())?];
//! let n = ctx.transform(&mut wrapped, &secret)?;
//! assert_eq!(n, 40);
//!
//! let mut ctx = AES_256_WRAP.create();
//! ctx.decrypt_init(Some(&kek), None)?;
//! // unwrap buffers are sized by the input length (conservative
//! // contract); the size query reports the plaintext size to expect
//! assert_eq!(ctx.required_output_len(n)?, 32);
//! let mut unwrapped = vec![0u8; n];
//! let m = ctx.transform(&mut unwrapped, &wrapped[..n])?;
//! assert_eq!(&unwrapped[..m], &secret);
//! # Ok::<(), aes_wrap::WrapError>(())
//! ```
//!
//! ## Properties
//!
//! - **Fixed key lengths**: each variant's KEK length is immutable
//! - **Size negotiation**: query output capacity before transforming
//! - **Integrity on unwrap**: tampered blobs fail, output zeroized
//! - **Cleansing**: IVs and key schedules are zeroized on drop
//!
//! ## What's NOT Provided
//!
//! - Key management or randomness (keys and IVs are caller-supplied)
//! - Streaming: each transform call consumes one whole region
//! - Constant-time guarantees beyond the integrity comparisons

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![doc(html_root_url = "https://docs.rs/aes-wrap/0.1.0")]

extern crate alloc;

// ---------------------------------------------------------------------------
// Internal modules (not part of public API)
// ---------------------------------------------------------------------------

mod block;
mod kw;

// ---------------------------------------------------------------------------
// Public surface
// ---------------------------------------------------------------------------

mod context;
mod error;
mod policy;
mod variant;

pub use context::WrapContext;
pub use error::WrapError;
pub use policy::{Direction, SEMIBLOCK, WRAP_OVERHEAD};
pub use variant::{
    VariantParams,
    WrapVariant,
    VARIANTS,
    // The fixed (RFC 3394) family
    AES_128_WRAP,
    AES_192_WRAP,
    AES_256_WRAP,
    // The padded (RFC 5649) family
    AES_128_WRAP_PAD,
    AES_192_WRAP_PAD,
    AES_256_WRAP_PAD,
    NOPAD_IV_LEN,
    PAD_IV_LEN,
};

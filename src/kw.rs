//! 128-bit block key-wrap routines.
//!
//! The chaining construction standardized in NIST SP 800-38F, in both
//! forms: KW (RFC 3394, fixed semiblock-aligned input) and KWP
//! (RFC 5649, zero-padded arbitrary-length input). Each routine takes
//! the single-block cipher as a closure, so nothing here depends on the
//! concrete cipher; the context layer binds the closure to its own key
//! schedule.
//!
//! Contract mirrored by all four routines: write into `out`, return
//! `Some(bytes_written)`, or `None` when the input is malformed or an
//! integrity/padding check fails. On a failed unwrap the recovered
//! bytes are zeroized before returning; callers must not read `out`
//! after a `None`.

extern crate alloc;
use alloc::vec;

use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, Zeroizing};

use crate::block::BLOCK_BYTES;
use crate::policy::SEMIBLOCK;

/// Default integrity check value for the fixed wrap (RFC 3394 §2.2.3.1).
const DEFAULT_ICV: [u8; SEMIBLOCK] = [0xA6; SEMIBLOCK];

/// Default prefix of the alternative IV for the padded wrap
/// (RFC 5649 §3); the low half carries the plaintext length.
const DEFAULT_AIV_PREFIX: [u8; 4] = [0xA6, 0x59, 0x59, 0xA6];

/// Upper bound on wrappable input (SP 800-38F).
const WRAP_MAX: usize = 1 << 31;

/// Wrap semiblock-aligned input. `icv` must be one semiblock when
/// supplied. Writes `input.len() + 8` bytes.
pub(crate) fn wrap_fixed<F>(
    icv: Option<&[u8]>,
    out: &mut [u8],
    input: &[u8],
    block: &F,
) -> Option<usize>
where
    F: Fn(&mut [u8; BLOCK_BYTES]),
{
    let inlen = input.len();
    if inlen < SEMIBLOCK || inlen % SEMIBLOCK != 0 || inlen > WRAP_MAX {
        return None;
    }
    let outlen = inlen + SEMIBLOCK;
    if out.len() < outlen {
        return None;
    }

    let mut a: [u8; SEMIBLOCK] = match icv {
        Some(v) => v.try_into().ok()?,
        None => DEFAULT_ICV,
    };
    let n = inlen / SEMIBLOCK;

    // R[1..n] live in the output buffer; A is chained through them.
    out[SEMIBLOCK..outlen].copy_from_slice(input);
    let mut b = [0u8; BLOCK_BYTES];
    for j in 0..6u64 {
        for i in 0..n {
            let r = SEMIBLOCK * (i + 1);
            b[..SEMIBLOCK].copy_from_slice(&a);
            b[SEMIBLOCK..].copy_from_slice(&out[r..r + SEMIBLOCK]);
            block(&mut b);

            // A = MSB(64, B) ^ t, t = n*j + i + 1
            let t = (n as u64) * j + (i as u64) + 1;
            a.copy_from_slice(&b[..SEMIBLOCK]);
            for (ak, tk) in a.iter_mut().zip(t.to_be_bytes()) {
                *ak ^= tk;
            }
            out[r..r + SEMIBLOCK].copy_from_slice(&b[SEMIBLOCK..]);
        }
    }
    out[..SEMIBLOCK].copy_from_slice(&a);
    b.zeroize();
    Some(outlen)
}

/// Inverse rounds without the ICV comparison; returns the recovered
/// check value and leaves `input.len() - 8` plaintext bytes in `out`.
fn unwrap_raw<F>(out: &mut [u8], input: &[u8], block: &F) -> Option<[u8; SEMIBLOCK]>
where
    F: Fn(&mut [u8; BLOCK_BYTES]),
{
    let inlen = input.len();
    if inlen < 2 * SEMIBLOCK || inlen % SEMIBLOCK != 0 || inlen > WRAP_MAX + SEMIBLOCK {
        return None;
    }
    let outlen = inlen - SEMIBLOCK;
    if out.len() < outlen {
        return None;
    }

    let mut a: [u8; SEMIBLOCK] = input[..SEMIBLOCK].try_into().ok()?;
    let n = outlen / SEMIBLOCK;

    out[..outlen].copy_from_slice(&input[SEMIBLOCK..]);
    let mut b = [0u8; BLOCK_BYTES];
    for j in (0..6u64).rev() {
        for i in (0..n).rev() {
            let r = SEMIBLOCK * i;
            let t = (n as u64) * j + (i as u64) + 1;
            for (ak, tk) in a.iter_mut().zip(t.to_be_bytes()) {
                *ak ^= tk;
            }
            b[..SEMIBLOCK].copy_from_slice(&a);
            b[SEMIBLOCK..].copy_from_slice(&out[r..r + SEMIBLOCK]);
            block(&mut b);

            a.copy_from_slice(&b[..SEMIBLOCK]);
            out[r..r + SEMIBLOCK].copy_from_slice(&b[SEMIBLOCK..]);
        }
    }
    b.zeroize();
    Some(a)
}

/// Unwrap semiblock-aligned ciphertext and verify the integrity check
/// value. `icv` must be one semiblock when supplied. Writes
/// `input.len() - 8` bytes on success.
pub(crate) fn unwrap_fixed<F>(
    icv: Option<&[u8]>,
    out: &mut [u8],
    input: &[u8],
    block: &F,
) -> Option<usize>
where
    F: Fn(&mut [u8; BLOCK_BYTES]),
{
    let expected: [u8; SEMIBLOCK] = match icv {
        Some(v) => v.try_into().ok()?,
        None => DEFAULT_ICV,
    };
    let got = unwrap_raw(out, input, block)?;
    let outlen = input.len() - SEMIBLOCK;
    if bool::from(got.ct_eq(&expected)) {
        Some(outlen)
    } else {
        out[..outlen].zeroize();
        None
    }
}

/// Wrap input of any positive length, zero-padding it to a semiblock
/// multiple. `aiv` must be 4 bytes when supplied. Writes
/// `round8(input.len()) + 8` bytes.
pub(crate) fn wrap_pad<F>(
    aiv: Option<&[u8]>,
    out: &mut [u8],
    input: &[u8],
    block: &F,
) -> Option<usize>
where
    F: Fn(&mut [u8; BLOCK_BYTES]),
{
    let inlen = input.len();
    if inlen == 0 || inlen > WRAP_MAX {
        return None;
    }
    let prefix: [u8; 4] = match aiv {
        Some(v) => v.try_into().ok()?,
        None => DEFAULT_AIV_PREFIX,
    };
    let padded = inlen.div_ceil(SEMIBLOCK) * SEMIBLOCK;
    let outlen = padded + SEMIBLOCK;
    if out.len() < outlen {
        return None;
    }

    let mut icv = [0u8; SEMIBLOCK];
    icv[..4].copy_from_slice(&prefix);
    icv[4..].copy_from_slice(&(inlen as u32).to_be_bytes());

    if padded == SEMIBLOCK {
        // Single semiblock: one ECB block of AIV || padded plaintext.
        let mut b = [0u8; BLOCK_BYTES];
        b[..SEMIBLOCK].copy_from_slice(&icv);
        b[SEMIBLOCK..SEMIBLOCK + inlen].copy_from_slice(input);
        block(&mut b);
        out[..BLOCK_BYTES].copy_from_slice(&b);
        b.zeroize();
        Some(BLOCK_BYTES)
    } else {
        let mut buf = Zeroizing::new(vec![0u8; padded]);
        buf[..inlen].copy_from_slice(input);
        wrap_fixed(Some(&icv), out, &buf, block)
    }
}

/// Unwrap padded ciphertext: verify the AIV prefix, the embedded length
/// and the zero padding, and report the embedded (unpadded) length.
/// `aiv` must be 4 bytes when supplied.
pub(crate) fn unwrap_pad<F>(
    aiv: Option<&[u8]>,
    out: &mut [u8],
    input: &[u8],
    block: &F,
) -> Option<usize>
where
    F: Fn(&mut [u8; BLOCK_BYTES]),
{
    let inlen = input.len();
    if inlen < 2 * SEMIBLOCK || inlen % SEMIBLOCK != 0 {
        return None;
    }
    let prefix: [u8; 4] = match aiv {
        Some(v) => v.try_into().ok()?,
        None => DEFAULT_AIV_PREFIX,
    };
    let padded = inlen - SEMIBLOCK;
    if out.len() < padded {
        return None;
    }

    let got: [u8; SEMIBLOCK] = if inlen == BLOCK_BYTES {
        // Single-block form: decrypt once, split AIV from plaintext.
        let mut b: [u8; BLOCK_BYTES] = input.try_into().ok()?;
        block(&mut b);
        let mut g = [0u8; SEMIBLOCK];
        g.copy_from_slice(&b[..SEMIBLOCK]);
        out[..SEMIBLOCK].copy_from_slice(&b[SEMIBLOCK..]);
        b.zeroize();
        g
    } else {
        match unwrap_raw(out, input, block) {
            Some(a) => a,
            None => return None,
        }
    };

    // Accumulate all checks before branching.
    let mut ok = got[..4].ct_eq(&prefix);
    let ptext_len = u32::from_be_bytes(got[4..].try_into().ok()?) as usize;
    let in_range = ptext_len > padded - SEMIBLOCK && ptext_len <= padded;
    ok &= Choice::from(u8::from(in_range));

    let tail_start = if in_range { ptext_len } else { padded };
    let mut tail = 0u8;
    for &byte in &out[tail_start..padded] {
        tail |= byte;
    }
    ok &= tail.ct_eq(&0);

    if bool::from(ok) {
        Some(ptext_len)
    } else {
        out[..padded].zeroize();
        None
    }
}

//! The up2bit codec: a canonical, length-preserving 2-bits-per-base packing
//! of a short nucleotide string into a single `u64`.
//!
//! The bit layout is: a high "cap" bit set to 1, followed toward the low end
//! by the base encodings in reverse order, so the lowest 2-bit group holds
//! the *first* base of the fragment. The cap bit doubles as a length marker:
//! the position of the highest set bit tells us how many bases are packed.

use crate::error::DnaHashError;

/// The bit reserved for the cap marker.
const UP_BIT: u64 = 1;

/// Bits spent encoding a single base.
const BITS_PER_BASE: u32 = 2;

/// Target integer width in bits.
const WIDTH: u32 = u64::BITS;

/// Maximum number of bases a single fragment can hold: one bit is reserved
/// for the cap, the rest is split into 2-bit base groups.
pub const MAX_FRAGMENT_LEN: usize = ((WIDTH - 1) / BITS_PER_BASE) as usize;

const BASE_DECODE_MAP: [u8; 4] = [b'A', b'C', b'T', b'G'];

#[inline]
fn base_encode(b: u8) -> Result<u64, DnaHashError> {
    match b {
        b'A' => Ok(0),
        b'C' => Ok(1),
        b'T' => Ok(2),
        b'G' => Ok(3),
        _ => Err(DnaHashError::InvalidBase(0)),
    }
}

/// Pack a fragment of at most [`MAX_FRAGMENT_LEN`] bases into its up2bit
/// representation.
///
/// The empty string encodes to exactly 1 (the cap bit alone). Fails with
/// [`DnaHashError::InvalidBase`] carrying the offset of the first character
/// outside `{A,C,T,G}`.
pub fn encode(fragment: &str) -> Result<u64, DnaHashError> {
    let bytes = fragment.as_bytes();
    let mut h: u64 = UP_BIT;

    for i in (0..bytes.len()).rev() {
        let code = base_encode(bytes[i]).map_err(|_| DnaHashError::InvalidBase(i))?;
        h <<= BITS_PER_BASE;
        h += code;
    }

    Ok(h)
}

/// Unpack an up2bit integer back into its original fragment.
///
/// `decode(1)` is the empty string. Round-trips exactly with [`encode`] for
/// every valid fragment of length at most [`MAX_FRAGMENT_LEN`].
pub fn decode(mut h: u64) -> String {
    debug_assert!(h >= 1, "up2bit integers are always >= 1");

    // Position of the cap bit, in bits.
    let cap_pos = WIDTH - 1 - h.leading_zeros();
    let n_bases = (cap_pos / BITS_PER_BASE) as usize;

    // Strip the cap bit so only the base groups remain.
    h &= !(1u64 << cap_pos);

    let mut seq = String::with_capacity(n_bases);
    for _ in 0..n_bases {
        let code = h & 0b11;
        seq.push(BASE_DECODE_MAP[code as usize] as char);
        h >>= BITS_PER_BASE;
    }
    seq
}

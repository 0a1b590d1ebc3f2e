//! The key codec: composes the up2bit codec over the fragmenter so that an
//! arbitrary-length sequence maps to an ordered tuple of packed integers.

use crate::codec;
use crate::error::DnaHashError;
use crate::fragment::Fragmenter;
use smallvec::SmallVec;

/// A packed sequence key. Most real k-mers fit in a single fragment, so the
/// inline capacity of one `u64` avoids a heap allocation for the common
/// case; longer sequences spill to the heap transparently.
pub type Key = SmallVec<[u64; 1]>;

/// Encode a variable-length sequence as an ordered tuple of up2bit integers,
/// splitting it into [`codec::MAX_FRAGMENT_LEN`]-base fragments first.
pub fn encode_key(seq: &str) -> Result<Key, DnaHashError> {
    let mut key = Key::new();
    let mut offset = 0usize;

    for fragment in Fragmenter::new(seq, codec::MAX_FRAGMENT_LEN) {
        let h = codec::encode(fragment).map_err(|e| match e {
            DnaHashError::InvalidBase(local) => DnaHashError::InvalidBase(offset + local),
            other => other,
        })?;
        key.push(h);
        offset += fragment.len();
    }

    Ok(key)
}

/// Decode a packed-sequence key back into its original string.
///
/// Components equal to 1 (the cap bit alone, i.e. an empty fragment) are
/// skipped. This is a defensive rule only: the fragmenter never produces an
/// empty trailing fragment for a non-empty input, so this only matters for
/// the key of the empty sequence itself.
pub fn decode_key(key: &[u64]) -> String {
    let mut seq = String::new();
    for &h in key {
        if h == 1 {
            continue;
        }
        seq.push_str(&codec::decode(h));
    }
    seq
}

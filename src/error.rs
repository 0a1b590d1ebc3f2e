use thiserror::Error;

/// Errors surfaced by the up2bit codec, the counting store, and the tokenizers.
///
/// Every error propagates to the caller; nothing in this crate swallows one.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DnaHashError {
    /// A character outside the `{A,C,T,G}` alphabet was encountered at the given
    /// byte offset (absolute within the original input, where known).
    #[error("invalid base at offset {0}: expected one of A, C, T, G")]
    InvalidBase(usize),

    /// `DnaHash::insert` was called with a count less than 1.
    #[error("count cannot be less than 1, {0} given")]
    InvalidCount(u64),

    /// `DnaHash::max` / `DnaHash::argmax` were called with an empty counter map.
    #[error("counter map is empty")]
    Empty,
}

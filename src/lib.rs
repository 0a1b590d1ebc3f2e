//! A specialized counting data structure for short DNA sequences.
//!
//! `DnaHash` (see [`counting`]) maintains an approximate multiset over
//! `{A,C,T,G}` reads: a membership filter ([`bloom`]) absorbs the long tail
//! of sequences seen exactly once, so only sequences observed at least
//! twice pay for an entry in the explicit counter map. Sequences are keyed
//! by their up2bit packing ([`codec`], [`fragment`], [`key`]). The
//! [`tokenizers`] module turns raw reads into the token streams that feed
//! the counter.

pub mod bloom;
pub mod cli;
pub mod codec;
pub mod counting;
pub mod error;
pub mod fragment;
pub mod key;
pub mod tokenizers;

pub use counting::DnaHash;
pub use error::DnaHashError;
pub use tokenizers::{Canonical, Fragment, Kmer, Tokenizer};

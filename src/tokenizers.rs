//! Tokenizer family: produces lazy streams of string tokens from a raw
//! read, external to the counting core but defining the contract between
//! callers and it. Consumed by `DnaHash::increment` / `DnaHash::insert` one
//! token at a time — no tokenizer ever materializes its full output.

use crate::error::DnaHashError;
use std::cell::Cell;

#[inline]
fn is_valid_base(b: u8) -> bool {
    matches!(b, b'A' | b'C' | b'T' | b'G')
}

/// Index (relative to the start of `token`) of the first byte outside the
/// `{A,C,T,G}` alphabet, if any.
#[inline]
fn first_invalid(token: &[u8]) -> Option<usize> {
    token.iter().position(|&b| !is_valid_base(b))
}

/// Shared behavior for every tokenizer: turn a raw read into a lazy stream
/// of tokens. Errors surface through the iterator itself rather than a
/// separate channel, so a non-skipping tokenizer can stop cleanly on the
/// first invalid base instead of returning a list it never finished.
pub trait Tokenizer {
    fn tokenize<'a>(&'a self, seq: &'a str) -> Box<dyn Iterator<Item = Result<String, DnaHashError>> + 'a>;
}

/// Sliding window of length `k`, stride 1.
pub struct Kmer {
    k: usize,
    skip_invalid: bool,
    /// Number of bases skipped past due to invalid characters across every
    /// `tokenize` call so far, for diagnostics only.
    dropped: Cell<u64>,
}

impl Kmer {
    pub fn new(k: u32, skip_invalid: bool) -> Self {
        assert!(k >= 1, "k cannot be less than 1, {k} given");
        Kmer {
            k: k as usize,
            skip_invalid,
            dropped: Cell::new(0),
        }
    }

    /// Cumulative count of bases skipped past due to invalid characters.
    /// Not part of the counting contract.
    pub fn dropped(&self) -> u64 {
        self.dropped.get()
    }
}

impl Tokenizer for Kmer {
    fn tokenize<'a>(&'a self, seq: &'a str) -> Box<dyn Iterator<Item = Result<String, DnaHashError>> + 'a> {
        Box::new(KmerIter {
            bytes: seq.as_bytes(),
            k: self.k,
            skip_invalid: self.skip_invalid,
            i: 0,
            dropped: &self.dropped,
            stopped: false,
        })
    }
}

struct KmerIter<'a> {
    bytes: &'a [u8],
    k: usize,
    skip_invalid: bool,
    i: usize,
    dropped: &'a Cell<u64>,
    stopped: bool,
}

impl<'a> Iterator for KmerIter<'a> {
    type Item = Result<String, DnaHashError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stopped {
            return None;
        }
        // i ranges over [0, len - k] inclusive for a full window to exist.
        while self.i + self.k <= self.bytes.len() {
            let window = &self.bytes[self.i..self.i + self.k];
            match first_invalid(window) {
                None => {
                    let token = std::str::from_utf8(window).expect("ASCII alphabet").to_string();
                    self.i += 1;
                    return Some(Ok(token));
                }
                Some(bad_offset) => {
                    if self.skip_invalid {
                        let skip = 1 + bad_offset;
                        self.dropped.set(self.dropped.get() + skip as u64);
                        self.i += skip;
                        continue;
                    } else {
                        self.stopped = true;
                        return Some(Err(DnaHashError::InvalidBase(self.i + bad_offset)));
                    }
                }
            }
        }
        self.stopped = true;
        None
    }
}

/// Wraps another tokenizer; emits each token in canonical form: the
/// lexicographically smaller of the token and its reverse complement.
pub struct Canonical {
    inner: Box<dyn Tokenizer>,
}

impl Canonical {
    pub fn new(inner: Box<dyn Tokenizer>) -> Self {
        Canonical { inner }
    }

    /// The reverse complement of a sequence: reverse the order and swap
    /// A<->T, C<->G.
    pub fn reverse_complement(seq: &str) -> Result<String, DnaHashError> {
        let bytes = seq.as_bytes();
        let mut out = vec![0u8; bytes.len()];
        for (i, &b) in bytes.iter().enumerate() {
            let complement = match b {
                b'A' => b'T',
                b'T' => b'A',
                b'C' => b'G',
                b'G' => b'C',
                _ => return Err(DnaHashError::InvalidBase(i)),
            };
            out[bytes.len() - 1 - i] = complement;
        }
        Ok(String::from_utf8(out).expect("ASCII alphabet"))
    }
}

impl Tokenizer for Canonical {
    fn tokenize<'a>(&'a self, seq: &'a str) -> Box<dyn Iterator<Item = Result<String, DnaHashError>> + 'a> {
        Box::new(self.inner.tokenize(seq).map(|res| {
            res.and_then(|token| {
                let rc = Self::reverse_complement(&token)?;
                Ok(if token <= rc { token } else { rc })
            })
        }))
    }
}

/// Non-overlapping windows of length `n`.
pub struct Fragment {
    n: usize,
    skip_invalid: bool,
    /// Number of whole tokens dropped due to an invalid base across every
    /// `tokenize` call so far, for diagnostics only.
    dropped: Cell<u64>,
}

impl Fragment {
    pub fn new(n: u32, skip_invalid: bool) -> Self {
        assert!(n >= 1, "n must be greater than 0, {n} given");
        Fragment {
            n: n as usize,
            skip_invalid,
            dropped: Cell::new(0),
        }
    }

    /// Cumulative count of tokens dropped due to an invalid base. Not part
    /// of the counting contract.
    pub fn dropped(&self) -> u64 {
        self.dropped.get()
    }
}

impl Tokenizer for Fragment {
    fn tokenize<'a>(&'a self, seq: &'a str) -> Box<dyn Iterator<Item = Result<String, DnaHashError>> + 'a> {
        Box::new(FragmentIter {
            bytes: seq.as_bytes(),
            n: self.n,
            skip_invalid: self.skip_invalid,
            i: 0,
            dropped: &self.dropped,
            stopped: false,
        })
    }
}

struct FragmentIter<'a> {
    bytes: &'a [u8],
    n: usize,
    skip_invalid: bool,
    i: usize,
    dropped: &'a Cell<u64>,
    stopped: bool,
}

impl<'a> Iterator for FragmentIter<'a> {
    type Item = Result<String, DnaHashError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stopped {
            return None;
        }
        // Non-overlapping windows; the source tokenizer never emits a
        // dangling final partial window (matches §4.2 fragment-length rules
        // as applied to a stream of full-length tokens only).
        while self.i + self.n <= self.bytes.len() {
            let window = &self.bytes[self.i..self.i + self.n];
            self.i += self.n;
            match first_invalid(window) {
                None => {
                    let token = std::str::from_utf8(window).expect("ASCII alphabet").to_string();
                    return Some(Ok(token));
                }
                Some(bad_offset) => {
                    if self.skip_invalid {
                        self.dropped.set(self.dropped.get() + 1);
                        continue;
                    } else {
                        self.stopped = true;
                        return Some(Err(DnaHashError::InvalidBase(self.i - self.n + bad_offset)));
                    }
                }
            }
        }
        self.stopped = true;
        None
    }
}

//! Split a variable-length sequence into an ordered list of fixed-capacity
//! chunks, each suitable for the up2bit codec.
//!
//! Distinct from [`crate::tokenizers::Fragment`]: this fragmenter is an
//! internal helper used only by the key codec, assumes alphabet-valid
//! input (tokenizers validate/filter before anything reaches the core),
//! and never drops or rejects anything.

/// Non-overlapping, lazily-produced slices of length `n` (the final slice
/// may be shorter). If the input is shorter than `n`, yields it unchanged
/// once.
pub struct Fragmenter<'a> {
    seq: &'a str,
    n: usize,
    pos: usize,
    done: bool,
}

impl<'a> Fragmenter<'a> {
    pub fn new(seq: &'a str, n: usize) -> Self {
        assert!(n >= 1, "fragment size must be >= 1, {n} given");
        Fragmenter {
            seq,
            n,
            pos: 0,
            done: false,
        }
    }
}

impl<'a> Iterator for Fragmenter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let bytes = self.seq.as_bytes();
        if bytes.len() < self.n {
            self.done = true;
            return if bytes.is_empty() {
                None
            } else {
                Some(self.seq)
            };
        }

        if self.pos >= bytes.len() {
            self.done = true;
            return None;
        }

        let end = (self.pos + self.n).min(bytes.len());
        let slice = &self.seq[self.pos..end];
        self.pos = end;
        Some(slice)
    }
}

//! A layered (scalable) Bloom filter: the membership filter behind
//! [`crate::counting::DnaHash`]'s singleton elision.
//!
//! The counting store treats this as a black-box collaborator reachable
//! only through [`exists`](BloomFilter::exists) and
//! [`exists_or_insert`](BloomFilter::exists_or_insert) — no false negatives,
//! a bounded false-positive rate. It hashes the raw sequence string, never
//! the packed up2bit key, so the filter's behavior is independent of the
//! codec.
//!
//! A single fixed-capacity layer would either cap the number of sequences
//! the filter can hold or blow its false-positive budget once overfull, so
//! new layers are appended on demand (each with a tighter false-positive
//! target) exactly as a classic scalable Bloom filter does.

use bit_vec::BitVec;
use std::f64::consts::LN_2;

/// Each additional layer gets this fraction of the previous layer's
/// false-positive budget, bounding the compounded error rate of the stack.
const TIGHTENING_RATIO: f64 = 0.5;

struct BloomLayer {
    bits: BitVec,
    num_hashes: u32,
    capacity: usize,
    len: usize,
}

impl BloomLayer {
    fn new(capacity: usize, false_positive_rate: f64, num_hashes: u32) -> Self {
        let capacity = capacity.max(1);
        let num_bits = optimal_num_bits(capacity, false_positive_rate);
        BloomLayer {
            bits: BitVec::from_elem(num_bits, false),
            num_hashes,
            capacity,
            len: 0,
        }
    }

    fn is_full(&self) -> bool {
        self.len >= self.capacity
    }

    fn positions(&self, item: &str) -> impl Iterator<Item = usize> + '_ {
        let (h1, h2) = double_hash(item);
        let m = self.bits.len() as u64;
        (0..self.num_hashes as u64).map(move |i| (h1.wrapping_add(i.wrapping_mul(h2)) % m) as usize)
    }

    fn check(&self, item: &str) -> bool {
        self.positions(item).all(|p| self.bits.get(p).unwrap_or(false))
    }

    /// Sets every bit for `item`. Returns whether it was already a member
    /// (all bits already set) before this call.
    fn check_and_set(&mut self, item: &str) -> bool {
        let positions: Vec<usize> = self.positions(item).collect();
        let already_present = positions.iter().all(|&p| self.bits.get(p).unwrap_or(false));
        if !already_present {
            for p in positions {
                self.bits.set(p, true);
            }
            self.len += 1;
        }
        already_present
    }
}

/// Standard Bloom filter sizing formula: `m = ceil(-n * ln(p) / ln(2)^2)`.
fn optimal_num_bits(capacity: usize, false_positive_rate: f64) -> usize {
    let p = false_positive_rate.clamp(f64::MIN_POSITIVE, 0.5);
    let m = -(capacity as f64) * p.ln() / (LN_2 * LN_2);
    (m.ceil() as usize).max(8)
}

/// Two independent-enough 64-bit digests of `item`, used as the base of a
/// Kirsch–Mitzenmacher double-hashing scheme: `h_i = h1 + i*h2`.
fn double_hash(item: &str) -> (u64, u64) {
    let h1 = fxhash::hash64(&(0u8, item));
    let h2 = fxhash::hash64(&(1u8, item)) | 1; // odd, to avoid degenerating when h2 == 0
    (h1, h2)
}

/// A layered (scalable) Bloom filter tuned at construction time and never
/// reconfigured afterward.
pub struct BloomFilter {
    layers: Vec<BloomLayer>,
    max_false_positive_rate: f64,
    num_hashes: u32,
    layer_size: usize,
}

impl BloomFilter {
    pub fn new(max_false_positive_rate: f64, num_hashes: u32, layer_size: u64) -> Self {
        let layer_size = layer_size.max(1) as usize;
        let first = BloomLayer::new(layer_size, max_false_positive_rate, num_hashes);
        BloomFilter {
            layers: vec![first],
            max_false_positive_rate,
            num_hashes,
            layer_size,
        }
    }

    /// Approximate membership test. May return a false positive at a rate
    /// bounded by the configured `max_false_positive_rate`; never a false
    /// negative for a sequence previously passed to
    /// [`exists_or_insert`](Self::exists_or_insert).
    pub fn exists(&self, item: &str) -> bool {
        self.layers.iter().any(|layer| layer.check(item))
    }

    /// Returns prior membership, then ensures `item` is a member. Equivalent
    /// to `(r = exists(item); insert(item); r)` executed as one logical
    /// step.
    pub fn exists_or_insert(&mut self, item: &str) -> bool {
        if self.exists(item) {
            return true;
        }

        if self.layers.last().expect("at least one layer").is_full() {
            let next_fp_rate =
                self.max_false_positive_rate * TIGHTENING_RATIO.powi(self.layers.len() as i32);
            self.layers
                .push(BloomLayer::new(self.layer_size, next_fp_rate, self.num_hashes));
        }

        self.layers
            .last_mut()
            .expect("at least one layer")
            .check_and_set(item);
        false
    }
}

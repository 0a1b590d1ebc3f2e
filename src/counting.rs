//! The singleton-elided counting store: the public `DnaHash` API that
//! composes the key codec and the membership filter.

use crate::bloom::BloomFilter;
use crate::error::DnaHashError;
use crate::key::{self, Key};
use fxhash::FxHashMap;

/// Default false-positive rate forwarded to the membership filter.
pub const DEFAULT_MAX_FALSE_POSITIVE_RATE: f64 = 0.01;
/// Default number of hash probes per Bloom layer.
pub const DEFAULT_NUM_HASHES: u32 = 4;
/// Default per-layer capacity of the membership filter.
pub const DEFAULT_LAYER_SIZE: u64 = 32_000_000;

/// A specialized datastructure for counting DNA sequences, approximate in
/// the sense that the long tail of singleton sequences is never stored
/// explicitly — only the membership filter remembers they were seen.
///
/// Single-threaded with respect to mutation: every method that mutates
/// state (`increment`, `insert`) assumes no concurrent writer.
pub struct DnaHash {
    filter: BloomFilter,
    counts: FxHashMap<Key, u64>,
    num_singletons: u64,
}

impl DnaHash {
    /// Construct an empty store. `max_false_positive_rate`, `num_hashes`,
    /// and `layer_size` tune the membership filter and are forwarded to it
    /// untouched.
    pub fn new(max_false_positive_rate: f64, num_hashes: u32, layer_size: u64) -> Self {
        DnaHash {
            filter: BloomFilter::new(max_false_positive_rate, num_hashes, layer_size),
            counts: FxHashMap::default(),
            num_singletons: 0,
        }
    }

    /// Record one new observation of `seq`.
    pub fn increment(&mut self, seq: &str) -> Result<(), DnaHashError> {
        let exists = self.filter.exists_or_insert(seq);

        if exists {
            let k = key::encode_key(seq)?;
            if let Some(count) = self.counts.get_mut(&k) {
                *count += 1;
            } else {
                self.num_singletons -= 1;
                self.counts.insert(k, 2);
            }
        } else {
            self.num_singletons += 1;
        }

        Ok(())
    }

    /// Bulk-insert `seq` with an explicit observed count `c >= 1`.
    pub fn insert(&mut self, seq: &str, count: u64) -> Result<(), DnaHashError> {
        if count < 1 {
            return Err(DnaHashError::InvalidCount(count));
        }

        let exists = self.filter.exists_or_insert(seq);

        if count > 1 {
            let k = key::encode_key(seq)?;
            if exists && !self.counts.contains_key(&k) {
                self.num_singletons -= 1;
            }
            self.counts.insert(k, count);
        } else if !exists {
            self.num_singletons += 1;
        }

        Ok(())
    }

    /// Point query: 0 if `seq` was never observed. May return 1 for a
    /// sequence never inserted, bounded by the filter's false-positive
    /// rate — this is inherent to singleton elision, not a bug.
    pub fn get(&self, seq: &str) -> u64 {
        if !self.filter.exists(seq) {
            return 0;
        }

        match key::encode_key(seq) {
            Ok(k) => *self.counts.get(&k).unwrap_or(&1),
            // A malformed query sequence can never have been inserted.
            Err(_) => 0,
        }
    }

    /// The largest value currently in the counter map.
    pub fn max(&self) -> Result<u64, DnaHashError> {
        self.counts
            .values()
            .copied()
            .max()
            .ok_or(DnaHashError::Empty)
    }

    /// The decoded sequence with the maximal counter-map value. Ties are
    /// broken by hash-map iteration order, which is unspecified.
    pub fn argmax(&self) -> Result<String, DnaHashError> {
        self.counts
            .iter()
            .max_by_key(|(_, &count)| count)
            .map(|(k, _)| key::decode_key(k))
            .ok_or(DnaHashError::Empty)
    }

    /// Up to `k` `(sequence, count)` pairs, sorted by count descending.
    pub fn top(&self, k: u64) -> Vec<(String, u64)> {
        let mut entries: Vec<(&Key, &u64)> = self.counts.iter().collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(a.1));
        entries
            .into_iter()
            .take(k as usize)
            .map(|(key, &count)| (key::decode_key(key), count))
            .collect()
    }

    /// Total number of observations recorded so far.
    pub fn num_sequences(&self) -> u64 {
        self.num_non_singletons() + self.num_singletons
    }

    /// Number of distinct sequences stored, singleton or not.
    pub fn num_unique_sequences(&self) -> u64 {
        self.counts.len() as u64 + self.num_singletons
    }

    /// Number of sequences known to the filter but absent from the counter
    /// map (observed exactly once).
    pub fn num_singletons(&self) -> u64 {
        self.num_singletons
    }

    /// Sum of all counter-map values.
    pub fn num_non_singletons(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Same as [`Self::num_unique_sequences`].
    pub fn len(&self) -> u64 {
        self.num_unique_sequences()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Fixed-size Bloom filter whose bit array is part of the fingerprint contract.
//!
//! Serialization: bit `i` lives in byte `i / 8` at bit position `i % 8`
//! (least significant first); unused trailing bits are zero. The `k` index
//! functions are SHA-256 over `seed (u32 LE) || key`, reduced modulo the bit
//! count from the first 8 digest bytes read little-endian.

use sha2::{Digest, Sha256};
use std::f64::consts::LN_2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilter {
    bits: Vec<u8>,
    num_bits: usize,
    num_hashes: u32,
}

/// `m = ceil(n * ln(p) / ln(1 / 2^ln2))`
pub fn optimal_num_bits(capacity: usize, false_positive_rate: f64) -> usize {
    let denominator = (1.0 / 2f64.powf(LN_2)).ln();
    let bits = (capacity as f64 * false_positive_rate.ln() / denominator).ceil();
    (bits as usize).max(1)
}

/// `k = ceil((m / n) * ln2)`
pub fn optimal_num_hashes(num_bits: usize, capacity: usize) -> u32 {
    let hashes = ((num_bits as f64 / capacity.max(1) as f64) * LN_2).ceil();
    (hashes as u32).max(1)
}

impl BloomFilter {
    pub fn with_accuracy(capacity: usize, false_positive_rate: f64) -> Self {
        let num_bits = optimal_num_bits(capacity, false_positive_rate);
        let num_hashes = optimal_num_hashes(num_bits, capacity);
        Self {
            bits: vec![0u8; num_bits.div_ceil(8)],
            num_bits,
            num_hashes,
        }
    }

    pub fn insert(&mut self, key: &str) {
        for seed in 0..self.num_hashes {
            let bit = self.bit_index(seed, key);
            self.bits[bit / 8] |= 1 << (bit % 8);
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        (0..self.num_hashes).all(|seed| {
            let bit = self.bit_index(seed, key);
            self.bits[bit / 8] & (1 << (bit % 8)) != 0
        })
    }

    fn bit_index(&self, seed: u32, key: &str) -> usize {
        let mut hasher = Sha256::new();
        hasher.update(seed.to_le_bytes());
        hasher.update(key.as_bytes());
        let digest = hasher.finalize();

        let mut word = [0u8; 8];
        word.copy_from_slice(&digest[..8]);
        (u64::from_le_bytes(word) % self.num_bits as u64) as usize
    }

    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    pub fn num_hashes(&self) -> u32 {
        self.num_hashes
    }

    pub fn bits_set(&self) -> u64 {
        self.bits.iter().map(|b| b.count_ones() as u64).sum()
    }

    /// Canonical serialized bit array, `ceil(num_bits / 8)` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }
}

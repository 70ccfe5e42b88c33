//! SimHash fingerprints and Hamming-distance comparison.
//!
//! Each token is hashed with the BLAKE3 extendable-output function, so a
//! fingerprint of any width is backed by real hash bits rather than a
//! truncated or zero-padded digest. Bit `i` of a token hash is bit `i % 8` of
//! output byte `i / 8`.
//!
//! Per-bit votes are `+1` for a set hash bit and `-1` otherwise. The final bit
//! is set when the vote is `>= 0`, so an empty sequence (all votes zero) maps
//! to the all-ones fingerprint.

use std::fmt;

use bitvec::prelude::*;

use crate::core::errors::{Result, TextdupError};

/// Widest fingerprint a [`SimHasher`] will produce.
pub const MAX_HASHBITS: usize = 4096;

fn check_width(width: usize, parameter: &str) -> Result<()> {
    if width == 0 || width > MAX_HASHBITS {
        return Err(TextdupError::invalid_parameter(
            parameter,
            format!("{parameter} must be in 1..={MAX_HASHBITS}, got {width}"),
        ));
    }
    Ok(())
}

/// Fixed-width SimHash fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    bits: BitVec<u64, Lsb0>,
}

impl Fingerprint {
    /// Build a fingerprint of `width` bits from the low bits of `value`.
    ///
    /// `width` must be in `1..=64` and `value` must be representable in it.
    pub fn from_u64(value: u64, width: usize) -> Result<Self> {
        if width == 0 || width > 64 {
            return Err(TextdupError::invalid_parameter(
                "width",
                format!("integer fingerprints must be 1..=64 bits wide, got {width}"),
            ));
        }
        if width < 64 && value >> width != 0 {
            return Err(TextdupError::invalid_parameter(
                "value",
                format!("{value:#x} is not representable in {width} bits"),
            ));
        }

        let bits = (0..width).map(|i| (value >> i) & 1 == 1).collect();
        Ok(Self { bits })
    }

    /// Build a `width`-bit fingerprint from little-endian bytes.
    ///
    /// Bit `i` is bit `i % 8` of `bytes[i / 8]`, the same layout as the token
    /// hashes. `bytes` must hold exactly `ceil(width / 8)` bytes and every bit
    /// past `width` must be clear.
    pub fn from_bytes(bytes: &[u8], width: usize) -> Result<Self> {
        check_width(width, "width")?;
        let expected = width.div_ceil(8);
        if bytes.len() != expected {
            return Err(TextdupError::invalid_parameter(
                "value",
                format!(
                    "{width}-bit fingerprints need {expected} bytes, got {}",
                    bytes.len()
                ),
            ));
        }

        let all = bytes.view_bits::<Lsb0>();
        if all[width..].any() {
            return Err(TextdupError::invalid_parameter(
                "value",
                format!("value is not representable in {width} bits"),
            ));
        }

        Ok(Self {
            bits: all[..width].iter().by_vals().collect(),
        })
    }

    /// Build a fingerprint of `width` bits (`1..=128`) from the low bits of `value`.
    pub fn from_u128(value: u128, width: usize) -> Result<Self> {
        if width > 128 {
            return Err(TextdupError::invalid_parameter(
                "width",
                format!("integer fingerprints must be 1..=128 bits wide, got {width}"),
            ));
        }
        let bytes = value.to_le_bytes();
        let used = width.div_ceil(8).min(bytes.len());
        if bytes[used..].iter().any(|&b| b != 0) {
            return Err(TextdupError::invalid_parameter(
                "value",
                format!("{value:#x} is not representable in {width} bits"),
            ));
        }
        Self::from_bytes(&bytes[..used], width)
    }

    /// Little-endian byte form, the inverse of [`Fingerprint::from_bytes`].
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; self.width().div_ceil(8)];
        for i in self.bits.iter_ones() {
            bytes[i / 8] |= 1 << (i % 8);
        }
        bytes
    }

    /// Number of bits in the fingerprint.
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Value of bit `index`, or `None` past the width.
    pub fn bit(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|bit| *bit)
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Integer form for fingerprints up to 64 bits wide.
    pub fn to_u64(&self) -> Option<u64> {
        if self.width() > 64 {
            return None;
        }
        Some(self.bits.iter_ones().fold(0u64, |acc, i| acc | (1u64 << i)))
    }

    /// Number of positions at which two equal-width fingerprints differ.
    pub fn hamming_distance(&self, other: &Self) -> Result<usize> {
        if self.width() != other.width() {
            return Err(TextdupError::invalid_parameter(
                "hashbits",
                format!(
                    "cannot compare fingerprints of {} and {} bits",
                    self.width(),
                    other.width()
                ),
            ));
        }

        Ok(differing_bits(&self.bits, &other.bits))
    }

    /// `1 - hamming / width`, in `[0, 1]`.
    pub fn similarity(&self, other: &Self) -> Result<f64> {
        let distance = self.hamming_distance(other)?;
        Ok(1.0 - distance as f64 / self.width() as f64)
    }

    /// Hexadecimal rendering, most significant nibble first.
    pub fn to_hex(&self) -> String {
        let nibbles = self.width().div_ceil(4);
        (0..nibbles)
            .rev()
            .map(|k| {
                let nibble = (0..4usize)
                    .filter(|&j| self.bit(k * 4 + j) == Some(true))
                    .fold(0u32, |acc, j| acc | (1 << j));
                char::from_digit(nibble, 16).unwrap_or('0')
            })
            .collect()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width(), self.to_hex())
    }
}

/// SimHash generator for a fixed fingerprint width.
#[derive(Debug, Clone, Copy)]
pub struct SimHasher {
    hashbits: usize,
}

impl SimHasher {
    /// Create a generator producing `hashbits`-bit fingerprints.
    ///
    /// `hashbits` must be in `1..=MAX_HASHBITS`.
    pub fn new(hashbits: usize) -> Result<Self> {
        check_width(hashbits, "hashbits")?;
        Ok(Self { hashbits })
    }

    /// Fingerprint width in bits.
    pub fn hashbits(&self) -> usize {
        self.hashbits
    }

    /// Compute the SimHash fingerprint of a token sequence.
    pub fn fingerprint<S: AsRef<[u8]>>(&self, tokens: &[S]) -> Fingerprint {
        let mut weights = vec![0i64; self.hashbits];
        let mut digest = vec![0u8; self.hashbits.div_ceil(8)];

        for token in tokens {
            blake3::Hasher::new()
                .update(token.as_ref())
                .finalize_xof()
                .fill(&mut digest);

            for (weight, bit) in weights
                .iter_mut()
                .zip(digest.view_bits::<Lsb0>().iter().by_vals())
            {
                *weight += if bit { 1 } else { -1 };
            }
        }

        Fingerprint {
            bits: weights.iter().map(|&w| w >= 0).collect(),
        }
    }

    /// SimHash similarity of two token sequences.
    pub fn similarity<S: AsRef<[u8]>>(&self, a: &[S], b: &[S]) -> f64 {
        let fa = self.fingerprint(a);
        let fb = self.fingerprint(b);
        // same hasher, so the widths always agree
        let distance = differing_bits(&fa.bits, &fb.bits);
        1.0 - distance as f64 / self.hashbits as f64
    }
}

fn differing_bits(a: &BitSlice<u64, Lsb0>, b: &BitSlice<u64, Lsb0>) -> usize {
    a.iter()
        .by_vals()
        .zip(b.iter().by_vals())
        .filter(|(x, y)| x != y)
        .count()
}

/// Compute a `hashbits`-wide SimHash fingerprint of `tokens`.
pub fn simhash<S: AsRef<[u8]>>(tokens: &[S], hashbits: usize) -> Result<Fingerprint> {
    Ok(SimHasher::new(hashbits)?.fingerprint(tokens))
}

/// Hamming distance of two fingerprints; widths must match.
pub fn hamming_distance(a: &Fingerprint, b: &Fingerprint) -> Result<usize> {
    a.hamming_distance(b)
}

/// SimHash similarity `1 - hamming / hashbits` of two token sequences.
pub fn simhash_similarity<S: AsRef<[u8]>>(a: &[S], b: &[S], hashbits: usize) -> Result<f64> {
    Ok(SimHasher::new(hashbits)?.similarity(a, b))
}

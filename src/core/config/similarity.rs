//! Similarity scoring configuration types.
//!
//! This module holds the tunables of the similarity core: SimHash width,
//! n-gram length for the Jaccard overlap, and the weight profile used to
//! combine the four metrics into the final score.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::validation::{
    validate_at_most, validate_non_negative, validate_positive_usize, weights_sum_to_one,
};
use crate::core::errors::Result;
use crate::detectors::simhash::MAX_HASHBITS;

/// Tolerance used when checking that the weight profile sums to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Configuration for a single duplication comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityConfig {
    /// SimHash fingerprint width in bits
    #[serde(default = "SimilarityConfig::default_hashbits")]
    pub hashbits: usize,

    /// Token n-gram length for Jaccard overlap
    #[serde(default = "SimilarityConfig::default_ngram_size")]
    pub ngram_size: usize,

    /// Metric weights for the final score
    #[serde(default)]
    pub weights: SimilarityWeights,

    /// Compute the four metrics on the rayon pool instead of sequentially
    #[serde(default)]
    pub parallel: bool,
}

/// Default implementation for [`SimilarityConfig`].
impl Default for SimilarityConfig {
    /// Returns 64-bit SimHash, bigram Jaccard and the standard weight profile.
    fn default() -> Self {
        Self {
            hashbits: Self::default_hashbits(),
            ngram_size: Self::default_ngram_size(),
            weights: SimilarityWeights::default(),
            parallel: false,
        }
    }
}

impl SimilarityConfig {
    const fn default_hashbits() -> usize {
        64
    }

    const fn default_ngram_size() -> usize {
        2
    }

    /// Validate similarity configuration
    pub fn validate(&self) -> Result<()> {
        validate_positive_usize(self.hashbits, "hashbits")?;
        validate_at_most(self.hashbits, MAX_HASHBITS, "hashbits")?;
        validate_positive_usize(self.ngram_size, "ngram_size")?;
        self.weights.validate()
    }
}

/// Weight profile applied to the normalized metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityWeights {
    /// Longest-common-subsequence ratio weight
    pub lcs: f64,

    /// Normalized edit distance weight
    pub edit: f64,

    /// N-gram Jaccard overlap weight
    pub jaccard: f64,

    /// SimHash similarity weight
    pub simhash: f64,
}

/// Default implementation for [`SimilarityWeights`].
impl Default for SimilarityWeights {
    /// Returns `0.15 / 0.15 / 0.10 / 0.60` for lcs, edit, jaccard and simhash.
    fn default() -> Self {
        Self {
            lcs: 0.15,
            edit: 0.15,
            jaccard: 0.10,
            simhash: 0.60,
        }
    }
}

impl SimilarityWeights {
    /// Weights in `lcs, edit, jaccard, simhash` order.
    pub fn as_array(&self) -> [f64; 4] {
        [self.lcs, self.edit, self.jaccard, self.simhash]
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Validate weights configuration.
    ///
    /// Negative or non-finite weights are rejected. A profile that does not sum
    /// to 1.0 is accepted with a warning, since the final score is then no
    /// longer bounded by 100.
    pub fn validate(&self) -> Result<()> {
        for (name, weight) in ["lcs", "edit", "jaccard", "simhash"]
            .iter()
            .zip(self.as_array())
        {
            validate_non_negative(weight, &format!("weights.{name}"))?;
        }

        if !weights_sum_to_one(&self.as_array(), WEIGHT_SUM_TOLERANCE) {
            warn!(
                total = self.total(),
                "Similarity weights do not sum to 1.0; final score may leave [0, 100]"
            );
        }

        Ok(())
    }
}

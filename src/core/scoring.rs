//! Duplication scoring.
//!
//! [`DuplicationScorer`] runs the four similarity metrics over a reference and
//! a candidate token sequence, normalizes each into `[0, 1]`, and combines them
//! with the configured weight profile into a percentage.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::config::{SimilarityConfig, SimilarityWeights};
use crate::core::errors::{InputRole, Result, TextdupError};
use crate::detectors::alignment::{edit_distance, lcs_length};
use crate::detectors::overlap::jaccard_ngrams;
use crate::detectors::simhash::SimHasher;

/// The four similarity metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// LCS length over reference length
    Lcs,
    /// One minus normalized Levenshtein distance
    Edit,
    /// N-gram Jaccard overlap
    Jaccard,
    /// SimHash fingerprint agreement
    Simhash,
}

impl Metric {
    /// All metrics in reporting order.
    pub const ALL: [Metric; 4] = [Metric::Lcs, Metric::Edit, Metric::Jaccard, Metric::Simhash];

    /// Stable lowercase name used in reports and config keys.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lcs => "lcs",
            Self::Edit => "edit",
            Self::Jaccard => "jaccard",
            Self::Simhash => "simhash",
        }
    }

    /// Weight assigned to this metric by a weight profile.
    pub fn weight(self, weights: &SimilarityWeights) -> f64 {
        match self {
            Self::Lcs => weights.lcs,
            Self::Edit => weights.edit,
            Self::Jaccard => weights.jaccard,
            Self::Simhash => weights.simhash,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalized per-metric similarities, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityRecord {
    /// LCS similarity
    pub lcs: f64,
    /// Edit-distance similarity
    pub edit: f64,
    /// N-gram Jaccard similarity
    pub jaccard: f64,
    /// SimHash similarity
    pub simhash: f64,
}

impl SimilarityRecord {
    /// Look up one metric.
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Lcs => self.lcs,
            Metric::Edit => self.edit,
            Metric::Jaccard => self.jaccard,
            Metric::Simhash => self.simhash,
        }
    }

    /// Metrics paired with their values, in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.into_iter().map(move |metric| (metric, self.get(metric)))
    }

    /// Weighted sum of the metrics, in `[0, 1]` for a convex weight profile.
    pub fn weighted_sum(&self, weights: &SimilarityWeights) -> f64 {
        self.iter()
            .map(|(metric, value)| metric.weight(weights) * value)
            .sum()
    }
}

/// Result of one reference/candidate comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DuplicationReport {
    /// Per-metric similarities
    pub similarities: SimilarityRecord,
    /// Weighted duplication percentage
    pub final_score: f64,
}

/// Weighted multi-metric duplication scorer.
///
/// Holds its own weight profile, so scorers with different profiles can be
/// used side by side from any number of threads.
#[derive(Debug, Clone)]
pub struct DuplicationScorer {
    config: SimilarityConfig,
    hasher: SimHasher,
}

impl DuplicationScorer {
    /// Create a scorer after validating `config`.
    pub fn new(config: SimilarityConfig) -> Result<Self> {
        config.validate()?;
        let hasher = SimHasher::new(config.hashbits)?;
        Ok(Self { config, hasher })
    }

    /// Active configuration.
    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// Score `candidate` against `reference`.
    ///
    /// Both sequences must be non-empty; the reference is checked first and no
    /// metric runs if either check fails.
    pub fn score<S: AsRef<str>>(
        &self,
        reference: &[S],
        candidate: &[S],
    ) -> Result<DuplicationReport> {
        if reference.is_empty() {
            return Err(TextdupError::empty_input(InputRole::Reference));
        }
        if candidate.is_empty() {
            return Err(TextdupError::empty_input(InputRole::Candidate));
        }

        let reference: Vec<&str> = reference.iter().map(AsRef::as_ref).collect();
        let candidate: Vec<&str> = candidate.iter().map(AsRef::as_ref).collect();

        let similarities = if self.config.parallel {
            self.similarities_parallel(&reference, &candidate)?
        } else {
            self.similarities_sequential(&reference, &candidate)?
        };
        let final_score = 100.0 * similarities.weighted_sum(&self.config.weights);

        debug!(
            reference_tokens = reference.len(),
            candidate_tokens = candidate.len(),
            lcs = similarities.lcs,
            edit = similarities.edit,
            jaccard = similarities.jaccard,
            simhash = similarities.simhash,
            final_score,
            "Computed duplication score"
        );

        Ok(DuplicationReport {
            similarities,
            final_score,
        })
    }

    fn similarities_sequential(&self, a: &[&str], b: &[&str]) -> Result<SimilarityRecord> {
        Ok(SimilarityRecord {
            lcs: self.lcs_similarity(a, b),
            edit: self.edit_similarity(a, b),
            jaccard: self.jaccard_similarity(a, b)?,
            simhash: self.simhash_similarity(a, b),
        })
    }

    fn similarities_parallel(&self, a: &[&str], b: &[&str]) -> Result<SimilarityRecord> {
        let ((lcs, edit), (jaccard, simhash)) = rayon::join(
            || {
                rayon::join(
                    || self.lcs_similarity(a, b),
                    || self.edit_similarity(a, b),
                )
            },
            || {
                rayon::join(
                    || self.jaccard_similarity(a, b),
                    || self.simhash_similarity(a, b),
                )
            },
        );

        Ok(SimilarityRecord {
            lcs,
            edit,
            jaccard: jaccard?,
            simhash,
        })
    }

    /// Normalized by the reference length only.
    fn lcs_similarity(&self, reference: &[&str], candidate: &[&str]) -> f64 {
        lcs_length(reference, candidate) as f64 / reference.len() as f64
    }

    fn edit_similarity(&self, reference: &[&str], candidate: &[&str]) -> f64 {
        let longest = reference.len().max(candidate.len()).max(1);
        1.0 - edit_distance(reference, candidate) as f64 / longest as f64
    }

    fn jaccard_similarity(&self, reference: &[&str], candidate: &[&str]) -> Result<f64> {
        jaccard_ngrams(reference, candidate, self.config.ngram_size)
    }

    fn simhash_similarity(&self, reference: &[&str], candidate: &[&str]) -> f64 {
        self.hasher.similarity(reference, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scorer() -> DuplicationScorer {
        DuplicationScorer::new(SimilarityConfig::default()).unwrap()
    }

    #[test]
    fn test_identical_sequences_score_full_marks() {
        let a = ["我", "喜欢", "编程"];
        let report = scorer().score(&a, &a).unwrap();

        for (metric, value) in report.similarities.iter() {
            assert_eq!(value, 1.0, "{metric} should be 1.0");
        }
        assert_relative_eq!(report.final_score, 100.0, epsilon = 1e-9);
        assert_eq!(format!("{:.2}", report.final_score), "100.00");
    }

    #[test]
    fn test_empty_candidate_is_rejected() {
        let a = ["a", "b", "c"];
        let b: [&str; 0] = [];
        let err = scorer().score(&a, &b).unwrap_err();
        assert!(matches!(
            err,
            TextdupError::EmptyInput {
                role: InputRole::Candidate
            }
        ));
    }

    #[test]
    fn test_empty_reference_is_reported_first() {
        let empty: [&str; 0] = [];
        let err = scorer().score(&empty, &empty).unwrap_err();
        assert!(matches!(
            err,
            TextdupError::EmptyInput {
                role: InputRole::Reference
            }
        ));
    }

    #[test]
    fn test_swapped_pair() {
        let report = scorer().score(&["a", "b"], &["b", "a"]).unwrap();
        let sims = report.similarities;

        assert_eq!(sims.lcs, 0.5);
        assert_eq!(sims.edit, 0.0);
        assert_eq!(sims.jaccard, 0.0);
        assert!((0.0..=1.0).contains(&sims.simhash));
        assert!((0.0..=100.0).contains(&report.final_score));

        let again = scorer().score(&["a", "b"], &["b", "a"]).unwrap();
        assert_eq!(report, again);
    }

    #[test]
    fn test_lcs_is_normalized_by_reference() {
        let long = ["a", "b", "c", "d"];
        let short = ["a", "b"];
        assert_eq!(scorer().score(&long, &short).unwrap().similarities.lcs, 0.5);
        assert_eq!(scorer().score(&short, &long).unwrap().similarities.lcs, 1.0);
    }

    #[test]
    fn test_edit_similarity_uses_longest_length() {
        let report = scorer().score(&["a", "b", "c", "d"], &["a", "b"]).unwrap();
        assert_relative_eq!(report.similarities.edit, 0.5);
    }

    #[test]
    fn test_custom_weight_profile() {
        let mut config = SimilarityConfig::default();
        config.weights = SimilarityWeights {
            lcs: 1.0,
            edit: 0.0,
            jaccard: 0.0,
            simhash: 0.0,
        };
        let scorer = DuplicationScorer::new(config).unwrap();
        let report = scorer.score(&["a", "b", "c", "d"], &["a", "c"]).unwrap();
        assert_relative_eq!(report.final_score, 50.0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let a: Vec<String> = "the cat sat on the mat while the dog slept"
            .split(' ')
            .map(String::from)
            .collect();
        let b: Vec<String> = "the dog sat on the mat while the cat watched"
            .split(' ')
            .map(String::from)
            .collect();

        let mut parallel = SimilarityConfig::default();
        parallel.parallel = true;

        let sequential = scorer().score(&a, &b).unwrap();
        let concurrent = DuplicationScorer::new(parallel).unwrap().score(&a, &b).unwrap();
        assert_eq!(sequential, concurrent);
    }

    #[test]
    fn test_invalid_config_is_rejected_up_front() {
        let mut config = SimilarityConfig::default();
        config.ngram_size = 0;
        assert!(matches!(
            DuplicationScorer::new(config),
            Err(TextdupError::InvalidArgument { .. })
        ));

        let mut config = SimilarityConfig::default();
        config.hashbits = 0;
        assert!(DuplicationScorer::new(config).is_err());
    }

    #[test]
    fn test_metric_names() {
        let names: Vec<&str> = Metric::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(names, ["lcs", "edit", "jaccard", "simhash"]);
        assert_eq!(Metric::Simhash.weight(&SimilarityWeights::default()), 0.60);
    }
}

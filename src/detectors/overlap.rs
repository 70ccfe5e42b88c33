//! Jaccard overlap between n-gram sets.

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

use super::ngram::ngrams;
use crate::core::errors::Result;

/// Jaccard index `|A ∩ B| / |A ∪ B|` of two sets.
///
/// Two empty sets are vacuously identical (1.0); exactly one empty set shares
/// nothing (0.0).
pub fn jaccard_similarity<T, S>(a: &HashSet<T, S>, b: &HashSet<T, S>) -> f64
where
    T: Eq + Hash,
    S: BuildHasher,
{
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|item| large.contains(*item)).count();
    let union = a.len() + b.len() - intersection;

    intersection as f64 / union as f64
}

/// Jaccard similarity of the length-`n` token windows of two sequences.
///
/// Fails with `InvalidArgument` when `n == 0`.
pub fn jaccard_ngrams<T>(a: &[T], b: &[T], n: usize) -> Result<f64>
where
    T: Eq + Hash,
{
    let grams_a = ngrams(a, n)?;
    let grams_b = ngrams(b, n)?;
    Ok(jaccard_similarity(&*grams_a, &*grams_b))
}

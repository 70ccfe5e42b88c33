//! Contiguous token n-gram extraction.
//!
//! N-grams are borrowed windows over the caller's token slice, so extracting
//! them never copies tokens.

use std::hash::Hash;

use ahash::AHashSet;

use crate::core::errors::{Result, TextdupError};

/// Set of distinct length-`n` token windows drawn from one sequence.
pub type NgramSet<'a, T> = AHashSet<&'a [T]>;

/// Collect every contiguous length-`n` window of `tokens` into a set.
///
/// A sequence shorter than `n` yields the empty set. `n == 0` is rejected with
/// [`TextdupError::InvalidArgument`] rather than silently producing nothing.
pub fn ngrams<T>(tokens: &[T], n: usize) -> Result<NgramSet<'_, T>>
where
    T: Eq + Hash,
{
    if n == 0 {
        return Err(TextdupError::invalid_parameter(
            "ngram_size",
            "n-gram length must be greater than 0",
        ));
    }

    // slice::windows yields nothing when n > len
    Ok(tokens.windows(n).collect())
}

//! Validation helper functions for configuration types.

use crate::core::errors::{Result, TextdupError};

/// Validate that a usize value is greater than zero.
pub fn validate_positive_usize(value: usize, field: &str) -> Result<()> {
    if value == 0 {
        return Err(TextdupError::invalid_parameter(
            field,
            format!("{} must be greater than 0", field),
        ));
    }
    Ok(())
}

/// Validate that a usize value does not exceed `max`.
pub fn validate_at_most(value: usize, max: usize, field: &str) -> Result<()> {
    if value > max {
        return Err(TextdupError::invalid_parameter(
            field,
            format!("{} must be at most {}, got {}", field, max, value),
        ));
    }
    Ok(())
}

/// Validate that an f64 value is finite and non-negative.
pub fn validate_non_negative(value: f64, field: &str) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(TextdupError::invalid_parameter(
            field,
            format!("{} must be a finite, non-negative number, got {}", field, value),
        ));
    }
    Ok(())
}

/// Check whether weights sum to approximately 1.0 (within tolerance).
pub fn weights_sum_to_one(weights: &[f64], tolerance: f64) -> bool {
    let sum: f64 = weights.iter().sum();
    (sum - 1.0).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected_with_field_name() {
        let err = validate_positive_usize(0, "ngram_size").unwrap_err();
        assert!(format!("{err}").contains("ngram_size"));
        assert!(validate_positive_usize(3, "ngram_size").is_ok());
    }

    #[test]
    fn upper_bound_is_inclusive() {
        assert!(validate_at_most(4096, 4096, "hashbits").is_ok());
        let err = validate_at_most(4097, 4096, "hashbits").unwrap_err();
        assert!(format!("{err}").contains("at most 4096"));
    }

    #[test]
    fn negative_and_nan_weights_are_rejected() {
        assert!(validate_non_negative(-0.1, "weights.lcs").is_err());
        assert!(validate_non_negative(f64::NAN, "weights.lcs").is_err());
        assert!(validate_non_negative(0.0, "weights.lcs").is_ok());
    }

    #[test]
    fn weight_sum_tolerance() {
        assert!(weights_sum_to_one(&[0.15, 0.15, 0.1, 0.6], 1e-6));
        assert!(!weights_sum_to_one(&[0.5, 0.6], 1e-6));
    }
}

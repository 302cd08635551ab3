//! Percentage of singular values retained during compression.

use crate::types::{invalid_argument, Result};
use std::convert::TryFrom;

/// A validated retention percentage in the closed interval [0, 100].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct RetentionFactor(f64);

impl RetentionFactor {
    /// Validate `percent` and wrap it.
    ///
    /// Values outside of [0, 100] and NaN are rejected.
    pub fn new(percent: f64) -> Result<Self> {
        if !(0.0..=100.0).contains(&percent) {
            return invalid_argument(format!(
                "retention percentage must lie in [0, 100], got {}",
                percent
            ));
        }
        Ok(RetentionFactor(percent))
    }

    /// Retain every singular value.
    pub fn full() -> Self {
        RetentionFactor(100.0)
    }

    pub fn percent(&self) -> f64 {
        self.0
    }

    /// Number of singular values kept out of `rank`, i.e. `floor(rank * percent / 100)`.
    pub fn kept_rank(&self, rank: usize) -> usize {
        if self.is_full() {
            return rank;
        }
        ((rank as f64) * self.0 / 100.0).floor() as usize
    }

    pub fn is_full(&self) -> bool {
        self.0 == 100.0
    }
}

impl TryFrom<f64> for RetentionFactor {
    type Error = crate::types::ImageCompressionError;

    fn try_from(percent: f64) -> Result<Self> {
        RetentionFactor::new(percent)
    }
}

impl TryFrom<i64> for RetentionFactor {
    type Error = crate::types::ImageCompressionError;

    fn try_from(percent: i64) -> Result<Self> {
        if !(0..=100).contains(&percent) {
            return invalid_argument(format!(
                "retention percentage must lie in [0, 100], got {}",
                percent
            ));
        }
        Ok(RetentionFactor(percent as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageCompressionError;

    #[test]
    fn test_kept_rank_floors() {
        let factor = RetentionFactor::new(30.0).unwrap();
        assert_eq!(factor.kept_rank(10), 3);
        assert_eq!(factor.kept_rank(7), 2);
        assert_eq!(factor.kept_rank(3), 0);

        let factor = RetentionFactor::new(99.9).unwrap();
        assert_eq!(factor.kept_rank(512), 511);
    }

    #[test]
    fn test_full_keeps_everything() {
        assert_eq!(RetentionFactor::full().kept_rank(37), 37);
        assert_eq!(RetentionFactor::new(100.0).unwrap().kept_rank(1), 1);
        assert!(RetentionFactor::try_from(100_i64).unwrap().is_full());
    }

    #[test]
    fn test_zero_keeps_nothing() {
        assert_eq!(RetentionFactor::new(0.0).unwrap().kept_rank(640), 0);
    }

    #[test]
    fn test_out_of_range_rejected() {
        for &percent in &[-5.0, 150.0, 100.000_1, -0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                RetentionFactor::new(percent),
                Err(ImageCompressionError::InvalidArgument(_))
            ));
        }
        assert!(RetentionFactor::try_from(-5_i64).is_err());
        assert!(RetentionFactor::try_from(150_i64).is_err());
    }
}

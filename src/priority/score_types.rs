//! Type-safe score scales for comparison results.
//!
//! # Score Scales
//!
//! - `Score0To100`: percentage scale used by similarity and sub-scores
//! - `Score0To1`: normalized scale used by the JavaScript dependency score
//!
//! # Examples
//!
//! ```rust
//! use crawlability::priority::score_types::{Score0To100, Score0To1};
//!
//! let score = Score0To100::new(85.0);
//! assert_eq!(score.value(), 85.0);
//!
//! // Out-of-bounds values are clamped
//! assert_eq!(Score0To100::new(-40.0).value(), 0.0);
//!
//! assert_eq!(score.normalize().value(), 0.85);
//! ```

use serde::{Deserialize, Serialize};

/// Score on 0-100 scale.
///
/// Values are clamped to the [0.0, 100.0] range; NaN becomes 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score0To100(f64);

impl Score0To100 {
    pub const ZERO: Self = Self(0.0);
    pub const MAX: Self = Self(100.0);

    /// Create a new score, clamping to [0.0, 100.0].
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Get the raw score value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Normalize to 0-1 scale by dividing by 100.
    pub fn normalize(self) -> Score0To1 {
        Score0To1(self.0 / 100.0)
    }
}

/// Score on 0-1 scale (normalized).
///
/// Values are clamped to the [0.0, 1.0] range; NaN becomes 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score0To1(f64);

impl Score0To1 {
    /// Create a new normalized score, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Denormalize to 0-100 scale by multiplying by 100.
    pub fn denormalize(self) -> Score0To100 {
        Score0To100(self.0 * 100.0)
    }
}

impl std::fmt::Display for Score0To100 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl std::fmt::Display for Score0To1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_0_to_100_clamps_both_bounds() {
        assert_eq!(Score0To100::new(150.0).value(), 100.0);
        assert_eq!(Score0To100::new(-10.0).value(), 0.0);
    }

    #[test]
    fn nan_becomes_zero() {
        assert_eq!(Score0To100::new(f64::NAN), Score0To100::ZERO);
        assert_eq!(Score0To1::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&Score0To100::new(72.5)).unwrap();
        assert_eq!(json, "72.5");
    }

    #[test]
    fn denormalization_multiplies_by_100() {
        assert_eq!(Score0To1::new(0.85).denormalize().value(), 85.0);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn score_0_to_100_always_in_bounds(value in -1000.0..1000.0f64) {
            let score = Score0To100::new(value);
            prop_assert!(score.value() >= 0.0 && score.value() <= 100.0);
        }

        #[test]
        fn normalization_preserves_ordering(a in 0.0..100.0f64, b in 0.0..100.0f64) {
            let score_a = Score0To100::new(a);
            let score_b = Score0To100::new(b);
            if a < b {
                prop_assert!(score_a.normalize() < score_b.normalize());
            }
        }
    }
}

//! Maturity levels and the score-to-level classifier

use serde::{Deserialize, Serialize};

/// Upper (inclusive) score bound of levels 0 through 4; anything above the
/// last bound is level 5.
pub const LEVEL_UPPER_BOUNDS: [f64; 5] = [0.10, 0.30, 0.55, 0.75, 0.90];

/// Maturity of a group or framework
///
/// Levels are ordered, so comparisons follow the numeric level:
/// - NotAddressed (0): nothing in place
/// - Initial (1): ad hoc
/// - Developing (2): partially documented and deployed
/// - Defined (3): documented and broadly deployed
/// - Managed (4): enterprise-wide and measured
/// - Optimizing (5): continuously improved
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum MaturityLevel {
    /// Level 0
    #[default]
    NotAddressed,
    /// Level 1
    Initial,
    /// Level 2
    Developing,
    /// Level 3
    Defined,
    /// Level 4
    Managed,
    /// Level 5
    Optimizing,
}

impl MaturityLevel {
    /// Highest level the inventory-only estimator may report
    pub const ESTIMATE_CAP: MaturityLevel = MaturityLevel::Developing;

    /// Numeric level 0..=5
    pub fn as_u8(&self) -> u8 {
        match self {
            MaturityLevel::NotAddressed => 0,
            MaturityLevel::Initial => 1,
            MaturityLevel::Developing => 2,
            MaturityLevel::Defined => 3,
            MaturityLevel::Managed => 4,
            MaturityLevel::Optimizing => 5,
        }
    }

    /// Build a level from any integer, clamping into 0..=5
    pub fn from_level(level: i64) -> Self {
        match level {
            i64::MIN..=0 => MaturityLevel::NotAddressed,
            1 => MaturityLevel::Initial,
            2 => MaturityLevel::Developing,
            3 => MaturityLevel::Defined,
            4 => MaturityLevel::Managed,
            _ => MaturityLevel::Optimizing,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            MaturityLevel::NotAddressed => "Not Addressed",
            MaturityLevel::Initial => "Initial",
            MaturityLevel::Developing => "Developing",
            MaturityLevel::Defined => "Defined",
            MaturityLevel::Managed => "Managed",
            MaturityLevel::Optimizing => "Optimizing",
        }
    }
}

impl From<u8> for MaturityLevel {
    fn from(level: u8) -> Self {
        Self::from_level(i64::from(level))
    }
}

impl From<MaturityLevel> for u8 {
    fn from(level: MaturityLevel) -> Self {
        level.as_u8()
    }
}

impl std::fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_u8(), self.label())
    }
}

/// Map a 0–1 aggregate score to a maturity level
///
/// Each band is inclusive on its upper edge, so a score sitting exactly on a
/// boundary lands in the lower level. Out-of-range input clamps; NaN is
/// treated as 0.
pub fn classify(score: f64) -> MaturityLevel {
    let score = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };

    LEVEL_UPPER_BOUNDS
        .iter()
        .position(|&bound| score <= bound)
        .map(|level| MaturityLevel::from_level(level as i64))
        .unwrap_or(MaturityLevel::Optimizing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_fall_to_lower_level() {
        assert_eq!(classify(0.10), MaturityLevel::NotAddressed);
        assert_eq!(classify(0.30), MaturityLevel::Initial);
        assert_eq!(classify(0.55), MaturityLevel::Developing);
        assert_eq!(classify(0.75), MaturityLevel::Defined);
        assert_eq!(classify(0.90), MaturityLevel::Managed);
    }

    #[test]
    fn test_band_interiors() {
        assert_eq!(classify(0.0), MaturityLevel::NotAddressed);
        assert_eq!(classify(0.11), MaturityLevel::Initial);
        assert_eq!(classify(0.31), MaturityLevel::Developing);
        assert_eq!(classify(0.6), MaturityLevel::Defined);
        assert_eq!(classify(0.8), MaturityLevel::Managed);
        assert_eq!(classify(0.9000001), MaturityLevel::Optimizing);
        assert_eq!(classify(1.0), MaturityLevel::Optimizing);
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(classify(-3.0), MaturityLevel::NotAddressed);
        assert_eq!(classify(7.5), MaturityLevel::Optimizing);
        assert_eq!(classify(f64::NAN), MaturityLevel::NotAddressed);
    }

    #[test]
    fn test_from_level_clamps() {
        assert_eq!(MaturityLevel::from_level(-1), MaturityLevel::NotAddressed);
        assert_eq!(MaturityLevel::from_level(3), MaturityLevel::Defined);
        assert_eq!(MaturityLevel::from_level(42), MaturityLevel::Optimizing);
        assert_eq!(MaturityLevel::from(9u8), MaturityLevel::Optimizing);
    }

    #[test]
    fn test_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&MaturityLevel::Managed).unwrap(), "4");
        let level: MaturityLevel = serde_json::from_str("2").unwrap();
        assert_eq!(level, MaturityLevel::Developing);
    }

    #[test]
    fn test_display() {
        assert_eq!(MaturityLevel::Optimizing.to_string(), "5 (Optimizing)");
    }
}

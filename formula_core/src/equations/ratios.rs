//! # Ratio Formulas
//!
//! Dimensionless relationships: the golden ratio, percentage change and
//! difference, and slope as a ratio, percentage and angle.
//!
//! These functions do no validation. Callers guard against zero divisors
//! before calling them.

use crate::constants::PHI;

// =============================================================================
// GOLDEN RATIO
// =============================================================================

/// Split `total` into two parts in the golden ratio.
///
/// # Formulas
/// - larger = total / φ
/// - smaller = total − larger
///
/// Since φ² = φ + 1, the parts also satisfy larger / smaller = φ and
/// total / larger = φ.
///
/// # Returns
/// (larger, smaller)
#[inline]
pub fn golden_split(total: f64) -> (f64, f64) {
    let larger = total / PHI;
    (larger, total - larger)
}

/// Larger golden part for a given smaller part: b·φ
#[inline]
pub fn golden_larger(smaller: f64) -> f64 {
    smaller * PHI
}

/// Smaller golden part for a given larger part: a/φ
#[inline]
pub fn golden_smaller(larger: f64) -> f64 {
    larger / PHI
}

/// Whether `ratio` is within `tolerance` of φ
#[inline]
pub fn is_golden_ratio(ratio: f64, tolerance: f64) -> bool {
    (ratio - PHI).abs() < tolerance
}

// =============================================================================
// PERCENTAGES
// =============================================================================

/// Percentage change from `old` to `new`: (new − old) / |old| × 100.
///
/// Dividing by |old| keeps the sign tied to the direction of change even
/// when the starting value is negative.
#[inline]
pub fn percentage_change(old: f64, new: f64) -> f64 {
    (new - old) / old.abs() * 100.0
}

/// Symmetric percentage difference: |a − b| / |(a + b)/2| × 100.
#[inline]
pub fn percentage_difference(a: f64, b: f64) -> f64 {
    (a - b).abs() / ((a + b) / 2.0).abs() * 100.0
}

// =============================================================================
// SLOPE
// =============================================================================

/// Slope ratio m = rise / run
#[inline]
pub fn slope_from_rise_run(rise: f64, run: f64) -> f64 {
    rise / run
}

/// Slope of the line through (x₁, y₁) and (x₂, y₂): (y₂ − y₁)/(x₂ − x₁)
#[inline]
pub fn slope_from_points(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (y2 - y1) / (x2 - x1)
}

/// Slope as a percentage grade: m × 100
#[inline]
pub fn slope_percentage(slope: f64) -> f64 {
    slope * 100.0
}

/// Inclination angle in degrees: atan(m)
#[inline]
pub fn slope_angle_degrees(slope: f64) -> f64 {
    slope.atan().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_split() {
        let (larger, smaller) = golden_split(100.0);
        assert!((larger - 61.8034).abs() < 1e-4);
        assert!((smaller - 38.1966).abs() < 1e-4);
        assert!((larger / smaller - PHI).abs() < 1e-12);
        assert!((100.0 / larger - PHI).abs() < 1e-12);
    }

    #[test]
    fn test_golden_inverse() {
        assert!((golden_smaller(golden_larger(10.0)) - 10.0).abs() < 1e-12);
        assert!(is_golden_ratio(1.618, 1e-3));
        assert!(!is_golden_ratio(1.6, 1e-4));
    }

    #[test]
    fn test_percentage_change() {
        assert!((percentage_change(50.0, 65.0) - 30.0).abs() < 1e-12);
        assert!((percentage_change(100.0, 75.0) + 25.0).abs() < 1e-12);
        // Negative baseline: moving from -50 to -25 is an increase
        assert!((percentage_change(-50.0, -25.0) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_percentage_difference_is_symmetric() {
        assert!((percentage_difference(10.0, 15.0) - 40.0).abs() < 1e-12);
        assert!((percentage_difference(15.0, 10.0) - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_slope() {
        assert!((slope_from_rise_run(1.0, 4.0) - 0.25).abs() < 1e-15);
        assert!((slope_from_points(0.0, 0.0, 2.0, 1.0) - 0.5).abs() < 1e-15);
        assert!((slope_percentage(0.25) - 25.0).abs() < 1e-12);
        assert!((slope_angle_degrees(1.0) - 45.0).abs() < 1e-12);
    }
}

#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Normalizes an angle in degrees to the range [0, 360).
///
/// Any finite angle, positive or negative, is wrapped to its equivalent in
/// [0, 360).
pub(crate) fn normalize_degrees_360(degrees: f64) -> f64 {
    let turns = degrees / 360.0;
    let mut limited = 360.0 * (turns - turns.floor());
    if limited < 0.0 {
        limited += 360.0;
    }
    // A tiny negative angle rounds up to a full turn.
    if limited >= 360.0 {
        limited = 0.0;
    }
    limited
}

/// Normalizes an angle in degrees to the range [0, 180).
///
/// Used for the hour angle of sunrise/sunset, which is a half-turn quantity.
pub(crate) fn normalize_degrees_180(degrees: f64) -> f64 {
    let half_turns = degrees / 180.0;
    let mut limited = 180.0 * (half_turns - half_turns.floor());
    if limited < 0.0 {
        limited += 180.0;
    }
    if limited >= 180.0 {
        limited = 0.0;
    }
    limited
}

/// Normalizes an angle in degrees to the signed range [-180, 180].
pub(crate) fn normalize_degrees_180_signed(degrees: f64) -> f64 {
    let turns = degrees / 360.0;
    let mut limited = 360.0 * (turns - turns.floor());
    if limited < -180.0 {
        limited += 360.0;
    } else if limited > 180.0 {
        limited -= 360.0;
    }
    limited
}

/// Keeps only the fractional part of `value`, mapped into [0, 1).
///
/// Day fractions produced by the rise/transit/set solver are wrapped with
/// this so they always land inside the requested day.
pub(crate) fn normalize_unit_interval(value: f64) -> f64 {
    let mut limited = value - value.floor();
    if limited < 0.0 {
        limited += 1.0;
    }
    if limited >= 1.0 {
        limited = 0.0;
    }
    limited
}

/// Evaluate a cubic polynomial at `x`.
///
/// Interprets the arguments as coefficients of
/// \(`a_3` x^3 + `a_2` x^2 + `a_1` x + `a_0`\)
/// and evaluates with Horner's method.
pub(crate) fn eval_cubic(a3: f64, a2: f64, a1: f64, a0: f64, x: f64) -> f64 {
    ((a3 * x + a2) * x + a1) * x + a0
}

/// Computes a polynomial using Horner's method.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
pub(crate) fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    let mut result = last;
    for &coeff in coeffs.iter().rev().skip(1) {
        result = result.mul_add(x, coeff);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_360_wraps_both_directions() {
        assert_eq!(normalize_degrees_360(0.0), 0.0);
        assert_eq!(normalize_degrees_360(360.0), 0.0);
        assert!((normalize_degrees_360(-90.0) - 270.0).abs() < 1e-12);
        assert!((normalize_degrees_360(725.0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn tiny_negative_angles_wrap_to_zero() {
        for value in [-1e-15, -f64::MIN_POSITIVE, -1e-300] {
            assert_eq!(normalize_degrees_360(value), 0.0, "{value}");
            assert_eq!(normalize_degrees_180(value), 0.0, "{value}");
            assert_eq!(normalize_unit_interval(value), 0.0, "{value}");
        }
        assert!(normalize_degrees_360(-1e-9) < 360.0);
    }

    #[test]
    fn degrees_180_signed_stays_within_half_turn() {
        assert!((normalize_degrees_180_signed(270.0) + 90.0).abs() < 1e-12);
        assert!((normalize_degrees_180_signed(-270.0) - 90.0).abs() < 1e-12);
        assert!((normalize_degrees_180_signed(45.0) - 45.0).abs() < 1e-12);
    }

    #[test]
    fn degrees_180_wraps_into_half_turn() {
        assert!((normalize_degrees_180(190.0) - 10.0).abs() < 1e-9);
        assert!((normalize_degrees_180(-10.0) - 170.0).abs() < 1e-9);
    }

    #[test]
    fn unit_interval_keeps_fraction() {
        assert!((normalize_unit_interval(1.25) - 0.25).abs() < 1e-12);
        assert!((normalize_unit_interval(-0.25) - 0.75).abs() < 1e-12);
        assert_eq!(normalize_unit_interval(0.0), 0.0);
    }

    #[test]
    fn polynomial_matches_expanded_form() {
        let x: f64 = 1.5;
        let expected = 2.0 + 3.0 * x + 4.0 * x * x;
        assert!((polynomial(&[2.0, 3.0, 4.0], x) - expected).abs() < 1e-12);
        assert_eq!(polynomial(&[], x), 0.0);
        assert!((eval_cubic(1.0, 0.0, 0.0, 1.0, 2.0) - 9.0).abs() < 1e-12);
    }
}

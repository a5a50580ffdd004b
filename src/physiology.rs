//! Physiology model
//!
//! Empirical regressions from Jack Daniels and Jimmy Gilbert relating running
//! velocity to oxygen cost, and race duration to the fraction of VO2max a runner
//! can sustain for that long.
//!
//! All velocities are in meters per minute and all VO2 rates in ml/kg/min.
//! None of these functions validate their input: zero or negative values give
//! mathematically defined but physiologically meaningless results.

/// Asymptotic floor of the sustainable fraction for very long efforts
const FRACTION_FLOOR: f64 = 0.8;

/// Slow-decay term of the sustainable fraction curve
const FRACTION_SLOW_AMPLITUDE: f64 = 0.189_439_3;
const FRACTION_SLOW_RATE: f64 = -0.012_778;

/// Fast-decay term of the sustainable fraction curve
const FRACTION_FAST_AMPLITUDE: f64 = 0.298_955_8;
const FRACTION_FAST_RATE: f64 = -0.193_260_5;

/// Oxygen cost regression: VO2 = C + B·v + A·v²
const OXYGEN_COST_A: f64 = 0.000_104;
const OXYGEN_COST_B: f64 = 0.182_258;
const OXYGEN_COST_C: f64 = -4.60;

/// Velocity regression: v = C + B·vo2 + A·vo2²
const VELOCITY_A: f64 = -0.007_546;
const VELOCITY_B: f64 = 5.000_663;
const VELOCITY_C: f64 = 29.54;

/// Fraction of VO2max that can be sustained for an effort of the given duration
///
/// fraction = 0.8 + 0.1894393·e^(-0.012778·m) + 0.2989558·e^(-0.1932605·m),
/// with m the duration in minutes. Decreases toward 0.8 as the effort gets
/// longer. Crosses 1.0 at roughly eleven minutes; shorter efforts
/// yield fractions above 1.0.
pub fn sustainable_fraction(duration_seconds: f64) -> f64 {
    let minutes = duration_seconds / 60.0;

    FRACTION_FLOOR
        + FRACTION_SLOW_AMPLITUDE * (FRACTION_SLOW_RATE * minutes).exp()
        + FRACTION_FAST_AMPLITUDE * (FRACTION_FAST_RATE * minutes).exp()
}

/// Oxygen cost of running at `velocity` m/min, in ml/kg/min
pub fn oxygen_cost(velocity: f64) -> f64 {
    (OXYGEN_COST_A * velocity).mul_add(velocity, OXYGEN_COST_B.mul_add(velocity, OXYGEN_COST_C))
}

/// Velocity (m/min) whose oxygen cost is `vo2`
///
/// This is a separate regression fitted to the same data, not the algebraic
/// inverse of [`oxygen_cost`]. Round trips through both carry a small residual.
pub fn velocity_from_oxygen_cost(vo2: f64) -> f64 {
    (VELOCITY_A * vo2).mul_add(vo2, VELOCITY_B.mul_add(vo2, VELOCITY_C))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sustainable_fraction_bounds() {
        for minutes in [12.0, 15.0, 20.0, 60.0, 120.0, 180.0, 240.0] {
            let fraction = sustainable_fraction(minutes * 60.0);
            assert!(fraction > 0.8, "fraction {} at {} min", fraction, minutes);
            assert!(fraction <= 1.0, "fraction {} at {} min", fraction, minutes);
        }
    }

    #[test]
    fn test_sustainable_fraction_decreasing() {
        let mut previous = sustainable_fraction(60.0);
        for seconds in (120..=10_800).step_by(60) {
            let current = sustainable_fraction(seconds as f64);
            assert!(current < previous);
            previous = current;
        }
    }

    #[test]
    fn test_sustainable_fraction_reference_values() {
        // 20 minute effort
        assert!((sustainable_fraction(1200.0) - 0.953).abs() < 0.001);
        // Efforts of a few minutes go above 1.0
        assert!(sustainable_fraction(300.0) > 1.0);
        assert!(sustainable_fraction(600.0) > 1.0);
        assert!(sustainable_fraction(720.0) < 1.0);
        // Marathon-length efforts settle well toward the floor
        assert!(sustainable_fraction(10_800.0) < 0.85);
    }

    #[test]
    fn test_oxygen_cost() {
        // 250 m/min: -4.6 + 45.5645 + 6.5
        assert!((oxygen_cost(250.0) - 47.4645).abs() < 1e-9);
        assert!((oxygen_cost(0.0) + 4.6).abs() < 1e-12);
        assert!(oxygen_cost(300.0) > oxygen_cost(200.0));
    }

    #[test]
    fn test_velocity_from_oxygen_cost() {
        // 50 ml/kg/min: 29.54 + 250.03315 - 18.865
        assert!((velocity_from_oxygen_cost(50.0) - 260.708_15).abs() < 1e-6);
        assert!(velocity_from_oxygen_cost(60.0) > velocity_from_oxygen_cost(40.0));
    }

    #[test]
    fn test_velocity_fit_is_approximate_inverse() {
        for velocity in [180.0, 220.0, 260.0, 300.0] {
            let round_trip = velocity_from_oxygen_cost(oxygen_cost(velocity));
            // Close, but not exact
            assert!((round_trip - velocity).abs() < 5.0, "{} -> {}", velocity, round_trip);
        }
    }
}

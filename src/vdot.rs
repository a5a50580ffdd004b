//! VDOT estimation
//!
//! VDOT is Jack Daniels' pseudo-VO2max: the oxygen cost of a race's average
//! velocity divided by the fraction of VO2max sustainable for the race duration.

use crate::physiology::{oxygen_cost, sustainable_fraction};

/// Average velocity in m/min for `distance_meters` covered in `duration_seconds`
pub fn average_velocity(distance_meters: f64, duration_seconds: u32) -> f64 {
    distance_meters / (f64::from(duration_seconds) / 60.0)
}

/// Estimate VDOT from a race result
///
/// A zero duration is not guarded and yields infinity or NaN; validate input at
/// the calling layer (see [`crate::report::RaceInput::new`]).
pub fn estimate_vdot(distance_meters: f64, duration_seconds: u32) -> f64 {
    let velocity = average_velocity(distance_meters, duration_seconds);
    oxygen_cost(velocity) / sustainable_fraction(f64::from(duration_seconds))
}

//! Race time prediction
//!
//! VDOT has no closed-form inverse in terms of duration (both the velocity and
//! the sustainable fraction depend on it), so predictions scan whole seconds
//! until the required VDOT drops to the runner's VDOT.

use crate::time_format::format_race_time;
use crate::vdot::estimate_vdot;

/// Exclusive upper bound of the prediction search: four hours
pub const MAX_SEARCH_SECONDS: u32 = 4 * 3600;

/// Standard race distances in meters, in increasing order
pub const STANDARD_DISTANCES: [u32; 6] = [800, 1500, 3000, 5000, 10_000, 21_095];

/// Predict the time in seconds to cover `distance_meters` at the given VDOT
///
/// Returns the first whole second `t` in `1..MAX_SEARCH_SECONDS` whose required
/// VDOT is no longer above `vdot`. Relies on the required VDOT decreasing as
/// `t` grows, which holds for realistic inputs. `None` means the runner would
/// need four hours or more.
pub fn predict_duration(vdot: f64, distance_meters: f64) -> Option<u32> {
    for seconds in 1..MAX_SEARCH_SECONDS {
        if estimate_vdot(distance_meters, seconds) <= vdot {
            tracing::trace!(vdot, distance_meters, seconds, "Predicted duration");
            return Some(seconds);
        }
    }

    tracing::warn!(
        vdot,
        distance_meters,
        limit_seconds = MAX_SEARCH_SECONDS,
        "No prediction within search range"
    );
    None
}

/// Predicted race time rendered as `M'SS`, or `None` when out of range
pub fn predict_race_time(vdot: f64, distance_meters: f64) -> Option<String> {
    predict_duration(vdot, distance_meters).map(format_race_time)
}

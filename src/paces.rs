//! Training pace prescription
//!
//! Each effort level is a band of VDOT multipliers. A multiplier is applied to
//! the runner's VDOT, the result is converted to a velocity, and the velocity to
//! a per-kilometer pace.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::physiology::velocity_from_oxygen_cost;
use crate::time_format::format_seconds_as_pace;
use crate::vdot::estimate_vdot;

/// Training intensity band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffortLevel {
    /// Recovery and long runs
    Easy,
    /// Goal marathon effort
    Marathon,
    /// Comfortably hard, sustainable for about an hour
    Threshold,
    /// VO2max intervals
    Interval,
    /// Short repetitions faster than VO2max pace
    Maximal,
}

impl EffortLevel {
    /// All levels, slowest first
    pub const ALL: [EffortLevel; 5] = [
        EffortLevel::Easy,
        EffortLevel::Marathon,
        EffortLevel::Threshold,
        EffortLevel::Interval,
        EffortLevel::Maximal,
    ];

    /// `(low, high)` VDOT multipliers for this level
    pub const fn multipliers(&self) -> (f64, f64) {
        match self {
            EffortLevel::Easy => (0.59, 0.74),
            EffortLevel::Marathon => (0.75, 0.84),
            EffortLevel::Threshold => (0.83, 0.88),
            EffortLevel::Interval => (0.95, 1.00),
            EffortLevel::Maximal => (1.05, 1.20),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            EffortLevel::Easy => "easy",
            EffortLevel::Marathon => "marathon",
            EffortLevel::Threshold => "threshold",
            EffortLevel::Interval => "interval",
            EffortLevel::Maximal => "maximal",
        }
    }
}

impl fmt::Display for EffortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EffortLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(EffortLevel::Easy),
            "marathon" => Ok(EffortLevel::Marathon),
            "threshold" => Ok(EffortLevel::Threshold),
            "interval" => Ok(EffortLevel::Interval),
            "maximal" => Ok(EffortLevel::Maximal),
            _ => Err(format!("Invalid effort level: {}", s)),
        }
    }
}

/// Pace band for one effort level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaceRange {
    pub level: EffortLevel,
    /// Pace at the low multiplier (slower), `M'SS` per km
    pub slow: String,
    /// Pace at the high multiplier (faster), `M'SS` per km
    pub fast: String,
}

/// Seconds per kilometer at `velocity` m/min, rounded down
pub fn velocity_to_pace_seconds(velocity: f64) -> u32 {
    (60.0 * 1000.0 / velocity).floor() as u32
}

/// Per-kilometer pace for running at `multiplier` × VDOT
pub fn effort_pace(multiplier: f64, vdot: f64) -> String {
    let velocity = velocity_from_oxygen_cost(multiplier * vdot);
    format_seconds_as_pace(velocity_to_pace_seconds(velocity))
}

/// Pace band for `level` at the given VDOT
pub fn pace_range(level: EffortLevel, vdot: f64) -> PaceRange {
    let (low, high) = level.multipliers();
    PaceRange {
        level,
        slow: effort_pace(low, vdot),
        fast: effort_pace(high, vdot),
    }
}

/// Pace bands for every effort level, in [`EffortLevel::ALL`] order
pub fn training_paces_for_vdot(vdot: f64) -> Vec<PaceRange> {
    EffortLevel::ALL
        .iter()
        .map(|level| pace_range(*level, vdot))
        .collect()
}

/// Pace bands for every effort level, from a race result
pub fn training_paces(distance_meters: f64, duration_seconds: u32) -> Vec<PaceRange> {
    training_paces_for_vdot(estimate_vdot(distance_meters, duration_seconds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_format::parse_time_string;

    #[test]
    fn test_velocity_to_pace_seconds() {
        // 250 m/min is exactly 4:00/km
        assert_eq!(velocity_to_pace_seconds(250.0), 240);
        // 240.02 s rounds down
        assert_eq!(velocity_to_pace_seconds(249.98), 240);
        assert_eq!(velocity_to_pace_seconds(200.0), 300);
    }

    #[test]
    fn test_effort_pace_reference() {
        // VDOT 50 at 100%: about 260.7 m/min -> 230.1 s/km
        assert_eq!(effort_pace(1.0, 50.0), "3'50");
    }

    #[test]
    fn test_training_paces_order_and_count() {
        let paces = training_paces(5000.0, 1200);
        let levels: Vec<EffortLevel> = paces.iter().map(|p| p.level).collect();
        assert_eq!(levels, EffortLevel::ALL.to_vec());
    }

    #[test]
    fn test_slow_pace_is_slower_than_fast_pace() {
        for range in training_paces(5000.0, 1200) {
            let slow = parse_time_string(&range.slow);
            let fast = parse_time_string(&range.fast);
            assert!(slow > fast, "{}: {} vs {}", range.level, range.slow, range.fast);
        }
    }

    #[test]
    fn test_training_paces_reference_20min_5k() {
        let paces = training_paces(5000.0, 1200);
        assert_eq!(paces[0].slow, "5'52");
        assert_eq!(paces[0].fast, "4'54");
        assert_eq!(paces[2].slow, "4'28");
        assert_eq!(paces[2].fast, "4'16");
    }

    #[test]
    fn test_effort_level_parsing() {
        assert_eq!("easy".parse::<EffortLevel>().unwrap(), EffortLevel::Easy);
        assert_eq!("Threshold".parse::<EffortLevel>().unwrap(), EffortLevel::Threshold);
        assert!("sprint".parse::<EffortLevel>().is_err());
    }

    #[test]
    fn test_effort_level_display() {
        let names: Vec<String> = EffortLevel::ALL.iter().map(|l| l.to_string()).collect();
        assert_eq!(names, vec!["easy", "marathon", "threshold", "interval", "maximal"]);
    }

    #[test]
    fn test_multipliers_low_below_high() {
        for level in EffortLevel::ALL {
            let (low, high) = level.multipliers();
            assert!(low < high);
        }
    }
}

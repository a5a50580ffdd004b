//! Race predictions and training pace reports
//!
//! Ties the estimator, predictor and prescriber together: one race result in,
//! a pace table and predictions for the standard distances out.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, VdotError};
use crate::paces::{training_paces_for_vdot, PaceRange};
use crate::prediction::{predict_race_time, STANDARD_DISTANCES};
use crate::vdot::estimate_vdot;

/// A validated race result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaceInput {
    pub distance_meters: f64,
    pub duration_seconds: u32,
}

impl RaceInput {
    /// Validate a race result before it reaches the calculations, which do
    /// not guard against zero durations, non-positive distances, or results
    /// too slow to yield a positive VDOT.
    pub fn new(distance_meters: f64, duration_seconds: u32) -> Result<Self> {
        if !distance_meters.is_finite() || distance_meters <= 0.0 {
            return Err(VdotError::invalid_input(
                "distance",
                distance_meters,
                "must be a positive number of meters",
            ));
        }

        if duration_seconds == 0 {
            return Err(VdotError::invalid_input(
                "duration",
                duration_seconds,
                "must be at least one second",
            ));
        }

        let vdot = estimate_vdot(distance_meters, duration_seconds);
        if !vdot.is_finite() || vdot <= 0.0 {
            return Err(VdotError::invalid_input(
                "race",
                format!("{} m in {} s", distance_meters, duration_seconds),
                "too slow to estimate a positive VDOT",
            ));
        }

        Ok(Self {
            distance_meters,
            duration_seconds,
        })
    }
}

/// Predicted time for one standard distance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RacePrediction {
    pub distance_meters: u32,
    /// `M'SS`, or `None` when the time would be four hours or more
    pub time: Option<String>,
}

/// Full output for one race result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub input: RaceInput,
    pub vdot: f64,
    pub training_paces: Vec<PaceRange>,
    pub race_predictions: Vec<RacePrediction>,
}

fn race_predictions_for_vdot(vdot: f64) -> Vec<RacePrediction> {
    STANDARD_DISTANCES
        .iter()
        .map(|&distance_meters| RacePrediction {
            distance_meters,
            time: predict_race_time(vdot, f64::from(distance_meters)),
        })
        .collect()
}

/// Predicted times for [`STANDARD_DISTANCES`], in order
pub fn race_predictions(distance_meters: f64, duration_seconds: u32) -> Vec<RacePrediction> {
    race_predictions_for_vdot(estimate_vdot(distance_meters, duration_seconds))
}

/// Training paces and race predictions from a single race result
pub fn predict_and_prescribe(
    distance_meters: f64,
    duration_seconds: u32,
) -> (Vec<PaceRange>, Vec<RacePrediction>) {
    let vdot = estimate_vdot(distance_meters, duration_seconds);
    (
        training_paces_for_vdot(vdot),
        race_predictions_for_vdot(vdot),
    )
}

/// Build the complete report for a validated race
pub fn build_report(input: &RaceInput) -> PerformanceReport {
    let vdot = estimate_vdot(input.distance_meters, input.duration_seconds);
    debug!(
        distance_meters = input.distance_meters,
        duration_seconds = input.duration_seconds,
        vdot,
        "Estimated VDOT"
    );

    PerformanceReport {
        input: *input,
        vdot,
        training_paces: training_paces_for_vdot(vdot),
        race_predictions: race_predictions_for_vdot(vdot),
    }
}

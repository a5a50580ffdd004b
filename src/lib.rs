// Library interface for vdotrs
// The binary and the integration tests both build on these modules

pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod paces;
pub mod physiology;
pub mod prediction;
pub mod report;
pub mod time_format;
pub mod vdot;

// Re-export commonly used types for convenience
pub use display::OutputFormat;
pub use error::{Result, VdotError};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use paces::{effort_pace, training_paces, velocity_to_pace_seconds, EffortLevel, PaceRange};
pub use physiology::{oxygen_cost, sustainable_fraction, velocity_from_oxygen_cost};
pub use prediction::{predict_duration, MAX_SEARCH_SECONDS, STANDARD_DISTANCES};
pub use report::{
    build_report, predict_and_prescribe, race_predictions, PerformanceReport, RaceInput,
    RacePrediction,
};
pub use time_format::{format_race_time, format_seconds_as_pace, parse_time_string};
pub use vdot::estimate_vdot;

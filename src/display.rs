//! Terminal rendering of performance reports

use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tabled::{settings::Style, Table, Tabled};

use crate::config::OutputSettings;
use crate::error::Result;
use crate::paces::PaceRange;
use crate::report::{PerformanceReport, RacePrediction};

/// Placeholder for a race time outside the prediction range
pub const NOT_FOUND: &str = "--";

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawn tables
    Table,
    /// Pretty-printed JSON
    Json,
    /// One whitespace-separated line per row
    Plain,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "plain" => Ok(OutputFormat::Plain),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

#[derive(Tabled)]
struct PaceRow {
    #[tabled(rename = "Effort")]
    effort: String,
    #[tabled(rename = "Slow (/km)")]
    slow: String,
    #[tabled(rename = "Fast (/km)")]
    fast: String,
}

#[derive(Tabled)]
struct PredictionRow {
    #[tabled(rename = "Distance (m)")]
    distance: u32,
    #[tabled(rename = "Time")]
    time: String,
}

fn prediction_time(prediction: &RacePrediction) -> &str {
    prediction.time.as_deref().unwrap_or(NOT_FOUND)
}

fn heading(text: &str, settings: &OutputSettings) -> String {
    if settings.color {
        text.bold().cyan().to_string()
    } else {
        text.to_string()
    }
}

/// Render training paces as a table
pub fn pace_table(paces: &[PaceRange]) -> String {
    let rows = paces.iter().map(|range| PaceRow {
        effort: range.level.to_string(),
        slow: range.slow.clone(),
        fast: range.fast.clone(),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Render race predictions as a table
pub fn prediction_table(predictions: &[RacePrediction]) -> String {
    let rows = predictions.iter().map(|prediction| PredictionRow {
        distance: prediction.distance_meters,
        time: prediction_time(prediction).to_string(),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_table(report: &PerformanceReport, settings: &OutputSettings) -> String {
    let mut out = String::new();

    if settings.show_vdot {
        let _ = writeln!(out, "{} {:.1}\n", heading("VDOT", settings), report.vdot);
    }

    let _ = writeln!(out, "{}", heading("Training paces", settings));
    let _ = writeln!(out, "{}\n", pace_table(&report.training_paces));
    let _ = writeln!(out, "{}", heading("Race predictions", settings));
    let _ = writeln!(out, "{}", prediction_table(&report.race_predictions));

    out
}

fn render_plain(report: &PerformanceReport, settings: &OutputSettings) -> String {
    let mut out = String::new();

    if settings.show_vdot {
        let _ = writeln!(out, "vdot {:.1}", report.vdot);
    }
    for range in &report.training_paces {
        let _ = writeln!(out, "{} {} {}", range.level, range.slow, range.fast);
    }
    for prediction in &report.race_predictions {
        let _ = writeln!(
            out,
            "{} {}",
            prediction.distance_meters,
            prediction_time(prediction)
        );
    }

    out
}

/// Render a report in the requested format
pub fn render(
    report: &PerformanceReport,
    format: OutputFormat,
    settings: &OutputSettings,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(report, settings)),
        OutputFormat::Plain => Ok(render_plain(report, settings)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::*;
use std::fs;
use std::path::PathBuf;

use vdotrs::config::AppConfig;
use vdotrs::display::{self, OutputFormat};
use vdotrs::error::{ErrorSeverity, VdotError};
use vdotrs::logging::{init_logging, LogLevel};
use vdotrs::report::{build_report, RaceInput};
use vdotrs::time_format::{parse_time_strict, parse_time_string};
use vdotrs::vdot::estimate_vdot;

/// vdotrs - Running performance calculator
///
/// Estimates a VDOT score from one race result, then predicts times for the
/// standard race distances and prescribes training paces.
#[derive(Parser)]
#[command(name = "vdotrs")]
#[command(version)]
#[command(about = "VDOT race predictions and training paces", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// A race result
#[derive(Args)]
struct RaceArgs {
    /// Race distance in meters
    #[arg(short, long)]
    distance: f64,

    /// Race time as H:MM:SS, MM:SS or SS
    #[arg(short, long)]
    time: String,

    /// Reject malformed times instead of reading bad parts as zero
    #[arg(long)]
    strict: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum FormatOpt {
    Table,
    Json,
    Plain,
}

impl From<FormatOpt> for OutputFormat {
    fn from(value: FormatOpt) -> Self {
        match value {
            FormatOpt::Table => OutputFormat::Table,
            FormatOpt::Json => OutputFormat::Json,
            FormatOpt::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the VDOT score for a race
    Vdot {
        #[command(flatten)]
        race: RaceArgs,
    },

    /// Predict times for the standard race distances
    Predict {
        #[command(flatten)]
        race: RaceArgs,
    },

    /// Print the training pace table
    Paces {
        #[command(flatten)]
        race: RaceArgs,
    },

    /// Full report: VDOT, training paces and race predictions
    Report {
        #[command(flatten)]
        race: RaceArgs,

        /// Output format (defaults to the configured format)
        #[arg(short = 'f', long, value_enum)]
        format: Option<FormatOpt>,

        /// Write the report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show or initialize the configuration file
    Config {
        /// Print the effective configuration
        #[arg(short, long)]
        show: bool,

        /// Write a default configuration file
        #[arg(short, long)]
        init: bool,
    },
}

fn race_input(race: &RaceArgs) -> vdotrs::Result<RaceInput> {
    let seconds = if race.strict {
        parse_time_strict(&race.time)?
    } else {
        parse_time_string(&race.time)
    };

    RaceInput::new(race.distance, seconds)
}

fn run(cli: Cli, config: AppConfig) -> Result<()> {
    let settings = &config.output;

    match cli.command {
        Commands::Vdot { race } => {
            let input = race_input(&race)?;
            println!(
                "{:.1}",
                estimate_vdot(input.distance_meters, input.duration_seconds)
            );
        }

        Commands::Predict { race } => {
            let report = build_report(&race_input(&race)?);
            println!("{}", display::prediction_table(&report.race_predictions));
        }

        Commands::Paces { race } => {
            let report = build_report(&race_input(&race)?);
            println!("{}", display::pace_table(&report.training_paces));
        }

        Commands::Report {
            race,
            format,
            output,
        } => {
            let report = build_report(&race_input(&race)?);
            let format = format.map(OutputFormat::from).unwrap_or(settings.format);
            let rendered = display::render(&report, format, settings)?;

            match output {
                Some(path) => {
                    fs::write(&path, rendered)
                        .with_context(|| format!("Failed to write report: {}", path.display()))?;
                    println!("{} {}", "✓ Report written to".green(), path.display());
                }
                None => print!("{}", rendered),
            }
        }

        Commands::Config { show, init } => {
            if init {
                let mut fresh = AppConfig::default();
                let path = match &cli.config {
                    Some(path) => {
                        fresh.save_to_file(path)?;
                        path.clone()
                    }
                    None => fresh.save_default()?,
                };
                println!("{} {}", "✓ Configuration written to".green(), path.display());
            }
            if show || !init {
                print!("{}", toml::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let mut config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            std::process::exit(2);
        }
    };

    if cli.verbose > 0 {
        config.logging.level = LogLevel::from_verbosity(cli.verbose);
    }
    if !config.output.color {
        colored::control::set_override(false);
    }
    if let Err(err) = init_logging(&config.logging) {
        eprintln!("{} {:#}", "Warning: logging disabled:".yellow(), err);
    }

    if let Err(err) = run(cli, config) {
        match err.downcast_ref::<VdotError>() {
            Some(vdot_err) => {
                match vdot_err.severity() {
                    ErrorSeverity::Warning => tracing::warn!(error = %vdot_err, "Rejected input"),
                    ErrorSeverity::Error => tracing::error!(error = %vdot_err, "Command failed"),
                }
                eprintln!("{} {}", "Error:".red().bold(), vdot_err.user_message());
            }
            None => {
                tracing::error!(error = %err, "Command failed");
                eprintln!("{} {:#}", "Error:".red().bold(), err);
            }
        }
        std::process::exit(1);
    }
}

//! Handsign CLI: command-line interface for static hand gesture recognition.
//!
//! Usage:
//!   handsign classify <PATH>    Classify a landmark set or a single frame
//!   handsign stream [PATH]      Classify a JSONL stream of tracked frames
//!   handsign gestures           List the gesture dictionary
//!   handsign config             Show or write the configuration

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use handsign_common::config::AppConfig;
use handsign_gesture_core::ClassifierThresholds;

mod commands;

#[derive(Parser)]
#[command(
    name = "handsign",
    about = "Recognize static hand gestures from tracked hand landmarks",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to the standard location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Overrides for the classifier tolerance ratios.
#[derive(Args, Debug, Clone, Default)]
pub struct ThresholdArgs {
    /// Finger extension ratio (tip vs PIP distance from the wrist)
    #[arg(long)]
    extension_ratio: Option<f64>,

    /// Thumb abduction ratio (tip vs IP distance from the pinky MCP)
    #[arg(long)]
    thumb_ratio: Option<f64>,

    /// Victory spread ratio (tip gap vs middle finger length)
    #[arg(long)]
    spread_ratio: Option<f64>,
}

impl ThresholdArgs {
    /// Apply the overrides on top of configured thresholds.
    pub fn resolve(&self, config: &AppConfig) -> anyhow::Result<ClassifierThresholds> {
        let mut thresholds = ClassifierThresholds::from(&config.classifier);
        if let Some(ratio) = self.extension_ratio {
            thresholds.finger_extension_ratio = ratio;
        }
        if let Some(ratio) = self.thumb_ratio {
            thresholds.thumb_abduction_ratio = ratio;
        }
        if let Some(ratio) = self.spread_ratio {
            thresholds.victory_spread_ratio = ratio;
        }
        thresholds.validate()?;
        Ok(thresholds)
    }
}

/// Where spoken announcements go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SpeechOutput {
    /// Print "[speech] <text>" lines
    Stdout,
    /// Emit tracing events
    Log,
    /// Run the configured external TTS command
    Command,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a landmark set, a detected hand, or a frame from a JSON file
    Classify {
        /// JSON file: an array of 21 points, {"landmarks": [...]}, or {"hands": [...]}
        path: PathBuf,

        /// Also print the extracted finger features
        #[arg(long)]
        features: bool,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },

    /// Classify a JSONL stream of tracked frames and announce gestures
    Stream {
        /// JSONL file of frames; reads stdin when omitted or "-"
        path: Option<PathBuf>,

        /// Print one JSON outcome per frame
        #[arg(long)]
        json: bool,

        /// Announcement output (defaults to the configured command, else stdout)
        #[arg(long, value_enum)]
        speech: Option<SpeechOutput>,

        /// Disable spoken announcements
        #[arg(long)]
        no_speech: bool,

        /// Repeat an unchanged gesture only after this many milliseconds
        #[arg(long)]
        repeat_after_ms: Option<u64>,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },

    /// List every gesture with its description
    Gestures {
        /// Print the dictionary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the standard location
        #[arg(long)]
        write: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::load(),
    };

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    handsign_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Classify {
            path,
            features,
            json,
            thresholds,
        } => commands::classify::run(path, features, json, thresholds.resolve(&config)?),
        Commands::Stream {
            path,
            json,
            speech,
            no_speech,
            repeat_after_ms,
            thresholds,
        } => {
            let mut speech_config = config.speech.clone();
            if no_speech {
                speech_config.enabled = false;
            }
            if let Some(ms) = repeat_after_ms {
                speech_config.repeat_after_ms = ms;
            }
            commands::stream::run(
                path,
                json,
                speech,
                speech_config,
                thresholds.resolve(&config)?,
            )
            .await
        }
        Commands::Gestures { json } => commands::gestures::run(json),
        Commands::Config { write } => commands::config::run(&config, write),
    }
}

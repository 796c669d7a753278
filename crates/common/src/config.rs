//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{HandsignError, HandsignResult};

/// A finger is extended when its wrist-to-tip distance exceeds this
/// multiple of its wrist-to-PIP distance. Below ~1.1 loosely curled
/// fingers start reading as extended.
pub const FINGER_EXTENSION_RATIO: f64 = 1.15;

/// The thumb is open when its tip is farther from the pinky MCP than
/// this multiple of the thumb IP's distance to the pinky MCP.
pub const THUMB_ABDUCTION_RATIO: f64 = 1.1;

/// Index and middle tips must be spread by more than this fraction of
/// the middle finger's MCP-to-tip length to read as a V.
pub const VICTORY_SPREAD_RATIO: f64 = 0.3;

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Geometric thresholds used by the gesture classifier.
    pub classifier: ClassifierConfig,

    /// Spoken announcement settings.
    pub speech: SpeechConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Classifier tolerance ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Wrist-to-tip over wrist-to-PIP ratio above which a finger counts as extended.
    pub finger_extension_ratio: f64,

    /// Tip-to-pinky-MCP over IP-to-pinky-MCP ratio above which the thumb counts as open.
    pub thumb_abduction_ratio: f64,

    /// Minimum index/middle tip spread, as a fraction of middle finger length, for Victory.
    pub victory_spread_ratio: f64,
}

/// Announcement settings for the speech adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Whether gestures are announced at all.
    pub enabled: bool,

    /// The same gesture is announced again only after this many milliseconds.
    pub repeat_after_ms: u64,

    /// Speaking rate (1.0 = normal).
    pub rate: f32,

    /// Voice pitch (1.0 = normal).
    pub pitch: f32,

    /// Output volume in [0.0, 1.0].
    pub volume: f32,

    /// BCP 47 language tag used for voice selection.
    pub lang: String,

    /// External TTS command; the utterance text is appended as the last argument.
    pub command: Option<Vec<String>>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "handsign=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            finger_extension_ratio: FINGER_EXTENSION_RATIO,
            thumb_abduction_ratio: THUMB_ABDUCTION_RATIO,
            victory_spread_ratio: VICTORY_SPREAD_RATIO,
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            repeat_after_ms: 3_000,
            rate: 0.9,
            pitch: 1.0,
            volume: 1.0,
            lang: "en-US".to_string(),
            command: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Load config from an explicit path. Missing or malformed files are errors.
    pub fn load_from(path: &Path) -> HandsignResult<Self> {
        if !path.exists() {
            return Err(HandsignError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> HandsignResult<PathBuf> {
        let config_path = config_file_path();
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Save config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> HandsignResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("handsign").join("config.json")
}

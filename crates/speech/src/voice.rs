//! Utterance settings and voice selection.

use handsign_common::config::SpeechConfig;
use serde::{Deserialize, Serialize};

/// A voice offered by a speech backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    /// BCP 47 language tag, e.g. "en-US".
    pub lang: String,
}

impl Voice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }
}

/// Prosody and language for spoken output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtteranceSettings {
    /// Speaking rate (1.0 = normal). Slightly slow by default for clarity.
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
    pub lang: String,
}

impl Default for UtteranceSettings {
    fn default() -> Self {
        Self {
            rate: 0.9,
            pitch: 1.0,
            volume: 1.0,
            lang: "en-US".to_string(),
        }
    }
}

impl From<&SpeechConfig> for UtteranceSettings {
    fn from(config: &SpeechConfig) -> Self {
        Self {
            rate: config.rate,
            pitch: config.pitch,
            volume: config.volume.clamp(0.0, 1.0),
            lang: config.lang.clone(),
        }
    }
}

/// A single piece of text to speak.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub settings: UtteranceSettings,
    /// `None` leaves the choice to the backend's default voice.
    pub voice: Option<Voice>,
}

/// Pick the first voice whose language matches exactly.
pub fn select_voice<'a>(voices: &'a [Voice], lang: &str) -> Option<&'a Voice> {
    voices.iter().find(|voice| voice.lang == lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = UtteranceSettings::default();
        assert_eq!(settings.rate, 0.9);
        assert_eq!(settings.pitch, 1.0);
        assert_eq!(settings.volume, 1.0);
        assert_eq!(settings.lang, "en-US");
        assert_eq!(UtteranceSettings::from(&SpeechConfig::default()), settings);
    }

    #[test]
    fn test_volume_is_clamped() {
        let config = SpeechConfig {
            volume: 3.0,
            ..Default::default()
        };
        assert_eq!(UtteranceSettings::from(&config).volume, 1.0);
    }

    #[test]
    fn test_select_voice_prefers_exact_lang() {
        let voices = vec![
            Voice::new("Daniel", "en-GB"),
            Voice::new("Samantha", "en-US"),
            Voice::new("Alex", "en-US"),
        ];
        assert_eq!(select_voice(&voices, "en-US").unwrap().name, "Samantha");
        assert_eq!(select_voice(&voices, "en-GB").unwrap().name, "Daniel");
        assert!(select_voice(&voices, "en").is_none());
        assert!(select_voice(&[], "en-US").is_none());
    }
}

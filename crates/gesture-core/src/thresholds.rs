//! Tunable geometric tolerances for the classifier.

use handsign_common::config::ClassifierConfig;
pub use handsign_common::config::{
    FINGER_EXTENSION_RATIO, THUMB_ABDUCTION_RATIO, VICTORY_SPREAD_RATIO,
};
use handsign_common::error::{HandsignError, HandsignResult};
use serde::{Deserialize, Serialize};

/// Classifier tolerance ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierThresholds {
    pub finger_extension_ratio: f64,
    pub thumb_abduction_ratio: f64,
    pub victory_spread_ratio: f64,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            finger_extension_ratio: FINGER_EXTENSION_RATIO,
            thumb_abduction_ratio: THUMB_ABDUCTION_RATIO,
            victory_spread_ratio: VICTORY_SPREAD_RATIO,
        }
    }
}

impl From<&ClassifierConfig> for ClassifierThresholds {
    fn from(config: &ClassifierConfig) -> Self {
        Self {
            finger_extension_ratio: config.finger_extension_ratio,
            thumb_abduction_ratio: config.thumb_abduction_ratio,
            victory_spread_ratio: config.victory_spread_ratio,
        }
    }
}

impl ClassifierThresholds {
    /// Reject ratios that would make every comparison meaningless.
    pub fn validate(&self) -> HandsignResult<()> {
        let ratios = [
            ("finger_extension_ratio", self.finger_extension_ratio),
            ("thumb_abduction_ratio", self.thumb_abduction_ratio),
            ("victory_spread_ratio", self.victory_spread_ratio),
        ];
        for (name, value) in ratios {
            if !value.is_finite() || value <= 0.0 {
                return Err(HandsignError::config(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

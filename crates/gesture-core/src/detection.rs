//! Per-frame classification of every tracked hand.
//!
//! The classifier has no notion of confidence. Callers that need a score
//! get a fixed placeholder for any recognized gesture and zero otherwise.

use handsign_landmark_model::frame::{FrameDetection, Handedness};
use handsign_landmark_model::gesture::GestureLabel;
use serde::Serialize;

use crate::classifier::GestureClassifier;

/// Confidence reported for any recognized gesture.
pub const DETECTION_CONFIDENCE: f32 = 0.95;

/// A label with its placeholder confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub label: GestureLabel,
    pub confidence: f32,
}

impl Classification {
    pub fn new(label: GestureLabel) -> Self {
        let confidence = if label.is_none() {
            0.0
        } else {
            DETECTION_CONFIDENCE
        };
        Self { label, confidence }
    }

    pub fn none() -> Self {
        Self::new(GestureLabel::None)
    }
}

/// Result for one hand in a frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handedness: Option<Handedness>,
    pub landmark_count: usize,
    #[serde(flatten)]
    pub classification: Classification,
}

/// Result for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<u64>,
    pub hands: Vec<HandOutcome>,
    /// The gesture to display for this frame: the last hand's.
    pub primary: Classification,
}

/// Runs the classifier over every hand of a frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameDetector {
    classifier: GestureClassifier,
}

impl FrameDetector {
    pub fn new(classifier: GestureClassifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }

    /// Classify each hand independently.
    ///
    /// Hands are processed in tracker order and the last one becomes the
    /// frame's primary result. A frame without hands is [`GestureLabel::None`].
    pub fn detect(&self, frame: &FrameDetection) -> FrameOutcome {
        let hands: Vec<HandOutcome> = frame
            .hands
            .iter()
            .map(|hand| HandOutcome {
                handedness: hand.handedness,
                landmark_count: hand.landmarks.len(),
                classification: Classification::new(self.classifier.classify(&hand.landmarks)),
            })
            .collect();

        let primary = hands
            .last()
            .map(|hand| hand.classification)
            .unwrap_or_else(Classification::none);

        tracing::debug!(
            timestamp_ms = ?frame.timestamp_ms,
            hands = hands.len(),
            gesture = primary.label.id(),
            "Classified frame"
        );

        FrameOutcome {
            timestamp_ms: frame.timestamp_ms,
            hands,
            primary,
        }
    }
}

//! Static gesture classification.
//!
//! [`classify`] is total: malformed input (anything other than exactly 21
//! landmarks, including an empty slice) yields [`GestureLabel::None`]
//! instead of an error, since a tracker briefly losing the hand is routine.

use handsign_landmark_model::gesture::GestureLabel;
use handsign_landmark_model::landmark::{HandLandmarks, Point3D, LANDMARK_COUNT};

use crate::features::{HandFeatures, ThumbDirection};
use crate::thresholds::ClassifierThresholds;

/// Classify one hand with the default thresholds.
pub fn classify(landmarks: &[Point3D]) -> GestureLabel {
    GestureClassifier::with_defaults().classify(landmarks)
}

/// Classify a well-formed hand with the default thresholds.
pub fn classify_hand(hand: &HandLandmarks) -> GestureLabel {
    GestureClassifier::with_defaults().classify_hand(hand)
}

/// Map extracted features to a label.
///
/// Rules are checked in priority order and the first match wins:
/// 1. Thumbs up/down: thumb open, all fingers curled, thumb pointing
///    more vertically than horizontally. A sideways thumb falls through.
/// 2. Victory: index and middle extended and spread, ring and pinky curled.
/// 3. Pointing: only the index extended (thumb ignored).
/// 4. Love sign: thumb, index and pinky extended, middle and ring curled.
/// 5. Open hand: thumb open and all four fingers extended.
/// 6. Open hand: all four fingers extended, thumb in any state.
/// 7. Closed fist: everything curled, thumb included.
///
/// Anything else is [`GestureLabel::None`].
pub fn decide(features: &HandFeatures) -> GestureLabel {
    let f = &features.fingers;
    let open_count = f.open_count();
    let thumb_open = features.thumb_open;

    if thumb_open && open_count == 0 {
        match features.thumb_direction {
            ThumbDirection::Up => return GestureLabel::ThumbsUp,
            ThumbDirection::Down => return GestureLabel::ThumbsDown,
            ThumbDirection::Sideways => {}
        }
    }

    if f.index && f.middle && !f.ring && !f.pinky && features.fingers_spread {
        return GestureLabel::Victory;
    }

    if f.index && !f.middle && !f.ring && !f.pinky {
        return GestureLabel::Pointing;
    }

    if thumb_open && f.index && !f.middle && !f.ring && f.pinky {
        return GestureLabel::LoveSign;
    }

    if thumb_open && open_count == 4 {
        return GestureLabel::OpenHand;
    }

    // Subsumes the rule above: the thumb state is irrelevant here.
    if open_count == 4 {
        return GestureLabel::OpenHand;
    }

    if open_count == 0 && !thumb_open {
        return GestureLabel::ClosedFist;
    }

    GestureLabel::None
}

/// Stateless classifier with configurable thresholds.
///
/// Holds no mutable state; a single instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureClassifier {
    thresholds: ClassifierThresholds,
}

impl GestureClassifier {
    pub fn new(thresholds: ClassifierThresholds) -> Self {
        Self { thresholds }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn thresholds(&self) -> &ClassifierThresholds {
        &self.thresholds
    }

    /// Classify one hand. Any length other than 21 yields [`GestureLabel::None`].
    pub fn classify(&self, landmarks: &[Point3D]) -> GestureLabel {
        match self.features(landmarks) {
            Some(features) => decide(&features),
            None => GestureLabel::None,
        }
    }

    pub fn classify_hand(&self, hand: &HandLandmarks) -> GestureLabel {
        decide(&HandFeatures::extract(hand, &self.thresholds))
    }

    /// Extract features, or `None` when the landmark set is malformed.
    pub fn features(&self, landmarks: &[Point3D]) -> Option<HandFeatures> {
        match HandLandmarks::try_from(landmarks) {
            Ok(hand) => Some(HandFeatures::extract(&hand, &self.thresholds)),
            Err(_) => {
                tracing::trace!(
                    expected = LANDMARK_COUNT,
                    actual = landmarks.len(),
                    "Skipping malformed landmark set"
                );
                None
            }
        }
    }
}

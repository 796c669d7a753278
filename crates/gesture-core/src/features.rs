//! Geometric feature extraction from a hand landmark set.
//!
//! Finger extension is measured against the wrist: a curled finger's tip
//! stays near the palm, an extended one reaches well past its PIP joint.
//! The thumb moves across the palm rather than curling toward the wrist,
//! so it is measured against the pinky MCP instead.

use handsign_landmark_model::landmark::*;
use serde::Serialize;

use crate::thresholds::ClassifierThresholds;

/// Extension flags for the four non-thumb fingers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FingerStates {
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerStates {
    /// Number of extended fingers (0-4).
    pub fn open_count(&self) -> usize {
        [self.index, self.middle, self.ring, self.pinky]
            .iter()
            .filter(|open| **open)
            .count()
    }
}

/// Which way the thumb tip points relative to its IP joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThumbDirection {
    /// Tip above the IP joint, more vertical than horizontal.
    Up,
    /// Tip below the IP joint, more vertical than horizontal.
    Down,
    /// Horizontal displacement dominates (or the two are equal).
    Sideways,
}

/// Everything the decision logic needs to know about one hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandFeatures {
    pub fingers: FingerStates,
    pub thumb_open: bool,
    pub thumb_direction: ThumbDirection,
    /// Index and middle tips are spread far enough apart to form a V.
    pub fingers_spread: bool,
}

impl HandFeatures {
    pub fn extract(hand: &HandLandmarks, thresholds: &ClassifierThresholds) -> Self {
        let ratio = thresholds.finger_extension_ratio;
        let fingers = FingerStates {
            index: finger_extended(hand, INDEX_TIP, INDEX_PIP, ratio),
            middle: finger_extended(hand, MIDDLE_TIP, MIDDLE_PIP, ratio),
            ring: finger_extended(hand, RING_TIP, RING_PIP, ratio),
            pinky: finger_extended(hand, PINKY_TIP, PINKY_PIP, ratio),
        };

        Self {
            fingers,
            thumb_open: thumb_open(hand, thresholds.thumb_abduction_ratio),
            thumb_direction: thumb_direction(hand),
            fingers_spread: fingers_spread(hand, thresholds.victory_spread_ratio),
        }
    }

    pub fn open_count(&self) -> usize {
        self.fingers.open_count()
    }
}

fn finger_extended(hand: &HandLandmarks, tip: usize, pip: usize, ratio: f64) -> bool {
    hand.distance(WRIST, tip) > hand.distance(WRIST, pip) * ratio
}

fn thumb_open(hand: &HandLandmarks, ratio: f64) -> bool {
    hand.distance(THUMB_TIP, PINKY_MCP) > hand.distance(THUMB_IP, PINKY_MCP) * ratio
}

/// Image y grows downward, so a tip above the IP joint has negative `y_diff`.
fn thumb_direction(hand: &HandLandmarks) -> ThumbDirection {
    let tip = hand.point(THUMB_TIP);
    let ip = hand.point(THUMB_IP);
    let y_diff = tip.y - ip.y;
    let x_diff = (tip.x - ip.x).abs();

    if y_diff.abs() > x_diff {
        if y_diff < 0.0 {
            return ThumbDirection::Up;
        }
        if y_diff > 0.0 {
            return ThumbDirection::Down;
        }
    }
    ThumbDirection::Sideways
}

fn fingers_spread(hand: &HandLandmarks, ratio: f64) -> bool {
    let tip_gap = hand.distance(INDEX_TIP, MIDDLE_TIP);
    let middle_length = hand.distance(MIDDLE_TIP, MIDDLE_MCP);
    tip_gap > middle_length * ratio
}

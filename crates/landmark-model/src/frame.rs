//! Per-frame hand detections from an external hand tracker.
//!
//! Frames are exchanged as JSONL, one frame per line. A frame may hold
//! zero hands (tracking lost) or several. Each hand's landmark list is
//! kept as delivered, even if it is not 21 points long; the classifier
//! decides what to do with malformed hands.

use serde::{Deserialize, Serialize};

use crate::landmark::Point3D;

/// Which hand the tracker believes it saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handedness {
    Left,
    Right,
}

/// One hand as reported by the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedHand {
    /// Landmarks in tracker order.
    pub landmarks: Vec<Point3D>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handedness: Option<Handedness>,

    /// Tracker's own detection score, if provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// All hands detected in a single video frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameDetection {
    /// Milliseconds since the stream started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<u64>,

    #[serde(default)]
    pub hands: Vec<DetectedHand>,
}

impl DetectedHand {
    pub fn new(landmarks: Vec<Point3D>) -> Self {
        Self {
            landmarks,
            handedness: None,
            score: None,
        }
    }
}

impl FrameDetection {
    /// A frame in which no hand was found.
    pub fn empty(timestamp_ms: Option<u64>) -> Self {
        Self {
            timestamp_ms,
            hands: Vec::new(),
        }
    }

    pub fn with_hands(timestamp_ms: Option<u64>, hands: Vec<DetectedHand>) -> Self {
        Self {
            timestamp_ms,
            hands,
        }
    }
}

/// Parse JSONL frames. Blank lines and `#` comments are skipped.
pub fn parse_frames(jsonl: &str) -> Result<Vec<FrameDetection>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize frames to JSONL format.
pub fn serialize_frames(frames: &[FrameDetection]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for frame in frames {
        output.push_str(&serde_json::to_string(frame)?);
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let jsonl = "# header\n\n{\"timestamp_ms\":0,\"hands\":[]}\n  \n{\"hands\":[]}\n";
        let frames = parse_frames(jsonl).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].timestamp_ms, Some(0));
        assert_eq!(frames[1].timestamp_ms, None);
        assert!(frames[1].hands.is_empty());
    }

    #[test]
    fn test_hand_fields_are_optional() {
        let line = r#"{"hands":[{"landmarks":[{"x":0.1,"y":0.2,"z":0.0}]}]}"#;
        let frames = parse_frames(line).unwrap();
        let hand = &frames[0].hands[0];
        assert_eq!(hand.landmarks.len(), 1);
        assert_eq!(hand.handedness, None);
        assert_eq!(hand.score, None);
    }

    #[test]
    fn test_jsonl_roundtrip() {
        let mut hand = DetectedHand::new(vec![Point3D::new(0.5, 0.5, 0.0); 21]);
        hand.handedness = Some(Handedness::Right);
        hand.score = Some(0.9);
        let frames = vec![
            FrameDetection::empty(Some(0)),
            FrameDetection::with_hands(Some(33), vec![hand]),
        ];

        let jsonl = serialize_frames(&frames).unwrap();
        assert_eq!(jsonl.lines().count(), 2);
        assert!(jsonl.contains("\"handedness\":\"right\""));
        assert_eq!(parse_frames(&jsonl).unwrap(), frames);
    }

    #[test]
    fn test_malformed_line_is_an_error() {
        assert!(parse_frames("{\"hands\": 3}").is_err());
    }
}

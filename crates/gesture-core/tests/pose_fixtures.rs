use std::path::PathBuf;

use handsign_gesture_core::{classify, FrameDetector, DETECTION_CONFIDENCE};
use handsign_landmark_model::frame::parse_frames;
use handsign_landmark_model::gesture::GestureLabel;
use handsign_landmark_model::landmark::Point3D;
use serde::Deserialize;

#[derive(Deserialize)]
struct LabelledPose {
    label: GestureLabel,
    thumb: String,
    fingers: [u8; 4],
    landmarks: Vec<Point3D>,
}

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("poses")
        .join(name);
    std::fs::read_to_string(path).expect("fixture should be readable")
}

fn labelled_poses() -> Vec<LabelledPose> {
    fixture("labelled.jsonl")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| serde_json::from_str(line).expect("fixture pose should parse"))
        .collect()
}

#[test]
fn labelled_poses_classify_as_recorded() {
    let poses = labelled_poses();
    assert_eq!(poses.len(), 13);

    for pose in &poses {
        assert_eq!(
            classify(&pose.landmarks),
            pose.label,
            "thumb={} fingers={:?}",
            pose.thumb,
            pose.fingers
        );
    }
}

#[test]
fn every_gesture_has_a_fixture() {
    let poses = labelled_poses();
    for label in GestureLabel::ALL {
        assert!(
            poses.iter().any(|pose| pose.label == label),
            "no fixture for {label:?}"
        );
    }
}

#[test]
fn session_fixture_primary_labels() {
    let frames = parse_frames(&fixture("session.jsonl")).expect("session frames should parse");
    let detector = FrameDetector::default();

    let labels: Vec<GestureLabel> = frames
        .iter()
        .map(|frame| detector.detect(frame).primary.label)
        .collect();

    assert_eq!(
        labels,
        vec![
            GestureLabel::None,
            GestureLabel::ThumbsUp,
            GestureLabel::ThumbsUp,
            GestureLabel::Victory,
            GestureLabel::LoveSign,
            GestureLabel::None,
            GestureLabel::OpenHand,
        ]
    );
}

#[test]
fn session_fixture_two_hand_frame_keeps_both() {
    let frames = parse_frames(&fixture("session.jsonl")).expect("session frames should parse");
    let outcome = FrameDetector::default().detect(&frames[4]);

    assert_eq!(outcome.timestamp_ms, Some(133));
    assert_eq!(outcome.hands.len(), 2);
    assert_eq!(outcome.hands[0].classification.label, GestureLabel::ClosedFist);
    assert_eq!(outcome.hands[1].classification.label, GestureLabel::LoveSign);
    assert_eq!(outcome.primary.confidence, DETECTION_CONFIDENCE);
}

//! Classify a single landmark file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use handsign_gesture_core::{ClassifierThresholds, FrameDetector, GestureClassifier, HandFeatures};
use handsign_landmark_model::frame::{DetectedHand, FrameDetection};
use handsign_landmark_model::landmark::{HandLandmarks, Point3D};

pub fn run(
    path: PathBuf,
    show_features: bool,
    json: bool,
    thresholds: ClassifierThresholds,
) -> anyhow::Result<()> {
    let frame = load_frame(&path)?;
    let classifier = GestureClassifier::new(thresholds);
    let outcome = FrameDetector::new(classifier).detect(&frame);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("Classifying: {}", path.display());
    if frame.hands.is_empty() {
        println!("  No hands in frame.");
    }

    for (i, (hand, result)) in frame.hands.iter().zip(&outcome.hands).enumerate() {
        let label = result.classification.label;
        let side = hand
            .handedness
            .map(|h| format!(" ({h:?})"))
            .unwrap_or_default();
        println!();
        println!("Hand {}{side}:", i + 1);

        if let Err(e) = HandLandmarks::try_from(hand.landmarks.as_slice()) {
            println!("  [WARN] {e}");
        }

        println!("  Gesture: {} [{}]", label.display_name(), label.id());
        println!("  Description: {}", label.description());
        println!("  Confidence: {:.2}", result.classification.confidence);

        if show_features {
            match classifier.features(&hand.landmarks) {
                Some(features) => print_features(&features),
                None => println!("  Features: unavailable"),
            }
        }
    }

    if frame.hands.len() > 1 {
        println!();
        println!("Primary gesture: {}", outcome.primary.label);
    }

    Ok(())
}

fn print_features(features: &HandFeatures) {
    let flag = |open: bool| if open { "extended" } else { "curled" };
    println!("  Features:");
    println!(
        "    Thumb: {} ({:?})",
        if features.thumb_open { "open" } else { "closed" },
        features.thumb_direction
    );
    println!("    Index: {}", flag(features.fingers.index));
    println!("    Middle: {}", flag(features.fingers.middle));
    println!("    Ring: {}", flag(features.fingers.ring));
    println!("    Pinky: {}", flag(features.fingers.pinky));
    println!("    Extended fingers: {}", features.open_count());
    println!("    Index/middle spread: {}", features.fingers_spread);
}

/// Accept a bare point array, a single detected hand, or a whole frame.
fn load_frame(path: &Path) -> anyhow::Result<FrameDetection> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;

    let frame = if value.is_array() {
        let points: Vec<Point3D> = serde_json::from_value(value)?;
        FrameDetection::with_hands(None, vec![DetectedHand::new(points)])
    } else if value.get("hands").is_some() {
        serde_json::from_value(value)?
    } else if value.get("landmarks").is_some() {
        let hand: DetectedHand = serde_json::from_value(value)?;
        FrameDetection::with_hands(None, vec![hand])
    } else {
        anyhow::bail!(
            "{} must contain a point array, a \"landmarks\" field, or a \"hands\" field",
            path.display()
        );
    };
    Ok(frame)
}

//! Handsign Gesture Core
//!
//! Classifies a single frame of 21 hand landmarks into a gesture label:
//! - **Features:** Per-finger extension flags, thumb abduction and orientation
//! - **Decision:** A fixed-priority rule chain over those features
//! - **Detection:** Per-frame classification of every tracked hand
//!
//! This crate is pure computation: no I/O, no shared state.
//! Every call is independent of every other call.

pub mod classifier;
pub mod detection;
pub mod features;
pub mod thresholds;

#[cfg(test)]
mod test_poses;

pub use classifier::{classify, classify_hand, decide, GestureClassifier};
pub use detection::{
    Classification, FrameDetector, FrameOutcome, HandOutcome, DETECTION_CONFIDENCE,
};
pub use features::{FingerStates, HandFeatures, ThumbDirection};
pub use thresholds::ClassifierThresholds;

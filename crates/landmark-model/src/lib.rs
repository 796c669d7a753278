//! Handsign Landmark Model
//!
//! Defines the data contracts around the gesture classifier:
//! - **Landmarks:** 3D points and the fixed 21-point hand landmark set
//! - **Gestures:** The closed set of gesture labels and their dictionary text
//! - **Frames:** Per-frame hand detections produced by an external tracker
//!
//! Landmark `x`/`y` are normalized to `[0.0, 1.0]` relative to the image,
//! origin top-left, `y` increasing downward. `z` is relative depth.

pub mod frame;
pub mod gesture;
pub mod landmark;

pub use frame::*;
pub use gesture::*;
pub use landmark::*;

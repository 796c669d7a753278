//! Hand landmark types.
//!
//! A tracked hand is an ordered set of 21 points: the wrist, then four
//! joints per finger from thumb to pinky, each ordered base to tip.

use std::ops::Index;

use handsign_common::error::HandsignError;
use serde::{Deserialize, Serialize};

/// Number of landmarks in a tracked hand.
pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// A point in normalized image space with relative depth.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    /// Horizontal position, `0.0` = left edge.
    pub x: f64,
    /// Vertical position, `0.0` = top edge.
    pub y: f64,
    /// Depth relative to the wrist.
    #[serde(default)]
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point3D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Exactly 21 landmarks of a single hand.
///
/// Construction from a slice or vec of any other length fails; use
/// this type where a well-formed hand is required.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point3D>", into = "Vec<Point3D>")]
pub struct HandLandmarks {
    points: [Point3D; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Point3D; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// The landmark at a joint index (see the `WRIST`..`PINKY_TIP` constants).
    ///
    /// # Panics
    /// Panics if `index >= LANDMARK_COUNT`.
    pub fn point(&self, index: usize) -> &Point3D {
        &self.points[index]
    }

    /// Distance between two joints.
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.points[a].distance(&self.points[b])
    }

    pub fn as_slice(&self) -> &[Point3D] {
        &self.points
    }
}

impl Index<usize> for HandLandmarks {
    type Output = Point3D;

    fn index(&self, index: usize) -> &Point3D {
        &self.points[index]
    }
}

impl TryFrom<&[Point3D]> for HandLandmarks {
    type Error = HandsignError;

    fn try_from(points: &[Point3D]) -> Result<Self, Self::Error> {
        let points: [Point3D; LANDMARK_COUNT] = points
            .try_into()
            .map_err(|_| HandsignError::invalid_landmarks(LANDMARK_COUNT, points.len()))?;
        Ok(Self { points })
    }
}

impl TryFrom<Vec<Point3D>> for HandLandmarks {
    type Error = HandsignError;

    fn try_from(points: Vec<Point3D>) -> Result<Self, Self::Error> {
        Self::try_from(points.as_slice())
    }
}

impl From<HandLandmarks> for Vec<Point3D> {
    fn from(hand: HandLandmarks) -> Self {
        hand.points.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_distance_3d() {
        let a = Point3D::new(0.0, 0.0, 0.0);
        let b = Point3D::new(1.0, 2.0, 2.0);
        assert!((a.distance(&b) - 3.0).abs() < 1e-12);
        assert!((b.distance(&a) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_missing_z_defaults_to_zero() {
        let p: Point3D = serde_json::from_str(r#"{"x":0.25,"y":0.5}"#).unwrap();
        assert_eq!(p, Point3D::new(0.25, 0.5, 0.0));
    }

    #[test]
    fn test_joint_indices_cover_all_landmarks() {
        let tips = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];
        assert_eq!(tips, [4, 8, 12, 16, 20]);
        assert_eq!(PINKY_TIP + 1, LANDMARK_COUNT);
        assert_eq!(WRIST, 0);
    }

    #[test]
    fn test_hand_from_exact_slice() {
        let points: Vec<Point3D> = (0..LANDMARK_COUNT)
            .map(|i| Point3D::new(i as f64, 0.5, 0.0))
            .collect();
        let hand = HandLandmarks::try_from(points.as_slice()).unwrap();
        assert_eq!(hand[INDEX_TIP].x, 8.0);
        assert_eq!(hand.point(PINKY_TIP).x, 20.0);
        assert_eq!(hand.as_slice(), points.as_slice());
    }

    #[test]
    fn test_hand_deserialize_rejects_short_array() {
        let points = vec![Point3D::default(); 20];
        let json = serde_json::to_string(&points).unwrap();
        let result: Result<HandLandmarks, _> = serde_json::from_str(&json);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("expected 21 points, got 20"), "{err}");
    }

    proptest! {
        #[test]
        fn prop_wrong_length_is_rejected(len in 0usize..64) {
            prop_assume!(len != LANDMARK_COUNT);
            let points = vec![Point3D::default(); len];
            match HandLandmarks::try_from(points.as_slice()) {
                Err(HandsignError::InvalidLandmarks { expected, actual }) => {
                    prop_assert_eq!(expected, LANDMARK_COUNT);
                    prop_assert_eq!(actual, len);
                }
                other => prop_assert!(false, "unexpected result: {:?}", other),
            }
        }
    }
}

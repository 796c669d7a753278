//! Synthetic right-hand poses for unit tests.
//!
//! The wrist sits at the bottom centre of the frame with the fingers
//! pointing up. Curled fingers fold their DIP and tip back below the PIP
//! joint; extended fingers continue straight up past it.

use handsign_landmark_model::landmark::*;

const FINGER_X: [f64; 4] = [0.44, 0.5, 0.56, 0.62];
const MCP_Y: f64 = 0.6;
const PIP_Y: f64 = 0.5;

#[derive(Debug, Clone, Copy)]
pub enum Thumb {
    /// Tucked against the palm.
    Closed,
    /// Abducted out to the side, slightly raised.
    Open,
    Up,
    Down,
    /// Abducted but nearly horizontal.
    Sideways,
}

impl Thumb {
    fn tip(self) -> Point3D {
        let (x, y) = match self {
            Thumb::Closed => (0.45, 0.65),
            Thumb::Open => (0.25, 0.55),
            Thumb::Up => (0.33, 0.45),
            Thumb::Down => (0.33, 0.79),
            Thumb::Sideways => (0.2, 0.63),
        };
        Point3D::new(x, y, 0.0)
    }
}

pub struct PoseBuilder {
    thumb: Thumb,
    extended: [bool; 4],
    splay: f64,
    overrides: Vec<(usize, Point3D)>,
}

impl PoseBuilder {
    /// A closed fist.
    pub fn new() -> Self {
        Self {
            thumb: Thumb::Closed,
            extended: [false; 4],
            splay: 0.0,
            overrides: Vec::new(),
        }
    }

    pub fn thumb(mut self, thumb: Thumb) -> Self {
        self.thumb = thumb;
        self
    }

    pub fn index(mut self) -> Self {
        self.extended[0] = true;
        self
    }

    pub fn middle(mut self) -> Self {
        self.extended[1] = true;
        self
    }

    pub fn ring(mut self) -> Self {
        self.extended[2] = true;
        self
    }

    pub fn pinky(mut self) -> Self {
        self.extended[3] = true;
        self
    }

    pub fn all_fingers(self) -> Self {
        self.index().middle().ring().pinky()
    }

    /// Move the extended index tip this far left, away from the middle tip.
    pub fn splay(mut self, amount: f64) -> Self {
        self.splay = amount;
        self
    }

    /// Force a single landmark to a position after the pose is laid out.
    pub fn place(mut self, index: usize, point: Point3D) -> Self {
        self.overrides.push((index, point));
        self
    }

    pub fn points(&self) -> Vec<Point3D> {
        let mut points = vec![
            Point3D::new(0.5, 0.8, 0.0),
            Point3D::new(0.42, 0.75, 0.0),
            Point3D::new(0.38, 0.68, 0.0),
            Point3D::new(0.35, 0.62, 0.0),
            self.thumb.tip(),
        ];

        for (finger, &x) in FINGER_X.iter().enumerate() {
            points.push(Point3D::new(x, MCP_Y, 0.0));
            points.push(Point3D::new(x, PIP_Y, 0.0));
            if self.extended[finger] {
                let tip_x = if finger == 0 { x - self.splay } else { x };
                points.push(Point3D::new(x, 0.42, 0.0));
                points.push(Point3D::new(tip_x, 0.35, 0.0));
            } else {
                points.push(Point3D::new(x, 0.55, 0.0));
                points.push(Point3D::new(x, 0.62, 0.0));
            }
        }

        for &(index, point) in &self.overrides {
            points[index] = point;
        }
        points
    }

    pub fn build(&self) -> HandLandmarks {
        let points: [Point3D; LANDMARK_COUNT] = self
            .points()
            .try_into()
            .expect("pose builder always lays out 21 landmarks");
        HandLandmarks::new(points)
    }
}

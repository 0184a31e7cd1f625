use serde::{Deserialize, Serialize};

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn distance(&self, other: &Point) -> f64 {
        self.sq_distance(other).sqrt()
    }

    pub fn sq_distance(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point((self.0 + other.0) / 2.0, (self.1 + other.1) / 2.0)
    }

    /// Point at `distance` from `self` in the direction of `angle` (radians, screen coordinates).
    pub fn polar_offset(&self, angle: f64, distance: f64) -> Point {
        Point(
            self.0 + distance * angle.cos(),
            self.1 + distance * angle.sin(),
        )
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

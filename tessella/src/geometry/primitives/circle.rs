use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::PI;
use crate::geometry::geo_traits::{CollidesWith, Encloses, Primitive, SampleInterior};
use crate::geometry::primitives::{Point, Rect};
use crate::util::FPA;

/// Geometric primitive representing a circle
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {radius}"
        );
        debug_assert!(center.is_finite(), "invalid circle center: {center:?}");

        Self { center, radius }
    }

    /// Two circles overlap if the distance between their centers is strictly smaller than the sum
    /// of their radii. Circles that merely touch do not overlap.
    pub fn overlaps(&self, other: &Circle) -> bool {
        let sum_r = self.radius + other.radius;
        self.center.sq_distance(&other.center) < sum_r * sum_r
    }
}

impl CollidesWith<Circle> for Circle {
    fn collides_with(&self, other: &Circle) -> bool {
        let sum_r = self.radius + other.radius;
        self.center.sq_distance(&other.center) <= sum_r * sum_r
    }
}

impl CollidesWith<Point> for Circle {
    fn collides_with(&self, point: &Point) -> bool {
        FPA(point.distance(&self.center)) <= FPA(self.radius)
    }
}

impl Encloses<Circle> for Circle {
    fn encloses(&self, other: &Circle) -> bool {
        self.center.distance(&other.center) + other.radius <= self.radius
    }
}

impl SampleInterior for Circle {
    /// Polar sampling, the square root on the radial component compensates for the
    /// area of a ring growing linearly with its radius.
    fn sample_interior(&self, rng: &mut impl Rng) -> Point {
        let angle = rng.random_range(0.0..2.0 * PI);
        let r = self.radius * rng.random::<f64>().sqrt();
        self.center.polar_offset(angle, r)
    }
}

impl Primitive for Circle {
    fn centroid(&self) -> Point {
        self.center
    }

    fn area(&self) -> f64 {
        self.radius * self.radius * PI
    }

    fn bbox(&self) -> Rect {
        let (r, Point(x, y)) = (self.radius, self.center);
        Rect {
            x_min: x - r,
            y_min: y - r,
            x_max: x + r,
            y_max: y + r,
        }
    }

    fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}

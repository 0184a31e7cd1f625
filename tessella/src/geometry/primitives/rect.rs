use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ensure_params;
use crate::error::Result;
use crate::geometry::geo_traits::{CollidesWith, Encloses, Primitive, SampleInterior};
use crate::geometry::primitives::{Circle, Point};

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure_params!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Square with side `2 * half_side`, centered around `center`.
    pub fn square(center: Point, half_side: f64) -> Self {
        let Point(x, y) = center;
        Rect {
            x_min: x - half_side,
            y_min: y - half_side,
            x_max: x + half_side,
            y_max: y + half_side,
        }
    }

    /// Returns the four corners of `self`, clockwise on screen starting from the top-left corner.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.x_min, self.y_min),
            Point(self.x_max, self.y_min),
            Point(self.x_max, self.y_max),
            Point(self.x_min, self.y_max),
        ]
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

impl CollidesWith<Point> for Rect {
    #[inline(always)]
    fn collides_with(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

impl Encloses<Circle> for Rect {
    fn encloses(&self, circle: &Circle) -> bool {
        let Circle {
            center: Point(x, y),
            radius: r,
        } = *circle;
        x - r >= self.x_min && x + r <= self.x_max && y - r >= self.y_min && y + r <= self.y_max
    }
}

impl SampleInterior for Rect {
    /// A rectangle without width or height yields points on its remaining extent.
    fn sample_interior(&self, rng: &mut impl Rng) -> Point {
        Point(
            rng.random_range(self.x_min..=self.x_max),
            rng.random_range(self.y_min..=self.y_max),
        )
    }
}

impl Primitive for Rect {
    fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    fn area(&self) -> f64 {
        self.width() * self.height()
    }

    fn bbox(&self) -> Rect {
        *self
    }

    fn diameter(&self) -> f64 {
        (self.width().powi(2) + self.height().powi(2)).sqrt()
    }
}

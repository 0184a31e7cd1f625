use rand::Rng;

use crate::geometry::primitives::{Point, Rect};

/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can decide whether `T` lies entirely within `Self`.
/// Touching the border from the inside counts as enclosed.
pub trait Encloses<T> {
    fn encloses(&self, other: &T) -> bool;
}

/// Trait for types that can draw points uniformly distributed over their interior.
pub trait SampleInterior {
    fn sample_interior(&self, rng: &mut impl Rng) -> Point;
}

/// Trait for shared properties of geometric primitives.
pub trait Primitive {
    /// Geometric center of the primitive
    fn centroid(&self) -> Point;

    /// Area of the interior of the primitive
    fn area(&self) -> f64;

    /// Axis-aligned bounding box of the primitive
    fn bbox(&self) -> Rect;

    /// The distance between the two furthest points in the primitive.
    fn diameter(&self) -> f64;
}

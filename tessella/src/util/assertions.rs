use itertools::Itertools;

use crate::entities::StyledShape;
use crate::geometry::primitives::Circle;
use crate::geometry::{Shape, ShapeType};

//Various checks to verify correctness of generated output
//Used in debug_assert!() blocks and tests

/// No two circles overlap and every circle lies inside the boundary.
pub fn packing_is_valid(boundary: &Shape, circles: &[Circle]) -> bool {
    circles.iter().all(|c| boundary.is_inside(c)) && packing_is_overlap_free(circles)
}

pub fn packing_is_overlap_free(circles: &[Circle]) -> bool {
    circles
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !a.overlaps(b))
}

pub fn radii_within(circles: &[Circle], min_radius: f64, max_radius: f64) -> bool {
    circles
        .iter()
        .all(|c| c.radius >= min_radius && c.radius <= max_radius)
}

/// Every shape in the sequence has the same variant.
pub fn all_of_type(shapes: &[StyledShape], shape_type: ShapeType) -> bool {
    shapes.iter().all(|s| s.shape.shape_type() == shape_type)
}

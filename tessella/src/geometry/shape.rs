use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::PI;
use crate::error::TessellaError;
use crate::geometry::geo_traits::{CollidesWith, Encloses, Primitive, SampleInterior};
use crate::geometry::primitives::{Circle, ConvexPolygon, Point, Rect};

/// The closed set of shape variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Circle,
    Square,
    Triangle,
    Hexagon,
}

impl ShapeType {
    pub const ALL: [ShapeType; 4] = [
        ShapeType::Circle,
        ShapeType::Square,
        ShapeType::Triangle,
        ShapeType::Hexagon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::Circle => "circle",
            ShapeType::Square => "square",
            ShapeType::Triangle => "triangle",
            ShapeType::Hexagon => "hexagon",
        }
    }
}

impl FromStr for ShapeType {
    type Err = TessellaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        ShapeType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| TessellaError::InvalidShapeType(s.to_string()))
    }
}

impl Display for ShapeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A posed shape, fully defined by its type, center and radius.
///
/// `radius` is a scale factor whose meaning depends on the variant:
/// * circle: the radius
/// * square: half of the side length (axis-aligned)
/// * triangle: circumradius of an equilateral triangle pointing up (screen coordinates, y down)
/// * hexagon: circumradius of a regular hexagon with a vertex at angle 0
///
/// Vertices are never stored, they are derived from the pose whenever they are needed.
/// Changing the pose yields a new [`Shape`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    shape_type: ShapeType,
    center: Point,
    radius: f64,
}

impl Shape {
    pub fn new(shape_type: ShapeType, center: Point, radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid shape radius: {radius}"
        );
        debug_assert!(center.is_finite(), "invalid shape center: {center:?}");
        Self {
            shape_type,
            center,
            radius,
        }
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Same shape and scale, moved to `center`.
    pub fn with_position(&self, center: Point) -> Self {
        Shape::new(self.shape_type, center, self.radius)
    }

    /// Same shape and position, with a new scale factor.
    pub fn with_scale(&self, radius: f64) -> Self {
        Shape::new(self.shape_type, self.center, radius)
    }

    /// The concrete primitive backing the variant, derived from the current pose.
    pub fn geometry(&self) -> Geometry {
        let (Point(cx, cy), r) = (self.center, self.radius);
        match self.shape_type {
            ShapeType::Circle => Geometry::Circle(Circle::new(self.center, r)),
            ShapeType::Square => Geometry::Square(Rect::square(self.center, r)),
            ShapeType::Triangle => {
                let (dx, dy) = (r * (PI / 6.0).cos(), r * (PI / 6.0).sin());
                Geometry::Triangle(ConvexPolygon::new([
                    Point(cx, cy - r),
                    Point(cx - dx, cy + dy),
                    Point(cx + dx, cy + dy),
                ]))
            }
            ShapeType::Hexagon => Geometry::Hexagon(ConvexPolygon::new(std::array::from_fn(
                |k| self.center.polar_offset(k as f64 * PI / 3.0, r),
            ))),
        }
    }

    /// Vertices in drawing order, empty for a circle.
    pub fn vertices(&self) -> Vec<Point> {
        match self.geometry() {
            Geometry::Circle(_) => vec![],
            Geometry::Square(rect) => rect.corners().to_vec(),
            Geometry::Triangle(tri) => tri.points.to_vec(),
            Geometry::Hexagon(hex) => hex.points.to_vec(),
        }
    }

    /// Exact point-in-shape test, points on the border are inside.
    pub fn contains_point(&self, point: &Point) -> bool {
        self.geometry().collides_with(point)
    }

    /// A point uniformly distributed over the interior of the shape.
    pub fn random_interior_point(&self, rng: &mut impl Rng) -> Point {
        self.geometry().sample_interior(rng)
    }

    /// Whether `candidate` lies entirely within this shape.
    pub fn is_inside(&self, candidate: &Circle) -> bool {
        self.geometry().encloses(candidate)
    }

    pub fn bbox(&self) -> Rect {
        self.geometry().bbox()
    }

    pub fn area(&self) -> f64 {
        self.geometry().area()
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::new(ShapeType::Circle, c.center, c.radius)
    }
}

/// Concrete primitive of a [`Shape`], one variant per [`ShapeType`].
/// All geometric predicates of a shape dispatch through this enum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    Circle(Circle),
    Square(Rect),
    Triangle(ConvexPolygon<3>),
    Hexagon(ConvexPolygon<6>),
}

/// Forwards a call to the primitive inside every [`Geometry`] variant.
macro_rules! dispatch {
    ($self:expr, $g:ident => $call:expr) => {
        match $self {
            Geometry::Circle($g) => $call,
            Geometry::Square($g) => $call,
            Geometry::Triangle($g) => $call,
            Geometry::Hexagon($g) => $call,
        }
    };
}

impl CollidesWith<Point> for Geometry {
    fn collides_with(&self, point: &Point) -> bool {
        dispatch!(self, g => g.collides_with(point))
    }
}

impl Encloses<Circle> for Geometry {
    fn encloses(&self, circle: &Circle) -> bool {
        dispatch!(self, g => g.encloses(circle))
    }
}

impl SampleInterior for Geometry {
    fn sample_interior(&self, rng: &mut impl Rng) -> Point {
        dispatch!(self, g => g.sample_interior(rng))
    }
}

impl Primitive for Geometry {
    fn centroid(&self) -> Point {
        dispatch!(self, g => g.centroid())
    }

    fn area(&self) -> f64 {
        dispatch!(self, g => g.area())
    }

    fn bbox(&self) -> Rect {
        dispatch!(self, g => g.bbox())
    }

    fn diameter(&self) -> f64 {
        dispatch!(self, g => g.diameter())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use test_case::test_case;

    use super::*;

    #[test_case("circle", ShapeType::Circle)]
    #[test_case("Square", ShapeType::Square)]
    #[test_case(" triangle ", ShapeType::Triangle)]
    #[test_case("HEXAGON", ShapeType::Hexagon)]
    fn parse_shape_type(tag: &str, expected: ShapeType) {
        assert_eq!(tag.parse::<ShapeType>(), Ok(expected));
    }

    #[test_case("invalidType")]
    #[test_case("")]
    #[test_case("pentagon")]
    fn parse_invalid_shape_type(tag: &str) {
        assert_eq!(
            tag.parse::<ShapeType>(),
            Err(TessellaError::InvalidShapeType(tag.to_string()))
        );
    }

    #[test_case(ShapeType::Circle)]
    #[test_case(ShapeType::Square)]
    #[test_case(ShapeType::Triangle)]
    #[test_case(ShapeType::Hexagon)]
    fn random_points_are_inside(shape_type: ShapeType) {
        let shape = Shape::new(shape_type, Point(250.0, 250.0), 200.0);
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..1000 {
            let p = shape.random_interior_point(&mut rng);
            assert!(shape.contains_point(&p), "{p:?} not inside {shape:?}");
        }
    }

    #[test_case(ShapeType::Circle, 0)]
    #[test_case(ShapeType::Square, 4)]
    #[test_case(ShapeType::Triangle, 3)]
    #[test_case(ShapeType::Hexagon, 6)]
    fn vertices_lie_on_the_border(shape_type: ShapeType, n_vertices: usize) {
        let shape = Shape::new(shape_type, Point(10.0, 10.0), 5.0);
        let vertices = shape.vertices();
        assert_eq!(vertices.len(), n_vertices);
        assert!(vertices.iter().all(|v| shape.contains_point(v)));
    }

    #[test]
    fn triangle_vertices() {
        let shape = Shape::new(ShapeType::Triangle, Point(0.0, 0.0), 2.0);
        let v = shape.vertices();
        assert_eq!(v[0], Point(0.0, -2.0));
        assert!(approx_eq!(f64, v[1].0, -(3.0_f64.sqrt()), epsilon = 1e-12));
        assert!(approx_eq!(f64, v[1].1, 1.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, v[2].0, 3.0_f64.sqrt(), epsilon = 1e-12));
        assert!(approx_eq!(f64, v[2].1, 1.0, epsilon = 1e-12));
    }

    #[test]
    fn new_pose_recomputes_vertices() {
        let shape = Shape::new(ShapeType::Hexagon, Point(10.0, 10.0), 5.0);
        let moved = shape.with_position(Point(15.0, 15.0));
        let scaled = shape.with_scale(10.0);

        assert_eq!(moved.center(), Point(15.0, 15.0));
        assert_eq!(moved.radius(), 5.0);
        assert_eq!(scaled.center(), Point(10.0, 10.0));
        assert_eq!(scaled.radius(), 10.0);

        for (v, v_moved) in shape.vertices().iter().zip(moved.vertices()) {
            assert!(approx_eq!(f64, v.0 + 5.0, v_moved.0, epsilon = 1e-9));
            assert!(approx_eq!(f64, v.1 + 5.0, v_moved.1, epsilon = 1e-9));
        }
        assert!(approx_eq!(f64, scaled.vertices()[0].0, 20.0, epsilon = 1e-9));
        //the original is left untouched
        assert_eq!(shape.radius(), 5.0);
    }

    #[test]
    fn hexagon_circle_enclosure() {
        let hexagon = Shape::new(ShapeType::Hexagon, Point(10.0, 10.0), 5.0);
        assert!(hexagon.is_inside(&Circle::new(Point(10.0, 10.0), 2.0)));
        assert!(!hexagon.is_inside(&Circle::new(Point(20.0, 20.0), 3.0)));
        //inradius of a regular hexagon is r * cos(30°)
        let inradius = 5.0 * (PI / 6.0).cos();
        assert!(hexagon.is_inside(&Circle::new(Point(10.0, 10.0), inradius - 1e-9)));
        assert!(!hexagon.is_inside(&Circle::new(Point(10.0, 10.0), inradius + 1e-6)));
    }

    #[test]
    fn triangle_circle_enclosure() {
        let triangle = Shape::new(ShapeType::Triangle, Point(0.0, 0.0), 10.0);
        //inradius of an equilateral triangle is half its circumradius
        assert!(triangle.is_inside(&Circle::new(Point(0.0, 0.0), 5.0 - 1e-9)));
        assert!(!triangle.is_inside(&Circle::new(Point(0.0, 0.0), 5.0 + 1e-6)));
        assert!(!triangle.is_inside(&Circle::new(Point(0.0, -9.0), 1.0)));
    }

    #[test]
    fn circle_in_circle_is_exact() {
        let boundary = Shape::new(ShapeType::Circle, Point(250.0, 250.0), 200.0);
        assert!(boundary.is_inside(&Circle::new(Point(250.0, 100.0), 50.0)));
        assert!(!boundary.is_inside(&Circle::new(Point(250.0, 99.0), 50.0)));
    }

    #[test_case(ShapeType::Circle, PI * 4.0)]
    #[test_case(ShapeType::Square, 16.0)]
    #[test_case(ShapeType::Triangle, 3.0 * 3.0_f64.sqrt())]
    #[test_case(ShapeType::Hexagon, 6.0 * 3.0_f64.sqrt())]
    fn areas(shape_type: ShapeType, expected: f64) {
        let shape = Shape::new(shape_type, Point(3.0, -4.0), 2.0);
        assert!(approx_eq!(f64, shape.area(), expected, epsilon = 1e-9));
    }

    #[test_case(ShapeType::Circle, 4.0)]
    #[test_case(ShapeType::Square, 4.0 * 2.0_f64.sqrt())]
    #[test_case(ShapeType::Triangle, 2.0 * 3.0_f64.sqrt())]
    #[test_case(ShapeType::Hexagon, 4.0)]
    fn centroid_and_diameter(shape_type: ShapeType, diameter: f64) {
        let geometry = Shape::new(shape_type, Point(3.0, -4.0), 2.0).geometry();
        let centroid = geometry.centroid();
        assert!(approx_eq!(f64, centroid.0, 3.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, centroid.1, -4.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, geometry.diameter(), diameter, epsilon = 1e-9));
    }
}

use crate::PI;
use crate::entities::StyledShape;
use crate::error::Result;
use crate::factory::ShapeTemplate;
use crate::geometry::primitives::{ConvexPolygon, Point};
use crate::geometry::{Geometry, Shape, ShapeType};
use crate::params::{FractalParams, ShapeParams, Validate, validated_depth};

/// Recursive self-similar subdivision of a single shape.
///
/// The rule depends on the variant of the shape:
/// * triangle: three half-size copies at the corners (Sierpinski triangle), leaves only
/// * square: eight third-size copies around an empty center cell (Sierpinski carpet), leaves only
/// * hexagon: six third-size copies on a ring plus one in the center, leaves only
/// * circle: every level is emitted, followed by three half-size children
///
/// Every emitted shape shares the style of the [`ShapeParams`] the generator was built from.
#[derive(Debug, Clone)]
pub struct FractalGenerator {
    template: ShapeTemplate,
    params: FractalParams,
    shapes: Vec<StyledShape>,
}

impl FractalGenerator {
    pub fn new(shape_params: &ShapeParams, params: FractalParams) -> Result<Self> {
        Ok(Self {
            template: ShapeTemplate::from_params(shape_params)?,
            params,
            shapes: vec![],
        })
    }

    /// Runs a full pass, replacing the output of any previous pass.
    /// Invalid parameters are refused before a single shape is emitted.
    pub fn execute(&mut self) -> Result<&[StyledShape]> {
        self.shapes.clear();
        self.params.validate()?;
        let depth = validated_depth(self.params.depth)?;

        let root = Shape::new(self.template.shape_type, self.params.center, self.params.size);
        match root.shape_type() {
            ShapeType::Triangle => self.subdivide_triangle(root, depth),
            ShapeType::Square => self.subdivide_square(root, depth),
            ShapeType::Hexagon => self.subdivide_hexagon(root, depth),
            ShapeType::Circle => self.subdivide_circle(root, depth),
        }

        debug_assert!(
            self.shapes.len() == FractalGenerator::expected_len(root.shape_type(), depth),
            "fractal of {} with depth {depth} has {} shapes",
            root.shape_type(),
            self.shapes.len()
        );

        Ok(&self.shapes)
    }

    fn emit(&mut self, shape: Shape) {
        self.shapes
            .push(StyledShape::new(shape, self.template.style.clone()));
    }

    fn subdivide_triangle(&mut self, triangle: Shape, depth: u32) {
        if depth == 0 {
            self.emit(triangle);
            return;
        }
        let Geometry::Triangle(ConvexPolygon { points: [v1, v2, v3] }) = triangle.geometry()
        else {
            unreachable!("triangle shape without triangle geometry")
        };
        let new_r = triangle.radius() / 2.0;

        // children sit one child radius above the apex and above the midpoints of both upper edges
        let (m12, m13) = (v1.midpoint(&v2), v1.midpoint(&v3));
        for anchor in [v1, m12, m13] {
            let child = triangle
                .with_position(Point(anchor.0, anchor.1 - new_r))
                .with_scale(new_r);
            self.subdivide_triangle(child, depth - 1);
        }
    }

    fn subdivide_square(&mut self, square: Shape, depth: u32) {
        if depth == 0 {
            self.emit(square);
            return;
        }
        let Point(cx, cy) = square.center();
        let new_r = square.radius() / 3.0;
        let step = 2.0 * new_r;

        for row in 0..3 {
            for col in 0..3 {
                if row == 1 && col == 1 {
                    continue;
                }
                let x = cx + (col as f64 - 1.0) * step;
                let y = cy + (row as f64 - 1.0) * step;
                let child = square.with_position(Point(x, y)).with_scale(new_r);
                self.subdivide_square(child, depth - 1);
            }
        }
    }

    fn subdivide_hexagon(&mut self, hexagon: Shape, depth: u32) {
        if depth == 0 {
            self.emit(hexagon);
            return;
        }
        let center = hexagon.center();
        let new_r = hexagon.radius() / 3.0;

        for i in 0..6 {
            let position = center.polar_offset(i as f64 * PI / 3.0, 2.0 * new_r);
            let child = hexagon.with_position(position).with_scale(new_r);
            self.subdivide_hexagon(child, depth - 1);
        }
        self.subdivide_hexagon(hexagon.with_scale(new_r), depth - 1);
    }

    fn subdivide_circle(&mut self, circle: Shape, depth: u32) {
        if depth == 0 {
            return;
        }
        self.emit(circle);

        let Point(cx, cy) = circle.center();
        let new_r = circle.radius() / 2.0;
        let (dx, dy) = (new_r * (PI / 6.0).cos(), new_r * (PI / 6.0).sin());
        for position in [
            Point(cx, cy - new_r),
            Point(cx - dx, cy + dy),
            Point(cx + dx, cy + dy),
        ] {
            let child = circle.with_position(position).with_scale(new_r);
            self.subdivide_circle(child, depth - 1);
        }
    }

    /// Number of shapes a pass of the given variant and depth emits.
    pub fn expected_len(shape_type: ShapeType, depth: u32) -> usize {
        match shape_type {
            ShapeType::Triangle => 3usize.saturating_pow(depth),
            ShapeType::Square => 8usize.saturating_pow(depth),
            ShapeType::Hexagon => 7usize.saturating_pow(depth),
            //1 + 3 + ... + 3^(d-1)
            ShapeType::Circle => (3usize.saturating_pow(depth) - 1) / 2,
        }
    }

    pub fn shape_type(&self) -> ShapeType {
        self.template.shape_type
    }

    pub fn params(&self) -> &FractalParams {
        &self.params
    }

    /// Output of the last pass, in draw order.
    pub fn shapes(&self) -> &[StyledShape] {
        &self.shapes
    }

    pub fn into_shapes(self) -> Vec<StyledShape> {
        self.shapes
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use test_case::test_case;

    use super::*;
    use crate::TessellaError;

    fn generator(shape_type: &str, depth: i32) -> FractalGenerator {
        sized_generator(shape_type, Point(400.0, 400.0), 300.0, depth)
    }

    fn sized_generator(shape_type: &str, center: Point, size: f64, depth: i32) -> FractalGenerator {
        let shape_params = ShapeParams::new(shape_type, 1.0, "#000000", "#FFFFFF");
        let params = FractalParams {
            center,
            size,
            depth,
        };
        FractalGenerator::new(&shape_params, params).unwrap()
    }

    #[test_case("triangle", 0 => 1)]
    #[test_case("triangle", 1 => 3)]
    #[test_case("triangle", 4 => 81)]
    #[test_case("square", 1 => 8)]
    #[test_case("square", 3 => 512)]
    #[test_case("hexagon", 2 => 49)]
    #[test_case("circle", 0 => 0)]
    #[test_case("circle", 1 => 1)]
    #[test_case("circle", 3 => 13)]
    fn shape_count(shape_type: &str, depth: i32) -> usize {
        let mut fractal = generator(shape_type, depth);
        let n = fractal.execute().unwrap().len();
        assert_eq!(
            n,
            FractalGenerator::expected_len(fractal.shape_type(), depth as u32)
        );
        n
    }

    #[test]
    fn first_triangle_level() {
        let mut fractal = generator("triangle", 1);
        let shapes = fractal.execute().unwrap();
        let centers = shapes.iter().map(|s| s.shape.center()).collect::<Vec<_>>();

        let r = 300.0;
        let (dx, dy) = (r * (PI / 6.0).cos(), r * (PI / 6.0).sin());
        let apex = Point(400.0, 400.0 - r);
        let expected = [
            Point(apex.0, apex.1 - r / 2.0),
            Point((apex.0 + 400.0 - dx) / 2.0, (apex.1 + 400.0 + dy) / 2.0 - r / 2.0),
            Point((apex.0 + 400.0 + dx) / 2.0, (apex.1 + 400.0 + dy) / 2.0 - r / 2.0),
        ];
        for (c, e) in centers.iter().zip(expected) {
            assert!(approx_eq!(f64, c.0, e.0, epsilon = 1e-9));
            assert!(approx_eq!(f64, c.1, e.1, epsilon = 1e-9));
        }
        assert!(shapes.iter().all(|s| s.shape.radius() == 150.0));
    }

    #[test]
    fn carpet_skips_center_cell() {
        let mut fractal = generator("square", 1);
        let shapes = fractal.execute().unwrap();
        assert!(shapes.iter().all(|s| s.shape.center() != Point(400.0, 400.0)));
        assert!(shapes.iter().all(|s| s.shape.radius() == 100.0));
        //first child is the top left cell, row major order
        assert_eq!(shapes[0].shape.center(), Point(200.0, 200.0));
        assert_eq!(shapes[7].shape.center(), Point(600.0, 600.0));
    }

    #[test]
    fn hexagon_center_child_last() {
        let mut fractal = generator("hexagon", 1);
        let shapes = fractal.execute().unwrap();
        assert_eq!(shapes[6].shape.center(), Point(400.0, 400.0));
        for s in &shapes[..6] {
            assert!(approx_eq!(
                f64,
                s.shape.center().distance(&Point(400.0, 400.0)),
                200.0,
                epsilon = 1e-9
            ));
        }
    }

    #[test]
    fn circle_parent_before_children() {
        let mut fractal = generator("circle", 2);
        let shapes = fractal.execute().unwrap();
        assert_eq!(shapes[0].shape.center(), Point(400.0, 400.0));
        assert_eq!(shapes[0].shape.radius(), 300.0);
        assert_eq!(shapes[1].shape.center(), Point(400.0, 250.0));
        assert!(shapes[1..].iter().all(|s| s.shape.radius() == 150.0));
    }

    #[test]
    fn negative_depth_is_refused() {
        let mut fractal = generator("triangle", 2);
        assert_eq!(fractal.execute().unwrap().len(), 9);

        let mut fractal = generator("triangle", -1);
        assert!(fractal.execute().is_err());
        assert!(fractal.shapes().is_empty());
    }

    #[test_case(0.0; "zero")]
    #[test_case(-10.0; "negative")]
    #[test_case(f64::NAN; "nan")]
    #[test_case(1e-14; "vanishing")]
    fn invalid_size_is_refused(size: f64) {
        let mut fractal = sized_generator("triangle", Point(250.0, 250.0), size, 1);
        assert!(matches!(
            fractal.execute(),
            Err(TessellaError::InvalidParameters(_))
        ));
        assert!(fractal.shapes().is_empty());
    }

    #[test_case("triangle")]
    #[test_case("square")]
    #[test_case("hexagon")]
    #[test_case("circle")]
    fn deep_levels_below_float_resolution(shape_type: &str) {
        //leaves end up smaller than the spacing of floats around the center
        let mut fractal = sized_generator(shape_type, Point(250.0, 250.0), 1e-12, 5);
        let n = fractal.execute().unwrap().len();
        assert_eq!(n, FractalGenerator::expected_len(fractal.shape_type(), 5));
    }

    #[test]
    fn repeated_pass_replaces_output() {
        let mut fractal = generator("hexagon", 2);
        let first = fractal.execute().unwrap().to_vec();
        let second = fractal.execute().unwrap();
        assert_eq!(first.as_slice(), second);
    }
}

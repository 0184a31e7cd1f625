use itertools::Itertools;
use rand::Rng;

use crate::geometry::geo_traits::{CollidesWith, Encloses, Primitive, SampleInterior};
use crate::geometry::primitives::{Circle, Point, Rect};
use crate::util::FPA;

/// Geometric primitive representing a convex polygon with `N` vertices.
/// Vertices may be ordered in either direction, but must be in order along the border.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvexPolygon<const N: usize> {
    pub points: [Point; N],
}

impl<const N: usize> ConvexPolygon<N> {
    /// Degenerate polygons (zero area) are allowed, they enclose no circle.
    pub fn new(points: [Point; N]) -> Self {
        debug_assert!(N >= 3, "polygon must have at least 3 points");
        Self { points }
    }

    /// Iterates over the edges as `(start, end)` pairs, closing the loop.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        (0..N).map(|i| (self.points[i], self.points[(i + 1) % N]))
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //positive when the vertices wind counterclockwise in a y-up frame
    pub fn signed_area(&self) -> f64 {
        0.5 * self
            .edges()
            .map(|(Point(x_i, y_i), Point(x_j, y_j))| x_i * y_j - x_j * y_i)
            .sum::<f64>()
    }

    /// Signed distance from `point` to the supporting line of every edge.
    /// Positive on the interior side, regardless of winding order.
    pub fn edge_distances(&self, point: Point) -> impl Iterator<Item = f64> + '_ {
        let winding = self.signed_area().signum();
        self.edges().map(move |(start, end)| {
            let (ex, ey) = (end.0 - start.0, end.1 - start.1);
            let cross = ex * (point.1 - start.1) - ey * (point.0 - start.0);
            winding * cross / start.distance(&end)
        })
    }
}

impl<const N: usize> CollidesWith<Point> for ConvexPolygon<N> {
    fn collides_with(&self, point: &Point) -> bool {
        //a point is inside a convex polygon iff it is on the interior side of all edges
        self.edge_distances(*point).all(|d| FPA(d) >= FPA(0.0))
    }
}

impl<const N: usize> Encloses<Circle> for ConvexPolygon<N> {
    fn encloses(&self, circle: &Circle) -> bool {
        self.edge_distances(circle.center)
            .all(|d| d >= circle.radius)
    }
}

impl<const N: usize> SampleInterior for ConvexPolygon<N> {
    fn sample_interior(&self, rng: &mut impl Rng) -> Point {
        let p = &self.points;
        if N == 3 {
            return sample_triangle(p[0], p[1], p[2], rng);
        }
        //the fan from the first vertex tiles a convex polygon, pick a triangle weighted by its area
        let fan_area = |i: usize| triangle_area(p[0], p[i], p[i + 1]);
        let mut target = rng.random::<f64>() * (1..N - 1).map(fan_area).sum::<f64>();
        let mut i = 1;
        while i < N - 2 && target >= fan_area(i) {
            target -= fan_area(i);
            i += 1;
        }
        sample_triangle(p[0], p[i], p[i + 1], rng)
    }
}

impl<const N: usize> Primitive for ConvexPolygon<N> {
    fn centroid(&self) -> Point {
        //based on: https://en.wikipedia.org/wiki/Centroid#Of_a_polygon
        let area = self.signed_area();
        if area == 0.0 {
            let (s_x, s_y) = self
                .points
                .iter()
                .fold((0.0, 0.0), |(s_x, s_y), p| (s_x + p.0, s_y + p.1));
            return Point(s_x / N as f64, s_y / N as f64);
        }
        let (c_x, c_y) = self.edges().fold(
            (0.0, 0.0),
            |(c_x, c_y), (Point(x_i, y_i), Point(x_j, y_j))| {
                let cross = x_i * y_j - x_j * y_i;
                (c_x + (x_i + x_j) * cross, c_y + (y_i + y_j) * cross)
            },
        );
        Point(c_x / (6.0 * area), c_y / (6.0 * area))
    }

    fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    fn bbox(&self) -> Rect {
        let (x_min, x_max) = self
            .points
            .iter()
            .map(|p| p.0)
            .minmax()
            .into_option()
            .unwrap_or_default();
        let (y_min, y_max) = self
            .points
            .iter()
            .map(|p| p.1)
            .minmax()
            .into_option()
            .unwrap_or_default();
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    fn diameter(&self) -> f64 {
        self.points
            .iter()
            .tuple_combinations()
            .map(|(a, b)| a.distance(b))
            .fold(0.0, f64::max)
    }
}

/// Uniform sample of the triangle `v1 v2 v3` using barycentric coordinates.
/// Pairs with `r1 + r2 > 1` fall in the mirrored half of the parallelogram and are folded back.
pub fn sample_triangle(v1: Point, v2: Point, v3: Point, rng: &mut impl Rng) -> Point {
    let mut r1 = rng.random::<f64>();
    let mut r2 = rng.random::<f64>();
    if r1 + r2 > 1.0 {
        r1 = 1.0 - r1;
        r2 = 1.0 - r2;
    }
    let r0 = 1.0 - r1 - r2;
    Point(
        r0 * v1.0 + r1 * v2.0 + r2 * v3.0,
        r0 * v1.1 + r1 * v2.1 + r2 * v3.1,
    )
}

fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    0.5 * ((b.0 - a.0) * (c.1 - a.1) - (c.0 - a.0) * (b.1 - a.1)).abs()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn unit_square() -> ConvexPolygon<4> {
        ConvexPolygon::new([
            Point(0.0, 0.0),
            Point(1.0, 0.0),
            Point(1.0, 1.0),
            Point(0.0, 1.0),
        ])
    }

    #[test]
    fn winding_does_not_matter() {
        let ccw = unit_square();
        let mut cw = ccw;
        cw.points.reverse();

        for polygon in [ccw, cw] {
            assert!(polygon.collides_with(&Point(0.5, 0.5)));
            assert!(polygon.collides_with(&Point(1.0, 0.5)));
            assert!(!polygon.collides_with(&Point(1.01, 0.5)));
            assert_eq!(polygon.area(), 1.0);
            assert_eq!(polygon.centroid(), Point(0.5, 0.5));
        }
    }

    #[test]
    fn circle_enclosure() {
        let square = unit_square();
        assert!(square.encloses(&Circle::new(Point(0.5, 0.5), 0.5)));
        assert!(!square.encloses(&Circle::new(Point(0.5, 0.5), 0.51)));
        assert!(!square.encloses(&Circle::new(Point(2.0, 2.0), 0.1)));
    }

    #[test]
    fn fan_sampling_covers_the_whole_polygon() {
        let square = unit_square();
        let mut rng = SmallRng::seed_from_u64(7);
        let samples = (0..4000)
            .map(|_| square.sample_interior(&mut rng))
            .collect_vec();
        assert!(samples.iter().all(|p| square.collides_with(p)));

        //both halves of the fan receive roughly half of the samples
        let below_diagonal = samples.iter().filter(|p| p.0 > p.1).count();
        let frac = below_diagonal as f64 / samples.len() as f64;
        assert!((frac - 0.5).abs() < 0.05, "fraction below diagonal: {frac}");
    }

    #[test]
    fn degenerate_polygon() {
        let center = Point(250.0, 250.0);
        let flat = ConvexPolygon::new([center; 3]);
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(flat.area(), 0.0);
        assert_eq!(flat.centroid(), center);
        assert!(flat.sample_interior(&mut rng).distance(&center) < 1e-9);
        assert!(!flat.encloses(&Circle::new(Point(250.0, 250.0), 1.0)));

        let segment = ConvexPolygon::new([
            Point(0.0, 0.0),
            Point(1.0, 0.0),
            Point(2.0, 0.0),
            Point(3.0, 0.0),
        ]);
        let p = segment.sample_interior(&mut rng);
        assert!(p.1 == 0.0 && p.0 > -1e-9 && p.0 < 3.0 + 1e-9);
    }

    #[test]
    fn bbox_and_diameter() {
        let square = unit_square();
        assert_eq!(square.bbox(), Rect::try_new(0.0, 0.0, 1.0, 1.0).unwrap());
        assert!((square.diameter() - 2.0_f64.sqrt()).abs() < 1e-12);
    }
}

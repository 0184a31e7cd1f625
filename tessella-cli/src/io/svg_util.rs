use serde::{Deserialize, Serialize};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};

use tessella::geometry::primitives::Point;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///Fill the canvas with its background colour
    #[serde(default = "default_true")]
    pub background: bool,
    ///Multiplier applied to the line width of every shape
    #[serde(default = "default_stroke_width_multiplier")]
    pub stroke_width_multiplier: f64,
    ///Print the algorithm and the number of shapes in the top left corner
    #[serde(default)]
    pub label: bool,
    ///Draw the boundary of a circle packing on top of the circles, without fill
    #[serde(default)]
    pub boundary_on_top: bool,
}

fn default_true() -> bool {
    true
}

fn default_stroke_width_multiplier() -> f64 {
    1.0
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            background: true,
            stroke_width_multiplier: 1.0,
            label: false,
            boundary_on_top: false,
        }
    }
}

/// Value of the `stroke-dasharray` attribute for a line type, `None` for a solid line.
/// Unknown line types are drawn solid.
pub fn dash_array(line_type: &str, stroke_width: f64) -> Option<String> {
    let w = f64::max(stroke_width, 0.5);
    match line_type.trim().to_ascii_lowercase().as_str() {
        "dashed" => Some(format!("{} {}", 4.0 * w, 2.0 * w)),
        "dotted" => Some(format!("{} {}", w, 2.0 * w)),
        "dashdot" | "dash-dot" => Some(format!("{} {} {} {}", 4.0 * w, 2.0 * w, w, 2.0 * w)),
        _ => None,
    }
}

pub fn polygon_data(points: &[Point]) -> Data {
    let mut points = points.iter().map(|&p| <(f64, f64)>::from(p));
    let mut data = match points.next() {
        Some(first) => Data::new().move_to(first),
        None => return Data::new(),
    };
    for p in points {
        data = data.line_to(p);
    }
    data.close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn circle(center: Point, radius: f64, params: &[(&str, &str)]) -> Circle {
    let mut circle = Circle::new()
        .set("cx", center.0)
        .set("cy", center.1)
        .set("r", radius);
    for param in params {
        circle = circle.set(param.0, param.1)
    }
    circle
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("solid", 1.0 => None)]
    #[test_case("dashed", 1.0 => Some("4 2".to_string()))]
    #[test_case("Dotted", 2.0 => Some("2 4".to_string()))]
    #[test_case("wavy", 1.0 => None; "unknown line type")]
    fn line_types(line_type: &str, width: f64) -> Option<String> {
        dash_array(line_type, width)
    }

    #[test]
    fn empty_polygon() {
        assert!(polygon_data(&[]).is_empty());
    }
}

use serde::{Deserialize, Serialize};

use crate::params::ShapeParams;

/// Drawing attributes attached to a shape.
/// Opaque to the generators, they are only forwarded to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub line_colour: String,
    pub line_width: f64,
    pub fill_colour: String,
    pub line_type: String,
}

impl From<&ShapeParams> for Style {
    fn from(params: &ShapeParams) -> Self {
        Style {
            line_colour: params.line_colour.clone(),
            line_width: params.line_width,
            fill_colour: params.fill_colour.clone(),
            line_type: params.line_type.clone(),
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style {
            line_colour: "#000000".to_string(),
            line_width: 1.0,
            fill_colour: "#FFFFFF".to_string(),
            line_type: "solid".to_string(),
        }
    }
}

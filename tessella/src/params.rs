use serde::{Deserialize, Serialize};

use crate::ensure_params;
use crate::error::Result;
use crate::geometry::ShapeType;
use crate::geometry::primitives::Point;

/// Parameter records are checked with [`Validate::validate`] before a generation pass starts.
/// They are read-only during the pass.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Drawing surface, only forwarded to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasParams {
    pub width: u32,
    pub height: u32,
    pub background: String,
}

impl Validate for CanvasParams {
    fn validate(&self) -> Result<()> {
        ensure_params!(
            self.width > 0 && self.height > 0,
            "canvas must have a positive size, got {}x{}",
            self.width,
            self.height
        );
        Ok(())
    }
}

impl Default for CanvasParams {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            background: "#FFFFFF".to_string(),
        }
    }
}

/// Shape type tag plus the style of every shape generated from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeParams {
    pub shape_type: String,
    pub line_width: f64,
    pub line_colour: String,
    pub fill_colour: String,
    #[serde(default = "default_line_type")]
    pub line_type: String,
}

fn default_line_type() -> String {
    "solid".to_string()
}

impl ShapeParams {
    pub fn new(shape_type: &str, line_width: f64, line_colour: &str, fill_colour: &str) -> Self {
        Self {
            shape_type: shape_type.to_string(),
            line_width,
            line_colour: line_colour.to_string(),
            fill_colour: fill_colour.to_string(),
            line_type: default_line_type(),
        }
    }

    pub fn parse_shape_type(&self) -> Result<ShapeType> {
        self.shape_type.parse()
    }
}

impl Validate for ShapeParams {
    fn validate(&self) -> Result<()> {
        self.parse_shape_type()?;
        ensure_params!(
            self.line_width.is_finite() && self.line_width >= 0.0,
            "line width must be non-negative, got {}",
            self.line_width
        );
        Ok(())
    }
}

/// Parameters of the recursive subdivision fractals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractalParams {
    pub center: Point,
    /// Radius of the root shape
    pub size: f64,
    /// Recursion budget, 0 emits the root shape as a leaf
    pub depth: i32,
}

impl Validate for FractalParams {
    fn validate(&self) -> Result<()> {
        validate_pose(self.center, self.size)?;
        validated_depth(self.depth)?;
        Ok(())
    }
}

/// Parameters of the ring-burst pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingBurstParams {
    pub center: Point,
    /// Radius of the outermost large shape, also the orbit radius of its small shapes
    pub size: f64,
    pub depth: i32,
    /// Number of small shapes orbiting every large shape
    pub n_shapes: u32,
}

impl Validate for RingBurstParams {
    fn validate(&self) -> Result<()> {
        validate_pose(self.center, self.size)?;
        validated_depth(self.depth)?;
        ensure_params!(self.n_shapes >= 1, "at least one orbiting shape is required");
        Ok(())
    }
}

/// Parameters of the circle packing fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePackingParams {
    /// Center of the boundary shape
    pub center: Point,
    /// Radius of the boundary shape
    pub size: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Total number of candidate circles drawn, accepted or not
    pub max_attempts: u32,
}

impl Validate for CirclePackingParams {
    fn validate(&self) -> Result<()> {
        validate_pose(self.center, self.size)?;
        ensure_params!(
            self.min_radius.is_finite() && self.min_radius > 0.0,
            "min radius must be positive, got {}",
            self.min_radius
        );
        ensure_params!(
            self.max_radius.is_finite() && self.min_radius <= self.max_radius,
            "min radius ({}) must not exceed max radius ({})",
            self.min_radius,
            self.max_radius
        );
        Ok(())
    }
}

/// Selection of one generator together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlgorithmParams {
    Fractal(FractalParams),
    RingBurst(RingBurstParams),
    CirclePacking(CirclePackingParams),
}

impl AlgorithmParams {
    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmParams::Fractal(_) => "fractal",
            AlgorithmParams::RingBurst(_) => "ring_burst",
            AlgorithmParams::CirclePacking(_) => "circle_packing",
        }
    }

    /// Number of [`ShapeParams`] the generator consumes.
    /// Ring-burst uses a large and a small shape, packing a boundary and a circle style.
    pub fn n_shape_params(&self) -> usize {
        match self {
            AlgorithmParams::Fractal(_) => 1,
            AlgorithmParams::RingBurst(_) | AlgorithmParams::CirclePacking(_) => 2,
        }
    }
}

impl Validate for AlgorithmParams {
    fn validate(&self) -> Result<()> {
        match self {
            AlgorithmParams::Fractal(p) => p.validate(),
            AlgorithmParams::RingBurst(p) => p.validate(),
            AlgorithmParams::CirclePacking(p) => p.validate(),
        }
    }
}

/// Converts a recursion depth to a budget, refusing negative values.
pub fn validated_depth(depth: i32) -> Result<u32> {
    ensure_params!(depth >= 0, "depth must be non-negative, got {depth}");
    Ok(depth as u32)
}

fn validate_pose(center: Point, size: f64) -> Result<()> {
    ensure_params!(center.is_finite(), "center must be finite, got {center:?}");
    ensure_params!(
        size.is_finite() && size > 0.0,
        "initial size must be positive, got {size}"
    );
    let Point(x, y) = center;
    ensure_params!(
        x - size < x + size && y - size < y + size,
        "initial size {size} vanishes around center {center:?}"
    );
    Ok(())
}

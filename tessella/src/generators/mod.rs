mod circle_packing;
mod fractal;
mod ring_burst;

use std::iter;

use itertools::Either;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::entities::StyledShape;
use crate::ensure_params;
use crate::error::Result;
use crate::params::{AlgorithmParams, CanvasParams, ShapeParams, Validate};

#[doc(inline)]
pub use circle_packing::{CirclePackingEngine, PackingReport, PackingStats};
#[doc(inline)]
pub use fractal::FractalGenerator;
#[doc(inline)]
pub use ring_burst::RingBurstGenerator;

/// A complete generation request: canvas, shape parameters and the generator to run.
///
/// `shapes` is consumed in order. The fractal uses the first entry, ring-burst uses the large
/// and then the small shape, circle packing uses the boundary and then the circle style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Algorithm {
    pub canvas: CanvasParams,
    pub shapes: Vec<ShapeParams>,
    pub params: AlgorithmParams,
}

impl Algorithm {
    pub fn new(canvas: CanvasParams, shapes: Vec<ShapeParams>, params: AlgorithmParams) -> Self {
        Self {
            canvas,
            shapes,
            params,
        }
    }

    pub fn name(&self) -> &'static str {
        self.params.name()
    }

    /// Validates everything and runs the selected generator once.
    /// The rng is only consumed by circle packing.
    pub fn execute(&self, rng: &mut impl Rng) -> Result<Pattern> {
        self.validate()?;
        let shapes = &self.shapes;
        let pattern = match self.params {
            AlgorithmParams::Fractal(params) => {
                let mut fractal = FractalGenerator::new(&shapes[0], params)?;
                fractal.execute()?;
                Pattern::Shapes(fractal.into_shapes())
            }
            AlgorithmParams::RingBurst(params) => {
                let mut burst = RingBurstGenerator::new(&shapes[0], &shapes[1], params)?;
                burst.execute()?;
                Pattern::Shapes(burst.into_shapes())
            }
            AlgorithmParams::CirclePacking(params) => {
                let mut engine = CirclePackingEngine::new(&shapes[0], &shapes[1], params)?;
                Pattern::Packing(engine.pack(rng)?)
            }
        };
        Ok(pattern)
    }
}

impl Validate for Algorithm {
    fn validate(&self) -> Result<()> {
        self.canvas.validate()?;
        ensure_params!(
            self.shapes.len() >= self.params.n_shape_params(),
            "{} needs {} shape parameters, got {}",
            self.name(),
            self.params.n_shape_params(),
            self.shapes.len()
        );
        for shape in &self.shapes {
            shape.validate()?;
        }
        self.params.validate()
    }
}

/// Output of a generation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// Shapes in draw order
    Shapes(Vec<StyledShape>),
    Packing(PackingReport),
}

impl Pattern {
    /// Every shape to draw, in order. A packing starts with its boundary.
    pub fn draw_order(&self) -> impl Iterator<Item = &StyledShape> {
        match self {
            Pattern::Shapes(shapes) => Either::Left(shapes.iter()),
            Pattern::Packing(report) => {
                Either::Right(iter::once(&report.boundary).chain(report.circles.iter()))
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Pattern::Shapes(shapes) => shapes.len(),
            Pattern::Packing(report) => report.circles.len() + 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

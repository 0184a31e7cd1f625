use serde::{Deserialize, Serialize};

use tessella::generators::Algorithm;
use tessella::geometry::primitives::Point;
use tessella::params::{
    AlgorithmParams, CanvasParams, CirclePackingParams, FractalParams, RingBurstParams,
    ShapeParams,
};

use crate::io::cli::AlgorithmKind;
use crate::io::svg_util::SvgDrawOptions;

/// Configuration of a single generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TessellaConfig {
    #[serde(default)]
    pub canvas: CanvasParams,
    /// Shape parameters consumed in order by the algorithm (see [`Algorithm`])
    pub shapes: Vec<ShapeParams>,
    /// The generator to run, tagged by `kind`
    pub algorithm: AlgorithmParams,
    /// Seed for the PRNG. If undefined, circle packing runs in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl TessellaConfig {
    /// Default configuration for each kind of algorithm, centered on the default canvas.
    pub fn preset(kind: AlgorithmKind) -> Self {
        let canvas = CanvasParams::default();
        let center = Point(canvas.width as f64 / 2.0, canvas.height as f64 / 2.0);
        let (shapes, algorithm) = match kind {
            AlgorithmKind::Fractal => (
                vec![ShapeParams::new("hexagon", 1.0, "#1B3A4B", "#8FC1D4")],
                AlgorithmParams::Fractal(FractalParams {
                    center,
                    size: 300.0,
                    depth: 3,
                }),
            ),
            AlgorithmKind::RingBurst => (
                vec![
                    ShapeParams::new("circle", 1.5, "#5A189A", "#E0AAFF"),
                    ShapeParams::new("triangle", 1.0, "#9D4EDD", "#FFFFFF"),
                ],
                AlgorithmParams::RingBurst(RingBurstParams {
                    center,
                    size: 180.0,
                    depth: 3,
                    n_shapes: 6,
                }),
            ),
            AlgorithmKind::CirclePacking => (
                vec![
                    ShapeParams::new("hexagon", 2.0, "#2D2D2D", "#FFF8E7"),
                    ShapeParams::new("circle", 1.0, "#CC824A", "#FFC879"),
                ],
                AlgorithmParams::CirclePacking(CirclePackingParams {
                    center,
                    size: 350.0,
                    min_radius: 4.0,
                    max_radius: 40.0,
                    max_attempts: 5000,
                }),
            ),
        };
        Self {
            canvas,
            shapes,
            algorithm,
            prng_seed: Some(0),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }

    pub fn kind(&self) -> AlgorithmKind {
        match self.algorithm {
            AlgorithmParams::Fractal(_) => AlgorithmKind::Fractal,
            AlgorithmParams::RingBurst(_) => AlgorithmKind::RingBurst,
            AlgorithmParams::CirclePacking(_) => AlgorithmKind::CirclePacking,
        }
    }

    /// Swaps in the preset algorithm and shapes of `kind`, unless the config already runs that kind.
    /// Canvas, seed and drawing options are kept.
    pub fn override_algorithm(self, kind: AlgorithmKind) -> Self {
        if self.kind() == kind {
            return self;
        }
        let preset = TessellaConfig::preset(kind);
        Self {
            shapes: preset.shapes,
            algorithm: preset.algorithm,
            ..self
        }
    }

    pub fn to_algorithm(&self) -> Algorithm {
        Algorithm::new(self.canvas.clone(), self.shapes.clone(), self.algorithm)
    }
}

impl Default for TessellaConfig {
    fn default() -> Self {
        TessellaConfig::preset(AlgorithmKind::Fractal)
    }
}

use std::sync::Arc;

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

use crate::entities::{Style, StyledShape};
use crate::error::{Result, TessellaError};
use crate::factory::ShapeTemplate;
use crate::geometry::primitives::Circle;
use crate::geometry::{Shape, ShapeType};
use crate::params::{CirclePackingParams, ShapeParams, Validate};
use crate::util::assertions;

/// Randomized fill of a boundary shape with non-overlapping circles.
///
/// Every attempt draws a center uniformly from the interior of the boundary and a radius
/// uniformly from `[min_radius, max_radius)`. The candidate is rejected if it overlaps an
/// accepted circle or sticks out of the boundary, otherwise it is accepted.
/// Accepted circles are never removed or moved by a later attempt.
#[derive(Debug, Clone)]
pub struct CirclePackingEngine {
    boundary_template: ShapeTemplate,
    boundary: StyledShape,
    circle_style: Arc<Style>,
    params: CirclePackingParams,
    circles: Vec<Circle>,
}

impl CirclePackingEngine {
    /// Only the style of `circle_params` is used, accepted circles are always circles.
    pub fn new(
        boundary_params: &ShapeParams,
        circle_params: &ShapeParams,
        params: CirclePackingParams,
    ) -> Result<Self> {
        params.validate()?;
        let boundary_template = ShapeTemplate::from_params(boundary_params)?;
        let boundary = boundary_template.place(params.center, params.size);
        Ok(Self {
            boundary_template,
            boundary,
            circle_style: Arc::new(Style::from(circle_params)),
            params,
            circles: vec![],
        })
    }

    /// Swaps the variant of the boundary, keeping its pose and style.
    /// Circles accepted for the previous boundary are discarded.
    pub fn set_boundary_shape(&mut self, shape_type: &str) -> Result<()> {
        let shape_type: ShapeType = shape_type.parse()?;
        self.boundary_template.shape_type = shape_type;
        self.boundary = self
            .boundary_template
            .place(self.params.center, self.params.size);
        self.circles.clear();
        Ok(())
    }

    /// Runs `max_attempts` attempts on top of the circles accepted by previous passes.
    pub fn pack(&mut self, rng: &mut impl Rng) -> Result<PackingReport> {
        self.params.validate()?;
        let radius_distr = RadiusDistr::new(self.params.min_radius, self.params.max_radius)?;
        let boundary = self.boundary.shape;

        let mut stats = PackingStats::default();
        for _ in 0..self.params.max_attempts {
            stats.attempts += 1;
            let center = boundary.random_interior_point(rng);
            let candidate = Circle::new(center, radius_distr.sample(rng));

            if self.circles.iter().any(|c| c.overlaps(&candidate)) {
                stats.rejected_overlap += 1;
            } else if !boundary.is_inside(&candidate) {
                stats.rejected_outside += 1;
            } else {
                self.circles.push(candidate);
                stats.accepted += 1;
            }
        }

        debug_assert!(assertions::packing_is_valid(&boundary, &self.circles));
        debug_assert!(
            stats.attempts == stats.accepted + stats.rejected_overlap + stats.rejected_outside
        );

        Ok(PackingReport {
            boundary: self.boundary.clone(),
            circles: self.styled_circles(),
            stats,
        })
    }

    /// Accepted circles styled for drawing, in order of acceptance.
    pub fn styled_circles(&self) -> Vec<StyledShape> {
        self.circles
            .iter()
            .map(|c| StyledShape::new(Shape::from(*c), self.circle_style.clone()))
            .collect()
    }

    pub fn boundary(&self) -> &StyledShape {
        &self.boundary
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn params(&self) -> &CirclePackingParams {
        &self.params
    }
}

/// Outcome of a packing pass. The pass always ends after `max_attempts` attempts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PackingReport {
    pub boundary: StyledShape,
    /// All accepted circles, including those of earlier passes
    pub circles: Vec<StyledShape>,
    pub stats: PackingStats,
}

/// Counters of a single packing pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingStats {
    pub attempts: usize,
    pub accepted: usize,
    pub rejected_overlap: usize,
    pub rejected_outside: usize,
}

impl PackingStats {
    pub fn acceptance_rate(&self) -> f64 {
        match self.attempts {
            0 => 0.0,
            n => self.accepted as f64 / n as f64,
        }
    }
}

enum RadiusDistr {
    Fixed(f64),
    Range(Uniform<f64>),
}

impl RadiusDistr {
    fn new(min_radius: f64, max_radius: f64) -> Result<Self> {
        if min_radius == max_radius {
            Ok(RadiusDistr::Fixed(min_radius))
        } else {
            Uniform::new(min_radius, max_radius)
                .map(RadiusDistr::Range)
                .map_err(|e| TessellaError::InvalidParameters(format!("radius range: {e}")))
        }
    }

    fn sample(&self, rng: &mut impl Rng) -> f64 {
        match self {
            RadiusDistr::Fixed(r) => *r,
            RadiusDistr::Range(u) => u.sample(rng),
        }
    }
}

use crate::PI;
use crate::entities::StyledShape;
use crate::error::Result;
use crate::factory::ShapeTemplate;
use crate::geometry::primitives::Point;
use crate::params::{RingBurstParams, ShapeParams, Validate, validated_depth};

/// Recursive radial pattern: a large shape surrounded by a ring of `n` small shapes,
/// each of which becomes the center of a smaller ring-burst one level deeper.
///
/// The small shapes are evenly spaced on a circle with the radius of the large shape.
/// Their size is chosen so that neighbouring small shapes on a ring touch.
#[derive(Debug, Clone)]
pub struct RingBurstGenerator {
    large: ShapeTemplate,
    small: ShapeTemplate,
    params: RingBurstParams,
    shapes: Vec<StyledShape>,
}

impl RingBurstGenerator {
    pub fn new(
        large_params: &ShapeParams,
        small_params: &ShapeParams,
        params: RingBurstParams,
    ) -> Result<Self> {
        Ok(Self {
            large: ShapeTemplate::from_params(large_params)?,
            small: ShapeTemplate::from_params(small_params)?,
            params,
            shapes: vec![],
        })
    }

    /// Runs a full pass, replacing the output of any previous pass.
    pub fn execute(&mut self) -> Result<&[StyledShape]> {
        self.shapes.clear();
        self.params.validate()?;
        let depth = validated_depth(self.params.depth)?;

        self.add_pattern(self.params.center, self.params.size, depth);

        debug_assert!(
            self.shapes.len() == RingBurstGenerator::expected_len(depth, self.params.n_shapes),
            "ring-burst with depth {depth} has {} shapes",
            self.shapes.len()
        );

        Ok(&self.shapes)
    }

    fn add_pattern(&mut self, center: Point, size: f64, depth: u32) {
        if depth == 0 {
            return;
        }
        self.shapes.push(self.large.place(center, size));

        let n = self.params.n_shapes;
        let angle_step = 2.0 * PI / n as f64;
        let smaller_size = size * (angle_step / 2.0).sin();

        for i in 0..n {
            let anchor = center.polar_offset(i as f64 * angle_step, size);
            self.shapes.push(self.small.place(anchor, smaller_size));
            self.add_pattern(anchor, smaller_size, depth - 1);
        }
    }

    /// Number of shapes a pass emits: `T(d) = 1 + n + n * T(d - 1)` with `T(0) = 0`.
    pub fn expected_len(depth: u32, n_shapes: u32) -> usize {
        let n = n_shapes as usize;
        (0..depth).fold(0usize, |t, _| {
            n.saturating_mul(t).saturating_add(n).saturating_add(1)
        })
    }

    pub fn params(&self) -> &RingBurstParams {
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

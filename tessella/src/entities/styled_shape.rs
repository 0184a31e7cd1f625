use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::entities::Style;
use crate::geometry::Shape;

/// Represents a [`Shape`] in an output sequence, together with the [`Style`] it should be drawn with.
/// All shapes produced from the same [`crate::params::ShapeParams`] share a single `Style`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyledShape {
    pub shape: Shape,
    pub style: Arc<Style>,
}

impl StyledShape {
    pub fn new(shape: Shape, style: Arc<Style>) -> Self {
        Self { shape, style }
    }
}

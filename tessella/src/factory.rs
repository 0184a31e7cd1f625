use std::sync::Arc;

use crate::entities::{Style, StyledShape};
use crate::error::Result;
use crate::geometry::primitives::Point;
use crate::geometry::{Shape, ShapeType};
use crate::params::ShapeParams;

/// Builds posed shapes from a type tag, a pose and a style.
pub struct ShapeFactory;

impl ShapeFactory {
    /// Parses `shape_type` and creates the shape at `(x, y)` with scale `size`.
    /// Fails with [`crate::TessellaError::InvalidShapeType`] for unknown tags.
    pub fn create_shape(
        shape_type: &str,
        x: f64,
        y: f64,
        size: f64,
        style: Arc<Style>,
    ) -> Result<StyledShape> {
        let shape_type = shape_type.parse()?;
        Ok(ShapeFactory::create(shape_type, x, y, size, style))
    }

    pub fn create(
        shape_type: ShapeType,
        x: f64,
        y: f64,
        size: f64,
        style: Arc<Style>,
    ) -> StyledShape {
        StyledShape::new(Shape::new(shape_type, Point(x, y), size), style)
    }
}

/// A parsed [`ShapeParams`]: the shape type and the shared style of every shape stamped from it.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeTemplate {
    pub shape_type: ShapeType,
    pub style: Arc<Style>,
}

impl ShapeTemplate {
    pub fn from_params(params: &ShapeParams) -> Result<Self> {
        Ok(Self {
            shape_type: params.parse_shape_type()?,
            style: Arc::new(Style::from(params)),
        })
    }

    /// Stamps a new shape of this template at `center` with scale `size`.
    pub fn place(&self, center: Point, size: f64) -> StyledShape {
        ShapeFactory::create(
            self.shape_type,
            center.0,
            center.1,
            size,
            self.style.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TessellaError;

    #[test]
    fn create_every_shape_type() {
        let style = Arc::new(Style::default());
        for tag in ["circle", "square", "triangle", "hexagon"] {
            let shape = ShapeFactory::create_shape(tag, 10.0, 20.0, 5.0, style.clone()).unwrap();
            assert_eq!(shape.shape.shape_type().as_str(), tag);
            assert_eq!(shape.shape.center(), Point(10.0, 20.0));
            assert_eq!(shape.shape.radius(), 5.0);
            assert!(Arc::ptr_eq(&shape.style, &style));
        }
    }

    #[test]
    fn invalid_shape_type() {
        let result =
            ShapeFactory::create_shape("invalidType", 0.0, 0.0, 1.0, Arc::new(Style::default()));
        assert_eq!(
            result,
            Err(TessellaError::InvalidShapeType("invalidType".to_string()))
        );
    }

    #[test]
    fn template_shares_style() {
        let params = ShapeParams::new("hexagon", 2.0, "#FF0000", "#00FF00");
        let template = ShapeTemplate::from_params(&params).unwrap();
        let a = template.place(Point(0.0, 0.0), 1.0);
        let b = template.place(Point(5.0, 5.0), 2.0);
        assert!(Arc::ptr_eq(&a.style, &b.style));
        assert_eq!(a.style.line_colour, "#FF0000");
        assert_eq!(b.shape.shape_type(), ShapeType::Hexagon);
    }
}

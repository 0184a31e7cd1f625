mod style;
mod styled_shape;

#[doc(inline)]
pub use style::Style;

#[doc(inline)]
pub use styled_shape::StyledShape;

mod circle;
mod convex_polygon;
mod point;
mod rect;

#[doc(inline)]
pub use circle::Circle;
#[doc(inline)]
pub use convex_polygon::ConvexPolygon;
#[doc(inline)]
pub use convex_polygon::sample_triangle;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use rect::Rect;

//! Procedural generation of 2D geometric art.
//!
//! `tessella` produces ordered sequences of posed shapes from three generators:
//! recursive fractal subdivision ([`generators::FractalGenerator`]), a recursive ring-burst
//! pattern ([`generators::RingBurstGenerator`]) and a randomized circle-packing fill of a
//! boundary shape ([`generators::CirclePackingEngine`]).
//!
//! The crate never draws anything. The output sequence (insertion order = draw order) is handed
//! to an external renderer together with the opaque [`entities::Style`] attached to each shape.

/// Posed shapes and the style metadata that travels with them.
pub mod entities;
pub mod error;
/// Construction of shapes from a type tag, a pose and a style.
pub mod factory;
/// Generators producing the output sequences.
pub mod generators;
/// Geometric primitives and the closed [`geometry::Shape`] variant.
pub mod geometry;
/// Caller supplied parameter records and their validation.
pub mod params;
/// Helper functions which do not belong to any specific module.
pub mod util;

#[doc(inline)]
pub use error::{Result, TessellaError};

pub use std::f64::consts::PI;

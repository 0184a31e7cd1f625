//! Error types for shape construction and pattern generation.

use thiserror::Error;

/// Errors signalled by the factory and the generators.
///
/// Running out of packing attempts is not an error, see [`crate::generators::PackingReport`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TessellaError {
    /// The shape type tag is not one of `circle`, `square`, `triangle` or `hexagon`.
    #[error("invalid shape type: {0:?}")]
    InvalidShapeType(String),

    /// A parameter record failed validation, the generator refused to run.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

pub type Result<T> = std::result::Result<T, TessellaError>;

/// Returns early with [`TessellaError::InvalidParameters`] if the condition does not hold.
#[macro_export]
macro_rules! ensure_params {
    ($cond:expr, $($arg:tt)+) => {
        if !($cond) {
            return Err($crate::TessellaError::InvalidParameters(format!($($arg)+)));
        }
    };
}

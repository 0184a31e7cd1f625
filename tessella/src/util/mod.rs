/// Set of functions used throughout to assure the correctness of the generated patterns.
pub mod assertions;

mod fpa;

#[doc(inline)]
pub use fpa::FPA;
#[doc(inline)]
pub use fpa::FPA_EPSILON;

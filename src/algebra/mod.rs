//! Floating point types and dense linear algebra used by the solver.
//!
//! The tableau engine works on a dense, row-major [`Matrix`] so that every
//! elimination step is a row-wise `axpby` and disjoint rows can be handed
//! to separate worker threads.

mod dense;
mod error_types;
mod floats;
mod math_traits;
mod vecmath;

pub use dense::*;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;

//! Submission scoring.
//!
//! - [`OptimalityScorer`]: how close a submitted solution's running time and
//!   memory come to the optimal solution's.

mod optimality;

pub use optimality::{Measurement, OptimalityScore, OptimalityScorer};

//! Core numeric primitives (Vector, Matrix).
//!
//! Every score table, similarity table and factor matrix in the crate is
//! stored in these row-major containers.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
pub(crate) use vector::{dot, l2_norm};

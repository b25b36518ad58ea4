//! Matrix decomposition.
//!
//! - [`Nmf`]: non-negative matrix factorization of the learner × subject
//!   score matrix into latent learner and subject factors.

mod nmf;

pub use nmf::{Nmf, NmfSummary};

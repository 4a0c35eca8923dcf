//! Error type for malformed physical inputs.
//!
//! The only recognized failure mode is a bad input: non-positive mass, zero
//! cross section, a wrong body count, or mismatched series lengths. These
//! abort the run before any stepping happens. Discretization error is
//! expected numerical behavior and never surfaces here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid body {index}: {reason}")]
    InvalidBody { index: usize, reason: String },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("model requires exactly {expected} bodies, scenario has {actual}")]
    BodyCount { expected: usize, actual: usize },

    #[error("sequence length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

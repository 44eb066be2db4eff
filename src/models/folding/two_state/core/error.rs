use thiserror::Error;

use crate::support::{fes::FesError, kinetics::{BarrierError, RateError}};

use super::UnknownStructuralClass;

/// Errors that can occur while predicting two-state folding kinetics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error(transparent)]
    UnknownClass(#[from] UnknownStructuralClass),

    #[error("free-energy surface failed: {0}")]
    Surface(#[from] FesError),

    #[error("barrier search failed: {0}")]
    Barrier(#[from] BarrierError),

    #[error("rate conversion failed: {0}")]
    Rate(#[from] RateError),
}

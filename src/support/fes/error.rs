use thiserror::Error;

use crate::support::constraint::{Constraint, ConstraintError};

/// Errors that can occur while building a free-energy surface.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FesError {
    /// A parameter violates its numeric constraint.
    ///
    /// Covers a zero residue count, a zero profile curvature, a non-positive
    /// temperature, and non-finite per-residue constants.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name, using the model's symbols (e.g. `kDH`).
        name: &'static str,

        /// Offending value.
        value: f64,

        /// Violated constraint.
        #[source]
        reason: ConstraintError,
    },

    /// A generated profile contains an infinite or `NaN` value.
    ///
    /// The profile is discarded and the surface keeps its previous state.
    #[error("non-finite {quantity} at nativeness index {index}")]
    NonFinite {
        /// Profile that failed.
        quantity: &'static str,

        /// First grid index holding a non-finite value.
        index: usize,
    },
}

impl FesError {
    /// Checks `value` against constraint `C`, naming the parameter on failure.
    pub(super) fn check<C: Constraint<f64>>(name: &'static str, value: f64) -> Result<f64, Self> {
        C::check(&value).map_err(|reason| Self::InvalidParameter {
            name,
            value,
            reason,
        })?;
        Ok(value)
    }

    /// Returns an error for the first non-finite value, if any.
    pub(super) fn ensure_finite(
        quantity: &'static str,
        values: impl IntoIterator<Item = f64>,
    ) -> Result<(), Self> {
        match values.into_iter().position(|value| !value.is_finite()) {
            Some(index) => Err(Self::NonFinite { quantity, index }),
            None => Ok(()),
        }
    }
}

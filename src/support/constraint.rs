//! Numeric constraints for validating model parameters.
//!
//! Free-energy surface parameters and rate inputs are validated through these
//! constraints: a residue count must be strictly positive, a profile
//! curvature must be non-zero, and per-residue constants must be finite.
//!
//! # Provided constraints
//!
//! - [`NonZero`]: Not equal to zero
//! - [`StrictlyPositive`]: Greater than zero
//! - [`Finite`]: Neither infinite nor `NaN`
//!
//! Each marker implements [`Constraint<T>`]; callers check a value with
//! `C::check(&value)` and attach their own context to the
//! [`ConstraintError`].

mod finite;
mod non_zero;
mod strictly_positive;

use thiserror::Error;

pub use finite::Finite;
pub use non_zero::NonZero;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants.
///
/// Implement this trait for any marker type representing a numeric constraint,
/// such as [`NonZero`] or [`StrictlyPositive`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    Infinite,
}

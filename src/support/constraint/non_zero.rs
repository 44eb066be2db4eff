use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constraint, ConstraintError};

/// Marker type enforcing that a value is non-zero (not equal to zero).
///
/// The cooperative profile form `1 + (exp(k·n) − 1) / (1 − exp(k))` divides by
/// zero when the curvature `k` is zero, so curvatures carry this constraint.
///
/// # Examples
///
/// ```
/// use twine_folding::support::constraint::{Constraint, NonZero};
///
/// assert!(NonZero::check(&3.75).is_ok());
/// assert!(NonZero::check(&-1.5).is_ok());
/// assert!(NonZero::check(&0.0).is_err());
/// assert!(NonZero::check(&f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonZero;

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Less) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

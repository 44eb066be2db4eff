use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Residue counts, absolute temperatures, and the denaturant offset all carry
/// this constraint.
///
/// # Examples
///
/// ```
/// use twine_folding::support::constraint::{Constraint, StrictlyPositive};
///
/// assert!(StrictlyPositive::check(&100_u32).is_ok());
/// assert!(StrictlyPositive::check(&298.0).is_ok());
///
/// assert!(StrictlyPositive::check(&0_u32).is_err());
/// assert!(StrictlyPositive::check(&-1.0).is_err());
/// assert!(StrictlyPositive::check(&f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

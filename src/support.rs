//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric constraints for validating parameters.
//! - [`units`]: Extensions to [`uom`] for molar thermodynamic quantities.
//! - [`fes`]: Nativeness-dependent free-energy surface construction.
//! - [`kinetics`]: Barrier extraction and barrier-to-rate conversion.

pub mod constraint;
pub mod fes;
pub mod kinetics;
pub mod units;

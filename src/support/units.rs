//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, molar
//! energy, frequency). This module provides extensions that are useful for
//! folding thermodynamics but aren't included in [`uom`].
//!
//! ## Molar entropy
//!
//! [`uom`] names the `J/(K·mol)` dimension `MolarHeatCapacity` only.
//! [`MolarEntropy`] is the same quantity under the name used for
//! conformational entropy profiles.
//!
//! ## Gas constant
//!
//! [`molar_gas_constant`] returns `R = 8.314e-3 kJ/(mol·K)`.
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::kelvin;
//! use twine_folding::support::units::TemperatureDifference;
//!
//! let temp = ThermodynamicTemperature::new::<kelvin>(298.0);
//! let t_ref = ThermodynamicTemperature::new::<kelvin>(385.0);
//! let delta_t = temp.minus(t_ref);
//! // delta_t is a TemperatureInterval, not a ThermodynamicTemperature
//! ```

mod constants;
mod quantities;
mod temperature_difference;

pub use constants::{MOLAR_GAS_CONSTANT, molar_gas_constant};
pub use quantities::MolarEntropy;
pub use temperature_difference::TemperatureDifference;

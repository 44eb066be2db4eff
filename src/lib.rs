//! # Twine Folding
//!
//! Two-state protein folding kinetics for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Folding and unfolding rates are estimated from a statistical-thermodynamic
//! free-energy surface (FES) built from the chain length and a handful of
//! per-residue constants. The pipeline is:
//!
//! 1. Enthalpy, heat capacity, and entropy profiles along a nativeness
//!    coordinate ([`support::fes`]).
//! 2. A free-energy profile at the temperature of interest.
//! 3. Folding and unfolding barrier heights ([`support::kinetics`]).
//! 4. Rate constants from a chain-length dependent Arrhenius-like law.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! ## Example
//!
//! ```
//! use twine_folding::models::folding::two_state::{StructuralClass, predict};
//! use uom::si::{f64::ThermodynamicTemperature, frequency::hertz, thermodynamic_temperature::kelvin};
//!
//! let prediction = predict(
//!     100,
//!     StructuralClass::Alpha,
//!     ThermodynamicTemperature::new::<kelvin>(298.0),
//! )
//! .unwrap();
//!
//! assert!(prediction.rates.folding.get::<hertz>() > 0.0);
//! assert!(prediction.rates.unfolding.get::<hertz>() > 0.0);
//! ```

pub mod models;
pub mod support;

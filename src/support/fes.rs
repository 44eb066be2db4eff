//! Two-state free-energy surface (FES) toolkit.
//!
//! A protein of `nres` residues is described along a single reaction
//! coordinate, the nativeness `n`, running from fully unfolded (`n = 0`) to
//! fully native (`n = 1`) on a fixed [`NativenessGrid`].
//!
//! # Overview
//!
//! Each thermodynamic quantity is a [`Profile`] along the grid:
//!
//! - **Enthalpy** `DHo(n)`, optionally split into local and non-local parts
//! - **Heat capacity** `DCp(n)`
//! - **Conformational entropy** `DSconf(n)`
//!
//! At a temperature `T`, enthalpy and entropy are extrapolated from the
//! reference temperature `Tref` through the heat capacity and combined into
//! the free energy:
//!
//! ```text
//! DH = DHo + DCp·(T − Tref)
//! DS = DSconf + DCp·ln(T / Tref)
//! DG = DH − T·DS
//! ```
//!
//! Profiles are memoized on the [`FreeEnergySurface`]. Requesting a free
//! energy before generating a component fills it in with its default
//! parameters.
//!
//! # Example
//!
//! ```
//! use twine_folding::support::fes::{FreeEnergySurface, GRID_POINTS};
//! use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};
//!
//! let mut surface = FreeEnergySurface::new(80).unwrap();
//! let free_energy = surface
//!     .generate_free_energy(ThermodynamicTemperature::new::<kelvin>(298.0))
//!     .unwrap();
//!
//! assert_eq!(free_energy.len(), GRID_POINTS);
//! assert!(free_energy.iter().all(|g| g.value.is_finite()));
//! ```

mod error;
mod grid;
mod params;
mod profile;
mod shape;
mod surface;

pub use error::FesError;
pub use grid::{GRID_POINTS, NativenessGrid};
pub use params::{
    DenaturantParameters, EnthalpyParameters, EntropyParameters, HeatCapacityParameters,
    REFERENCE_TEMPERATURE, reference_temperature,
};
pub use profile::{
    EnthalpyProfile, EntropyProfile, FreeEnergyProfile, HeatCapacityProfile, Profile,
};
pub use surface::FreeEnergySurface;

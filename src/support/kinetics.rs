//! Two-state folding kinetics from free-energy profiles.
//!
//! - [`find_barrier`] locates the barrier top of a two-state free-energy
//!   profile and reports the barrier heights on either side.
//! - [`rate_from_barrier`] converts a barrier height into a rate constant with
//!   a chain-length dependent prefactor:
//!   `k = (3.6·10⁶ s⁻¹ / nres) · exp(−ΔG‡ / RT)`.
//! - [`RateConstants`] pairs folding and unfolding rates.
//!
//! Barrier search accepts any free-energy slice, not only profiles generated
//! by a [`FreeEnergySurface`](crate::support::fes::FreeEnergySurface).
//!
//! # Example
//!
//! ```
//! use twine_folding::support::kinetics::{RateConstants, find_barrier};
//! use uom::si::{
//!     f64::{MolarEnergy, ThermodynamicTemperature},
//!     molar_energy::kilojoule_per_mole,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! // Unfolded well at index 20, native well at index 80, barrier in between.
//! let profile: Vec<MolarEnergy> = (0..100)
//!     .map(|i| {
//!         let i = f64::from(i);
//!         let g = ((i - 20.0).abs() + 5.0).min((i - 80.0).abs());
//!         MolarEnergy::new::<kilojoule_per_mole>(g)
//!     })
//!     .collect();
//!
//! let barriers = find_barrier(&profile).unwrap();
//! let rates = RateConstants::from_barriers(
//!     &barriers,
//!     100,
//!     ThermodynamicTemperature::new::<kelvin>(298.0),
//! )
//! .unwrap();
//!
//! assert!(rates.folding < rates.unfolding);
//! ```

mod barrier;
mod rate;

pub use barrier::{BarrierError, BarrierHeights, BarrierSearch, find_barrier, find_barrier_with};
pub use rate::{RATE_PREFACTOR, RateConstants, RateError, rate_from_barrier};

use thiserror::Error;
use uom::si::{
    f64::{Frequency, MolarEnergy, Ratio, ThermodynamicTemperature},
    frequency::hertz,
    molar_energy::kilojoule_per_mole,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, ConstraintError, Finite, StrictlyPositive},
    units::molar_gas_constant,
};

use super::BarrierHeights;

/// Attempt frequency for a single residue, in s⁻¹.
///
/// The attempt frequency of a chain is this value divided by its residue count.
pub const RATE_PREFACTOR: f64 = 3.6e6;

/// Errors that can occur while computing a rate constant.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RateError {
    /// An input violates its numeric constraint.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        #[source]
        reason: ConstraintError,
    },

    /// The barrier is so far below zero that the rate is not representable.
    #[error(
        "rate overflows for barrier {barrier_kj_per_mol} kJ/mol with {nres} residues at {temperature_k} K"
    )]
    Overflow {
        barrier_kj_per_mol: f64,
        nres: u32,
        temperature_k: f64,
    },
}

impl RateError {
    fn check<C: Constraint<f64>>(name: &'static str, value: f64) -> Result<f64, Self> {
        C::check(&value).map_err(|reason| Self::InvalidParameter {
            name,
            value,
            reason,
        })?;
        Ok(value)
    }
}

/// Converts a barrier height into a rate constant.
///
/// Computes `k = (3.6·10⁶ s⁻¹ / nres) · exp(−ΔG‡ / RT)`. The rate is strictly
/// decreasing in the barrier; a zero barrier gives the attempt frequency.
///
/// # Errors
///
/// Returns [`RateError::InvalidParameter`] if `nres` is zero, the temperature
/// is not strictly positive, or the barrier is not finite, and
/// [`RateError::Overflow`] if the rate is too large to represent.
pub fn rate_from_barrier(
    barrier: MolarEnergy,
    nres: u32,
    temperature: ThermodynamicTemperature,
) -> Result<Frequency, RateError> {
    let barrier_kj_per_mol =
        RateError::check::<Finite>("barrier", barrier.get::<kilojoule_per_mole>())?;
    let residues = RateError::check::<StrictlyPositive>("nres", f64::from(nres))?;
    let temperature_k =
        RateError::check::<StrictlyPositive>("temperature", temperature.get::<kelvin>())?;

    let exponent = barrier / (molar_gas_constant() * temperature);
    let rate = RATE_PREFACTOR / residues * (-exponent.get::<ratio>()).exp();
    if !rate.is_finite() {
        return Err(RateError::Overflow {
            barrier_kj_per_mol,
            nres,
            temperature_k,
        });
    }

    Ok(Frequency::new::<hertz>(rate))
}

/// Folding and unfolding rate constants of a two-state protein.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateConstants {
    pub folding: Frequency,
    pub unfolding: Frequency,
}

impl RateConstants {
    /// Converts both barrier heights into rate constants.
    ///
    /// # Errors
    ///
    /// Returns a [`RateError`] under the same conditions as [`rate_from_barrier`].
    pub fn from_barriers(
        barriers: &BarrierHeights,
        nres: u32,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, RateError> {
        Ok(Self {
            folding: rate_from_barrier(barriers.folding, nres, temperature)?,
            unfolding: rate_from_barrier(barriers.unfolding, nres, temperature)?,
        })
    }

    /// Observed two-state relaxation rate, `folding + unfolding`.
    #[must_use]
    pub fn relaxation_rate(&self) -> Frequency {
        self.folding + self.unfolding
    }

    /// Equilibrium constant, `folding / unfolding`.
    #[must_use]
    pub fn equilibrium_constant(&self) -> Ratio {
        self.folding / self.unfolding
    }
}

//! Default model parameters.
//!
//! Values are per residue and describe the unfolded state relative to the
//! native state.

use uom::si::{
    f64::{MolarEnergy, MolarHeatCapacity, ThermodynamicTemperature},
    molar_energy::kilojoule_per_mole,
    molar_heat_capacity::joule_per_kelvin_mole,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::MolarEntropy;

/// Reference temperature for enthalpy and entropy, in kelvin.
pub const REFERENCE_TEMPERATURE: f64 = 385.0;

/// Returns the reference temperature as a typed quantity.
#[must_use]
pub fn reference_temperature() -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(REFERENCE_TEMPERATURE)
}

/// Parameters of a cooperative enthalpy profile.
///
/// The profile is `nres·DHres·(1 + (exp(kDH·n) − 1) / (1 − exp(kDH)))`,
/// which is `nres·DHres` at `n = 0` and zero at `n = 1`.
/// The curvature `kDH` controls how late along the nativeness coordinate
/// the enthalpy is released; it must be non-zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnthalpyParameters {
    /// Enthalpy per residue, `DHres`.
    pub per_residue: MolarEnergy,

    /// Curvature, `kDH`.
    pub curvature: f64,
}

impl EnthalpyParameters {
    #[must_use]
    pub fn new(per_residue: MolarEnergy, curvature: f64) -> Self {
        Self {
            per_residue,
            curvature,
        }
    }

    /// Single global profile: `DHres = 6.2 kJ/mol`, `kDH = 3`.
    #[must_use]
    pub fn global() -> Self {
        Self::new(MolarEnergy::new::<kilojoule_per_mole>(6.2), 3.0)
    }

    /// Local (short-range) contribution: `DHres = 0 kJ/mol`, `kDH = −1.5`.
    #[must_use]
    pub fn local() -> Self {
        Self::new(MolarEnergy::new::<kilojoule_per_mole>(0.0), -1.5)
    }

    /// Non-local (long-range) contribution: `DHres = 6.2 kJ/mol`, `kDH = 3.75`.
    #[must_use]
    pub fn non_local() -> Self {
        Self::new(MolarEnergy::new::<kilojoule_per_mole>(6.2), 3.75)
    }

    /// Returns a copy with a different per-residue enthalpy.
    #[must_use]
    pub fn with_per_residue(mut self, per_residue: MolarEnergy) -> Self {
        self.per_residue = per_residue;
        self
    }
}

impl Default for EnthalpyParameters {
    fn default() -> Self {
        Self::global()
    }
}

/// Parameters of the heat capacity profile.
///
/// Same functional form as [`EnthalpyParameters`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatCapacityParameters {
    /// Heat capacity per residue, `DCpres`.
    pub per_residue: MolarHeatCapacity,

    /// Curvature, `kDCp`.
    pub curvature: f64,
}

impl Default for HeatCapacityParameters {
    /// `DCpres = 0.058 kJ/(mol·K)`, `kDCp = 4.3`.
    fn default() -> Self {
        Self {
            per_residue: MolarHeatCapacity::new::<joule_per_kelvin_mole>(58.0),
            curvature: 4.3,
        }
    }
}

/// Parameters of the conformational entropy profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyParameters {
    /// Conformational entropy per residue of the unfolded state, `DSres`.
    pub per_residue: MolarEntropy,
}

impl Default for EntropyParameters {
    /// `DSres = 0.0165 kJ/(mol·K)`.
    fn default() -> Self {
        Self {
            per_residue: MolarEntropy::new::<joule_per_kelvin_mole>(16.5),
        }
    }
}

/// Parameters of the denaturant perturbation.
///
/// The nativeness-dependent m-value factor is
/// `mdenat(n) = 1 − (1 + C)·nʲ / (nʲ + C)`, equal to one in the unfolded
/// state and zero in the native state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DenaturantParameters {
    /// Offset `C`, strictly positive.
    pub offset: f64,

    /// Exponent `j`, strictly positive.
    pub exponent: i32,
}

impl Default for DenaturantParameters {
    fn default() -> Self {
        Self {
            offset: 0.04,
            exponent: 8,
        }
    }
}

use uom::si::molar_heat_capacity::joule_per_kelvin_mole;

use super::MolarEntropy;

/// Molar gas constant in J/(K·mol).
pub const MOLAR_GAS_CONSTANT: f64 = 8.314;

/// Returns the molar gas constant `R` as a typed quantity.
#[must_use]
pub fn molar_gas_constant() -> MolarEntropy {
    MolarEntropy::new::<joule_per_kelvin_mole>(MOLAR_GAS_CONSTANT)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{MolarEnergy, ThermodynamicTemperature},
        molar_energy::kilojoule_per_mole,
        thermodynamic_temperature::kelvin,
    };

    #[test]
    fn thermal_energy_at_room_temperature() {
        let temp = ThermodynamicTemperature::new::<kelvin>(298.0);
        let rt: MolarEnergy = molar_gas_constant() * temp;
        assert_relative_eq!(rt.get::<kilojoule_per_mole>(), 8.314e-3 * 298.0, epsilon = 1e-12);
    }
}

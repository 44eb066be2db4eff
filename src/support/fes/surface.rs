use std::ops::Mul;

use tracing::debug;
use uom::{
    ConstZero,
    si::{
        f64::{MolarEnergy, ThermodynamicTemperature},
        molar_energy::kilojoule_per_mole,
        molar_heat_capacity::joule_per_kelvin_mole,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::{
    constraint::{Finite, NonZero, StrictlyPositive},
    units::{MolarEntropy, TemperatureDifference, molar_gas_constant},
};

use super::{
    DenaturantParameters, EnthalpyParameters, EnthalpyProfile, EntropyParameters,
    EntropyProfile, FesError, FreeEnergyProfile, GRID_POINTS, HeatCapacityParameters,
    HeatCapacityProfile, NativenessGrid, Profile, reference_temperature, shape,
};

/// Free-energy surface of a two-state protein with `nres` residues.
///
/// The surface owns a fixed [`NativenessGrid`] and memoizes each generated
/// profile. Generating a profile again with new parameters replaces the
/// cached one; a failed generation leaves the cache untouched.
///
/// Mutation goes through `&mut self`, so a surface cannot be modified from
/// several places at once. Parallel parameter sweeps should build one surface
/// per task.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeEnergySurface {
    nres: u32,
    grid: NativenessGrid,
    enthalpy: Option<EnthalpyProfile>,
    enthalpy_local: Option<EnthalpyProfile>,
    enthalpy_non_local: Option<EnthalpyProfile>,
    heat_capacity: Option<HeatCapacityProfile>,
    entropy: Option<EntropyProfile>,
    free_energy: Option<FreeEnergyProfile>,
    denatured_free_energy: Option<FreeEnergyProfile>,
}

/// Component profiles needed for a free energy.
struct Components<'a> {
    enthalpy: &'a EnthalpyProfile,
    heat_capacity: &'a HeatCapacityProfile,
    entropy: &'a EntropyProfile,
}

impl FreeEnergySurface {
    /// Creates a surface for a chain of `nres` residues.
    ///
    /// # Errors
    ///
    /// Returns [`FesError::InvalidParameter`] if `nres` is zero.
    pub fn new(nres: u32) -> Result<Self, FesError> {
        FesError::check::<StrictlyPositive>("nres", f64::from(nres))?;

        Ok(Self {
            nres,
            grid: NativenessGrid::new(),
            enthalpy: None,
            enthalpy_local: None,
            enthalpy_non_local: None,
            heat_capacity: None,
            entropy: None,
            free_energy: None,
            denatured_free_energy: None,
        })
    }

    /// Returns the number of residues.
    #[must_use]
    pub fn nres(&self) -> u32 {
        self.nres
    }

    /// Returns the nativeness grid shared by all profiles.
    #[must_use]
    pub fn grid(&self) -> &NativenessGrid {
        &self.grid
    }

    /// Total enthalpy `DHo`, if generated.
    #[must_use]
    pub fn enthalpy(&self) -> Option<&EnthalpyProfile> {
        self.enthalpy.as_ref()
    }

    /// Local enthalpy component `DHo_local`, if generated.
    #[must_use]
    pub fn enthalpy_local(&self) -> Option<&EnthalpyProfile> {
        self.enthalpy_local.as_ref()
    }

    /// Non-local enthalpy component `DHo_nonlocal`, if generated.
    #[must_use]
    pub fn enthalpy_non_local(&self) -> Option<&EnthalpyProfile> {
        self.enthalpy_non_local.as_ref()
    }

    /// Heat capacity `DCp`, if generated.
    #[must_use]
    pub fn heat_capacity(&self) -> Option<&HeatCapacityProfile> {
        self.heat_capacity.as_ref()
    }

    /// Conformational entropy `DSconf`, if generated.
    #[must_use]
    pub fn entropy(&self) -> Option<&EntropyProfile> {
        self.entropy.as_ref()
    }

    /// Most recently generated free energy `DG`.
    #[must_use]
    pub fn free_energy(&self) -> Option<&FreeEnergyProfile> {
        self.free_energy.as_ref()
    }

    /// Most recently generated denaturant-perturbed free energy `DGdenat`.
    #[must_use]
    pub fn denatured_free_energy(&self) -> Option<&FreeEnergyProfile> {
        self.denatured_free_energy.as_ref()
    }

    /// Generates the total enthalpy `DHo` as a single global profile.
    ///
    /// Any local/non-local split from a previous
    /// [`generate_enthalpy_global`](Self::generate_enthalpy_global) is
    /// discarded, since it no longer sums to the total.
    ///
    /// # Errors
    ///
    /// Returns [`FesError`] if `kDH` is zero, `DHres` is not finite, or the
    /// profile is not finite.
    pub fn generate_enthalpy(
        &mut self,
        params: EnthalpyParameters,
    ) -> Result<&EnthalpyProfile, FesError> {
        let profile = enthalpy_profile(&self.grid, self.nres, params)?;
        debug!(nres = self.nres, ?params, "generated enthalpy");

        self.enthalpy_local = None;
        self.enthalpy_non_local = None;
        Ok(self.enthalpy.insert(profile))
    }

    /// Generates the local (short-range) enthalpy component.
    ///
    /// The total enthalpy is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`FesError`] on invalid parameters or a non-finite profile.
    pub fn generate_enthalpy_local(
        &mut self,
        params: EnthalpyParameters,
    ) -> Result<&EnthalpyProfile, FesError> {
        let profile = enthalpy_profile(&self.grid, self.nres, params)?;
        Ok(self.enthalpy_local.insert(profile))
    }

    /// Generates the non-local (long-range) enthalpy component.
    ///
    /// The total enthalpy is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`FesError`] on invalid parameters or a non-finite profile.
    pub fn generate_enthalpy_non_local(
        &mut self,
        params: EnthalpyParameters,
    ) -> Result<&EnthalpyProfile, FesError> {
        let profile = enthalpy_profile(&self.grid, self.nres, params)?;
        Ok(self.enthalpy_non_local.insert(profile))
    }

    /// Generates local and non-local components and their sum as `DHo`.
    ///
    /// After this call `DHo == DHo_local + DHo_nonlocal` at every grid point.
    /// Both components are validated before anything is cached.
    ///
    /// # Errors
    ///
    /// Returns [`FesError`] if either parameter set is invalid.
    pub fn generate_enthalpy_global(
        &mut self,
        local: EnthalpyParameters,
        non_local: EnthalpyParameters,
    ) -> Result<&EnthalpyProfile, FesError> {
        let local_profile = enthalpy_profile(&self.grid, self.nres, local)?;
        let non_local_profile = enthalpy_profile(&self.grid, self.nres, non_local)?;
        let total = Profile::from_fn(|i| local_profile[i] + non_local_profile[i]);
        FesError::ensure_finite("enthalpy", total.iter().map(|h| h.value))?;
        debug!(nres = self.nres, ?local, ?non_local, "generated global enthalpy");

        self.enthalpy_local = Some(local_profile);
        self.enthalpy_non_local = Some(non_local_profile);
        Ok(self.enthalpy.insert(total))
    }

    /// Generates the heat capacity `DCp`.
    ///
    /// # Errors
    ///
    /// Returns [`FesError`] if `kDCp` is zero, `DCpres` is not finite, or the
    /// profile is not finite.
    pub fn generate_heat_capacity(
        &mut self,
        params: HeatCapacityParameters,
    ) -> Result<&HeatCapacityProfile, FesError> {
        let profile = heat_capacity_profile(&self.grid, self.nres, params)?;
        debug!(nres = self.nres, ?params, "generated heat capacity");
        Ok(self.heat_capacity.insert(profile))
    }

    /// Generates the conformational entropy `DSconf`.
    ///
    /// Interior points follow
    /// `nres·(−R·(n·ln n + (1−n)·ln(1−n)) + (1−n)·DSres)`.
    /// The mixing term is undefined at the endpoints, which are set to
    /// `nres·DSres` at `n = 0` and zero at `n = 1`.
    ///
    /// # Errors
    ///
    /// Returns [`FesError`] if `DSres` is not finite.
    pub fn generate_entropy(
        &mut self,
        params: EntropyParameters,
    ) -> Result<&EntropyProfile, FesError> {
        let profile = entropy_profile(&self.grid, self.nres, params)?;
        debug!(nres = self.nres, ?params, "generated entropy");
        Ok(self.entropy.insert(profile))
    }

    /// Generates every missing component profile with its default parameters.
    ///
    /// Missing enthalpy falls back to the single global profile, so callers
    /// wanting a local/non-local split must generate it beforehand.
    ///
    /// # Errors
    ///
    /// Returns [`FesError`] if a default profile cannot be generated.
    pub fn ensure_generated(&mut self) -> Result<(), FesError> {
        self.components().map(|_| ())
    }

    /// Generates the free energy at `temperature` with the default reference
    /// temperature of 385 K.
    ///
    /// # Errors
    ///
    /// Returns [`FesError`] if the temperature is not strictly positive or a
    /// profile cannot be generated.
    pub fn generate_free_energy(
        &mut self,
        temperature: ThermodynamicTemperature,
    ) -> Result<&FreeEnergyProfile, FesError> {
        self.generate_free_energy_with_reference(temperature, reference_temperature())
    }

    /// Generates the free energy at `temperature` relative to `reference`.
    ///
    /// Missing components are generated with defaults first. Pointwise:
    /// `DH = DHo + DCp·(T − Tref)`, `DS = DSconf + DCp·ln(T/Tref)`, and
    /// `DG = DH − T·DS`.
    ///
    /// # Errors
    ///
    /// Returns [`FesError`] if either temperature is not strictly positive,
    /// a component cannot be generated, or the result is not finite.
    pub fn generate_free_energy_with_reference(
        &mut self,
        temperature: ThermodynamicTemperature,
        reference: ThermodynamicTemperature,
    ) -> Result<&FreeEnergyProfile, FesError> {
        FesError::check::<StrictlyPositive>("temperature", temperature.get::<kelvin>())?;
        FesError::check::<StrictlyPositive>("Tref", reference.get::<kelvin>())?;

        let profile = {
            let components = self.components()?;
            let delta_t = temperature.minus(reference);
            let log_ratio = (temperature / reference).ln();

            Profile::from_fn(|i| {
                let heat_capacity = components.heat_capacity[i];
                let enthalpy = components.enthalpy[i] + heat_capacity * delta_t;
                let entropy = components.entropy[i] + heat_capacity * log_ratio;
                enthalpy - entropy * temperature
            })
        };
        FesError::ensure_finite("free energy", profile.iter().map(|g| g.value))?;

        debug!(
            nres = self.nres,
            temperature_k = temperature.get::<kelvin>(),
            reference_k = reference.get::<kelvin>(),
            "generated free energy"
        );
        Ok(self.free_energy.insert(profile))
    }

    /// Perturbs the free energy with a chemical denaturant.
    ///
    /// Regenerates `DG` at `temperature` first, then returns
    /// `DGdenat = DG − mdenat·FD` with
    /// `mdenat(n) = 1 − (1 + C)·nʲ / (nʲ + C)`.
    /// The unfolded end is shifted by the full force `FD`; the native end is
    /// unperturbed.
    ///
    /// # Errors
    ///
    /// Returns [`FesError`] if the force is not finite, `C` or `j` is not
    /// strictly positive, or the free energy cannot be generated.
    pub fn apply_denaturant(
        &mut self,
        force: MolarEnergy,
        temperature: ThermodynamicTemperature,
        reference: ThermodynamicTemperature,
        params: DenaturantParameters,
    ) -> Result<&FreeEnergyProfile, FesError> {
        FesError::check::<Finite>("FD", force.get::<kilojoule_per_mole>())?;
        FesError::check::<StrictlyPositive>("C", params.offset)?;
        FesError::check::<StrictlyPositive>("j", f64::from(params.exponent))?;

        let free_energy = self
            .generate_free_energy_with_reference(temperature, reference)?
            .clone();

        let grid = &self.grid;
        let profile = Profile::from_fn(|i| {
            let m = shape::denaturant_factor(grid[i], params.offset, params.exponent);
            free_energy[i] - force * m
        });
        FesError::ensure_finite("denatured free energy", profile.iter().map(|g| g.value))?;

        debug!(
            nres = self.nres,
            force_kj_per_mol = force.get::<kilojoule_per_mole>(),
            "applied denaturant"
        );
        Ok(self.denatured_free_energy.insert(profile))
    }

    /// Returns the component profiles, generating missing ones with defaults.
    fn components(&mut self) -> Result<Components<'_>, FesError> {
        let nres = self.nres;
        let grid = &self.grid;

        let enthalpy = match &mut self.enthalpy {
            Some(profile) => profile,
            slot => {
                debug!(nres, "enthalpy missing, using global defaults");
                slot.insert(enthalpy_profile(grid, nres, EnthalpyParameters::default())?)
            }
        };

        let heat_capacity = match &mut self.heat_capacity {
            Some(profile) => profile,
            slot => {
                debug!(nres, "heat capacity missing, using defaults");
                slot.insert(heat_capacity_profile(
                    grid,
                    nres,
                    HeatCapacityParameters::default(),
                )?)
            }
        };

        let entropy = match &mut self.entropy {
            Some(profile) => profile,
            slot => {
                debug!(nres, "entropy missing, using defaults");
                slot.insert(entropy_profile(grid, nres, EntropyParameters::default())?)
            }
        };

        Ok(Components {
            enthalpy,
            heat_capacity,
            entropy,
        })
    }
}

/// Scales the cooperative shape by `nres` and a per-residue value.
fn cooperative_profile<Q>(
    grid: &NativenessGrid,
    nres: u32,
    per_residue: Q,
    curvature: f64,
) -> Profile<Q>
where
    Q: Copy + Mul<f64, Output = Q>,
{
    let nres = f64::from(nres);
    Profile::from_fn(|i| per_residue * (nres * shape::cooperative(grid[i], curvature)))
}

fn enthalpy_profile(
    grid: &NativenessGrid,
    nres: u32,
    params: EnthalpyParameters,
) -> Result<EnthalpyProfile, FesError> {
    FesError::check::<Finite>("DHres", params.per_residue.get::<kilojoule_per_mole>())?;
    let curvature = FesError::check::<NonZero>("kDH", params.curvature)?;

    let profile = cooperative_profile(grid, nres, params.per_residue, curvature);
    FesError::ensure_finite("enthalpy", profile.iter().map(|h| h.value))?;
    Ok(profile)
}

fn heat_capacity_profile(
    grid: &NativenessGrid,
    nres: u32,
    params: HeatCapacityParameters,
) -> Result<HeatCapacityProfile, FesError> {
    FesError::check::<Finite>("DCpres", params.per_residue.get::<joule_per_kelvin_mole>())?;
    let curvature = FesError::check::<NonZero>("kDCp", params.curvature)?;

    let profile = cooperative_profile(grid, nres, params.per_residue, curvature);
    FesError::ensure_finite("heat capacity", profile.iter().map(|c| c.value))?;
    Ok(profile)
}

fn entropy_profile(
    grid: &NativenessGrid,
    nres: u32,
    params: EntropyParameters,
) -> Result<EntropyProfile, FesError> {
    FesError::check::<Finite>("DSres", params.per_residue.get::<joule_per_kelvin_mole>())?;

    let r = molar_gas_constant();
    let per_residue = params.per_residue;
    let nres = f64::from(nres);

    let profile = Profile::from_fn(|i| match i {
        0 => per_residue * nres,
        i if i == GRID_POINTS - 1 => MolarEntropy::ZERO,
        i => {
            let n = grid[i];
            (r * shape::mixing(n) + per_residue * (1.0 - n)) * nres
        }
    });
    FesError::ensure_finite("entropy", profile.iter().map(|s| s.value))?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::MolarHeatCapacity, thermodynamic_temperature::kelvin};

    use crate::support::constraint::ConstraintError;

    fn kelvin_temp(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(value)
    }

    fn kj(value: f64) -> MolarEnergy {
        MolarEnergy::new::<kilojoule_per_mole>(value)
    }

    #[test]
    fn rejects_zero_residues() {
        assert_eq!(
            FreeEnergySurface::new(0).unwrap_err(),
            FesError::InvalidParameter {
                name: "nres",
                value: 0.0,
                reason: ConstraintError::Zero,
            }
        );
    }

    #[test]
    fn starts_without_profiles() {
        let surface = FreeEnergySurface::new(60).unwrap();
        assert_eq!(surface.nres(), 60);
        assert_eq!(surface.grid().values().len(), GRID_POINTS);
        assert!(surface.enthalpy().is_none());
        assert!(surface.heat_capacity().is_none());
        assert!(surface.entropy().is_none());
        assert!(surface.free_energy().is_none());
        assert!(surface.denatured_free_energy().is_none());
    }

    #[test]
    fn enthalpy_endpoints_and_monotonic_decrease() {
        let mut surface = FreeEnergySurface::new(100).unwrap();
        let enthalpy = surface
            .generate_enthalpy(EnthalpyParameters::default())
            .unwrap();

        assert_relative_eq!(enthalpy.unfolded().get::<kilojoule_per_mole>(), 620.0);
        assert_eq!(enthalpy.native(), MolarEnergy::ZERO);

        // Positive curvature releases enthalpy monotonically toward the native state.
        for pair in enthalpy.values().windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn regenerating_enthalpy_is_bit_identical() {
        let mut surface = FreeEnergySurface::new(85).unwrap();
        let params = EnthalpyParameters::new(kj(5.1), 2.2);

        let first = surface.generate_enthalpy(params).unwrap().clone();
        let second = surface.generate_enthalpy(params).unwrap();

        let first_bits: Vec<u64> = first.iter().map(|h| h.value.to_bits()).collect();
        let second_bits: Vec<u64> = second.iter().map(|h| h.value.to_bits()).collect();
        assert_eq!(first_bits, second_bits);
    }

    #[test]
    fn zero_curvature_is_rejected_without_caching() {
        let mut surface = FreeEnergySurface::new(50).unwrap();
        surface
            .generate_enthalpy(EnthalpyParameters::default())
            .unwrap();
        let before = surface.enthalpy().cloned();

        let err = surface
            .generate_enthalpy(EnthalpyParameters::new(kj(6.2), 0.0))
            .unwrap_err();
        assert_eq!(
            err,
            FesError::InvalidParameter {
                name: "kDH",
                value: 0.0,
                reason: ConstraintError::Zero,
            }
        );
        assert_eq!(surface.enthalpy().cloned(), before);

        let err = surface
            .generate_heat_capacity(HeatCapacityParameters {
                curvature: 0.0,
                ..HeatCapacityParameters::default()
            })
            .unwrap_err();
        assert!(matches!(
            err,
            FesError::InvalidParameter { name: "kDCp", .. }
        ));
        assert!(surface.heat_capacity().is_none());
    }

    #[test]
    fn overflowing_curvature_is_not_cached() {
        let mut surface = FreeEnergySurface::new(50).unwrap();
        let err = surface
            .generate_enthalpy(EnthalpyParameters::new(kj(6.2), 1000.0))
            .unwrap_err();
        assert!(matches!(
            err,
            FesError::NonFinite {
                quantity: "enthalpy",
                ..
            }
        ));
        assert!(surface.enthalpy().is_none());
    }

    #[test]
    fn global_enthalpy_is_sum_of_components() {
        let mut surface = FreeEnergySurface::new(120).unwrap();
        let local = EnthalpyParameters::new(kj(2.15), -1.5);
        let non_local = EnthalpyParameters::new(kj(4.82), 3.75);
        surface.generate_enthalpy_global(local, non_local).unwrap();

        let total = surface.enthalpy().unwrap();
        let local = surface.enthalpy_local().unwrap();
        let non_local = surface.enthalpy_non_local().unwrap();
        for i in 0..GRID_POINTS {
            assert_eq!(total[i], local[i] + non_local[i]);
        }

        // A plain regeneration drops the split.
        surface
            .generate_enthalpy(EnthalpyParameters::default())
            .unwrap();
        assert!(surface.enthalpy_local().is_none());
        assert!(surface.enthalpy_non_local().is_none());
    }

    #[test]
    fn component_generation_keeps_total() {
        let mut surface = FreeEnergySurface::new(40).unwrap();
        surface
            .generate_enthalpy(EnthalpyParameters::default())
            .unwrap();
        let total = surface.enthalpy().cloned();

        surface
            .generate_enthalpy_local(EnthalpyParameters::local())
            .unwrap();
        surface
            .generate_enthalpy_non_local(EnthalpyParameters::non_local())
            .unwrap();

        assert_eq!(surface.enthalpy().cloned(), total);
        assert!(
            surface
                .enthalpy_local()
                .unwrap()
                .iter()
                .all(|h| h == MolarEnergy::ZERO)
        );
        assert_relative_eq!(
            surface
                .enthalpy_non_local()
                .unwrap()
                .unfolded()
                .get::<kilojoule_per_mole>(),
            40.0 * 6.2,
            epsilon = 1e-9
        );
    }

    #[test]
    fn entropy_boundaries_are_patched() {
        for nres in [1, 37, 100, 412] {
            let mut surface = FreeEnergySurface::new(nres).unwrap();
            let params = EntropyParameters {
                per_residue: MolarEntropy::new::<joule_per_kelvin_mole>(21.0),
            };
            let entropy = surface.generate_entropy(params).unwrap();

            assert_eq!(entropy.unfolded(), params.per_residue * f64::from(nres));
            assert_eq!(entropy.native(), MolarEntropy::ZERO);
            assert!(entropy.iter().all(|s| s.value.is_finite()));
        }
    }

    #[test]
    fn entropy_interior_includes_mixing_term() {
        let mut surface = FreeEnergySurface::new(10).unwrap();
        surface
            .generate_entropy(EntropyParameters::default())
            .unwrap();

        let n = surface.grid()[50];
        let expected = 10.0
            * (8.314 * -(n * n.ln() + (1.0 - n) * (1.0 - n).ln()) + (1.0 - n) * 16.5);
        assert_relative_eq!(
            surface.entropy().unwrap()[50].get::<joule_per_kelvin_mole>(),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn heat_capacity_endpoints() {
        let mut surface = FreeEnergySurface::new(100).unwrap();
        let heat_capacity = surface
            .generate_heat_capacity(HeatCapacityParameters::default())
            .unwrap();
        assert_relative_eq!(
            heat_capacity.unfolded().get::<joule_per_kelvin_mole>(),
            5800.0,
            max_relative = 1e-12
        );
        assert_eq!(heat_capacity.native(), MolarHeatCapacity::ZERO);
    }

    #[test]
    fn free_energy_generates_missing_defaults() {
        let mut surface = FreeEnergySurface::new(100).unwrap();
        let free_energy = surface.generate_free_energy(kelvin_temp(298.0)).unwrap();

        assert_eq!(free_energy.len(), GRID_POINTS);
        assert!(free_energy.iter().all(|g| g.value.is_finite()));

        let defaults = {
            let mut reference = FreeEnergySurface::new(100).unwrap();
            reference
                .generate_enthalpy(EnthalpyParameters::default())
                .unwrap()
                .clone()
        };
        assert_eq!(surface.enthalpy(), Some(&defaults));
        assert!(surface.heat_capacity().is_some());
        assert!(surface.entropy().is_some());
        assert!(surface.free_energy().is_some());
    }

    #[test]
    fn free_energy_is_finite_across_sizes_and_temperatures() {
        for nres in [1, 10, 100, 1000] {
            for temp in [1.0, 250.0, 298.0, 385.0, 500.0] {
                let mut surface = FreeEnergySurface::new(nres).unwrap();
                let free_energy = surface.generate_free_energy(kelvin_temp(temp)).unwrap();
                assert!(
                    free_energy.iter().all(|g| g.value.is_finite()),
                    "nres={nres}, T={temp}"
                );
            }
        }
    }

    #[test]
    fn free_energy_at_reference_has_no_heat_capacity_correction() {
        let mut surface = FreeEnergySurface::new(100).unwrap();
        surface.ensure_generated().unwrap();
        let t_ref = kelvin_temp(385.0);
        let free_energy = surface
            .generate_free_energy_with_reference(t_ref, t_ref)
            .unwrap()
            .clone();

        let enthalpy = surface.enthalpy().unwrap();
        let entropy = surface.entropy().unwrap();
        for i in 0..GRID_POINTS {
            let expected = enthalpy[i] - entropy[i] * t_ref;
            assert_relative_eq!(
                free_energy[i].get::<kilojoule_per_mole>(),
                expected.get::<kilojoule_per_mole>(),
                epsilon = 1e-9
            );
        }
        // Native state is the zero of every profile.
        assert_relative_eq!(free_energy.native().get::<kilojoule_per_mole>(), 0.0);
    }

    #[test]
    fn free_energy_uses_explicit_profiles() {
        let mut surface = FreeEnergySurface::new(100).unwrap();
        surface
            .generate_enthalpy_global(
                EnthalpyParameters::local().with_per_residue(kj(2.15)),
                EnthalpyParameters::non_local().with_per_residue(kj(4.82)),
            )
            .unwrap();
        let total = surface.enthalpy().cloned();

        surface.generate_free_energy(kelvin_temp(298.0)).unwrap();

        // The split survives; defaults only fill missing components.
        assert_eq!(surface.enthalpy().cloned(), total);
        assert!(surface.enthalpy_local().is_some());
    }

    #[test]
    fn free_energy_rejects_non_positive_temperatures() {
        let mut surface = FreeEnergySurface::new(100).unwrap();
        assert!(matches!(
            surface.generate_free_energy(kelvin_temp(0.0)),
            Err(FesError::InvalidParameter {
                name: "temperature",
                ..
            })
        ));
        assert!(matches!(
            surface.generate_free_energy_with_reference(kelvin_temp(298.0), kelvin_temp(-1.0)),
            Err(FesError::InvalidParameter { name: "Tref", .. })
        ));
        assert!(surface.free_energy().is_none());
    }

    #[test]
    fn denaturant_shifts_unfolded_end_only() {
        let mut surface = FreeEnergySurface::new(100).unwrap();
        let force = kj(12.0);
        let temp = kelvin_temp(298.0);
        let denatured = surface
            .apply_denaturant(
                force,
                temp,
                reference_temperature(),
                DenaturantParameters::default(),
            )
            .unwrap()
            .clone();
        let free_energy = surface.free_energy().unwrap();

        assert_relative_eq!(
            denatured.unfolded().get::<kilojoule_per_mole>(),
            (free_energy.unfolded() - force).get::<kilojoule_per_mole>(),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            denatured.native().get::<kilojoule_per_mole>(),
            free_energy.native().get::<kilojoule_per_mole>(),
            epsilon = 1e-9
        );
        for i in 0..GRID_POINTS {
            assert!(
                denatured[i].get::<kilojoule_per_mole>()
                    <= free_energy[i].get::<kilojoule_per_mole>() + 1e-9
            );
        }
        assert_eq!(surface.denatured_free_energy(), Some(&denatured));
    }

    #[test]
    fn zero_denaturant_leaves_free_energy_unchanged() {
        let mut surface = FreeEnergySurface::new(70).unwrap();
        let denatured = surface
            .apply_denaturant(
                MolarEnergy::ZERO,
                kelvin_temp(310.0),
                reference_temperature(),
                DenaturantParameters::default(),
            )
            .unwrap()
            .clone();
        assert_eq!(Some(&denatured), surface.free_energy());
    }

    #[test]
    fn denaturant_rejects_invalid_parameters() {
        let mut surface = FreeEnergySurface::new(70).unwrap();
        let temp = kelvin_temp(298.0);
        let err = surface
            .apply_denaturant(
                kj(5.0),
                temp,
                reference_temperature(),
                DenaturantParameters {
                    offset: 0.0,
                    ..DenaturantParameters::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, FesError::InvalidParameter { name: "C", .. }));

        let err = surface
            .apply_denaturant(
                kj(f64::NAN),
                temp,
                reference_temperature(),
                DenaturantParameters::default(),
            )
            .unwrap_err();
        assert!(matches!(err, FesError::InvalidParameter { name: "FD", .. }));
        assert!(surface.denatured_free_energy().is_none());
    }
}

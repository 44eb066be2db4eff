//! Two-state folding kinetics from a structural class and chain length.

mod class;
mod error;

pub use class::{StructuralClass, UnknownStructuralClass};
pub use error::PredictError;

use tracing::{debug, instrument};
use uom::si::{
    f64::{Frequency, MolarEnergy, ThermodynamicTemperature},
    frequency::hertz,
    molar_energy::kilojoule_per_mole,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    fes::{DenaturantParameters, FreeEnergySurface, reference_temperature},
    kinetics::{BarrierHeights, RateConstants, find_barrier},
};

/// Outcome of a two-state kinetics prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub rates: RateConstants,
    pub barriers: BarrierHeights,

    /// Surface the prediction was computed on, with its free energy cached.
    pub surface: FreeEnergySurface,
}

impl Prediction {
    #[must_use]
    pub fn folding_rate(&self) -> Frequency {
        self.rates.folding
    }

    #[must_use]
    pub fn unfolding_rate(&self) -> Frequency {
        self.rates.unfolding
    }
}

/// One point of a denaturant sweep.
///
/// Barriers follow [`BarrierHeights`]: `unfolding` is measured from the
/// low-nativeness well and `folding` from the high-nativeness well. A
/// denaturant stabilizes the low-nativeness end, so across a sweep
/// `barriers.unfolding` rises and `rates.unfolding` falls while
/// `rates.folding` rises.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChevronPoint {
    /// Denaturant force `FD`.
    pub force: MolarEnergy,
    pub barriers: BarrierHeights,
    pub rates: RateConstants,
}

/// Predicts folding and unfolding rates for a protein.
///
/// Builds a surface for `nres` residues, generates the global enthalpy from
/// the class presets, generates the free energy at `temperature`, and
/// converts the barriers on either side of its top into rates.
///
/// # Errors
///
/// Returns a [`PredictError`] if `nres` is zero, the temperature is not
/// strictly positive, or any stage fails.
#[instrument(skip_all, name = "two_state_predict", fields(nres = nres, class = %class))]
pub fn predict(
    nres: u32,
    class: StructuralClass,
    temperature: ThermodynamicTemperature,
) -> Result<Prediction, PredictError> {
    let mut surface = class_surface(nres, class)?;

    let free_energy = surface.generate_free_energy(temperature)?;
    let barriers = find_barrier(free_energy.as_slice())?;
    let rates = RateConstants::from_barriers(&barriers, nres, temperature)?;

    debug!(
        temperature_k = temperature.get::<kelvin>(),
        top = barriers.top,
        folding_hz = rates.folding.get::<hertz>(),
        unfolding_hz = rates.unfolding.get::<hertz>(),
        "predicted rates"
    );

    Ok(Prediction {
        rates,
        barriers,
        surface,
    })
}

/// Predicts barriers and rates across a series of denaturant forces.
///
/// Points are returned in the order of `forces`. The free energy at each
/// force is `DG − mdenat·FD` with the default denaturant parameters.
///
/// # Errors
///
/// Returns the first [`PredictError`] encountered; no partial sweep is
/// returned.
#[instrument(skip_all, name = "two_state_chevron", fields(nres = nres, class = %class))]
pub fn chevron(
    nres: u32,
    class: StructuralClass,
    temperature: ThermodynamicTemperature,
    forces: impl IntoIterator<Item = MolarEnergy>,
) -> Result<Vec<ChevronPoint>, PredictError> {
    let mut surface = class_surface(nres, class)?;

    forces
        .into_iter()
        .map(|force| -> Result<ChevronPoint, PredictError> {
            let denatured = surface.apply_denaturant(
                force,
                temperature,
                reference_temperature(),
                DenaturantParameters::default(),
            )?;
            let barriers = find_barrier(denatured.as_slice())?;
            let rates = RateConstants::from_barriers(&barriers, nres, temperature)?;

            debug!(
                force_kj_per_mol = force.get::<kilojoule_per_mole>(),
                top = barriers.top,
                "chevron point"
            );
            Ok(ChevronPoint {
                force,
                barriers,
                rates,
            })
        })
        .collect()
}

/// Builds a surface with the class enthalpy split generated.
fn class_surface(nres: u32, class: StructuralClass) -> Result<FreeEnergySurface, PredictError> {
    let mut surface = FreeEnergySurface::new(nres)?;
    let (local, non_local) = class.enthalpy_presets();
    surface.generate_enthalpy_global(local, non_local)?;
    Ok(surface)
}

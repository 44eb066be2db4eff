use std::ops::Index;

use uom::si::f64::{MolarEnergy, MolarHeatCapacity};

use crate::support::units::MolarEntropy;

use super::GRID_POINTS;

/// A thermodynamic quantity sampled on the nativeness grid.
///
/// Index `i` holds the value at the `i`-th [`NativenessGrid`](super::NativenessGrid)
/// point, so every profile has exactly [`GRID_POINTS`] entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile<Q>([Q; GRID_POINTS]);

/// Enthalpy relative to the native state, kJ/mol.
pub type EnthalpyProfile = Profile<MolarEnergy>;

/// Heat capacity relative to the native state.
pub type HeatCapacityProfile = Profile<MolarHeatCapacity>;

/// Conformational entropy relative to the native state.
pub type EntropyProfile = Profile<MolarEntropy>;

/// Gibbs free energy at a given temperature, kJ/mol.
pub type FreeEnergyProfile = Profile<MolarEnergy>;

impl<Q: Copy> Profile<Q> {
    /// Builds a profile by evaluating `f` at each grid index.
    pub(crate) fn from_fn(f: impl FnMut(usize) -> Q) -> Self {
        Self(std::array::from_fn(f))
    }

    /// Returns the profile values in grid order.
    #[must_use]
    pub fn values(&self) -> &[Q; GRID_POINTS] {
        &self.0
    }

    /// Returns the profile as a slice, e.g. for [`find_barrier`](crate::support::kinetics::find_barrier).
    #[must_use]
    pub fn as_slice(&self) -> &[Q] {
        &self.0
    }

    /// Iterates over the profile values in grid order.
    pub fn iter(&self) -> impl Iterator<Item = Q> + '_ {
        self.0.iter().copied()
    }

    /// Returns the number of values, always [`GRID_POINTS`].
    #[must_use]
    #[allow(clippy::len_without_is_empty, clippy::unused_self)]
    pub fn len(&self) -> usize {
        GRID_POINTS
    }

    /// Returns the value at the unfolded end (`n = 0`).
    #[must_use]
    pub fn unfolded(&self) -> Q {
        self.0[0]
    }

    /// Returns the value at the native end (`n = 1`).
    #[must_use]
    pub fn native(&self) -> Q {
        self.0[GRID_POINTS - 1]
    }

    /// Consumes the profile and returns the underlying array.
    #[must_use]
    pub fn into_inner(self) -> [Q; GRID_POINTS] {
        self.0
    }
}

impl<Q> Index<usize> for Profile<Q> {
    type Output = Q;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<Q> AsRef<[Q]> for Profile<Q> {
    fn as_ref(&self) -> &[Q] {
        &self.0
    }
}

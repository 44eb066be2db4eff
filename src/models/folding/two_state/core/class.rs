use std::{fmt, str::FromStr};

use thiserror::Error;
use uom::si::{f64::MolarEnergy, molar_energy::kilojoule_per_mole};

use crate::support::fes::EnthalpyParameters;

/// Secondary-structure class of a protein.
///
/// Each class selects per-residue local and non-local enthalpies for the
/// two-state model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuralClass {
    /// Mostly α-helical (`"a"`).
    Alpha,
    /// Mostly β-sheet (`"b"`).
    Beta,
    /// Mixed α/β (`"ab"`).
    AlphaBeta,
}

/// A structural class tag outside `"a"`, `"b"`, and `"ab"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown structural class `{tag}`, expected one of `a`, `b`, `ab`")]
pub struct UnknownStructuralClass {
    pub tag: String,
}

impl StructuralClass {
    /// All classes, in tag order.
    pub const ALL: [Self; 3] = [Self::Alpha, Self::Beta, Self::AlphaBeta];

    /// Returns the short tag (`"a"`, `"b"`, or `"ab"`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Alpha => "a",
            Self::Beta => "b",
            Self::AlphaBeta => "ab",
        }
    }

    /// Per-residue local and non-local enthalpies, in kJ/mol.
    fn per_residue_kj(self) -> (f64, f64) {
        match self {
            Self::Alpha => (2.15, 4.82),
            Self::Beta => (1.31, 5.30),
            Self::AlphaBeta => (1.50, 5.21),
        }
    }

    /// Returns the local and non-local enthalpy parameters for this class.
    ///
    /// Curvatures are the default local (`-1.5`) and non-local (`3.75`) ones.
    #[must_use]
    pub fn enthalpy_presets(self) -> (EnthalpyParameters, EnthalpyParameters) {
        let (local, non_local) = self.per_residue_kj();
        (
            EnthalpyParameters::local()
                .with_per_residue(MolarEnergy::new::<kilojoule_per_mole>(local)),
            EnthalpyParameters::non_local()
                .with_per_residue(MolarEnergy::new::<kilojoule_per_mole>(non_local)),
        )
    }
}

impl fmt::Display for StructuralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for StructuralClass {
    type Err = UnknownStructuralClass;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.tag() == tag)
            .ok_or_else(|| UnknownStructuralClass {
                tag: tag.to_owned(),
            })
    }
}

impl TryFrom<&str> for StructuralClass {
    type Error = UnknownStructuralClass;

    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

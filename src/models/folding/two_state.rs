//! Two-state folding kinetics model.
//!
//! Predicts folding and unfolding rate constants of a small protein from its
//! chain length, secondary-structure class, and temperature. The computation
//! lives in the internal `core` module; [`TwoStateKinetics`] adapts it to
//! [`twine_core::Model`].
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_folding::models::folding::two_state::{
//!     StructuralClass, TwoStateInput, TwoStateKinetics,
//! };
//! use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};
//!
//! let input = TwoStateInput {
//!     nres: 76,
//!     class: "ab".parse::<StructuralClass>().unwrap(),
//!     temperature: ThermodynamicTemperature::new::<kelvin>(310.0),
//! };
//!
//! let prediction = TwoStateKinetics.call(&input).unwrap();
//! assert!(prediction.rates.relaxation_rate().value > 0.0);
//! ```

mod core;

pub use self::core::{
    ChevronPoint, PredictError, Prediction, StructuralClass, UnknownStructuralClass, chevron,
    predict,
};

use twine_core::Model;
use uom::si::f64::ThermodynamicTemperature;

/// Input to [`TwoStateKinetics`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoStateInput {
    /// Number of residues.
    pub nres: u32,
    pub class: StructuralClass,
    pub temperature: ThermodynamicTemperature,
}

/// [`Model`] adapter for [`predict`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TwoStateKinetics;

impl Model for TwoStateKinetics {
    type Input = TwoStateInput;
    type Output = Prediction;
    type Error = PredictError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        predict(input.nres, input.class, input.temperature)
    }
}

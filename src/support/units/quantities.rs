use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P2, Z0},
};

/// Molar entropy, J/(K·mol) in SI.
///
/// Dimensionally identical to [`uom::si::f64::MolarHeatCapacity`], so values
/// are constructed with the `molar_heat_capacity` units.
pub type MolarEntropy = Quantity<ISQ<P2, P1, N2, Z0, N1, N1, Z0>, SI<f64>, f64>;

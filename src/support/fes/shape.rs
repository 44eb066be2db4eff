//! Dimensionless shape functions along the nativeness coordinate.

/// Cooperative interpolation `1 + (exp(k·n) − 1) / (1 − exp(k))`.
///
/// Equal to one at `n = 0` and exactly zero at `n = 1`.
/// Undefined for `k = 0`; callers validate the curvature first.
pub(super) fn cooperative(nativeness: f64, curvature: f64) -> f64 {
    1.0 + ((curvature * nativeness).exp() - 1.0) / (1.0 - curvature.exp())
}

/// Ideal mixing term `−(n·ln n + (1 − n)·ln(1 − n))`.
///
/// Only defined on the open interval (0, 1).
pub(super) fn mixing(nativeness: f64) -> f64 {
    let unfolded = 1.0 - nativeness;
    -(nativeness * nativeness.ln() + unfolded * unfolded.ln())
}

/// Denaturant m-value factor `1 − (1 + C)·nʲ / (nʲ + C)`.
pub(super) fn denaturant_factor(nativeness: f64, offset: f64, exponent: i32) -> f64 {
    let powered = nativeness.powi(exponent);
    1.0 - (1.0 + offset) * (powered / (powered + offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn cooperative_endpoints() {
        for k in [-1.5, 3.0, 3.75, 4.3] {
            assert_eq!(cooperative(0.0, k), 1.0);
            assert_eq!(cooperative(1.0, k), 0.0);
        }
    }

    #[test]
    fn cooperative_positive_curvature_holds_enthalpy_late() {
        // With k > 0 most of the enthalpy is released close to the native state.
        assert!(cooperative(0.5, 3.75) > 0.5);
        assert!(cooperative(0.5, -1.5) < 0.5);
    }

    #[test]
    fn mixing_is_symmetric_with_peak_at_half() {
        assert_relative_eq!(mixing(0.5), std::f64::consts::LN_2);
        assert_relative_eq!(mixing(0.2), mixing(0.8), epsilon = 1e-15);
        assert!(mixing(0.01) < mixing(0.5));
    }

    #[test]
    fn denaturant_factor_endpoints() {
        assert_eq!(denaturant_factor(0.0, 0.04, 8), 1.0);
        assert_relative_eq!(denaturant_factor(1.0, 0.04, 8), 0.0, epsilon = 1e-15);
        assert!(denaturant_factor(0.5, 0.04, 8) > 0.9);
    }
}

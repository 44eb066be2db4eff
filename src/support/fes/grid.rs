use std::ops::Index;

/// Number of points on the nativeness grid.
pub const GRID_POINTS: usize = 100;

/// Evenly spaced nativeness values on the closed interval [0, 1].
///
/// Index 0 is the fully unfolded state (`n = 0`) and index
/// `GRID_POINTS - 1` the fully native state (`n = 1`). Both endpoints are
/// exact.
#[derive(Debug, Clone, PartialEq)]
pub struct NativenessGrid([f64; GRID_POINTS]);

impl NativenessGrid {
    /// Creates the standard 100-point grid.
    #[must_use]
    pub fn new() -> Self {
        let intervals = (GRID_POINTS - 1) as f64;
        Self(std::array::from_fn(|i| i as f64 / intervals))
    }

    /// Returns the nativeness values.
    #[must_use]
    pub fn values(&self) -> &[f64; GRID_POINTS] {
        &self.0
    }

    /// Iterates over the nativeness values in order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// Returns the distance between neighboring grid points.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.0[1] - self.0[0]
    }
}

impl Default for NativenessGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for NativenessGrid {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

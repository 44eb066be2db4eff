use thiserror::Error;
use tracing::{debug, trace};
use uom::{
    ConstZero,
    si::{f64::MolarEnergy, molar_energy::kilojoule_per_mole},
};

/// Barrier heights of a two-state free-energy profile.
///
/// Heights are measured from the barrier top down to the lowest point on
/// each side and are never negative. A downhill profile, whose window
/// maximum sits against the search margin, lies below a well on one side;
/// that height is clamped to zero.
///
/// The names refer to the side of the profile a height is measured from,
/// not to the physical direction of the transition. `unfolding` is measured
/// from the low-nativeness well (the unfolded end at index 0), so it
/// governs escape from that well and grows as the unfolded state is
/// stabilized, for example by a denaturant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarrierHeights {
    /// `max(0, fmax − min(profile[..top]))`, measured from the low-nativeness well.
    pub unfolding: MolarEnergy,

    /// `max(0, fmax − min(profile[top..]))`, measured from the high-nativeness well.
    pub folding: MolarEnergy,

    /// Index of the barrier top.
    pub top: usize,
}

impl BarrierHeights {
    /// Returns true if either side has no barrier.
    #[must_use]
    pub fn is_downhill(&self) -> bool {
        self.unfolding <= MolarEnergy::ZERO || self.folding <= MolarEnergy::ZERO
    }
}

/// Errors that can occur while searching for a barrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BarrierError {
    /// The profile cannot hold the excluded margins plus a search window.
    #[error("profile has {len} points, barrier search needs at least {required}")]
    TooShort { len: usize, required: usize },

    /// The profile contains an infinite or `NaN` value.
    #[error("non-finite free energy at index {index}")]
    NonFinite { index: usize },

    /// A zero lower margin leaves no points below a barrier top at index 0.
    #[error("lower search margin must be at least 1")]
    ZeroLowerMargin,

    /// The margins together exceed the largest representable profile length.
    #[error("search margins {lower} and {upper} are too large")]
    MarginOverflow { lower: usize, upper: usize },
}

/// Points excluded from each end of the profile during a barrier search.
///
/// The ends are skipped to avoid artifacts from the patched entropy
/// endpoints. The maximum is searched only inside the window
/// `[lower_margin, len − upper_margin)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarrierSearch {
    lower_margin: usize,
    upper_margin: usize,
}

impl BarrierSearch {
    /// Creates a search with the given margins.
    ///
    /// # Errors
    ///
    /// Returns [`BarrierError::ZeroLowerMargin`] if `lower_margin` is zero, or
    /// [`BarrierError::MarginOverflow`] if `lower_margin + upper_margin + 1`
    /// does not fit in a `usize`.
    pub fn new(lower_margin: usize, upper_margin: usize) -> Result<Self, BarrierError> {
        if lower_margin == 0 {
            return Err(BarrierError::ZeroLowerMargin);
        }
        if lower_margin
            .checked_add(upper_margin)
            .and_then(|sum| sum.checked_add(1))
            .is_none()
        {
            return Err(BarrierError::MarginOverflow {
                lower: lower_margin,
                upper: upper_margin,
            });
        }
        Ok(Self {
            lower_margin,
            upper_margin,
        })
    }

    #[must_use]
    pub fn lower_margin(&self) -> usize {
        self.lower_margin
    }

    #[must_use]
    pub fn upper_margin(&self) -> usize {
        self.upper_margin
    }

    /// Shortest profile the search accepts.
    #[must_use]
    pub fn min_len(&self) -> usize {
        self.lower_margin + self.upper_margin + 1
    }
}

impl Default for BarrierSearch {
    /// Ten points excluded at each end.
    fn default() -> Self {
        Self {
            lower_margin: 10,
            upper_margin: 10,
        }
    }
}

/// Finds the barrier of a two-state free-energy profile with the default
/// ten-point margins.
///
/// # Errors
///
/// Returns [`BarrierError`] if the profile is too short or not finite.
pub fn find_barrier(profile: &[MolarEnergy]) -> Result<BarrierHeights, BarrierError> {
    find_barrier_with(profile, &BarrierSearch::default())
}

/// Finds the barrier of a two-state free-energy profile.
///
/// The barrier top is the first maximum inside the search window; values
/// outside the window never move it, even when they are equal to or larger
/// than the window maximum.
///
/// # Errors
///
/// Returns [`BarrierError::TooShort`] if the profile is shorter than
/// [`BarrierSearch::min_len`], or [`BarrierError::NonFinite`] if any value is
/// infinite or `NaN`.
pub fn find_barrier_with(
    profile: &[MolarEnergy],
    search: &BarrierSearch,
) -> Result<BarrierHeights, BarrierError> {
    let required = search.min_len();
    if profile.len() < required {
        return Err(BarrierError::TooShort {
            len: profile.len(),
            required,
        });
    }

    if let Some(index) = profile.iter().position(|g| !g.value.is_finite()) {
        return Err(BarrierError::NonFinite { index });
    }

    let window = search.lower_margin..profile.len() - search.upper_margin;
    let mut top = window.start;
    for i in window {
        if profile[i] > profile[top] {
            top = i;
        }
    }

    let fmax = profile[top];
    let unfolded_min = lowest(&profile[..top], profile[0]);
    let native_min = lowest(&profile[top..], fmax);

    let unfolding = fmax - unfolded_min;
    let folding = fmax - native_min;

    trace!(
        top,
        unfolding_kj_per_mol = unfolding.get::<kilojoule_per_mole>(),
        folding_kj_per_mol = folding.get::<kilojoule_per_mole>(),
        "found barrier"
    );
    if unfolding < MolarEnergy::ZERO || folding < MolarEnergy::ZERO {
        debug!(top, "profile is downhill, clamping barrier height to zero");
    }

    let barriers = BarrierHeights {
        unfolding: unfolding.max(MolarEnergy::ZERO),
        folding: folding.max(MolarEnergy::ZERO),
        top,
    };

    Ok(barriers)
}

fn lowest(values: &[MolarEnergy], start: MolarEnergy) -> MolarEnergy {
    values
        .iter()
        .copied()
        .fold(start, |low, value| if value < low { value } else { low })
}

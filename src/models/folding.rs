//! Protein folding models.

pub mod two_state;

//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently `folding`).
//! This organization may evolve as more models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. Its public entry points
//! are re-exported by the model module.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates to
//! the model's core API.

pub mod folding;

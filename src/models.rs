//! Public interconnect models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (e.g., `wire`) based
//! on an opinionated taxonomy. This organization may evolve as more models
//! are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the actual computation and domain logic lives. The `core`
//! module is an implementation detail and is **not** re-exported as part of
//! the public API.
//!
//! The estimator adapter exposed by each model is a thin boundary layer that
//! decodes and validates host-framework requests, then delegates to the
//! model-specific core API.

pub mod wire;

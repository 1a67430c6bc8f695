//! # Interconnect Models
//!
//! Opinionated, domain-specific energy models for on-chip interconnect,
//! packaged for use by hardware energy/area estimation frameworks.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific model implementations and their
//!   boundary-facing estimator adapters.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code in this crate follows a natural progression as needs emerge:
//!
//! 1. **Model-specific**: Starts in a model's internal `core` module
//! 2. **Domain-specific**: If useful across models in a domain (e.g., `wire`),
//!    it moves to a domain-level support module
//! 3. **Crate-level**: If useful across multiple domains or potentially useful
//!    outside this crate, it moves to [`support`]
//!
//! Note: Only utilities at the crate-level (in [`support`]) are part of the
//! public API. Model-specific utility code remains private.

pub mod models;
pub mod support;

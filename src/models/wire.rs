//! On-chip wire energy models.
//!
//! This module estimates the switching energy per unit length of a
//! repeater-inserted wire. The computational core is in the internal
//! [`core`] module; [`WireEstimator`] is the public adapter that speaks the
//! host estimation framework's capability/estimate protocol.

pub(crate) mod core;
mod estimator;

pub use estimator::{AttributeValue, EstimateError, EstimationRequest, WireEstimator};

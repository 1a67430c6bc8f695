//! Estimator adapter for the wire energy model.
//!
//! This module is the boundary between the host estimation framework's
//! loosely-typed plugin protocol and the strongly-typed model core. It
//! answers capability queries with fixed accuracy scores, decodes and
//! validates request attributes into the core's wire parameters, and converts
//! model output into the pJ/mm convention the host expects.
//!
//! Every operation is a pure function of its request; the only shared data
//! is the immutable capacitance table and model constants, so concurrent
//! callers need no synchronization.

mod error;
mod request;

pub use error::EstimateError;
pub use request::{AttributeValue, EstimationRequest};

use std::collections::HashMap;

use tracing::warn;

use super::core::{
    self, DEFAULT_SWING_VOLTAGE, DEFAULT_SWITCHING_ACTIVITY, DelayPenalty, SwingVoltage,
    SwitchingActivity, WireParameters,
};
use crate::support::{
    constraint::ConstraintError, process::TechnologyNode, units::picojoules_per_millimeter,
};

/// Accuracy score reported for supported energy queries, on the host's
/// 0-100 scale.
const ENERGY_ACCURACY: u32 = 90;

/// Accuracy score reported for supported area queries.
///
/// Wire area is deliberately unmodeled, so the claim carries the lowest
/// positive confidence.
const AREA_ACCURACY: u32 = 1;

/// Component class names recognized as wires, compared case-insensitively.
const WIRE_NAMES: [&str; 1] = ["wire"];

/// Action names the energy path recognizes, compared case-insensitively.
const WIRE_ACTIONS: [&str; 2] = ["energy", "transfer_random"];

/// Estimator for the switching energy of on-chip wires.
///
/// Implements the host framework's capability/estimate protocol: a pair of
/// operations for energy and a pair for area. The estimator is stateless;
/// a single instance may serve any number of concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct WireEstimator;

impl WireEstimator {
    /// Human-readable estimator name reported to the host framework.
    pub const NAME: &'static str = "Wire Estimator";

    /// Returns the accuracy score for an energy query, or 0 if unsupported.
    ///
    /// A request is supported when its class name matches a recognized wire
    /// alias and its action name is a recognized wire action, both
    /// case-insensitively.
    #[must_use]
    pub fn supports_energy(&self, request: &EstimationRequest) -> u32 {
        if matches_any(&request.class_name, &WIRE_NAMES)
            && matches_any(&request.action_name, &WIRE_ACTIONS)
        {
            ENERGY_ACCURACY
        } else {
            0
        }
    }

    /// Estimates the wire's switching energy per unit length, in pJ/mm.
    ///
    /// The `technology` and `delay_penalty` attributes are required.
    /// `voltage` and `switching_activity` are optional; when absent, the
    /// documented defaults (0.5 V and 0.15) are substituted and a warning
    /// is emitted naming the substitution.
    ///
    /// # Errors
    ///
    /// Returns an [`EstimateError`] if a required attribute is missing, an
    /// attribute fails validation, or the model rejects the inputs (node
    /// outside the capacitance table, no real Pareto root).
    pub fn estimate_energy(&self, request: &EstimationRequest) -> Result<f64, EstimateError> {
        let params = decode_parameters(&request.attributes)?;
        let energy = core::energy_per_length(&params).map_err(EstimateError::model)?;
        Ok(picojoules_per_millimeter(energy))
    }

    /// Returns the accuracy score for an area query, or 0 if unsupported.
    #[must_use]
    pub fn supports_area(&self, request: &EstimationRequest) -> u32 {
        if matches_any(&request.class_name, &WIRE_NAMES) {
            AREA_ACCURACY
        } else {
            0
        }
    }

    /// Estimates the wire's area.
    ///
    /// Wire area is not modeled; this path always reports zero.
    #[must_use]
    pub fn estimate_area(&self, request: &EstimationRequest) -> f64 {
        let _ = request;
        0.0
    }
}

fn matches_any(name: &str, candidates: &[&str]) -> bool {
    candidates
        .iter()
        .any(|candidate| name.eq_ignore_ascii_case(candidate))
}

/// Decodes and validates request attributes into model parameters.
fn decode_parameters(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<WireParameters, EstimateError> {
    let technology = match attributes.get("technology") {
        None => {
            return Err(EstimateError::MissingAttribute {
                attribute: "technology",
                hint: "please provide a technology node in nm",
            });
        }
        Some(AttributeValue::Text(label)) => TechnologyNode::parse(label)
            .map_err(|err| EstimateError::invalid("technology", err))?,
        Some(value) => {
            let raw = value.as_real().expect("non-text attributes are numeric");
            TechnologyNode::from_real(raw)
                .map_err(|err| EstimateError::invalid("technology", err))?
        }
    };

    let delay_penalty = match attributes.get("delay_penalty") {
        None => {
            return Err(EstimateError::MissingAttribute {
                attribute: "delay_penalty",
                hint: "please provide a maximum acceptable delay penalty \
                       as a fraction of the optimal delay",
            });
        }
        Some(value) => DelayPenalty::new(real_attribute("delay_penalty", value)?)
            .map_err(|err| EstimateError::invalid("delay_penalty", err))?,
    };

    let voltage = match attributes.get("voltage") {
        None => {
            warn!("swing voltage not specified for wire, assuming voltage={DEFAULT_SWING_VOLTAGE}V");
            SwingVoltage::default()
        }
        Some(value) => SwingVoltage::new(real_attribute("voltage", value)?)
            .map_err(|err| EstimateError::invalid("voltage", err))?,
    };

    let switching_activity = match attributes.get("switching_activity") {
        None => {
            warn!(
                "switching activity not specified for wire, assuming \
                 switching_activity={DEFAULT_SWITCHING_ACTIVITY}"
            );
            SwitchingActivity::default()
        }
        Some(value) => SwitchingActivity::new(real_attribute("switching_activity", value)?)
            .map_err(|err| EstimateError::invalid("switching_activity", err))?,
    };

    Ok(WireParameters {
        technology,
        delay_penalty,
        voltage,
        switching_activity,
    })
}

fn real_attribute(name: &'static str, value: &AttributeValue) -> Result<f64, EstimateError> {
    value
        .as_real()
        .ok_or_else(|| EstimateError::invalid(name, ConstraintError::NotANumber))
}

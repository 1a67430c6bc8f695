//! Closed-form switching-energy model for repeater-inserted wires.
//!
//! The model combines two pieces:
//!
//! - a per-length wire capacitance table over discrete technology nodes,
//!   linearly interpolated for nodes between table entries, and
//! - the energy-delay Pareto frontier for optimal repeater insertion, which
//!   maps an allowed delay overhead onto a dimensionless energy-scaling
//!   coefficient via a closed-form quadratic root.
//!
//! Energy per unit length is then
//! `activity · V² · cap · (1 + x · A)`, where `x` is the Pareto coefficient
//! and `A` the frontier shape constant.

mod capacitance;
mod params;
mod pareto;

pub(crate) use capacitance::{NodeRangeError, capacitance_at};
pub(crate) use params::{
    DEFAULT_SWING_VOLTAGE, DEFAULT_SWITCHING_ACTIVITY, DelayPenalty, SwingVoltage,
    SwitchingActivity, WireParameters,
};
pub(crate) use pareto::{A_CONSTANT, ParetoError, scaling_coefficient};

use thiserror::Error;

use crate::support::units::LinearEnergy;

/// Errors that may occur when evaluating the wire energy model.
#[derive(Debug, Clone, PartialEq, Error)]
pub(crate) enum WireEnergyError {
    /// The technology node falls outside the capacitance table's domain.
    #[error(transparent)]
    UnsupportedNode(#[from] NodeRangeError),

    /// The Pareto frontier has no solution for the requested delay.
    #[error(transparent)]
    Pareto(#[from] ParetoError),
}

/// Estimates the switching energy per unit length of a wire.
///
/// The estimate is deterministic and free of side effects; the result is
/// non-negative for any parameters that pass validation.
///
/// # Errors
///
/// Returns a [`WireEnergyError`] if the technology node is unsupported or
/// the Pareto frontier has no real solution for the requested delay.
pub(crate) fn energy_per_length(params: &WireParameters) -> Result<LinearEnergy, WireEnergyError> {
    let cap = capacitance_at(params.technology)?;
    let x = scaling_coefficient(params.delay_penalty.effective_delay())?;

    let voltage = *params.voltage;
    let activity = *params.switching_activity;

    Ok(activity * voltage * voltage * cap * (1.0 + x * A_CONSTANT))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::{process::TechnologyNode, units::picojoules_per_millimeter};

    fn params(node: u32, delay_penalty: f64, voltage: f64, activity: f64) -> WireParameters {
        WireParameters {
            technology: TechnologyNode::new(node),
            delay_penalty: DelayPenalty::new(delay_penalty).unwrap(),
            voltage: SwingVoltage::new(voltage).unwrap(),
            switching_activity: SwitchingActivity::new(activity).unwrap(),
        }
    }

    #[test]
    fn interpolated_node_at_minimum_delay() {
        // 45nm interpolates to 0.335 pF/mm; at zero delay penalty the Pareto
        // coefficient is 1, so energy is 0.15 * 0.5^2 * 0.335 * 2.07 pJ/mm.
        let energy = energy_per_length(&params(45, 0.0, 0.5, 0.15)).unwrap();
        assert_relative_eq!(
            picojoules_per_millimeter(energy),
            0.02600,
            epsilon = 1e-4
        );
    }

    #[test]
    fn table_node_at_minimum_delay() {
        let energy = energy_per_length(&params(180, 0.0, 0.5, 0.15)).unwrap();
        assert_relative_eq!(
            picojoules_per_millimeter(energy),
            0.03416,
            epsilon = 1e-4
        );
    }

    #[test]
    fn linear_in_switching_activity() {
        let base = energy_per_length(&params(70, 0.5, 0.5, 0.15)).unwrap();
        let doubled = energy_per_length(&params(70, 0.5, 0.5, 0.30)).unwrap();
        assert_relative_eq!(doubled.value, 2.0 * base.value);
    }

    #[test]
    fn quadratic_in_voltage() {
        let base = energy_per_length(&params(70, 0.5, 0.5, 0.15)).unwrap();
        let doubled = energy_per_length(&params(70, 0.5, 1.0, 0.15)).unwrap();
        assert_relative_eq!(doubled.value, 4.0 * base.value);
    }

    #[test]
    fn allowed_delay_buys_lower_energy() {
        let tight = energy_per_length(&params(70, 0.0, 0.5, 0.15)).unwrap();
        let relaxed = energy_per_length(&params(70, 1.0, 0.5, 0.15)).unwrap();
        assert!(relaxed.value < tight.value);
    }

    #[test]
    fn unsupported_node_propagates() {
        let result = energy_per_length(&params(200, 0.0, 0.5, 0.15));
        assert!(matches!(
            result,
            Err(WireEnergyError::UnsupportedNode(_))
        ));
    }
}

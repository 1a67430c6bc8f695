use std::ops::Deref;

use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Ratio},
    ratio::ratio,
};

use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive, UnitInterval},
    process::TechnologyNode,
};

/// Default wire swing voltage, in volts, when a request omits `voltage`.
pub(crate) const DEFAULT_SWING_VOLTAGE: f64 = 0.5;

/// Default switching activity factor when a request omits `switching_activity`.
pub(crate) const DEFAULT_SWITCHING_ACTIVITY: f64 = 0.15;

/// Fully-validated inputs to the wire energy model.
///
/// Constructed once at the estimator boundary; the model core never sees
/// unvalidated data.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WireParameters {
    /// Technology node of the design.
    pub technology: TechnologyNode,
    /// Maximum acceptable delay overhead.
    pub delay_penalty: DelayPenalty,
    /// Wire swing voltage.
    pub voltage: SwingVoltage,
    /// Switching activity factor.
    pub switching_activity: SwitchingActivity,
}

/// Allowed wire delay above the physically minimal delay, as a fraction of
/// that minimum: 0 means minimum delay, 1 means doubled delay, 2 tripled.
///
/// The penalty must be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub(crate) struct DelayPenalty(Constrained<Ratio, NonNegative>);

impl DelayPenalty {
    /// Creates a [`DelayPenalty`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(Ratio::new::<ratio>(value))?))
    }

    /// Returns the effective delay multiplier `penalty + 1`, where 1 is the
    /// minimum achievable delay.
    pub fn effective_delay(self) -> f64 {
        self.0.as_ref().get::<ratio>() + 1.0
    }
}

impl Deref for DelayPenalty {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Voltage difference between logic levels driven onto the wire.
///
/// The swing voltage must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub(crate) struct SwingVoltage(Constrained<ElectricPotential, StrictlyPositive>);

impl SwingVoltage {
    /// Creates a [`SwingVoltage`] from a value in volts.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new(volts: f64) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(ElectricPotential::new::<volt>(
            volts,
        ))?))
    }
}

impl Default for SwingVoltage {
    /// Returns the documented default swing voltage of 0.5 V.
    fn default() -> Self {
        Self::new(DEFAULT_SWING_VOLTAGE).expect("default swing voltage should always be positive")
    }
}

impl Deref for SwingVoltage {
    type Target = ElectricPotential;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Probability that a given transmission flips the wire's logic level.
///
/// The activity factor must lie in the interval [0, 1].
#[derive(Debug, Clone, Copy)]
pub(crate) struct SwitchingActivity(Constrained<Ratio, UnitInterval>);

impl SwitchingActivity {
    /// Creates a [`SwitchingActivity`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(Ratio::new::<ratio>(value))?))
    }
}

impl Default for SwitchingActivity {
    /// Returns the documented default switching activity factor of 0.15.
    fn default() -> Self {
        Self::new(DEFAULT_SWITCHING_ACTIVITY)
            .expect("default switching activity should always be in [0, 1]")
    }
}

impl Deref for SwitchingActivity {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn delay_penalty_offsets_effective_delay() {
        assert_relative_eq!(DelayPenalty::new(0.0).unwrap().effective_delay(), 1.0);
        assert_relative_eq!(DelayPenalty::new(1.0).unwrap().effective_delay(), 2.0);
    }

    #[test]
    fn delay_penalty_must_be_non_negative() {
        assert!(DelayPenalty::new(-1.0).is_err());
    }

    #[test]
    fn swing_voltage_must_be_positive() {
        assert!(SwingVoltage::new(0.5).is_ok());
        assert!(SwingVoltage::new(0.0).is_err());
        assert!(SwingVoltage::new(-0.5).is_err());
    }

    #[test]
    fn switching_activity_is_a_probability() {
        assert!(SwitchingActivity::new(0.0).is_ok());
        assert!(SwitchingActivity::new(1.0).is_ok());
        assert!(SwitchingActivity::new(-0.1).is_err());
        assert!(SwitchingActivity::new(1.1).is_err());
    }

    #[test]
    fn defaults_match_documented_constants() {
        assert_relative_eq!(
            SwingVoltage::default().get::<volt>(),
            DEFAULT_SWING_VOLTAGE
        );
        assert_relative_eq!(
            SwitchingActivity::default().get::<ratio>(),
            DEFAULT_SWITCHING_ACTIVITY
        );
    }
}

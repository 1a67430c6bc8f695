use thiserror::Error;

/// Shape constant of the energy-delay Pareto frontier for optimal repeater
/// insertion. Technology-independent and dimensionless.
pub(crate) const A_CONSTANT: f64 = 1.07;

/// Errors that may occur when solving for a point on the Pareto frontier.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub(crate) enum ParetoError {
    /// The effective delay multiplier is below the physical minimum of 1.
    #[error(
        "effective delay {effective_delay} is below the minimum of 1; \
         the acceptable delay penalty must be non-negative"
    )]
    DelayBelowMinimum { effective_delay: f64 },

    /// The quadratic under the frontier has no real root.
    ///
    /// This indicates an out-of-model input combination. It is reported
    /// rather than clamped so callers never receive a silently invalid
    /// energy estimate.
    #[error(
        "no real point on the energy-delay Pareto frontier at effective delay \
         {effective_delay} (discriminant {discriminant})"
    )]
    NegativeDiscriminant {
        effective_delay: f64,
        discriminant: f64,
    },
}

/// Solves for the dimensionless energy-scaling coefficient on the
/// minimum-energy/minimum-delay Pareto frontier.
///
/// `effective_delay` is the allowed wire delay as a multiple of the minimum
/// achievable delay, so 1 means no overhead. The coefficient is the positive
/// root of a quadratic derived from the frontier equation: it equals 1 at an
/// effective delay of 1 (the maximum-energy/minimum-delay endpoint) and
/// decreases as more delay is allowed.
///
/// # Errors
///
/// Returns a [`ParetoError`] if the effective delay is below 1 (or NaN), or
/// if the quadratic's discriminant is negative.
pub(crate) fn scaling_coefficient(effective_delay: f64) -> Result<f64, ParetoError> {
    if effective_delay < 1.0 || effective_delay.is_nan() {
        return Err(ParetoError::DelayBelowMinimum { effective_delay });
    }

    let a = A_CONSTANT;
    let asq = a * a;
    let dpsq = effective_delay * effective_delay;

    let k = asq - 2.0 * a * dpsq - dpsq + 1.0;
    let discriminant = (k - asq * dpsq).powi(2) - 4.0 * asq;
    if discriminant < 0.0 {
        return Err(ParetoError::NegativeDiscriminant {
            effective_delay,
            discriminant,
        });
    }

    Ok((asq * dpsq - discriminant.sqrt() - k) / (2.0 * a))
}

use thiserror::Error;

/// Errors returned when a wire energy estimate cannot be produced.
///
/// Every variant is fatal for its request: the computation is deterministic,
/// so retrying cannot change the outcome, and no partial result is returned.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// A required attribute was absent from the request.
    #[error("{attribute} not specified for wire; {hint}")]
    MissingAttribute {
        /// Name of the missing attribute.
        attribute: &'static str,
        /// What the caller should provide.
        hint: &'static str,
    },

    /// An attribute was present but failed validation.
    #[error("invalid {attribute} for wire: {source}")]
    InvalidAttribute {
        /// Name of the offending attribute.
        attribute: &'static str,

        /// Underlying validation failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The wire energy model rejected the validated parameters.
    #[error("wire energy model failed: {source}")]
    Model {
        /// Underlying model error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl EstimateError {
    /// Creates an invalid-attribute error with its underlying cause.
    pub(super) fn invalid(
        attribute: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::InvalidAttribute {
            attribute,
            source: Box::new(source),
        }
    }

    /// Wraps a model evaluation failure.
    pub(super) fn model(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Model {
            source: Box::new(source),
        }
    }
}

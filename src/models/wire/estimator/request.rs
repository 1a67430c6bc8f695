use std::collections::HashMap;

/// A loosely-typed attribute or argument value supplied by the host framework.
///
/// Host frameworks hand over component attributes from configuration files,
/// so a value may arrive as an integer, a real, or a text label (e.g. a
/// technology node written as `"45nm"`).
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl AttributeValue {
    /// Returns the value as a real number, if it is numeric.
    #[must_use]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Integer(value) => Some(*value as f64),
            Self::Real(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A single capability or estimation query from the host framework.
///
/// The field names follow the host framework's plugin protocol and must be
/// preserved exactly.
#[derive(Debug, Clone, Default)]
pub struct EstimationRequest {
    /// Name of the component class being estimated.
    pub class_name: String,
    /// Component attributes by name.
    pub attributes: HashMap<String, AttributeValue>,
    /// Name of the action being estimated.
    pub action_name: String,
    /// Per-action arguments by name.
    ///
    /// Accepted for protocol compatibility; the wire model takes everything
    /// it needs from `attributes`.
    pub arguments: HashMap<String, AttributeValue>,
}

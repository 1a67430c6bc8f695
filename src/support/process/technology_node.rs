use std::fmt;

use thiserror::Error;

/// Errors that may occur when parsing a [`TechnologyNode`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TechnologyNodeError {
    /// The label contains no digit characters to extract a node from.
    #[error("technology node label {label:?} contains no digits")]
    NoDigits { label: String },

    /// The extracted digits exceed the representable node range.
    #[error("technology node label {label:?} is too large for a node in nanometers")]
    Overflow { label: String },

    /// A numeric input is not a positive whole number of nanometers.
    #[error("technology node must be a positive whole number of nanometers, got {value}")]
    NotAWholeNumber { value: f64 },
}

/// A manufacturing process generation, in nanometers.
///
/// Technology nodes arrive from estimation frameworks either as plain
/// integers or as labels with unit suffixes (`"45nm"`, `"16 nm FinFET"`).
/// [`TechnologyNode::parse`] canonicalizes both forms once at the boundary so
/// downstream model components only ever see a numeric node.
///
/// A node carries no range guarantee; each capacitance table validates nodes
/// against its own supported domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TechnologyNode(u32);

impl TechnologyNode {
    /// Creates a node directly from a value in nanometers.
    #[must_use]
    pub const fn new(nanometers: u32) -> Self {
        Self(nanometers)
    }

    /// Parses a node from a label by extracting its digit characters.
    ///
    /// All non-digit characters are discarded and the remaining digits are
    /// read as one decimal integer, so `"45nm"` parses as 45.
    ///
    /// # Errors
    ///
    /// Returns [`TechnologyNodeError::NoDigits`] if the label contains no
    /// digits, or [`TechnologyNodeError::Overflow`] if the digits do not fit
    /// a `u32`.
    pub fn parse(label: &str) -> Result<Self, TechnologyNodeError> {
        let digits: String = label.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(TechnologyNodeError::NoDigits {
                label: label.to_owned(),
            });
        }
        let nanometers = digits
            .parse()
            .map_err(|_| TechnologyNodeError::Overflow {
                label: label.to_owned(),
            })?;
        Ok(Self(nanometers))
    }

    /// Converts a real-valued input to a node.
    ///
    /// Estimation frameworks sometimes hand over numeric attributes as
    /// floats; only positive whole values are meaningful node sizes.
    ///
    /// # Errors
    ///
    /// Returns [`TechnologyNodeError::NotAWholeNumber`] if the value is not a
    /// positive integer representable in nanometers.
    pub fn from_real(value: f64) -> Result<Self, TechnologyNodeError> {
        if value > 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
            Ok(Self(value as u32))
        } else {
            Err(TechnologyNodeError::NotAWholeNumber { value })
        }
    }

    /// Returns the node size in nanometers.
    #[must_use]
    pub const fn nanometers(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TechnologyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}nm", self.0)
    }
}

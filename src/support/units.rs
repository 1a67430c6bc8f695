//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., voltage, capacitance,
//! energy). This module provides extensions that are useful for interconnect
//! modeling but aren't included in [`uom`].
//!
//! ## Per-length quantities
//!
//! Wire parasitics and wire energy are expressed per unit of wire length.
//! [`uom`] has no named quantities for these, so [`LinearCapacitance`] and
//! [`LinearEnergy`] are defined here as dimensioned type aliases, together
//! with conversions in the wire-table convention (pF/mm and pJ/mm):
//!
//! ```
//! use interconnect_models::support::units::picofarads_per_millimeter;
//!
//! // A LinearCapacitance holding 0.440e-9 F/m in SI.
//! let cap = picofarads_per_millimeter(0.440);
//! assert!(cap.value > 0.0);
//! ```

mod quantities;

pub use quantities::{
    LinearCapacitance, LinearEnergy, picofarads_per_millimeter, picojoules_per_millimeter,
};

use thiserror::Error;

use crate::support::{
    process::TechnologyNode,
    units::{LinearCapacitance, picofarads_per_millimeter},
};

/// Wire capacitance per unit length by technology node, in pF/mm to match
/// the unit system of consuming estimation frameworks.
///
/// Entries are sorted ascending by node so bracketing lookups can use
/// `partition_point`.
const WIRE_CAP_PER_UNIT_LENGTH: [(u32, f64); 9] = [
    (13, 0.247),
    (18, 0.266),
    (25, 0.288),
    (35, 0.315),
    (50, 0.345),
    (70, 0.367),
    (100, 0.403),
    (130, 0.430),
    (180, 0.440),
];

/// Smallest technology node with capacitance data, in nm.
const MIN_TECHNODE: u32 = WIRE_CAP_PER_UNIT_LENGTH[0].0;

/// Largest technology node with capacitance data, in nm.
const MAX_TECHNODE: u32 = WIRE_CAP_PER_UNIT_LENGTH[WIRE_CAP_PER_UNIT_LENGTH.len() - 1].0;

/// Error returned for technology nodes outside the capacitance table's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("wire energy can not be calculated for {node}; supported nodes are {min}nm to {max}nm")]
pub(crate) struct NodeRangeError {
    /// The unsupported node.
    pub node: TechnologyNode,
    /// Smallest supported node, in nm.
    pub min: u32,
    /// Largest supported node, in nm.
    pub max: u32,
}

/// Returns the wire capacitance per unit length at a technology node.
///
/// Nodes matching a table entry return that entry's value exactly; nodes
/// between entries are linearly interpolated between the bracketing entries.
///
/// # Errors
///
/// Returns a [`NodeRangeError`] if the node lies outside the table's domain.
pub(crate) fn capacitance_at(node: TechnologyNode) -> Result<LinearCapacitance, NodeRangeError> {
    let nm = node.nanometers();
    if !(MIN_TECHNODE..=MAX_TECHNODE).contains(&nm) {
        return Err(NodeRangeError {
            node,
            min: MIN_TECHNODE,
            max: MAX_TECHNODE,
        });
    }

    // First entry with a node >= nm; in-range nodes always have one.
    let hi = WIRE_CAP_PER_UNIT_LENGTH.partition_point(|&(entry, _)| entry < nm);
    let (hi_nm, hi_cap) = WIRE_CAP_PER_UNIT_LENGTH[hi];

    let cap = if hi_nm == nm {
        hi_cap
    } else {
        let (lo_nm, lo_cap) = WIRE_CAP_PER_UNIT_LENGTH[hi - 1];
        lo_cap + (hi_cap - lo_cap) * f64::from(nm - lo_nm) / f64::from(hi_nm - lo_nm)
    };

    Ok(picofarads_per_millimeter(cap))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn cap_in_pf_per_mm(nm: u32) -> f64 {
        // LinearCapacitance is F/m in SI; 1 pF/mm is 1e-9 F/m.
        capacitance_at(TechnologyNode::new(nm)).unwrap().value * 1e9
    }

    #[test]
    fn table_nodes_are_exact() {
        for (nm, expected) in WIRE_CAP_PER_UNIT_LENGTH {
            assert_relative_eq!(cap_in_pf_per_mm(nm), expected);
        }
    }

    #[test]
    fn interpolates_between_brackets() {
        // 45nm sits between 35nm (0.315) and 50nm (0.345).
        assert_relative_eq!(cap_in_pf_per_mm(45), 0.335);
    }

    #[test]
    fn interpolation_is_monotonic_within_brackets() {
        // Slack of a few ulps for the pF/mm unit conversions.
        let tol = 1e-12;
        for window in WIRE_CAP_PER_UNIT_LENGTH.windows(2) {
            let [(lo_nm, lo_cap), (hi_nm, hi_cap)] = [window[0], window[1]];
            let mut previous = lo_cap;
            for nm in (lo_nm + 1)..=hi_nm {
                let cap = cap_in_pf_per_mm(nm);
                assert!(cap >= previous - tol && cap <= hi_cap + tol);
                previous = cap;
            }
        }
    }

    #[test]
    fn rejects_nodes_below_the_table() {
        let error = capacitance_at(TechnologyNode::new(10)).unwrap_err();
        assert_eq!(
            error,
            NodeRangeError {
                node: TechnologyNode::new(10),
                min: 13,
                max: 180,
            }
        );
    }

    #[test]
    fn rejects_nodes_above_the_table() {
        assert!(capacitance_at(TechnologyNode::new(200)).is_err());
    }

    #[test]
    fn range_error_names_the_node_and_domain() {
        let message = capacitance_at(TechnologyNode::new(200))
            .unwrap_err()
            .to_string();
        assert!(message.contains("200nm"));
        assert!(message.contains("13nm"));
        assert!(message.contains("180nm"));
    }
}

//! Process-technology types shared across interconnect models.

mod technology_node;

pub use technology_node::{TechnologyNode, TechnologyNodeError};

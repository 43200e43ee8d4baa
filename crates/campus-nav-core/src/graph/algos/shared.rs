use std::collections::HashMap;

use crate::bail_unknown_node;
use crate::error::Result;
use crate::graph::NeighborSource;

/// Raw output of a single search run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTrace {
    /// Start to goal inclusive; empty when the goal is unreachable
    pub path: Vec<String>,
    /// Nodes in the order they were finalized
    pub visitation_order: Vec<String>,
    /// Nodes in the order they were first reached
    pub discovery_order: Vec<String>,
}

/// Both endpoints of a search must be current nodes
pub fn ensure_endpoints(source: &dyn NeighborSource, start: &str, goal: &str) -> Result<()> {
    for endpoint in [start, goal] {
        if !source.contains_node(endpoint) {
            bail_unknown_node!(endpoint);
        }
    }
    Ok(())
}

/// Follow parent links back from `goal` and return the path start-first.
///
/// `parents` maps each reached node to its predecessor, with the start node
/// mapped to `None`. Returns an empty path when `goal` was never reached.
pub fn reconstruct_path(
    parents: &HashMap<String, Option<String>>,
    start: &str,
    goal: &str,
) -> Vec<String> {
    if !parents.contains_key(goal) {
        return Vec::new();
    }

    let mut path = vec![goal.to_string()];
    let mut current = goal;
    while current != start {
        match parents.get(current) {
            Some(Some(parent)) => {
                path.push(parent.clone());
                current = parent;
            }
            // Broken chain: only the start may lack a parent
            _ => return Vec::new(),
        }
    }
    path.reverse();
    path
}

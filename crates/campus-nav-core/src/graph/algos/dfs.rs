use std::collections::{HashMap, HashSet};
use std::time::Instant;

use crate::error::Result;
use crate::graph::algos::shared::{ensure_endpoints, reconstruct_path, SearchTrace};
use crate::graph::NeighborSource;
use crate::trace_time;

/// One node whose neighbor list is being walked
struct Frame {
    node: String,
    neighbors: Vec<String>,
    next: usize,
}

/// Depth-first search from `start` to `goal`
///
/// Pre-order, neighbors in source order, driven by an explicit stack so deep
/// graphs cannot exhaust the call stack. A neighbor joins the discovery order
/// at the moment its edge is relaxed, right before it is visited. Once
/// `goal` is visited nothing else is visited or discovered.
pub fn dfs_search(
    source: &dyn NeighborSource,
    start: &str,
    goal: &str,
    accessible_only: bool,
) -> Result<SearchTrace> {
    ensure_endpoints(source, start, goal)?;
    let started = Instant::now();

    let mut visited: HashSet<String> = HashSet::new();
    let mut parents: HashMap<String, Option<String>> = HashMap::new();
    let mut trace = SearchTrace::default();
    let mut stack: Vec<Frame> = Vec::new();

    parents.insert(start.to_string(), None);
    let mut found = visit(
        source,
        start,
        goal,
        accessible_only,
        &mut visited,
        &mut trace,
        &mut stack,
    );

    while !found {
        let Some(frame) = stack.last_mut() else {
            break;
        };
        let Some(neighbor) = frame.neighbors.get(frame.next).cloned() else {
            stack.pop();
            continue;
        };
        frame.next += 1;

        if visited.contains(&neighbor) {
            continue;
        }
        parents.insert(neighbor.clone(), Some(frame.node.clone()));
        trace.discovery_order.push(neighbor.clone());
        found = visit(
            source,
            &neighbor,
            goal,
            accessible_only,
            &mut visited,
            &mut trace,
            &mut stack,
        );
    }

    trace.path = reconstruct_path(&parents, start, goal);
    trace_time!(
        started,
        "dfs_search",
        visited = trace.visitation_order.len(),
        found = found
    );
    Ok(trace)
}

/// Mark `node` visited and, unless it is the goal, push it for expansion.
/// Returns whether the goal was reached.
fn visit(
    source: &dyn NeighborSource,
    node: &str,
    goal: &str,
    accessible_only: bool,
    visited: &mut HashSet<String>,
    trace: &mut SearchTrace,
    stack: &mut Vec<Frame>,
) -> bool {
    visited.insert(node.to_string());
    trace.visitation_order.push(node.to_string());
    if node == goal {
        return true;
    }
    stack.push(Frame {
        node: node.to_string(),
        neighbors: source.ordered_neighbors(node, accessible_only),
        next: 0,
    });
    false
}

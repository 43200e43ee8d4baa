use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Instant;

use crate::error::Result;
use crate::graph::algos::shared::{ensure_endpoints, reconstruct_path, SearchTrace};
use crate::graph::NeighborSource;
use crate::trace_time;

/// Breadth-first search from `start` to `goal`
///
/// Stops as soon as `goal` is dequeued; its neighbors are never expanded.
/// An unreachable goal is not an error: the trace comes back with an empty
/// path and whatever was visited along the way.
pub fn bfs_search(
    source: &dyn NeighborSource,
    start: &str,
    goal: &str,
    accessible_only: bool,
) -> Result<SearchTrace> {
    ensure_endpoints(source, start, goal)?;
    let started = Instant::now();

    let mut visited: HashSet<String> = HashSet::new();
    let mut parents: HashMap<String, Option<String>> = HashMap::new();
    let mut queue: VecDeque<String> = VecDeque::new();
    let mut trace = SearchTrace::default();

    visited.insert(start.to_string());
    parents.insert(start.to_string(), None);
    queue.push_back(start.to_string());

    while let Some(current) = queue.pop_front() {
        trace.visitation_order.push(current.clone());
        if current == goal {
            break;
        }

        for neighbor in source.ordered_neighbors(&current, accessible_only) {
            if visited.contains(&neighbor) {
                continue;
            }
            visited.insert(neighbor.clone());
            parents.insert(neighbor.clone(), Some(current.clone()));
            trace.discovery_order.push(neighbor.clone());
            queue.push_back(neighbor);
        }
    }

    trace.path = reconstruct_path(&parents, start, goal);
    trace_time!(
        started,
        "bfs_search",
        visited = trace.visitation_order.len(),
        found = !trace.path.is_empty()
    );
    Ok(trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn line() -> Graph {
        let mut graph = Graph::new();
        for name in ["A", "B", "C", "D"] {
            graph.add_node(name, 0.0, 0.0).unwrap();
        }
        graph.add_edge("A", "B", 1, 1, true).unwrap();
        graph.add_edge("B", "C", 1, 1, true).unwrap();
        graph.add_edge("C", "D", 1, 1, true).unwrap();
        graph
    }

    #[test]
    fn test_bfs_stops_when_goal_dequeued() {
        let graph = line();
        let trace = bfs_search(&graph, "A", "C", false).unwrap();
        assert_eq!(trace.path, vec!["A", "B", "C"]);
        assert_eq!(trace.visitation_order, vec!["A", "B", "C"]);
        // C was discovered while expanding B; D is never reached
        assert_eq!(trace.discovery_order, vec!["B", "C"]);
    }

    #[test]
    fn test_bfs_start_equals_goal() {
        let graph = line();
        let trace = bfs_search(&graph, "B", "B", false).unwrap();
        assert_eq!(trace.path, vec!["B"]);
        assert_eq!(trace.visitation_order, vec!["B"]);
        assert!(trace.discovery_order.is_empty());
    }

    #[test]
    fn test_bfs_unknown_endpoint() {
        let graph = line();
        assert!(bfs_search(&graph, "A", "Z", false).is_err());
        assert!(bfs_search(&graph, "Z", "A", false).is_err());
    }
}

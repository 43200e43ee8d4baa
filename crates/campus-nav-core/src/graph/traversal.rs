use crate::graph::store::Graph;

/// Trait for providing filtered adjacency to the search algorithms
///
/// Implementations must return neighbors in a stable order; traversal
/// output is only reproducible if this order is.
pub trait NeighborSource {
    fn contains_node(&self, name: &str) -> bool;
    fn ordered_neighbors(&self, name: &str, accessible_only: bool) -> Vec<String>;
}

impl NeighborSource for Graph {
    fn contains_node(&self, name: &str) -> bool {
        Graph::contains_node(self, name)
    }

    fn ordered_neighbors(&self, name: &str, accessible_only: bool) -> Vec<String> {
        self.neighbors(name, accessible_only)
            .map(|neighbors| {
                neighbors
                    .into_iter()
                    .map(|(neighbor, _)| neighbor.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}

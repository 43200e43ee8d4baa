//! In-memory undirected graph of campus locations
//!
//! Edges live in a single map keyed by [`EdgeKey`]; the adjacency projection
//! only stores keys, so both directions of a neighbor lookup always resolve
//! to the same [`Edge`]. Every mutating call validates before it touches any
//! map, which keeps failures free of partial writes.

use std::collections::{BTreeMap, HashMap};

use rand::Rng;
use tracing::debug;

use crate::config::WeightRange;
use crate::error::{NavError, Result};
use crate::graph::types::{Edge, EdgeKey, Node};
use crate::{bail_invalid, bail_unknown_edge, bail_unknown_node};

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: BTreeMap<String, Node>,
    edges: BTreeMap<EdgeKey, Edge>,
    /// node -> neighbor -> key of the connecting edge
    adjacency: HashMap<String, BTreeMap<String, EdgeKey>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Nodes in name order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Edges in key order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Look up the edge joining `u` and `v`, in either orientation
    pub fn get_edge(&self, u: &str, v: &str) -> Option<&Edge> {
        self.adjacency
            .get(u)
            .and_then(|neighbors| neighbors.get(v))
            .and_then(|key| self.edges.get(key))
    }

    /// Number of incident edges, ignoring closure and accessibility
    pub fn degree(&self, name: &str) -> Option<usize> {
        self.adjacency.get(name).map(BTreeMap::len)
    }

    pub fn add_node(&mut self, name: impl Into<String>, x: f64, y: f64) -> Result<&Node> {
        let name = name.into();
        if self.nodes.contains_key(&name) {
            return Err(NavError::DuplicateNode { name });
        }

        debug!(node = %name, x, y, "add_node");
        self.adjacency.insert(name.clone(), BTreeMap::new());
        let node = self
            .nodes
            .entry(name.clone())
            .or_insert(Node { name, x, y });
        Ok(node)
    }

    /// Connect two existing nodes with an open edge
    pub fn add_edge(
        &mut self,
        u: &str,
        v: &str,
        distance: u32,
        time: u32,
        accessible: bool,
    ) -> Result<&Edge> {
        if u == v {
            return Err(NavError::SelfLoopEdge {
                name: u.to_string(),
            });
        }
        for endpoint in [u, v] {
            if !self.nodes.contains_key(endpoint) {
                bail_unknown_node!(endpoint);
            }
        }
        let key = EdgeKey::new(u, v);
        if self.edges.contains_key(&key) {
            return Err(NavError::DuplicateEdge {
                from: u.to_string(),
                to: v.to_string(),
            });
        }
        if distance == 0 {
            bail_invalid!("distance", "0 (must be positive)");
        }
        if time == 0 {
            bail_invalid!("time", "0 (must be positive)");
        }

        debug!(edge = %key, distance, time, accessible, "add_edge");
        self.adjacency
            .entry(u.to_string())
            .or_default()
            .insert(v.to_string(), key.clone());
        self.adjacency
            .entry(v.to_string())
            .or_default()
            .insert(u.to_string(), key.clone());
        let edge = self.edges.entry(key.clone()).or_insert(Edge {
            key,
            distance,
            time,
            accessible,
            closed: false,
        });
        Ok(edge)
    }

    /// Remove the edge joining `u` and `v`, handing it back to the caller
    pub fn remove_edge(&mut self, u: &str, v: &str) -> Result<Edge> {
        let key = EdgeKey::new(u, v);
        match self.detach_edge(&key) {
            Some(edge) => {
                debug!(edge = %key, "remove_edge");
                Ok(edge)
            }
            None => bail_unknown_edge!(u, v),
        }
    }

    /// Remove a node and every edge incident to it
    ///
    /// Removed edges are returned in neighbor-name order.
    pub fn remove_node(&mut self, name: &str) -> Result<Vec<Edge>> {
        let Some(neighbors) = self.adjacency.get(name) else {
            bail_unknown_node!(name);
        };
        let incident: Vec<EdgeKey> = neighbors.values().cloned().collect();

        let removed: Vec<Edge> = incident
            .iter()
            .filter_map(|key| self.detach_edge(key))
            .collect();
        self.adjacency.remove(name);
        self.nodes.remove(name);

        debug!(node = %name, removed_edges = removed.len(), "remove_node");
        Ok(removed)
    }

    pub fn toggle_closed(&mut self, u: &str, v: &str) -> Result<&Edge> {
        let edge = self.edge_mut(u, v)?;
        edge.closed = !edge.closed;
        debug!(edge = %edge.key, closed = edge.closed, "toggle_closed");
        Ok(edge)
    }

    pub fn toggle_accessibility(&mut self, u: &str, v: &str) -> Result<&Edge> {
        let edge = self.edge_mut(u, v)?;
        edge.accessible = !edge.accessible;
        debug!(edge = %edge.key, accessible = edge.accessible, "toggle_accessibility");
        Ok(edge)
    }

    /// Replace every edge's distance and time with fresh values in [1, 20]
    pub fn randomize_weights(&mut self) {
        let range = WeightRange::default();
        self.fill_weights(&mut rand::thread_rng(), range.min, range.max);
    }

    /// Replace every edge's distance and time, drawing independently from
    /// `range` (inclusive). Edges are visited in key order so a seeded RNG
    /// gives reproducible weights.
    ///
    /// Fails with `InvalidValue`, leaving every weight untouched, when `range`
    /// starts at zero or is empty.
    pub fn randomize_weights_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        range: WeightRange,
    ) -> Result<()> {
        range.validate()?;
        self.fill_weights(rng, range.min, range.max);
        Ok(())
    }

    fn fill_weights<R: Rng + ?Sized>(&mut self, rng: &mut R, min: u32, max: u32) {
        for edge in self.edges.values_mut() {
            edge.distance = rng.gen_range(min..=max);
            edge.time = rng.gen_range(min..=max);
        }
        debug!(edges = self.edges.len(), min, max, "randomize_weights");
    }

    /// Directly reachable neighbors of `name` in code-point order of their
    /// names. Closed edges are always skipped; with `accessible_only`,
    /// inaccessible edges are skipped too.
    pub fn neighbors(&self, name: &str, accessible_only: bool) -> Result<Vec<(&str, &Edge)>> {
        let Some(adjacent) = self.adjacency.get(name) else {
            bail_unknown_node!(name);
        };

        // BTreeMap iteration already yields neighbors sorted by name
        Ok(adjacent
            .iter()
            .filter_map(|(neighbor, key)| {
                self.edges
                    .get(key)
                    .map(|edge| (neighbor.as_str(), edge))
            })
            .filter(|(_, edge)| edge.is_traversable(accessible_only))
            .collect())
    }

    /// Midpoint between the endpoints of an edge, where its label is drawn
    pub fn label_anchor(&self, u: &str, v: &str) -> Result<(f64, f64)> {
        let Some(edge) = self.get_edge(u, v) else {
            bail_unknown_edge!(u, v);
        };
        match (self.nodes.get(edge.key.first()), self.nodes.get(edge.key.second())) {
            (Some(a), Some(b)) => Ok(((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)),
            _ => bail_unknown_edge!(u, v),
        }
    }

    fn edge_mut(&mut self, u: &str, v: &str) -> Result<&mut Edge> {
        let key = EdgeKey::new(u, v);
        self.edges
            .get_mut(&key)
            .ok_or_else(|| NavError::unknown_edge(u, v))
    }

    /// Drop an edge from the edge map and both adjacency directions
    fn detach_edge(&mut self, key: &EdgeKey) -> Option<Edge> {
        let edge = self.edges.remove(key)?;
        for (from, to) in [
            (key.first(), key.second()),
            (key.second(), key.first()),
        ] {
            if let Some(neighbors) = self.adjacency.get_mut(from) {
                neighbors.remove(to);
            }
        }
        Some(edge)
    }
}

//! Campus map input
//!
//! A TOML description of nodes and edges used to seed a [`Graph`]. Maps are
//! read-only input; the graph is never written back.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::Graph;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CampusMap {
    #[serde(default)]
    pub nodes: Vec<MapNode>,
    #[serde(default)]
    pub edges: Vec<MapEdge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapNode {
    pub name: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapEdge {
    pub from: String,
    pub to: String,
    #[serde(default = "default_weight")]
    pub distance: u32,
    #[serde(default = "default_weight")]
    pub time: u32,
    #[serde(default = "default_accessible")]
    pub accessible: bool,
    #[serde(default)]
    pub closed: bool,
}

fn default_weight() -> u32 {
    1
}

fn default_accessible() -> bool {
    true
}

impl CampusMap {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Build a graph through the regular mutation calls, so map input is
    /// held to the same structural rules as interactive edits.
    pub fn into_graph(self) -> Result<Graph> {
        let mut graph = Graph::new();
        for node in self.nodes {
            graph.add_node(node.name, node.x, node.y)?;
        }
        for edge in &self.edges {
            graph.add_edge(
                &edge.from,
                &edge.to,
                edge.distance,
                edge.time,
                edge.accessible,
            )?;
            if edge.closed {
                graph.toggle_closed(&edge.from, &edge.to)?;
            }
        }
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "load_map"
        );
        Ok(graph)
    }
}

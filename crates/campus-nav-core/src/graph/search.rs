//! Search entry point shared by every caller of the traversal engine

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{NavError, Result};
use crate::graph::algos::{bfs_search, dfs_search, SearchTrace};
use crate::graph::NeighborSource;

/// Search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Breadth-first: fewest hops
    #[default]
    Bfs,
    /// Depth-first: first path found in neighbor order
    Dfs,
}

impl FromStr for Algorithm {
    type Err = NavError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            other => Err(NavError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dfs => write!(f, "dfs"),
        }
    }
}

/// Snapshot of one search run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalResult {
    pub algorithm: Algorithm,
    pub start: String,
    pub goal: String,
    pub accessible_only: bool,
    /// Start to goal inclusive; empty when the goal is unreachable
    pub path: Vec<String>,
    pub visitation_order: Vec<String>,
    pub discovery_order: Vec<String>,
}

impl TraversalResult {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path, `None` when unreachable
    pub fn hop_count(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    /// Consecutive node pairs along the path
    pub fn path_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.path
            .windows(2)
            .filter_map(|pair| match pair {
                [from, to] => Some((from.as_str(), to.as_str())),
                _ => None,
            })
    }
}

/// Run `algorithm` from `start` to `goal` over the filtered adjacency
#[tracing::instrument(skip(source), fields(algorithm = %algorithm))]
pub fn run_search(
    source: &dyn NeighborSource,
    algorithm: Algorithm,
    start: &str,
    goal: &str,
    accessible_only: bool,
) -> Result<TraversalResult> {
    let SearchTrace {
        path,
        visitation_order,
        discovery_order,
    } = match algorithm {
        Algorithm::Bfs => bfs_search(source, start, goal, accessible_only)?,
        Algorithm::Dfs => dfs_search(source, start, goal, accessible_only)?,
    };

    tracing::debug!(
        found = !path.is_empty(),
        visited = visitation_order.len(),
        discovered = discovery_order.len(),
        "search_complete"
    );

    Ok(TraversalResult {
        algorithm,
        start: start.to_string(),
        goal: goal.to_string(),
        accessible_only,
        path,
        visitation_order,
        discovery_order,
    })
}

//! CLI commands for campus-nav

pub mod animate;
pub mod dispatch;
pub mod neighbors;
pub mod randomize;
pub mod search;

use campus_nav_core::error::Result;
use campus_nav_core::graph::Graph;
use campus_nav_core::map::CampusMap;
use tracing::debug;

use crate::cli::MapArgs;

/// Load the map and apply the command-line edge toggles, in the order given
pub fn load_graph(args: &MapArgs) -> Result<Graph> {
    let mut graph = CampusMap::load(&args.map)?.into_graph()?;

    for edge in &args.toggle_closed {
        graph.toggle_closed(&edge.from, &edge.to)?;
    }
    for edge in &args.toggle_accessible {
        graph.toggle_accessibility(&edge.from, &edge.to)?;
    }

    debug!(
        map = %args.map.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "load_graph"
    );
    Ok(graph)
}

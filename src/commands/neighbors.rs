//! `campus-nav neighbors`

use campus_nav_core::error::Result;
use serde::Serialize;

use super::dispatch::CommandContext;
use super::load_graph;
use crate::cli::{MapArgs, OutputFormat};

#[derive(Serialize)]
struct NeighborEntry<'a> {
    name: &'a str,
    distance: u32,
    time: u32,
    accessible: bool,
}

pub fn execute(
    ctx: &CommandContext,
    args: &MapArgs,
    node: &str,
    accessible_only: bool,
) -> Result<()> {
    let graph = load_graph(args)?;
    let entries: Vec<NeighborEntry> = graph
        .neighbors(node, accessible_only)?
        .into_iter()
        .map(|(name, edge)| NeighborEntry {
            name,
            distance: edge.distance,
            time: edge.time,
            accessible: edge.accessible,
        })
        .collect();

    match ctx.cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Human => {
            if entries.is_empty() && !ctx.cli.quiet {
                println!("No open paths from {}", node);
            }
            for entry in &entries {
                let marker = if entry.accessible { "" } else { "  (not accessible)" };
                println!(
                    "{}  distance {}  time {}{}",
                    entry.name, entry.distance, entry.time, marker
                );
            }
        }
    }
    Ok(())
}

//! `campus-nav randomize`

use campus_nav_core::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::dispatch::CommandContext;
use super::load_graph;
use crate::cli::{MapArgs, OutputFormat};

pub fn execute(ctx: &CommandContext, args: &MapArgs, seed: Option<u64>) -> Result<()> {
    let mut graph = load_graph(args)?;
    let range = ctx.config.weights;

    match seed {
        Some(seed) => graph.randomize_weights_with(&mut StdRng::seed_from_u64(seed), range)?,
        None => graph.randomize_weights_with(&mut rand::thread_rng(), range)?,
    }

    match ctx.cli.format {
        OutputFormat::Json => {
            let edges: Vec<_> = graph.edges().collect();
            println!("{}", serde_json::to_string_pretty(&edges)?);
        }
        OutputFormat::Human => {
            for edge in graph.edges() {
                println!(
                    "{}  distance {}  time {}",
                    edge.key, edge.distance, edge.time
                );
            }
        }
    }
    Ok(())
}

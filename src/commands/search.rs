//! `campus-nav search`

use campus_nav_core::error::Result;
use campus_nav_core::graph::{run_search, Graph, TraversalResult};
use serde::Serialize;

use super::dispatch::CommandContext;
use super::load_graph;
use crate::cli::{OutputFormat, SearchArgs};

/// Display weights summed along a route
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RouteTotals {
    pub distance: u32,
    pub time: u32,
}

impl RouteTotals {
    pub fn for_result(graph: &Graph, result: &TraversalResult) -> Self {
        result
            .path_pairs()
            .filter_map(|(from, to)| graph.get_edge(from, to))
            .fold(RouteTotals::default(), |acc, edge| RouteTotals {
                distance: acc.distance.saturating_add(edge.distance),
                time: acc.time.saturating_add(edge.time),
            })
    }
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    #[serde(flatten)]
    result: &'a TraversalResult,
    found: bool,
    hops: Option<usize>,
    totals: RouteTotals,
}

/// Run the search described by `args` against a freshly loaded graph
pub fn run(args: &SearchArgs) -> Result<(Graph, TraversalResult)> {
    let graph = load_graph(&args.graph)?;
    let result = run_search(
        &graph,
        args.algorithm,
        &args.from,
        &args.to,
        args.accessible_only,
    )?;
    Ok((graph, result))
}

pub fn execute(ctx: &CommandContext, args: &SearchArgs) -> Result<()> {
    let (graph, result) = run(args)?;
    tracing::debug!(elapsed = ?ctx.start.elapsed(), "search");

    let totals = RouteTotals::for_result(&graph, &result);
    match ctx.cli.format {
        OutputFormat::Json => {
            let output = SearchOutput {
                result: &result,
                found: result.found(),
                hops: result.hop_count(),
                totals,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => print_human(&result, totals, ctx.cli.quiet),
    }
    Ok(())
}

fn print_human(result: &TraversalResult, totals: RouteTotals, quiet: bool) {
    let filter = if result.accessible_only {
        " (accessible only)"
    } else {
        ""
    };
    match result.hop_count() {
        Some(hops) => println!(
            "Route ({}){}: {}  [{} hops, distance {}, time {}]",
            result.algorithm,
            filter,
            result.path.join(" -> "),
            hops,
            totals.distance,
            totals.time
        ),
        None => println!(
            "No route ({}){} from {} to {}",
            result.algorithm, filter, result.start, result.goal
        ),
    }
    if !quiet {
        println!("Visited: {}", result.visitation_order.join(", "));
        println!("Discovered: {}", result.discovery_order.join(", "));
    }
}

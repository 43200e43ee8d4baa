//! Command dispatch logic for campus-nav

use std::time::Instant;

use campus_nav_core::config::NavConfig;
use campus_nav_core::error::Result;
use tracing::debug;

use crate::cli::{Cli, Commands};

use super::{animate, neighbors, randomize, search};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: NavConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => NavConfig::load(path)?,
            None => NavConfig::default(),
        };
        debug!(elapsed = ?start.elapsed(), custom = cli.config.is_some(), "load_config");
        Ok(Self { cli, config, start })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("campus-nav {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Route search and animated replays over a campus map.");
        println!();
        println!("Run `campus-nav --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Search(args) => search::execute(ctx, args),
            Commands::Neighbors {
                graph,
                node,
                accessible_only,
            } => neighbors::execute(ctx, graph, node, *accessible_only),
            Commands::Animate { search, realtime } => animate::execute(ctx, search, *realtime),
            Commands::Randomize { graph, seed } => randomize::execute(ctx, graph, *seed),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start)?;

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

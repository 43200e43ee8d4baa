//! `campus-nav animate`
//!
//! Plans the animation for a search and plays it through a [`Timeline`]
//! into an in-memory scene, printing each change as it fires.

use std::thread;
use std::time::{Duration, Instant};

use campus_nav_core::animation::{
    plan_animation, AnimationEvent, SceneState, Target, Timeline, VisualState,
};
use campus_nav_core::error::Result;
use serde::Serialize;

use super::dispatch::CommandContext;
use super::search;
use crate::cli::{OutputFormat, SearchArgs};

#[derive(Serialize)]
struct FinalState<'a> {
    target: &'a Target,
    state: VisualState,
}

#[derive(Serialize)]
struct AnimateOutput<'a> {
    search: &'a campus_nav_core::graph::TraversalResult,
    events: &'a [AnimationEvent],
    scene: Vec<FinalState<'a>>,
}

pub fn execute(ctx: &CommandContext, args: &SearchArgs, realtime: bool) -> Result<()> {
    let (graph, result) = search::run(args)?;
    let events = plan_animation(&result, &ctx.config.animation);

    let mut scene = SceneState::from_graph(&graph);
    let mut timeline = Timeline::new();
    let handle = timeline.schedule(events.clone(), &graph, &mut scene);
    scene.clear_log();

    let human = ctx.cli.format == OutputFormat::Human;
    let started = Instant::now();
    while let Some(offset) = timeline.next_offset() {
        if realtime {
            if let Some(wait) = offset.checked_sub(started.elapsed()) {
                thread::sleep(wait);
            }
        }
        let already = scene.log().len();
        timeline.advance(offset, &mut scene);
        if human && !ctx.cli.quiet {
            for (target, state) in scene.log().iter().skip(already) {
                println!("{:>7}  {:<17}  {}", format_offset(offset), state, target);
            }
        }
    }
    tracing::debug!(
        fired = scene.log().len(),
        running = timeline.is_running(handle),
        "animation_complete"
    );

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = AnimateOutput {
                search: &result,
                events: &events,
                scene: scene
                    .iter()
                    .map(|(target, state)| FinalState { target, state })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if result.found() {
                println!("Route: {}", result.path.join(" -> "));
            } else {
                println!("No route from {} to {}", result.start, result.goal);
            }
        }
    }
    Ok(())
}

fn format_offset(offset: Duration) -> String {
    format!("{}ms", offset.as_millis())
}

//! Single-threaded animation timeline
//!
//! The timeline owns one ordered list of pending events. Time is supplied by
//! the caller (`advance`), so the same schedule replays identically whether
//! it is driven by a real clock, an event loop tick, or a test.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::debug;

use crate::graph::Graph;

use super::events::{AnimationEvent, Target, VisualState};
use super::scene::VisualSink;

/// Identifies one scheduled run; stale once superseded or cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle {
    generation: u64,
}

#[derive(Debug, Default)]
pub struct Timeline {
    pending: VecDeque<AnimationEvent>,
    generation: u64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is scheduled with `events`
    ///
    /// Any earlier run is cancelled first: its pending events are dropped
    /// and every node and edge is restored to its resting state before the
    /// new events are installed.
    pub fn schedule(
        &mut self,
        mut events: Vec<AnimationEvent>,
        graph: &Graph,
        sink: &mut dyn VisualSink,
    ) -> AnimationHandle {
        self.reset(graph, sink);

        events.sort_by_key(|event| event.offset);
        self.pending = events.into();
        self.generation += 1;

        debug!(
            generation = self.generation,
            events = self.pending.len(),
            "schedule_animation"
        );
        AnimationHandle {
            generation: self.generation,
        }
    }

    /// Cancel the run behind `handle`
    ///
    /// Returns `false` without touching anything when `handle` was already
    /// superseded or cancelled.
    pub fn cancel(
        &mut self,
        handle: AnimationHandle,
        graph: &Graph,
        sink: &mut dyn VisualSink,
    ) -> bool {
        if !self.is_current(handle) {
            return false;
        }
        let dropped = self.pending.len();
        self.reset(graph, sink);
        debug!(generation = handle.generation, dropped, "cancel_animation");
        true
    }

    /// Fire, in order, every pending event due at or before `elapsed`
    /// (measured from the start of the current schedule)
    pub fn advance(&mut self, elapsed: Duration, sink: &mut dyn VisualSink) -> usize {
        let mut fired = 0;
        while self
            .pending
            .front()
            .is_some_and(|event| event.offset <= elapsed)
        {
            if let Some(event) = self.pending.pop_front() {
                sink.apply(&event.target, event.state);
                fired += 1;
            }
        }
        fired
    }

    /// Fire every remaining event regardless of its offset
    pub fn finish(&mut self, sink: &mut dyn VisualSink) -> usize {
        let fired = self.pending.len();
        for event in self.pending.drain(..) {
            sink.apply(&event.target, event.state);
        }
        fired
    }

    /// Offset of the next event to fire
    pub fn next_offset(&self) -> Option<Duration> {
        self.pending.front().map(|event| event.offset)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_current(&self, handle: AnimationHandle) -> bool {
        handle.generation == self.generation && self.generation != 0
    }

    /// Whether the run behind `handle` still has events to fire
    pub fn is_running(&self, handle: AnimationHandle) -> bool {
        self.is_current(handle) && !self.pending.is_empty()
    }

    fn reset(&mut self, graph: &Graph, sink: &mut dyn VisualSink) {
        self.pending.clear();
        // Invalidates any outstanding handle
        self.generation += 1;
        restore_steady_state(graph, sink);
    }
}

/// Put every node and edge of `graph` back to its resting state
pub fn restore_steady_state(graph: &Graph, sink: &mut dyn VisualSink) {
    for node in graph.nodes() {
        sink.apply(&Target::node(&node.name), VisualState::NodeDefault);
    }
    for edge in graph.edges() {
        sink.apply(
            &Target::Edge(edge.key.clone()),
            VisualState::steady_for_edge(edge),
        );
    }
}

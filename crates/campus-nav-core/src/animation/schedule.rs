//! Turns a search result into a timed sequence of visual changes
//!
//! Three phases, back to back:
//! 1. discovery sweep: the start node, then every discovered node, one ping
//!    interval apart
//! 2. route edges, one edge interval apart
//! 3. route nodes, one node interval apart
//!
//! Phases 2 and 3 only exist when the path has at least one edge.

use std::iter;
use std::time::Duration;

use crate::config::AnimationConfig;
use crate::graph::TraversalResult;

use super::events::{AnimationEvent, Target, VisualState};

/// `interval * n`, saturating instead of overflowing
fn nth(interval: Duration, n: usize) -> Duration {
    interval.saturating_mul(u32::try_from(n).unwrap_or(u32::MAX))
}

/// Build the event list for `result`, ordered by offset
pub fn plan_animation(result: &TraversalResult, config: &AnimationConfig) -> Vec<AnimationEvent> {
    let ping = config.ping_interval();
    let edge_step = config.edge_interval();
    let node_step = config.node_interval();

    let sweep: Vec<&String> = iter::once(&result.start)
        .chain(result.discovery_order.iter())
        .collect();

    let mut events: Vec<AnimationEvent> = sweep
        .iter()
        .enumerate()
        .map(|(i, name)| {
            AnimationEvent::new(nth(ping, i), Target::node(name), VisualState::NodePing)
        })
        .collect();

    if result.path.len() >= 2 {
        // Can coincide with the last ping; the stable sort keeps that ping first
        let route_start = nth(ping, result.discovery_order.len().max(1));

        let edge_events = result.path_pairs().enumerate().map(|(i, (from, to))| {
            AnimationEvent::new(
                route_start.saturating_add(nth(edge_step, i)),
                Target::edge(from, to),
                VisualState::EdgeRoute,
            )
        });
        events.extend(edge_events);

        let nodes_start = route_start.saturating_add(nth(edge_step, result.path.len() - 1));
        let node_events = result.path.iter().enumerate().map(|(i, name)| {
            AnimationEvent::new(
                nodes_start.saturating_add(nth(node_step, i)),
                Target::node(name),
                VisualState::NodeRoute,
            )
        });
        events.extend(node_events);
    }

    // Stable: equal offsets keep phase order
    events.sort_by_key(|event| event.offset);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Algorithm;

    fn result(path: &[&str], discovery: &[&str]) -> TraversalResult {
        let owned = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        TraversalResult {
            algorithm: Algorithm::Bfs,
            start: "A".to_string(),
            goal: "C".to_string(),
            accessible_only: false,
            path: owned(path),
            visitation_order: vec!["A".to_string()],
            discovery_order: owned(discovery),
        }
    }

    fn config() -> AnimationConfig {
        AnimationConfig {
            ping_interval_ms: 100,
            edge_interval_ms: 30,
            node_interval_ms: 7,
        }
    }

    fn ms(events: &[AnimationEvent]) -> Vec<u128> {
        events.iter().map(|e| e.offset.as_millis()).collect()
    }

    #[test]
    fn test_three_phases_in_order() {
        let events = plan_animation(&result(&["A", "B", "C"], &["B", "D", "C"]), &config());

        // 4 pings, 2 route edges, 3 route nodes
        assert_eq!(events.len(), 9);
        assert_eq!(
            ms(&events),
            vec![0, 100, 200, 300, 300, 330, 360, 367, 374]
        );
        assert_eq!(events[0].target, Target::node("A"));
        assert_eq!(events[3].target, Target::node("C"));
        assert!(events[..4].iter().all(|e| e.state == VisualState::NodePing));
        assert_eq!(events[4].target, Target::edge("A", "B"));
        assert_eq!(events[5].target, Target::edge("B", "C"));
        assert!(events[4..6].iter().all(|e| e.state == VisualState::EdgeRoute));
        let route: Vec<_> = events[6..].iter().map(|e| e.target.clone()).collect();
        assert_eq!(route, vec![Target::node("A"), Target::node("B"), Target::node("C")]);
        assert!(events[6..].iter().all(|e| e.state == VisualState::NodeRoute));
    }

    #[test]
    fn test_route_starts_after_discovery_count_pings() {
        let events = plan_animation(&result(&["A", "B", "C"], &["B", "D", "C"]), &config());
        let first_edge = events
            .iter()
            .find(|e| e.state == VisualState::EdgeRoute)
            .unwrap();
        assert_eq!(first_edge.offset.as_millis(), 300);

        // No discoveries still leaves one ping interval before the route
        let mut direct = result(&["A", "B"], &[]);
        direct.goal = "B".to_string();
        let events = plan_animation(&direct, &config());
        assert_eq!(ms(&events), vec![0, 100, 130, 137]);
    }

    #[test]
    fn test_unreachable_only_pings() {
        let events = plan_animation(&result(&[], &["B"]), &config());
        assert_eq!(ms(&events), vec![0, 100]);
        assert!(events.iter().all(|e| e.state == VisualState::NodePing));
    }

    #[test]
    fn test_single_node_path_has_no_route_phase() {
        let mut same = result(&["A"], &[]);
        same.goal = "A".to_string();
        let events = plan_animation(&same, &config());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].state, VisualState::NodePing);
    }

    #[test]
    fn test_offsets_non_decreasing() {
        let events = plan_animation(
            &result(&["A", "B", "C"], &["B", "D", "C"]),
            &AnimationConfig::default(),
        );
        assert!(events.windows(2).all(|w| w[0].offset <= w[1].offset));
    }

    #[test]
    fn test_zero_intervals_keep_phase_order() {
        let zero = AnimationConfig {
            ping_interval_ms: 0,
            edge_interval_ms: 0,
            node_interval_ms: 0,
        };
        let events = plan_animation(&result(&["A", "B"], &["B"]), &zero);
        let states: Vec<_> = events.iter().map(|e| e.state).collect();
        assert_eq!(
            states,
            vec![
                VisualState::NodePing,
                VisualState::NodePing,
                VisualState::EdgeRoute,
                VisualState::NodeRoute,
                VisualState::NodeRoute,
            ]
        );
    }
}

use std::collections::BTreeMap;

use crate::graph::Graph;

use super::events::{Target, VisualState};

/// The presentation layer's side of an animation
///
/// The timeline never draws anything itself; it hands each state change to
/// a sink, which owns whatever drawing handles belong to the target.
pub trait VisualSink {
    fn apply(&mut self, target: &Target, state: VisualState);
}

/// In-memory sink: latest state per target plus a log of every change
#[derive(Debug, Clone, Default)]
pub struct SceneState {
    states: BTreeMap<Target, VisualState>,
    log: Vec<(Target, VisualState)>,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scene with every node and edge of `graph` at rest
    pub fn from_graph(graph: &Graph) -> Self {
        let mut scene = Self::new();
        for node in graph.nodes() {
            scene
                .states
                .insert(Target::node(&node.name), VisualState::NodeDefault);
        }
        for edge in graph.edges() {
            scene.states.insert(
                Target::Edge(edge.key.clone()),
                VisualState::steady_for_edge(edge),
            );
        }
        scene
    }

    pub fn state(&self, target: &Target) -> Option<VisualState> {
        self.states.get(target).copied()
    }

    pub fn node_state(&self, name: &str) -> Option<VisualState> {
        self.state(&Target::node(name))
    }

    pub fn edge_state(&self, u: &str, v: &str) -> Option<VisualState> {
        self.state(&Target::edge(u, v))
    }

    /// Current states in target order
    pub fn iter(&self) -> impl Iterator<Item = (&Target, VisualState)> {
        self.states.iter().map(|(target, state)| (target, *state))
    }

    /// Every change applied so far, oldest first
    pub fn log(&self) -> &[(Target, VisualState)] {
        &self.log
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Whether every node and edge in `graph` shows its resting state
    pub fn is_steady(&self, graph: &Graph) -> bool {
        let nodes_steady = graph
            .nodes()
            .all(|node| self.node_state(&node.name) == Some(VisualState::NodeDefault));
        let edges_steady = graph.edges().all(|edge| {
            self.state(&Target::Edge(edge.key.clone())) == Some(VisualState::steady_for_edge(edge))
        });
        nodes_steady && edges_steady
    }
}

impl VisualSink for SceneState {
    fn apply(&mut self, target: &Target, state: VisualState) {
        self.states.insert(target.clone(), state);
        self.log.push((target.clone(), state));
    }
}

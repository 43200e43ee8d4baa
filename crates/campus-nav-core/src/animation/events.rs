use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::graph::{Edge, EdgeKey};

/// What a visual change applies to
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Target {
    Node(String),
    Edge(EdgeKey),
}

impl Target {
    pub fn node(name: &str) -> Self {
        Target::Node(name.to_string())
    }

    pub fn edge(u: &str, v: &str) -> Self {
        Target::Edge(EdgeKey::new(u, v))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Node(name) => write!(f, "node {}", name),
            Target::Edge(key) => write!(f, "edge {}", key),
        }
    }
}

/// Presentation state of a node or edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualState {
    NodeDefault,
    /// Node reached during the discovery sweep
    NodePing,
    /// Node on the final route
    NodeRoute,
    EdgeOpen,
    EdgeInaccessible,
    EdgeClosed,
    /// Edge on the final route
    EdgeRoute,
}

impl VisualState {
    /// Resting state of an edge, from its flags alone. Closure wins over
    /// inaccessibility.
    pub fn steady_for_edge(edge: &Edge) -> Self {
        if edge.closed {
            VisualState::EdgeClosed
        } else if !edge.accessible {
            VisualState::EdgeInaccessible
        } else {
            VisualState::EdgeOpen
        }
    }

    /// Whether this state only ever appears mid-animation
    pub fn is_transient(self) -> bool {
        matches!(
            self,
            VisualState::NodePing | VisualState::NodeRoute | VisualState::EdgeRoute
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VisualState::NodeDefault => "node_default",
            VisualState::NodePing => "node_ping",
            VisualState::NodeRoute => "node_route",
            VisualState::EdgeOpen => "edge_open",
            VisualState::EdgeInaccessible => "edge_inaccessible",
            VisualState::EdgeClosed => "edge_closed",
            VisualState::EdgeRoute => "edge_route",
        }
    }
}

impl fmt::Display for VisualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One timed visual change, offset from the start of its schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimationEvent {
    #[serde(rename = "offset_ms", serialize_with = "serialize_millis")]
    pub offset: Duration,
    pub target: Target,
    pub state: VisualState,
}

impl AnimationEvent {
    pub fn new(offset: Duration, target: Target, state: VisualState) -> Self {
        AnimationEvent {
            offset,
            target,
            state,
        }
    }
}

fn serialize_millis<S: Serializer>(offset: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(offset.as_millis()).unwrap_or(u64::MAX))
}

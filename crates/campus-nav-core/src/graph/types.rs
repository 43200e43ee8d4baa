use serde::Serialize;
use std::fmt;

/// A named campus location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// Identity of an undirected edge
///
/// The two endpoint names are stored in code-point order, so `{u, v}` and
/// `{v, u}` produce equal keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeKey {
    first: String,
    second: String,
}

impl EdgeKey {
    pub fn new(u: &str, v: &str) -> Self {
        let (first, second) = if u <= v { (u, v) } else { (v, u) };
        EdgeKey {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn contains(&self, name: &str) -> bool {
        self.first == name || self.second == name
    }

    /// The endpoint opposite `name`, if `name` is an endpoint at all
    pub fn other(&self, name: &str) -> Option<&str> {
        if self.first == name {
            Some(&self.second)
        } else if self.second == name {
            Some(&self.first)
        } else {
            None
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.first, self.second)
    }
}

/// A path between two locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub key: EdgeKey,
    /// Display-only weight
    pub distance: u32,
    /// Display-only weight
    pub time: u32,
    pub accessible: bool,
    pub closed: bool,
}

impl Edge {
    /// Whether a traversal may cross this edge under the given filter
    pub fn is_traversable(&self, accessible_only: bool) -> bool {
        !self.closed && (!accessible_only || self.accessible)
    }
}

//! Campus Nav Core Library
//!
//! Undirected campus graph with closable and accessibility-flagged paths,
//! BFS/DFS route search, and the animation timeline that replays a search.

pub mod animation;
pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod map;

//! Campus graph and the searches that run over it
//!
//! - `store`: the undirected graph with closure/accessibility flags
//! - `traversal`: the adjacency trait the algorithms consume
//! - `algos`: BFS and DFS
//! - `search`: algorithm selection and result snapshots

pub mod algos;
pub mod search;
pub mod store;
pub mod traversal;
pub mod types;

pub use search::{run_search, Algorithm, TraversalResult};
pub use store::Graph;
pub use traversal::NeighborSource;
pub use types::{Edge, EdgeKey, Node};

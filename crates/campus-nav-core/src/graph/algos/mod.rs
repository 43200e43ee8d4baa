//! Graph search implementations
//!
//! - `bfs`: queue-based level order search
//! - `dfs`: stack-based pre-order search
//! - `shared`: trace bookkeeping and path reconstruction

pub mod bfs;
pub mod dfs;
pub mod shared;

pub use bfs::bfs_search;
pub use dfs::dfs_search;
pub use shared::{ensure_endpoints, reconstruct_path, SearchTrace};

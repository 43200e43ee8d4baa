//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Default delay between discovery pings
pub const DEFAULT_PING_INTERVAL_MS: u64 = 120;
/// Default delay between route edge highlights
pub const DEFAULT_EDGE_INTERVAL_MS: u64 = 250;
/// Default delay between route node highlights
pub const DEFAULT_NODE_INTERVAL_MS: u64 = 150;

/// Smallest weight produced by randomization
pub const DEFAULT_WEIGHT_MIN: u32 = 1;
/// Largest weight produced by randomization
pub const DEFAULT_WEIGHT_MAX: u32 = 20;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Animation timing
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Weight randomization bounds
    #[serde(default)]
    pub weights: WeightRange,
}

/// Intervals driving the three animation phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Spacing of discovery-order ping events (ms)
    #[serde(default = "default_ping_interval_ms")]
    pub ping_interval_ms: u64,

    /// Spacing of route edge highlight events (ms)
    #[serde(default = "default_edge_interval_ms")]
    pub edge_interval_ms: u64,

    /// Spacing of route node highlight events (ms)
    #[serde(default = "default_node_interval_ms")]
    pub node_interval_ms: u64,
}

/// Inclusive bounds for randomized edge weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightRange {
    #[serde(default = "default_weight_min")]
    pub min: u32,

    #[serde(default = "default_weight_max")]
    pub max: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            ping_interval_ms: DEFAULT_PING_INTERVAL_MS,
            edge_interval_ms: DEFAULT_EDGE_INTERVAL_MS,
            node_interval_ms: DEFAULT_NODE_INTERVAL_MS,
        }
    }
}

impl Default for WeightRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_WEIGHT_MIN,
            max: DEFAULT_WEIGHT_MAX,
        }
    }
}

fn default_ping_interval_ms() -> u64 {
    DEFAULT_PING_INTERVAL_MS
}

fn default_edge_interval_ms() -> u64 {
    DEFAULT_EDGE_INTERVAL_MS
}

fn default_node_interval_ms() -> u64 {
    DEFAULT_NODE_INTERVAL_MS
}

fn default_weight_min() -> u32 {
    DEFAULT_WEIGHT_MIN
}

fn default_weight_max() -> u32 {
    DEFAULT_WEIGHT_MAX
}

//! Configuration for campus-nav
//!
//! Stored as TOML. Every field has a default, so an empty file is valid.

pub mod types;

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::bail_invalid;
use crate::error::Result;

pub use types::{AnimationConfig, NavConfig, WeightRange};

impl AnimationConfig {
    pub fn ping_interval(&self) -> Duration {
        Duration::from_millis(self.ping_interval_ms)
    }

    pub fn edge_interval(&self) -> Duration {
        Duration::from_millis(self.edge_interval_ms)
    }

    pub fn node_interval(&self) -> Duration {
        Duration::from_millis(self.node_interval_ms)
    }
}

impl WeightRange {
    /// Check the bounds describe a non-empty range of positive weights
    pub fn validate(&self) -> Result<()> {
        if self.min == 0 {
            bail_invalid!("weights.min", "0 (weights must be positive)");
        }
        if self.min > self.max {
            bail_invalid!(
                "weights",
                format!("min {} is greater than max {}", self.min, self.max)
            );
        }
        Ok(())
    }
}

impl NavConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: NavConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate()
    }
}

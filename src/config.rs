//! Embedder-facing configuration (§4.11): the planner's wall-clock budget
//! and an optional early node cap, loadable from TOML via the `toml` crate,
//! matching the rest of the ecosystem's configuration story.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Planner tunables. The interpreter and resolver take no configuration —
/// their behavior is fully determined by the command tree and world
/// snapshot (§4.1–§4.4) — so this is the only knob surface in the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// A* wall-clock budget (§4.7), in whole seconds.
    pub timeout_secs: u64,
    /// An optional cap on distinct nodes visited before declaring an early
    /// `failure` rather than exhausting the frontier naturally. `None`
    /// means unbounded.
    pub max_nodes: Option<usize>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig { timeout_secs: 5, max_nodes: None }
    }
}

impl PlannerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Umbrella configuration. Currently just wraps [`PlannerConfig`], but kept
/// as its own struct (rather than re-exporting `PlannerConfig` directly) so
/// future embedder-facing knobs have somewhere to live without breaking the
/// top-level shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub planner: PlannerConfig,
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

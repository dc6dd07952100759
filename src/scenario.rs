use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::world::{SpawnRates, WorldConfig, DEFAULT_DEPTH, DEFAULT_WIDTH};

fn default_depth() -> usize {
    DEFAULT_DEPTH
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

fn default_snapshot_interval_ticks() -> u64 {
    50
}

/// A run description: grid size, seed, step budget, snapshot cadence, and
/// spawn rates. Everything but the name and seed has a documented default.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    pub seed: u64,
    #[serde(default = "default_depth")]
    pub depth: usize,
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default)]
    pub steps: Option<u64>,
    #[serde(default = "default_snapshot_interval_ticks")]
    pub snapshot_interval_ticks: u64,
    #[serde(default)]
    pub spawn: SpawnRates,
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(scenario)
    }
}

impl Scenario {
    pub fn world_config(&self) -> WorldConfig {
        WorldConfig {
            depth: self.depth,
            width: self.width,
            spawn: self.spawn.clone(),
        }
    }

    pub fn ticks(&self, override_ticks: Option<u64>) -> u64 {
        override_ticks.or(self.steps).unwrap_or(700)
    }
}

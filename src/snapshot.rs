use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::world::{World, WorldSnapshot};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct SnapshotDocument {
    captured_at: String,
    #[serde(flatten)]
    snapshot: WorldSnapshot,
}

/// Writes a JSON state snapshot every `interval` steps under
/// `<dir>/<scenario>/step_NNNNNN.json`. An interval of zero disables
/// writing entirely.
pub struct SnapshotWriter {
    dir: PathBuf,
    interval: u64,
}

impl SnapshotWriter {
    pub fn new(dir: impl AsRef<Path>, interval: u64) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            interval,
        }
    }

    pub fn maybe_write(
        &self,
        world: &World,
        scenario: &str,
    ) -> Result<Option<PathBuf>, SnapshotError> {
        if self.interval == 0 || world.steps() % self.interval != 0 {
            return Ok(None);
        }
        let dir = self.dir.join(scenario);
        fs::create_dir_all(&dir)?;
        let document = SnapshotDocument {
            captured_at: chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            snapshot: world.snapshot(scenario),
        };
        let path = dir.join(format!("step_{:06}.json", world.steps()));
        fs::write(&path, serde_json::to_string_pretty(&document)?)?;
        Ok(Some(path))
    }
}

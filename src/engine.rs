use std::path::PathBuf;

use anyhow::Result;

use crate::rng::{self, SimRng};
use crate::snapshot::SnapshotWriter;
use crate::world::{PopulationCounts, World, WorldConfig, WorldSnapshot};

pub struct EngineSettings {
    pub scenario_name: String,
    pub seed: u64,
    pub snapshot_interval_ticks: u64,
    pub snapshot_dir: PathBuf,
}

/// What one executed step looked like.
#[derive(Clone, Debug)]
pub struct StepSummary {
    pub step: u64,
    pub counts: PopulationCounts,
    pub snapshot_path: Option<PathBuf>,
}

/// The stepping loop. Owns the world, the one random stream every decision
/// draws from, and the snapshot writer; observers only ever see read-only
/// snapshots.
pub struct Engine {
    settings: EngineSettings,
    rng: SimRng,
    world: World,
    snapshots: SnapshotWriter,
}

impl Engine {
    pub fn new(settings: EngineSettings, config: WorldConfig) -> Self {
        let mut rng = rng::seeded(settings.seed);
        let world = World::new(config, &mut rng);
        let snapshots =
            SnapshotWriter::new(&settings.snapshot_dir, settings.snapshot_interval_ticks);
        Self {
            settings,
            rng,
            world,
            snapshots,
        }
    }

    /// Execute a single step and report on it.
    pub fn step(&mut self) -> Result<StepSummary> {
        self.world.step(&mut self.rng);
        let snapshot_path = self
            .snapshots
            .maybe_write(&self.world, &self.settings.scenario_name)?;
        Ok(StepSummary {
            step: self.world.steps(),
            counts: self.world.counts(),
            snapshot_path,
        })
    }

    /// Run up to `steps` steps, stopping early once any tracked species is
    /// extinct. Returns the number of steps actually executed.
    pub fn run(&mut self, steps: u64) -> Result<u64> {
        self.run_with_hook(steps, |_| {})
    }

    /// Like [`Engine::run`], invoking the hook with a fresh snapshot after
    /// every executed step.
    pub fn run_with_hook(
        &mut self,
        steps: u64,
        mut hook: impl FnMut(WorldSnapshot),
    ) -> Result<u64> {
        let mut executed = 0;
        for _ in 0..steps {
            if !self.world.is_viable() {
                break;
            }
            self.step()?;
            hook(self.world.snapshot(&self.settings.scenario_name));
            executed += 1;
        }
        Ok(executed)
    }

    /// Reinitialize clock, weather, field, and population from the same
    /// configuration and seed; a rerun reproduces the run exactly.
    pub fn reset(&mut self) {
        self.rng = rng::seeded(self.settings.seed);
        self.world.reset(&mut self.rng);
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn scenario_name(&self) -> &str {
        &self.settings.scenario_name
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        self.world.snapshot(&self.settings.scenario_name)
    }
}

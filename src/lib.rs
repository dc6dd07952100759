pub mod behavior;
pub mod clock;
pub mod engine;
pub mod field;
pub mod organism;
pub mod rng;
pub mod scenario;
pub mod snapshot;
pub mod species;
pub mod weather;
pub mod web;
pub mod world;

pub use engine::{Engine, EngineSettings, StepSummary};
pub use scenario::{Scenario, ScenarioLoader};
pub use world::{World, WorldSnapshot};

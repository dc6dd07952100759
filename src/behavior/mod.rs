//! The per-organism rule set. One data-driven algorithm covers every
//! animal species, parameterized by its constant table; the algae have
//! their own, simpler routine.

mod animal;
mod plant;

pub use animal::act_animal;
pub use plant::act_plant;

use crate::clock::Clock;
use crate::weather::WeatherManager;

/// Probability that a newborn inherits the disease when at least one
/// parent carries it.
pub const DISEASE_INHERIT_PROBABILITY: f64 = 0.01;

/// Read-only environment handed to every act call.
pub struct ActCtx<'a> {
    pub clock: &'a Clock,
    pub weather: &'a WeatherManager,
}

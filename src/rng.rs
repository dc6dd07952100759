use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The simulation's random source. Every probabilistic decision in a run
/// (weather changes, adjacency shuffles, behavior rolls) draws from one
/// stream so a seed fully determines the run.
pub type SimRng = ChaCha8Rng;

pub fn seeded(seed: u64) -> SimRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Helper rolls shared by every behavior.
pub trait RollExt {
    /// A single roll against a probability; `p >= 1.0` always succeeds.
    fn chance(&mut self, p: f64) -> bool;
    /// Uniform draw in `[lo, hi]` inclusive.
    fn between(&mut self, lo: u32, hi: u32) -> u32;
}

impl<R: Rng + ?Sized> RollExt for R {
    fn chance(&mut self, p: f64) -> bool {
        self.gen::<f64>() <= p
    }

    fn between(&mut self, lo: u32, hi: u32) -> u32 {
        self.gen_range(lo..=hi)
    }
}

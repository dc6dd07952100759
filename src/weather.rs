use rand::Rng;
use serde::{Deserialize, Serialize};

/// Shortest weather spell, in steps.
const MIN_DURATION: u32 = 20;
/// Longest weather spell, in steps.
const MAX_DURATION: u32 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Clear,
    Fog,
    Cold,
    Storm,
}

impl Weather {
    pub const ALL: [Weather; 4] = [Weather::Clear, Weather::Fog, Weather::Cold, Weather::Storm];

    /// Fog hides prey from hunters.
    pub fn hunting_modifier(self) -> f64 {
        match self {
            Weather::Fog => 0.9,
            _ => 1.0,
        }
    }

    /// Cold slows the large hunters down.
    pub fn predator_movement_modifier(self) -> f64 {
        match self {
            Weather::Cold => 0.8,
            _ => 1.0,
        }
    }

    /// Fog makes grazing on algae harder.
    pub fn feeding_modifier(self) -> f64 {
        match self {
            Weather::Fog => 0.95,
            _ => 1.0,
        }
    }

    pub fn prey_movement_modifier(self) -> f64 {
        match self {
            Weather::Cold => 0.95,
            _ => 1.0,
        }
    }

    /// Fog cuts the light reaching the algae; cold slows growth further.
    pub fn growth_modifier(self) -> f64 {
        match self {
            Weather::Fog => 0.9,
            Weather::Cold => 0.8,
            _ => 1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Weather::Clear => "clear",
            Weather::Fog => "fog",
            Weather::Cold => "cold",
            Weather::Storm => "storm",
        }
    }
}

/// Holds the current weather and a countdown; when the countdown expires a
/// new state and duration are drawn from the shared stream. Behaviors only
/// ever read the multipliers.
#[derive(Clone, Debug)]
pub struct WeatherManager {
    current: Weather,
    remaining: f64,
}

impl WeatherManager {
    /// Runs open under clear skies with a random first spell length.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            current: Weather::Clear,
            remaining: random_duration(rng),
        }
    }

    /// Burn `elapsed` steps off the current spell, rolling a fresh state
    /// once it runs out.
    pub fn advance<R: Rng>(&mut self, elapsed: f64, rng: &mut R) {
        self.remaining -= elapsed;
        if self.remaining <= 0.0 {
            self.current = Weather::ALL[rng.gen_range(0..Weather::ALL.len())];
            self.remaining = random_duration(rng);
        }
    }

    /// Pin the weather for the given number of steps.
    pub fn force(&mut self, weather: Weather, duration: f64) {
        self.current = weather;
        self.remaining = duration;
    }

    pub fn current(&self) -> Weather {
        self.current
    }

    pub fn hunting_modifier(&self) -> f64 {
        self.current.hunting_modifier()
    }

    pub fn predator_movement_modifier(&self) -> f64 {
        self.current.predator_movement_modifier()
    }

    pub fn feeding_modifier(&self) -> f64 {
        self.current.feeding_modifier()
    }

    pub fn prey_movement_modifier(&self) -> f64 {
        self.current.prey_movement_modifier()
    }

    pub fn growth_modifier(&self) -> f64 {
        self.current.growth_modifier()
    }
}

fn random_duration<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(MIN_DURATION..=MAX_DURATION) as f64
}

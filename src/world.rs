use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::behavior::{self, ActCtx};
use crate::clock::Clock;
use crate::field::{Coordinate, Field, Occupant};
use crate::organism::{Animal, OrganismStore, Plant};
use crate::rng::RollExt;
use crate::species::{Species, ALGAE};
use crate::weather::{Weather, WeatherManager};

/// Fallback grid depth when the configured one is unusable.
pub const DEFAULT_DEPTH: usize = 80;
/// Fallback grid width when the configured one is unusable.
pub const DEFAULT_WIDTH: usize = 120;

fn default_swordfish_rate() -> f64 {
    0.01
}

fn default_turtle_rate() -> f64 {
    0.14
}

fn default_parrotfish_rate() -> f64 {
    0.145
}

fn default_white_shark_rate() -> f64 {
    0.03
}

fn default_killer_whale_rate() -> f64 {
    0.008
}

fn default_clownfish_rate() -> f64 {
    0.145
}

fn default_algae_rate() -> f64 {
    0.5
}

/// Per-cell creation probabilities used when seeding a fresh field.
#[derive(Debug, Clone, Deserialize)]
pub struct SpawnRates {
    #[serde(default = "default_swordfish_rate")]
    pub swordfish: f64,
    #[serde(default = "default_turtle_rate")]
    pub turtle: f64,
    #[serde(default = "default_parrotfish_rate")]
    pub parrotfish: f64,
    #[serde(default = "default_white_shark_rate")]
    pub white_shark: f64,
    #[serde(default = "default_killer_whale_rate")]
    pub killer_whale: f64,
    #[serde(default = "default_clownfish_rate")]
    pub clownfish: f64,
    #[serde(default = "default_algae_rate")]
    pub algae: f64,
}

impl SpawnRates {
    pub fn rate(&self, species: Species) -> f64 {
        match species {
            Species::Swordfish => self.swordfish,
            Species::Turtle => self.turtle,
            Species::Parrotfish => self.parrotfish,
            Species::WhiteShark => self.white_shark,
            Species::KillerWhale => self.killer_whale,
            Species::Clownfish => self.clownfish,
        }
    }
}

impl Default for SpawnRates {
    fn default() -> Self {
        Self {
            swordfish: default_swordfish_rate(),
            turtle: default_turtle_rate(),
            parrotfish: default_parrotfish_rate(),
            white_shark: default_white_shark_rate(),
            killer_whale: default_killer_whale_rate(),
            clownfish: default_clownfish_rate(),
            algae: default_algae_rate(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorldConfig {
    pub depth: usize,
    pub width: usize,
    #[serde(default)]
    pub spawn: SpawnRates,
}

/// Live-population tally per tracked species.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PopulationCounts {
    pub swordfish: u64,
    pub turtle: u64,
    pub parrotfish: u64,
    pub clownfish: u64,
    pub white_shark: u64,
    pub killer_whale: u64,
    pub algae: u64,
}

impl PopulationCounts {
    fn bump(&mut self, species: Species) {
        match species {
            Species::Swordfish => self.swordfish += 1,
            Species::Turtle => self.turtle += 1,
            Species::Parrotfish => self.parrotfish += 1,
            Species::Clownfish => self.clownfish += 1,
            Species::WhiteShark => self.white_shark += 1,
            Species::KillerWhale => self.killer_whale += 1,
        }
    }

    pub fn animals(&self) -> u64 {
        self.swordfish
            + self.turtle
            + self.parrotfish
            + self.clownfish
            + self.white_shark
            + self.killer_whale
    }
}

impl fmt::Display for PopulationCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "turtle: {}  white shark: {}  parrotfish: {}  killer whale: {}  clownfish: {}  swordfish: {}  algae: {}",
            self.turtle,
            self.white_shark,
            self.parrotfish,
            self.killer_whale,
            self.clownfish,
            self.swordfish,
            self.algae
        )
    }
}

/// One occupied cell in a [`WorldSnapshot`].
#[derive(Debug, Clone, Serialize)]
pub struct CellSnapshot {
    pub row: usize,
    pub col: usize,
    pub species: &'static str,
    pub infected: bool,
}

/// The read-only view handed to observers after every step.
#[derive(Debug, Clone, Serialize)]
pub struct WorldSnapshot {
    pub scenario: String,
    pub step: u64,
    pub hour: u32,
    pub minute: u32,
    pub daytime: bool,
    pub weather: Weather,
    pub depth: usize,
    pub width: usize,
    pub counts: PopulationCounts,
    pub cells: Vec<CellSnapshot>,
}

/// The simulation state: the current field buffer, the organism store both
/// buffers resolve against, and the environmental modulators. Stepping
/// builds a fresh buffer, runs every organism snapshotted from the old
/// one, swaps, and compacts.
pub struct World {
    config: WorldConfig,
    field: Field,
    store: OrganismStore,
    clock: Clock,
    weather: WeatherManager,
    steps: u64,
}

impl World {
    /// Build and seed a world. Unusable dimensions fall back to the
    /// defaults, mirroring the documented configuration policy.
    pub fn new<R: Rng>(mut config: WorldConfig, rng: &mut R) -> Self {
        if config.depth == 0 || config.width == 0 {
            println!(
                "Field dimensions must be positive; using the default {}x{} grid.",
                DEFAULT_DEPTH, DEFAULT_WIDTH
            );
            config.depth = DEFAULT_DEPTH;
            config.width = DEFAULT_WIDTH;
        }
        let mut world = Self {
            field: Field::new(config.depth, config.width),
            store: OrganismStore::new(),
            clock: Clock::new(),
            weather: WeatherManager::new(rng),
            steps: 0,
            config,
        };
        world.populate(rng);
        world
    }

    /// Restore the initial state: fresh clock, weather, field, and
    /// population drawn from the caller's (re-seeded) stream.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.clock = Clock::new();
        self.weather = WeatherManager::new(rng);
        self.field = Field::new(self.config.depth, self.config.width);
        self.store = OrganismStore::new();
        self.steps = 0;
        self.populate(rng);
    }

    /// Seed the field cell by cell in row-major order: one roll per
    /// species in spawn order, first success claims the cell, then an
    /// algae roll for cells left empty.
    fn populate<R: Rng>(&mut self, rng: &mut R) {
        for row in 0..self.config.depth {
            for col in 0..self.config.width {
                let coord = Coordinate::new(row, col);
                let mut taken = false;
                for species in Species::SPAWN_ORDER {
                    if rng.chance(self.config.spawn.rate(species)) {
                        let id = self.store.insert_animal(Animal::spawn(species, coord, rng));
                        self.field.place_animal(id, coord);
                        taken = true;
                        break;
                    }
                }
                if !taken && rng.chance(self.config.spawn.algae) {
                    let id = self.store.insert_plant(Plant::spawn(coord, rng));
                    self.field.place_plant(id, coord);
                }
            }
        }
    }

    /// Run one simulation step. Canonical order: clock, weather, then the
    /// animals and plants snapshotted from the outgoing buffer, in
    /// live-list order.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        self.clock.advance();
        self.weather.advance(1.0, rng);
        self.steps += 1;

        let mut next = Field::new(self.field.depth(), self.field.width());
        let ctx = ActCtx {
            clock: &self.clock,
            weather: &self.weather,
        };

        let animals = self.field.animal_ids().to_vec();
        for id in animals {
            let species = self.store.animal(id).species;
            behavior::act_animal(
                id,
                species.spec(),
                &self.field,
                &mut next,
                &mut self.store,
                &ctx,
                rng,
            );
        }

        let plants = self.field.plant_ids().to_vec();
        for id in plants {
            behavior::act_plant(id, &ALGAE, &self.field, &mut next, &mut self.store, &ctx, rng);
        }

        self.store.compact(&mut next);
        self.field = next;
    }

    pub fn is_viable(&self) -> bool {
        self.field.is_viable(&self.store)
    }

    pub fn counts(&self) -> PopulationCounts {
        let mut counts = PopulationCounts::default();
        for &id in self.field.animal_ids() {
            let animal = self.store.animal(id);
            if animal.alive {
                counts.bump(animal.species);
            }
        }
        counts.algae = self
            .field
            .plant_ids()
            .iter()
            .filter(|&&id| self.store.plant(id).alive)
            .count() as u64;
        counts
    }

    /// Assemble the observer view. Cells are sorted by coordinate so the
    /// output is deterministic.
    pub fn snapshot(&self, scenario: &str) -> WorldSnapshot {
        let mut cells = Vec::new();
        for &id in self.field.animal_ids() {
            let animal = self.store.animal(id);
            if let (true, Some(coord)) = (animal.alive, animal.coord) {
                cells.push(CellSnapshot {
                    row: coord.row,
                    col: coord.col,
                    species: animal.species.name(),
                    infected: animal.infected,
                });
            }
        }
        for &id in self.field.plant_ids() {
            let plant = self.store.plant(id);
            if let (true, Some(coord)) = (plant.alive, plant.coord) {
                cells.push(CellSnapshot {
                    row: coord.row,
                    col: coord.col,
                    species: ALGAE.name,
                    infected: false,
                });
            }
        }
        cells.sort_by_key(|cell| (cell.row, cell.col));
        WorldSnapshot {
            scenario: scenario.to_string(),
            step: self.steps,
            hour: self.clock.hour(),
            minute: self.clock.minute(),
            daytime: self.clock.is_daytime(),
            weather: self.weather.current(),
            depth: self.field.depth(),
            width: self.field.width(),
            counts: self.counts(),
            cells,
        }
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn store(&self) -> &OrganismStore {
        &self.store
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn weather(&self) -> &WeatherManager {
        &self.weather
    }

    pub fn weather_mut(&mut self) -> &mut WeatherManager {
        &mut self.weather
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Kill every live member of one species in place. Exists for
    /// extinction drills; the simulation itself never calls it.
    pub fn exterminate(&mut self, species: Species) {
        let ids = self.field.animal_ids().to_vec();
        for id in ids {
            let animal = self.store.animal_mut(id);
            if animal.alive && animal.species == species {
                animal.kill();
            }
        }
    }

    /// Occupant kind and liveness at a coordinate, for observers.
    pub fn occupant(&self, coord: Coordinate) -> Option<Occupant> {
        self.field.occupant_at(coord)
    }
}

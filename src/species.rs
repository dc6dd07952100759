use serde::{Deserialize, Serialize};

/// The tracked animal species. The run ends early if any of them (or the
/// algae) go extinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Swordfish,
    Turtle,
    Parrotfish,
    Clownfish,
    WhiteShark,
    KillerWhale,
}

impl Species {
    pub const COUNT: usize = 6;

    pub const ALL: [Species; Species::COUNT] = [
        Species::Swordfish,
        Species::Turtle,
        Species::Parrotfish,
        Species::Clownfish,
        Species::WhiteShark,
        Species::KillerWhale,
    ];

    /// Seeding order when populating a fresh field; the first successful
    /// roll claims the cell.
    pub const SPAWN_ORDER: [Species; Species::COUNT] = [
        Species::Swordfish,
        Species::Turtle,
        Species::Parrotfish,
        Species::WhiteShark,
        Species::KillerWhale,
        Species::Clownfish,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn spec(self) -> &'static SpeciesSpec {
        match self {
            Species::Swordfish => &SWORDFISH,
            Species::Turtle => &TURTLE,
            Species::Parrotfish => &PARROTFISH,
            Species::Clownfish => &CLOWNFISH,
            Species::WhiteShark => &WHITE_SHARK,
            Species::KillerWhale => &KILLER_WHALE,
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }
}

/// What an animal will eat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Diet {
    /// Grazes on live algae.
    Grazer,
    /// Hunts the listed species.
    Hunter(&'static [Species]),
}

/// The constant parameter block for one animal species.
#[derive(Clone, Copy, Debug)]
pub struct SpeciesSpec {
    pub name: &'static str,
    /// Minimum age before litters are possible.
    pub breeding_age: u32,
    /// Ageing past this kills the animal.
    pub max_age: u32,
    pub breeding_probability: f64,
    pub infection_probability: f64,
    pub transmission_probability: f64,
    pub max_litter_size: u32,
    /// Steps of hunger bought by one meal.
    pub food_value: i32,
    pub diet: Diet,
    /// Day-active species forage only in daylight and sleep at night;
    /// the rest are on the prowl around the clock.
    pub day_active: bool,
    /// Chance an infected animal dies during an active tick.
    pub disease_mortality: f64,
    /// Chance an infected day-active animal dies in its sleep.
    pub resting_disease_mortality: f64,
}

pub static TURTLE: SpeciesSpec = SpeciesSpec {
    name: "turtle",
    breeding_age: 5,
    max_age: 50,
    breeding_probability: 0.3,
    infection_probability: 0.01,
    transmission_probability: 0.02,
    max_litter_size: 3,
    food_value: 30,
    diet: Diet::Grazer,
    day_active: true,
    disease_mortality: 0.2,
    resting_disease_mortality: 0.1,
};

pub static PARROTFISH: SpeciesSpec = SpeciesSpec {
    name: "parrotfish",
    breeding_age: 5,
    max_age: 40,
    breeding_probability: 0.47,
    infection_probability: 0.01,
    transmission_probability: 0.02,
    max_litter_size: 3,
    food_value: 30,
    diet: Diet::Grazer,
    day_active: true,
    disease_mortality: 0.2,
    resting_disease_mortality: 0.1,
};

pub static CLOWNFISH: SpeciesSpec = SpeciesSpec {
    name: "clownfish",
    breeding_age: 5,
    max_age: 40,
    breeding_probability: 0.47,
    infection_probability: 0.01,
    transmission_probability: 0.02,
    max_litter_size: 3,
    food_value: 30,
    diet: Diet::Grazer,
    day_active: true,
    disease_mortality: 0.2,
    resting_disease_mortality: 0.1,
};

pub static SWORDFISH: SpeciesSpec = SpeciesSpec {
    name: "swordfish",
    breeding_age: 4,
    max_age: 120,
    breeding_probability: 0.15,
    infection_probability: 0.008,
    transmission_probability: 0.015,
    max_litter_size: 2,
    food_value: 140,
    diet: Diet::Hunter(&[Species::Clownfish, Species::Parrotfish]),
    day_active: false,
    disease_mortality: 0.05,
    resting_disease_mortality: 0.0,
};

pub static WHITE_SHARK: SpeciesSpec = SpeciesSpec {
    name: "white shark",
    breeding_age: 4,
    max_age: 350,
    breeding_probability: 0.12,
    infection_probability: 0.005,
    transmission_probability: 0.01,
    max_litter_size: 2,
    food_value: 160,
    diet: Diet::Hunter(&[Species::Turtle, Species::Parrotfish, Species::Clownfish]),
    day_active: false,
    disease_mortality: 0.05,
    resting_disease_mortality: 0.0,
};

pub static KILLER_WHALE: SpeciesSpec = SpeciesSpec {
    name: "killer whale",
    breeding_age: 3,
    max_age: 500,
    breeding_probability: 0.1,
    infection_probability: 0.005,
    transmission_probability: 0.01,
    max_litter_size: 3,
    food_value: 180,
    diet: Diet::Hunter(&[Species::Parrotfish, Species::Turtle, Species::Clownfish]),
    day_active: false,
    disease_mortality: 0.05,
    resting_disease_mortality: 0.0,
};

/// The constant parameter block for the algae.
#[derive(Clone, Copy, Debug)]
pub struct PlantSpec {
    pub name: &'static str,
    /// Minimum age before new fronds can be dropped.
    pub growth_age: u32,
    pub max_age: u32,
    pub growth_probability: f64,
    pub max_litter_size: u32,
}

pub static ALGAE: PlantSpec = PlantSpec {
    name: "algae",
    growth_age: 1,
    max_age: 10,
    growth_probability: 0.9,
    max_litter_size: 7,
};

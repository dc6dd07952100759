use rand::Rng;

use crate::field::Coordinate;
use crate::species::{PlantSpec, Species, SpeciesSpec, ALGAE};

/// Index of an animal in the [`OrganismStore`]. Valid for one step; the
/// post-step compaction reissues ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimalId(usize);

impl AnimalId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Index of a plant in the [`OrganismStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlantId(usize);

impl PlantId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.gen::<bool>() {
            Sex::Male
        } else {
            Sex::Female
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Animal {
    pub species: Species,
    pub alive: bool,
    /// Released on death.
    pub coord: Option<Coordinate>,
    pub age: u32,
    pub sex: Sex,
    pub infected: bool,
    /// Steps left before starvation.
    pub food_level: i32,
}

impl Animal {
    /// A field-seeding animal: random age, random hunger.
    pub fn spawn<R: Rng>(species: Species, coord: Coordinate, rng: &mut R) -> Self {
        let spec = species.spec();
        Self {
            species,
            alive: true,
            coord: Some(coord),
            age: rng.gen_range(0..spec.max_age),
            sex: Sex::random(rng),
            infected: false,
            food_level: rng.gen_range(0..spec.food_value),
        }
    }

    /// A newborn: age zero, hunger still randomized as at seeding.
    pub fn newborn<R: Rng>(species: Species, coord: Coordinate, rng: &mut R) -> Self {
        let spec = species.spec();
        Self {
            species,
            alive: true,
            coord: Some(coord),
            age: 0,
            sex: Sex::random(rng),
            infected: false,
            food_level: rng.gen_range(0..spec.food_value),
        }
    }

    pub fn spec(&self) -> &'static SpeciesSpec {
        self.species.spec()
    }

    pub fn kill(&mut self) {
        self.alive = false;
        self.coord = None;
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Plant {
    pub alive: bool,
    pub coord: Option<Coordinate>,
    pub age: u32,
}

impl Plant {
    /// A field-seeding frond with a random age.
    pub fn spawn<R: Rng>(coord: Coordinate, rng: &mut R) -> Self {
        Self {
            alive: true,
            coord: Some(coord),
            age: rng.gen_range(0..ALGAE.max_age),
        }
    }

    /// A fresh frond dropped during growth.
    pub fn sprout(coord: Coordinate) -> Self {
        Self {
            alive: true,
            coord: Some(coord),
            age: 0,
        }
    }

    pub fn spec(&self) -> &'static PlantSpec {
        &ALGAE
    }

    pub fn kill(&mut self) {
        self.alive = false;
        self.coord = None;
    }
}

/// Backing storage for every organism of the current step. Both field
/// buffers resolve ids against this one store, so a kill inflicted through
/// the current field (an eaten prey) is immediately visible through the
/// next one.
#[derive(Clone, Debug, Default)]
pub struct OrganismStore {
    animals: Vec<Animal>,
    plants: Vec<Plant>,
}

impl OrganismStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_animal(&mut self, animal: Animal) -> AnimalId {
        let id = AnimalId(self.animals.len());
        self.animals.push(animal);
        id
    }

    pub fn insert_plant(&mut self, plant: Plant) -> PlantId {
        let id = PlantId(self.plants.len());
        self.plants.push(plant);
        id
    }

    pub fn animal(&self, id: AnimalId) -> &Animal {
        &self.animals[id.0]
    }

    pub fn animal_mut(&mut self, id: AnimalId) -> &mut Animal {
        &mut self.animals[id.0]
    }

    pub fn plant(&self, id: PlantId) -> &Plant {
        &self.plants[id.0]
    }

    pub fn plant_mut(&mut self, id: PlantId) -> &mut Plant {
        &mut self.plants[id.0]
    }

    /// Reallocate-and-swap garbage collection run after every buffer swap:
    /// organisms the swapped-in field still lists stay (reindexed), the
    /// rest — the dead and the evicted — are dropped. The field is rebound
    /// to the fresh ids.
    pub fn compact(&mut self, field: &mut crate::field::Field) {
        let mut animals = Vec::with_capacity(field.animal_ids().len());
        for &id in field.animal_ids() {
            let animal = self.animal(id);
            if animal.alive {
                animals.push(*animal);
            }
        }
        let mut plants = Vec::with_capacity(field.plant_ids().len());
        for &id in field.plant_ids() {
            let plant = self.plant(id);
            if plant.alive {
                plants.push(*plant);
            }
        }
        self.animals = animals;
        self.plants = plants;
        field.rebind(&self.animals, &self.plants);
    }
}

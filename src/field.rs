use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::organism::{Animal, AnimalId, OrganismStore, Plant, PlantId};
use crate::species::Species;

/// A grid position. Valid iff `row < depth` and `col < width` of the field
/// it is used against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occupant {
    Animal(AnimalId),
    Plant(PlantId),
}

/// One step's grid snapshot: an exclusive map from coordinate to occupant
/// id plus live-lists in placement order. A fresh field is built every
/// step and swapped in wholesale; queries recompute rather than cache.
#[derive(Clone, Debug)]
pub struct Field {
    depth: usize,
    width: usize,
    cells: HashMap<Coordinate, Occupant>,
    animals: Vec<AnimalId>,
    plants: Vec<PlantId>,
}

impl Field {
    pub fn new(depth: usize, width: usize) -> Self {
        assert!(depth > 0 && width > 0, "field dimensions must be positive");
        Self {
            depth,
            width,
            cells: HashMap::new(),
            animals: Vec::new(),
            plants: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.row < self.depth && coord.col < self.width
    }

    /// Place an animal, unconditionally overwriting the cell. A previous
    /// occupant is dropped from its live-list (not marked dead) and is
    /// lost once the step's compaction runs.
    pub fn place_animal(&mut self, id: AnimalId, coord: Coordinate) {
        assert!(self.in_bounds(coord), "placement out of bounds: {coord:?}");
        if let Some(evicted) = self.cells.insert(coord, Occupant::Animal(id)) {
            self.unlist(evicted);
        }
        self.animals.push(id);
    }

    /// Place a plant, with the same eviction rule as [`Field::place_animal`].
    pub fn place_plant(&mut self, id: PlantId, coord: Coordinate) {
        assert!(self.in_bounds(coord), "placement out of bounds: {coord:?}");
        if let Some(evicted) = self.cells.insert(coord, Occupant::Plant(id)) {
            self.unlist(evicted);
        }
        self.plants.push(id);
    }

    fn unlist(&mut self, occupant: Occupant) {
        match occupant {
            Occupant::Animal(id) => {
                if let Some(at) = self.animals.iter().position(|&x| x == id) {
                    self.animals.remove(at);
                }
            }
            Occupant::Plant(id) => {
                if let Some(at) = self.plants.iter().position(|&x| x == id) {
                    self.plants.remove(at);
                }
            }
        }
    }

    pub fn occupant_at(&self, coord: Coordinate) -> Option<Occupant> {
        self.cells.get(&coord).copied()
    }

    pub fn animal_at(&self, coord: Coordinate) -> Option<AnimalId> {
        match self.cells.get(&coord) {
            Some(Occupant::Animal(id)) => Some(*id),
            _ => None,
        }
    }

    pub fn plant_at(&self, coord: Coordinate) -> Option<PlantId> {
        match self.cells.get(&coord) {
            Some(Occupant::Plant(id)) => Some(*id),
            _ => None,
        }
    }

    /// The in-bounds Moore neighborhood of `coord`, excluding `coord`
    /// itself, freshly shuffled on every call. Movement, feeding, and mate
    /// search all rely on this order being random.
    pub fn adjacent_coordinates<R: Rng>(&self, coord: Coordinate, rng: &mut R) -> Vec<Coordinate> {
        let mut adjacent = Vec::with_capacity(8);
        for row_offset in -1i64..=1 {
            for col_offset in -1i64..=1 {
                if row_offset == 0 && col_offset == 0 {
                    continue;
                }
                let row = coord.row as i64 + row_offset;
                let col = coord.col as i64 + col_offset;
                if row >= 0 && row < self.depth as i64 && col >= 0 && col < self.width as i64 {
                    adjacent.push(Coordinate::new(row as usize, col as usize));
                }
            }
        }
        adjacent.shuffle(rng);
        adjacent
    }

    /// The adjacent cells an organism could move or breed into: empty, or
    /// held only by a dead occupant.
    pub fn free_adjacent_coordinates<R: Rng>(
        &self,
        coord: Coordinate,
        store: &OrganismStore,
        rng: &mut R,
    ) -> Vec<Coordinate> {
        self.adjacent_coordinates(coord, rng)
            .into_iter()
            .filter(|&candidate| self.is_free(candidate, store))
            .collect()
    }

    pub fn is_free(&self, coord: Coordinate, store: &OrganismStore) -> bool {
        match self.cells.get(&coord) {
            None => true,
            Some(Occupant::Animal(id)) => !store.animal(*id).alive,
            Some(Occupant::Plant(id)) => !store.plant(*id).alive,
        }
    }

    /// True while every tracked species still has a live member. The run
    /// stops once this turns false.
    pub fn is_viable(&self, store: &OrganismStore) -> bool {
        let mut found = [false; Species::COUNT];
        for &id in &self.animals {
            let animal = store.animal(id);
            if animal.alive {
                found[animal.species.index()] = true;
            }
        }
        if !found.iter().all(|&present| present) {
            return false;
        }
        self.plants.iter().any(|&id| store.plant(id).alive)
    }

    pub fn animal_ids(&self) -> &[AnimalId] {
        &self.animals
    }

    pub fn plant_ids(&self) -> &[PlantId] {
        &self.plants
    }

    /// Rebuild cells and live-lists against a freshly compacted store in
    /// which organism `i` of each kind carries the id `i`.
    pub(crate) fn rebind(&mut self, animals: &[Animal], plants: &[Plant]) {
        self.cells.clear();
        self.animals.clear();
        self.plants.clear();
        for (index, animal) in animals.iter().enumerate() {
            let id = AnimalId::from_index(index);
            let coord = animal.coord.expect("live animal owns a coordinate");
            let prev = self.cells.insert(coord, Occupant::Animal(id));
            debug_assert!(prev.is_none(), "two survivors share {coord:?}");
            self.animals.push(id);
        }
        for (index, plant) in plants.iter().enumerate() {
            let id = PlantId::from_index(index);
            let coord = plant.coord.expect("live plant owns a coordinate");
            let prev = self.cells.insert(coord, Occupant::Plant(id));
            debug_assert!(prev.is_none(), "two survivors share {coord:?}");
            self.plants.push(id);
        }
    }
}

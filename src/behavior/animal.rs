use rand::Rng;

use crate::field::{Coordinate, Field};
use crate::organism::{Animal, AnimalId, OrganismStore};
use crate::rng::RollExt;
use crate::species::{Diet, SpeciesSpec};

use super::{ActCtx, DISEASE_INHERIT_PROBABILITY};

/// Run one animal's tick: age, hunger, disease, breeding, feeding, and
/// movement, writing the survivor (and any offspring) into `next`. A dead
/// actor is a no-op; an actor not re-placed into `next` is gone after the
/// buffer swap.
pub fn act_animal<R: Rng>(
    id: AnimalId,
    spec: &SpeciesSpec,
    current: &Field,
    next: &mut Field,
    store: &mut OrganismStore,
    ctx: &ActCtx<'_>,
    rng: &mut R,
) {
    // Already eaten (or otherwise killed) earlier in this step.
    if !store.animal(id).alive {
        return;
    }

    {
        let animal = store.animal_mut(id);
        animal.age += 1;
        if animal.age > spec.max_age {
            animal.kill();
            return;
        }
    }
    let coord = store.animal(id).coord.expect("live animal owns a coordinate");

    if spec.day_active {
        act_day_active(id, spec, coord, current, next, store, ctx, rng);
    } else {
        act_hunter(id, spec, coord, current, next, store, ctx, rng);
    }
}

/// Grazers forage in daylight and sleep through the night.
#[allow(clippy::too_many_arguments)]
fn act_day_active<R: Rng>(
    id: AnimalId,
    spec: &SpeciesSpec,
    coord: Coordinate,
    current: &Field,
    next: &mut Field,
    store: &mut OrganismStore,
    ctx: &ActCtx<'_>,
    rng: &mut R,
) {
    if !ctx.clock.is_daytime() {
        // Asleep: the disease still takes its reduced toll.
        if store.animal(id).infected && rng.chance(spec.resting_disease_mortality) {
            store.animal_mut(id).kill();
            return;
        }
        next.place_animal(id, coord);
        return;
    }

    let mut free = next.free_adjacent_coordinates(coord, store, rng);

    if starve(id, store) {
        return;
    }
    if disease_course(id, spec, spec.disease_mortality, store, rng) {
        return;
    }
    if !free.is_empty() {
        give_birth(id, spec, coord, next, store, rng);
    }

    let fed = find_food(id, spec, coord, current, store, ctx, rng);
    let willing = rng.chance(ctx.weather.prey_movement_modifier());
    let destination = match fed {
        // A successful meal is taken regardless of the movement roll.
        Some(meal) => Some(meal),
        None if willing && !free.is_empty() => Some(free.remove(0)),
        None if willing => None,
        None => {
            // Held in place by the weather.
            next.place_animal(id, coord);
            return;
        }
    };
    settle(id, destination, next, store);
}

/// Hunters are on the prowl around the clock, but a failed movement roll
/// keeps them resting in place for the tick.
#[allow(clippy::too_many_arguments)]
fn act_hunter<R: Rng>(
    id: AnimalId,
    spec: &SpeciesSpec,
    coord: Coordinate,
    current: &Field,
    next: &mut Field,
    store: &mut OrganismStore,
    ctx: &ActCtx<'_>,
    rng: &mut R,
) {
    if starve(id, store) {
        return;
    }

    let mut free = next.free_adjacent_coordinates(coord, store, rng);
    if !rng.chance(ctx.weather.predator_movement_modifier()) {
        next.place_animal(id, coord);
        return;
    }

    if disease_course(id, spec, spec.disease_mortality, store, rng) {
        return;
    }
    if !free.is_empty() {
        give_birth(id, spec, coord, next, store, rng);
    }

    let destination = match find_food(id, spec, coord, current, store, ctx, rng) {
        Some(meal) => Some(meal),
        None if !free.is_empty() => Some(free.remove(0)),
        None => None,
    };
    settle(id, destination, next, store);
}

/// One step hungrier; returns true if the animal starved.
fn starve(id: AnimalId, store: &mut OrganismStore) -> bool {
    let animal = store.animal_mut(id);
    animal.food_level -= 1;
    if animal.food_level <= 0 {
        animal.kill();
        return true;
    }
    false
}

/// Catch the disease, or succumb to it; returns true if the animal died.
fn disease_course<R: Rng>(
    id: AnimalId,
    spec: &SpeciesSpec,
    mortality: f64,
    store: &mut OrganismStore,
    rng: &mut R,
) -> bool {
    let animal = store.animal_mut(id);
    if !animal.infected && rng.chance(spec.infection_probability) {
        animal.infected = true;
    }
    if animal.infected && rng.chance(mortality) {
        animal.kill();
        return true;
    }
    false
}

/// Move to the chosen cell, or die of overcrowding when there is none.
fn settle(
    id: AnimalId,
    destination: Option<Coordinate>,
    next: &mut Field,
    store: &mut OrganismStore,
) {
    match destination {
        Some(coord) => {
            store.animal_mut(id).coord = Some(coord);
            next.place_animal(id, coord);
        }
        None => store.animal_mut(id).kill(),
    }
}

/// Mate with the first live adjacent animal of the same species and
/// opposite sex. The disease may jump across the pairing (one direction at
/// most), and each offspring lands on its own free adjacent cell in `next`.
fn give_birth<R: Rng>(
    id: AnimalId,
    spec: &SpeciesSpec,
    coord: Coordinate,
    next: &mut Field,
    store: &mut OrganismStore,
    rng: &mut R,
) {
    let Some(mate) = find_breeding_mate(id, coord, next, store, rng) else {
        return;
    };

    let actor_infected = store.animal(id).infected;
    let mate_infected = store.animal(mate).infected;
    if actor_infected && !mate_infected {
        if rng.chance(spec.transmission_probability) {
            store.animal_mut(mate).infected = true;
        }
    } else if !actor_infected && mate_infected && rng.chance(spec.transmission_probability) {
        store.animal_mut(id).infected = true;
    }

    let births = litter_size(store.animal(id).age, spec, rng);
    if births == 0 {
        return;
    }

    let infectious_pair = store.animal(id).infected || store.animal(mate).infected;
    let species = store.animal(id).species;
    let mut cradles = next.free_adjacent_coordinates(coord, store, rng);
    for _ in 0..births {
        if cradles.is_empty() {
            break;
        }
        let cradle = cradles.remove(0);
        let mut young = Animal::newborn(species, cradle, rng);
        if infectious_pair && rng.chance(DISEASE_INHERIT_PROBABILITY) {
            young.infected = true;
        }
        let young_id = store.insert_animal(young);
        next.place_animal(young_id, cradle);
    }
}

fn find_breeding_mate<R: Rng>(
    id: AnimalId,
    coord: Coordinate,
    next: &Field,
    store: &OrganismStore,
    rng: &mut R,
) -> Option<AnimalId> {
    let actor = store.animal(id);
    for candidate_coord in next.adjacent_coordinates(coord, rng) {
        if let Some(candidate_id) = next.animal_at(candidate_coord) {
            let candidate = store.animal(candidate_id);
            if candidate.alive && candidate.species == actor.species && candidate.sex != actor.sex
            {
                return Some(candidate_id);
            }
        }
    }
    None
}

fn litter_size<R: Rng>(age: u32, spec: &SpeciesSpec, rng: &mut R) -> u32 {
    if age >= spec.breeding_age && rng.chance(spec.breeding_probability) {
        rng.between(1, spec.max_litter_size)
    } else {
        0
    }
}

/// Search the shuffled neighborhood of the current field for the first
/// acceptable live food item; the kill roll is gated by the weather. A
/// meal resets the hunger counter and marks the cell as the destination.
#[allow(clippy::too_many_arguments)]
fn find_food<R: Rng>(
    id: AnimalId,
    spec: &SpeciesSpec,
    coord: Coordinate,
    current: &Field,
    store: &mut OrganismStore,
    ctx: &ActCtx<'_>,
    rng: &mut R,
) -> Option<Coordinate> {
    let adjacent = current.adjacent_coordinates(coord, rng);
    match spec.diet {
        Diet::Grazer => {
            let modifier = ctx.weather.feeding_modifier();
            for cell in adjacent {
                let Some(plant_id) = current.plant_at(cell) else {
                    continue;
                };
                if !store.plant(plant_id).alive {
                    continue;
                }
                if rng.chance(modifier) {
                    store.plant_mut(plant_id).kill();
                    store.animal_mut(id).food_level = spec.food_value;
                    return Some(cell);
                }
            }
            None
        }
        Diet::Hunter(accepted) => {
            let modifier = ctx.weather.hunting_modifier();
            for cell in adjacent {
                let Some(prey_id) = current.animal_at(cell) else {
                    continue;
                };
                let prey = store.animal(prey_id);
                if !prey.alive || !accepted.contains(&prey.species) {
                    continue;
                }
                if rng.chance(modifier) {
                    store.animal_mut(prey_id).kill();
                    store.animal_mut(id).food_level = spec.food_value;
                    return Some(cell);
                }
            }
            None
        }
    }
}

use rand::Rng;

use crate::field::{Coordinate, Field};
use crate::organism::{OrganismStore, Plant, PlantId};
use crate::rng::RollExt;
use crate::species::PlantSpec;

use super::ActCtx;

/// Run one frond's tick: age out, drop new fronds onto free neighboring
/// cells, and keep the current cell if nobody claimed it first. Algae
/// never move and never sicken.
pub fn act_plant<R: Rng>(
    id: PlantId,
    spec: &PlantSpec,
    _current: &Field,
    next: &mut Field,
    store: &mut OrganismStore,
    ctx: &ActCtx<'_>,
    rng: &mut R,
) {
    // Grazed earlier in this step.
    if !store.plant(id).alive {
        return;
    }

    {
        let plant = store.plant_mut(id);
        plant.age += 1;
        if plant.age > spec.max_age {
            plant.kill();
            return;
        }
    }
    let coord = store.plant(id).coord.expect("live plant owns a coordinate");

    let free = next.free_adjacent_coordinates(coord, store, rng);
    if !free.is_empty() {
        grow(id, spec, coord, next, store, ctx, rng);
    }
    // Stay rooted, unless a newcomer took the cell in the next buffer.
    if next.is_free(coord, store) {
        next.place_plant(id, coord);
    } else {
        store.plant_mut(id).kill();
    }
}

/// Litter roll scaled by the weather's growth modifier; each new frond
/// takes its own free cell.
#[allow(clippy::too_many_arguments)]
fn grow<R: Rng>(
    id: PlantId,
    spec: &PlantSpec,
    coord: Coordinate,
    next: &mut Field,
    store: &mut OrganismStore,
    ctx: &ActCtx<'_>,
    rng: &mut R,
) {
    let litter = litter_size(store.plant(id).age, spec, rng);
    let sprouts = (litter as f64 * ctx.weather.growth_modifier()) as u32;
    let mut beds = next.free_adjacent_coordinates(coord, store, rng);
    for _ in 0..sprouts {
        if beds.is_empty() {
            break;
        }
        let bed = beds.remove(0);
        let sprout_id = store.insert_plant(Plant::sprout(bed));
        next.place_plant(sprout_id, bed);
    }
}

fn litter_size<R: Rng>(age: u32, spec: &PlantSpec, rng: &mut R) -> u32 {
    if age >= spec.growth_age && rng.chance(spec.growth_probability) {
        rng.between(1, spec.max_litter_size)
    } else {
        0
    }
}

//! Wave lifecycle — clearing a wave restores a life and respawns the
//! fleet one notch lower.

use invaders_core::constants::*;

use crate::world::GameWorld;

/// If the whole fleet is dead: give back one lost life (capped), raise
/// the spawn baseline by one step (capped), and respawn all 55 invaders
/// with default direction and bottom-row-only firing rights.
///
/// Returns whether a respawn happened.
pub fn check_wave_cleared(world: &mut GameWorld) -> bool {
    if world.fleet.iter().any(|inv| inv.alive()) {
        return false;
    }

    if world.defender.vitals.health < DEFENDER_MAX_HEALTH {
        world.defender.vitals.health += 1;
    }

    let mut start_y = world.fleet[0].start_y;
    if start_y < WAVE_START_Y_CAP {
        start_y += WAVE_START_Y_STEP;
    }

    log::info!("wave cleared, fleet respawns at y={start_y}");
    world.respawn_fleet(start_y);
    true
}

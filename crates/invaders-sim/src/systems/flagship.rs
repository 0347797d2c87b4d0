//! Flagship deployment and traversal.

use invaders_core::constants::*;
use invaders_core::events::AudioCue;
use invaders_core::types::Position;

use crate::world::GameWorld;

/// While the flagship is inactive, accumulate the spawn clock and
/// deploy at the period. While alive, traverse left-to-right and
/// deactivate past the exit bound. The alarm cue replays on its own
/// clock so the frontend doesn't loop it continuously.
pub fn run(
    world: &mut GameWorld,
    spawn_timer: &mut f64,
    alarm_timer: &mut f64,
    dt: f64,
    cues: &mut Vec<AudioCue>,
) {
    let ship = &mut world.flagship;

    if !ship.alive() {
        *spawn_timer += dt;
        if *spawn_timer >= FLAGSHIP_SPAWN_PERIOD_SECS {
            log::debug!("flagship deployed");
            ship.vitals.restore(1);
            ship.pos = Position::new(FLAGSHIP_ENTRY_X, FLAGSHIP_CRUISE_Y);
            *spawn_timer = 0.0;
        }
        return;
    }

    if ship.pos.x > FLAGSHIP_EXIT_X {
        // Escaped off the right edge; alive toggles independently of
        // health here.
        ship.vitals.alive = false;
        return;
    }

    ship.pos.x += FLAGSHIP_SPEED * dt as f32;

    *alarm_timer += dt;
    if *alarm_timer >= FLAGSHIP_ALARM_PERIOD_SECS {
        cues.push(AudioCue::FlagshipAlarm);
        *alarm_timer = 0.0;
    }
}

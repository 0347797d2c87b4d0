//! Defender control — movement, firing, and the respawn window.

use invaders_core::constants::*;
use invaders_core::enums::GameAction;
use invaders_core::events::AudioCue;

use crate::world::GameWorld;

/// Apply the latched action to the defender and count down the respawn
/// window. `Shoot` is consumed (one bullet per press); movement actions
/// stay latched while the key is held.
pub fn run(
    world: &mut GameWorld,
    action: &mut GameAction,
    respawn_timer: &mut f64,
    dt: f64,
    cues: &mut Vec<AudioCue>,
) {
    if world.defender.respawning {
        *respawn_timer += dt;
        if *respawn_timer >= RESPAWN_DELAY_SECS {
            world.defender.respawning = false;
            *respawn_timer = 0.0;
        }
    }

    match *action {
        GameAction::Right => {
            if world.defender.pos.x < DEFENDER_MAX_X {
                world.defender.pos.x += DEFENDER_SPEED_RIGHT * dt as f32;
            }
        }
        GameAction::Left => {
            if world.defender.pos.x > DEFENDER_MIN_X {
                world.defender.pos.x -= DEFENDER_SPEED_LEFT * dt as f32;
            }
        }
        GameAction::Shoot => {
            *action = GameAction::None;
            if !world.player_bullet.alive {
                let x = world.defender.pos.x + DEFENDER_FIRE_OFFSET_X;
                let y = world.defender.pos.y;
                world.player_bullet.fire(x, y);
                cues.push(AudioCue::PlayerFire);
            }
        }
        _ => {}
    }
}

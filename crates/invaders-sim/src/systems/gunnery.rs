//! Enemy fire scheduler.
//!
//! Firing rights cascade bottom-up per column as invaders die; each
//! shootable, alive invader then rolls one uniform draw per pooled
//! bullet slot. A slot fires when the draw lands on the sentinel and
//! the slot is inactive — a per-slot Bernoulli process with expected
//! rate 1/odds per tick. One persistent RNG stream keeps the draws
//! uncorrelated and the run reproducible under a fixed seed.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use invaders_core::constants::*;
use invaders_core::events::AudioCue;

use crate::world::GameWorld;

pub fn run(world: &mut GameWorld, rng: &mut ChaCha8Rng, shoot_odds: u32, cues: &mut Vec<AudioCue>) {
    // Column-wise activation cascade: an invader inherits firing rights
    // when the one directly below is dead and was shootable.
    for i in 0..FLEET_SIZE - FLEET_COLS {
        let below = i + FLEET_COLS;
        if world.fleet[below].can_shoot && !world.fleet[below].alive() {
            world.fleet[i].can_shoot = true;
        }
    }

    for i in 0..FLEET_SIZE {
        if !world.fleet[i].can_shoot || !world.fleet[i].alive() {
            continue;
        }

        for slot in 0..world.enemy_bullets.len() {
            let draw: u32 = rng.gen_range(0..=shoot_odds);
            if draw == SHOOT_SENTINEL && !world.enemy_bullets[slot].alive {
                let x = world.fleet[i].pos.x + ENEMY_FIRE_OFFSET_X;
                let y = world.fleet[i].pos.y + ENEMY_FIRE_OFFSET_Y;
                world.enemy_bullets[slot].fire(x, y);
                cues.push(AudioCue::EnemyFire);
            }
        }
    }
}

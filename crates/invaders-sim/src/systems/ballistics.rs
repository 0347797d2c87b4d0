//! Bullet advancement and the missed-shot penalty.

use invaders_core::constants::*;

use crate::world::GameWorld;

pub fn run(world: &mut GameWorld, dt: f64) {
    let dt = dt as f32;

    world.player_bullet.advance(PLAYER_BULLET_SPEED * dt);

    // A shot that left the screen without hitting anything resets the
    // score multiplier.
    if world.player_bullet.missed {
        world.defender.multiplier = 1;
        world.player_bullet.missed = false;
    }

    for bullet in &mut world.enemy_bullets {
        bullet.advance(ENEMY_BULLET_SPEED * dt);
    }
}

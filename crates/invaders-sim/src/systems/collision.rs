//! Collision resolution — axis-aligned overlap tests between bullets
//! and the five actor categories.
//!
//! Each pass deactivates a consumed bullet immediately, so a bullet
//! resolves at most one hit per tick; later passes see it inactive and
//! skip it.

use invaders_core::constants::*;
use invaders_core::events::AudioCue;
use invaders_core::types::Position;

use crate::world::GameWorld;

/// Asymmetric-inflation AABB test: the target box is its half-extents,
/// the bullet contributes a fixed slack approximating its width.
fn bullet_overlaps(target: Position, w: f32, h: f32, bullet: Position) -> bool {
    target.x + w >= bullet.x
        && target.x <= bullet.x + BULLET_SLACK
        && target.y + h >= bullet.y
        && target.y <= bullet.y + BULLET_SLACK
}

/// Player bullet vs. the fleet: first overlapping alive invader is
/// destroyed, scored with the multiplier, and consumes the bullet.
pub fn player_bullet_vs_fleet(
    world: &mut GameWorld,
    cues: &mut Vec<AudioCue>,
    explosions: &mut Vec<Position>,
) {
    if !world.player_bullet.alive {
        return;
    }

    for i in 0..world.fleet.len() {
        if !world.fleet[i].alive() {
            continue;
        }
        if bullet_overlaps(
            world.fleet[i].pos,
            ALIEN_BOX_W,
            ALIEN_BOX_H,
            world.player_bullet.pos,
        ) {
            explosions.push(world.fleet[i].pos);
            world.fleet[i].vitals.damage();
            world.player_bullet.deactivate();
            cues.push(AudioCue::InvaderHit);

            let points = world.fleet[i].kind.point_value() * world.defender.multiplier;
            world.defender.score += points;
            world.defender.multiplier += 1;
            return;
        }
    }
}

/// Enemy bullets vs. the defender. A respawning defender is not
/// targetable. A hit costs one life, resets the multiplier, snaps the
/// defender back to its spawn column, and opens the respawn window.
pub fn enemy_bullets_vs_defender(
    world: &mut GameWorld,
    respawn_timer: &mut f64,
    cues: &mut Vec<AudioCue>,
    explosions: &mut Vec<Position>,
) {
    for i in 0..world.enemy_bullets.len() {
        if world.defender.respawning || !world.defender.vitals.alive {
            return;
        }
        if !world.enemy_bullets[i].alive {
            continue;
        }
        if bullet_overlaps(
            world.defender.pos,
            DEFENDER_BOX_W,
            DEFENDER_BOX_H,
            world.enemy_bullets[i].pos,
        ) {
            world.enemy_bullets[i].deactivate();
            explosions.push(world.defender.pos);
            cues.push(AudioCue::PlayerHit);

            world.defender.vitals.damage();
            world.defender.multiplier = 1;
            world.defender.respawning = true;
            *respawn_timer = 0.0;
            world.defender.pos.x = DEFENDER_SPAWN_X;
        }
    }
}

/// Both bullet kinds vs. the barriers. A friendly hit additionally
/// resets the multiplier (shooting your own cover is penalized).
pub fn bullets_vs_barriers(
    world: &mut GameWorld,
    cues: &mut Vec<AudioCue>,
    explosions: &mut Vec<Position>,
) {
    for b in 0..world.barriers.len() {
        if !world.barriers[b].vitals.alive {
            continue;
        }

        for i in 0..world.enemy_bullets.len() {
            if !world.enemy_bullets[i].alive || !world.barriers[b].vitals.alive {
                continue;
            }
            if bullet_overlaps(
                world.barriers[b].pos,
                BARRIER_BOX_W,
                BARRIER_BOX_H,
                world.enemy_bullets[i].pos,
            ) {
                world.enemy_bullets[i].deactivate();
                explosions.push(world.barriers[b].pos);
                world.barriers[b].vitals.damage();
                cues.push(AudioCue::BarrierHit);
            }
        }

        if world.player_bullet.alive
            && world.barriers[b].vitals.alive
            && bullet_overlaps(
                world.barriers[b].pos,
                BARRIER_BOX_W,
                BARRIER_BOX_H,
                world.player_bullet.pos,
            )
        {
            world.player_bullet.deactivate();
            explosions.push(world.barriers[b].pos);
            world.barriers[b].vitals.damage();
            world.defender.multiplier = 1;
            cues.push(AudioCue::BarrierHit);
        }
    }
}

/// Player bullet vs. the flagship: fixed bonus score, multiplier-scaled.
pub fn player_bullet_vs_flagship(
    world: &mut GameWorld,
    cues: &mut Vec<AudioCue>,
    explosions: &mut Vec<Position>,
) {
    if !world.player_bullet.alive || !world.flagship.alive() {
        return;
    }

    if bullet_overlaps(
        world.flagship.pos,
        FLAGSHIP_BOX_W,
        FLAGSHIP_BOX_H,
        world.player_bullet.pos,
    ) {
        explosions.push(world.flagship.pos);
        world.flagship.vitals.damage();
        world.player_bullet.deactivate();
        cues.push(AudioCue::FlagshipHit);

        let points = world.flagship.kind.point_value() * world.defender.multiplier;
        world.defender.score += points;
        world.defender.multiplier += 1;
    }
}

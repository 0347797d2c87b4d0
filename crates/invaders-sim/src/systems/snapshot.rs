//! Snapshot construction — project the world into the per-tick view
//! the render/audio layer consumes.

use invaders_core::enums::GameState;
use invaders_core::events::AudioCue;
use invaders_core::state::{
    BarrierView, BulletView, DefenderView, FlagshipView, GameSnapshot, InvaderView,
};
use invaders_core::types::{Position, SimTime};

use crate::world::GameWorld;

pub fn build(
    world: &GameWorld,
    time: SimTime,
    state: GameState,
    audio_cues: Vec<AudioCue>,
    explosions: Vec<Position>,
) -> GameSnapshot {
    GameSnapshot {
        time,
        state,
        defender: DefenderView {
            pos: world.defender.pos,
            score: world.defender.score,
            multiplier: world.defender.multiplier,
            lives: world.defender.vitals.health,
            visible: world.defender.vitals.alive && !world.defender.respawning,
        },
        invaders: world
            .fleet
            .iter()
            .map(|inv| InvaderView {
                kind: inv.kind,
                pos: inv.pos,
                alive: inv.alive(),
            })
            .collect(),
        flagship: FlagshipView {
            pos: world.flagship.pos,
            alive: world.flagship.alive(),
        },
        player_bullet: BulletView {
            pos: world.player_bullet.pos,
            alive: world.player_bullet.alive,
        },
        enemy_bullets: world
            .enemy_bullets
            .iter()
            .map(|b| BulletView {
                pos: b.pos,
                alive: b.alive,
            })
            .collect(),
        barriers: world
            .barriers
            .iter()
            .map(|b| BarrierView {
                pos: b.pos,
                stage: b.stage(),
                alive: b.vitals.alive,
            })
            .collect(),
        explosions,
        audio_cues,
    }
}

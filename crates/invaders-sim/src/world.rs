//! The fixed game topology and its spawn/reset factories.
//!
//! There is no entity abstraction: the game has exactly one defender,
//! one player bullet, a 55-invader fleet, a 5-slot enemy bullet pool,
//! three barriers, and one flagship.

use invaders_core::actors::{Barrier, Bullet, Defender, Invader};
use invaders_core::constants::*;
use invaders_core::enums::InvaderKind;
use invaders_core::types::Position;

/// All actors owned by the simulation engine.
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub defender: Defender,
    pub player_bullet: Bullet,
    /// Row-major 5x11 grid; index = row * 11 + col. Dead invaders stay
    /// in place (frozen) until the wave respawns.
    pub fleet: Vec<Invader>,
    /// Pooled enemy bullets, reused round-robin by the fire scheduler.
    pub enemy_bullets: Vec<Bullet>,
    pub barriers: Vec<Barrier>,
    /// The bonus ship. Starts inactive; the deploy system wakes it.
    pub flagship: Invader,
}

impl GameWorld {
    pub fn new() -> Self {
        let mut flagship = Invader::new(InvaderKind::Flagship, FLAGSHIP_ENTRY_X, FLAGSHIP_CRUISE_Y);
        flagship.vitals.alive = false;

        Self {
            defender: Defender::default(),
            player_bullet: Bullet::default(),
            fleet: spawn_fleet(FLEET_BASE_START_Y),
            enemy_bullets: vec![Bullet::default(); ENEMY_BULLET_POOL],
            barriers: spawn_barriers(),
            flagship,
        }
    }

    /// Respawn the full grid at the given baseline: everyone alive,
    /// default direction, bottom row shootable.
    pub fn respawn_fleet(&mut self, start_y: f32) {
        self.fleet = spawn_fleet(start_y);
    }

    /// Restore every actor for a brand-new game.
    pub fn reset_round(&mut self) {
        self.defender = Defender::default();
        self.player_bullet = Bullet::default();
        self.respawn_fleet(FLEET_BASE_START_Y);
        for bullet in &mut self.enemy_bullets {
            *bullet = Bullet::default();
        }
        for barrier in &mut self.barriers {
            barrier.reset();
        }
        self.flagship.vitals.alive = false;
        self.flagship.pos = Position::new(FLAGSHIP_ENTRY_X, FLAGSHIP_CRUISE_Y);
    }
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the 5x11 grid at the given baseline y. The top two rows are
/// the elite variant with a small x nudge; only the bottom row starts
/// shootable.
pub fn spawn_fleet(start_y: f32) -> Vec<Invader> {
    let mut fleet = Vec::with_capacity(FLEET_SIZE);
    for row in 0..FLEET_ROWS {
        for col in 0..FLEET_COLS {
            let index = row * FLEET_COLS + col;
            let kind = if row < ELITE_ROWS {
                InvaderKind::Elite
            } else {
                InvaderKind::Grunt
            };

            let mut x = FLEET_ORIGIN_X + col as f32 * FLEET_COL_PITCH;
            if kind == InvaderKind::Elite {
                x += ELITE_X_OFFSET;
            }
            let y = start_y + row as f32 * FLEET_ROW_PITCH;

            let mut invader = Invader::new(kind, x, y);
            invader.start_y = start_y;
            invader.can_shoot = index >= FLEET_SIZE - FLEET_COLS;
            fleet.push(invader);
        }
    }
    fleet
}

fn spawn_barriers() -> Vec<Barrier> {
    (0..BARRIER_COUNT)
        .map(|i| Barrier::new(BARRIER_ORIGIN_X + i as f32 * BARRIER_PITCH, BARRIER_Y))
        .collect()
}

//! Actor data for the fixed game topology.
//!
//! There is no inheritance tree here: every destructible actor embeds
//! [`Vitals`] by composition, and the invader/flagship split is a
//! [`InvaderKind`] variant rather than a subclass. Game logic lives in
//! the simulation systems; actors carry only their own lifecycle rules.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{BarrierStage, InvaderKind};
use crate::types::Position;

/// Shared alive/health state for destructible actors.
///
/// `alive` is false iff health reached zero or the actor was explicitly
/// deactivated (bullets and the flagship toggle `alive` independently of
/// health). Health never underflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub health: u32,
    pub alive: bool,
}

impl Vitals {
    pub fn new(health: u32) -> Self {
        Self {
            health,
            alive: health > 0,
        }
    }

    /// Remove one point of health. A no-op on a dead actor; clears
    /// `alive` when health reaches zero.
    pub fn damage(&mut self) {
        if !self.alive {
            return;
        }
        self.health = self.health.saturating_sub(1);
        if self.health == 0 {
            self.alive = false;
        }
    }

    /// Restore to full strength at the given health.
    pub fn restore(&mut self, health: u32) {
        self.health = health;
        self.alive = health > 0;
    }
}

/// A projectile. The defender owns conceptually one; the enemy side uses
/// a fixed pool reused round-robin. Inactive bullets are parked
/// off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Position,
    pub alive: bool,
    /// Set when the bullet expired off-screen without hitting anything.
    pub missed: bool,
}

impl Default for Bullet {
    fn default() -> Self {
        Self {
            pos: Position::new(BULLET_PARK_X, BULLET_PARK_Y),
            alive: false,
            missed: false,
        }
    }
}

impl Bullet {
    /// Activate the bullet at the firing position.
    pub fn fire(&mut self, x: f32, y: f32) {
        self.pos = Position::new(x, y);
        self.alive = true;
    }

    /// Move a live bullet by `dy` pixels. Leaving the vertical band
    /// deactivates it and marks it missed; a dead bullet is re-parked.
    pub fn advance(&mut self, dy: f32) {
        if self.pos.y < BULLET_MIN_Y || self.pos.y > BULLET_MAX_Y {
            self.alive = false;
            self.missed = true;
        }

        if self.alive {
            self.pos.y += dy;
        } else {
            self.pos = Position::new(BULLET_PARK_X, BULLET_PARK_Y);
        }
    }

    /// Deactivate after a hit. Idempotent; `missed` is left untouched.
    pub fn deactivate(&mut self) {
        self.alive = false;
    }
}

/// The player's cannon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Defender {
    pub vitals: Vitals,
    pub pos: Position,
    pub score: u32,
    /// Score multiplier, always >= 1. Grows with consecutive hits,
    /// resets on any miss or friendly-barrier hit.
    pub multiplier: u32,
    /// True during the post-hit invulnerability window; the defender is
    /// neither rendered nor targetable while respawning.
    pub respawning: bool,
}

impl Default for Defender {
    fn default() -> Self {
        Self {
            vitals: Vitals::new(DEFENDER_MAX_HEALTH),
            pos: Position::new(DEFENDER_SPAWN_X, DEFENDER_SPAWN_Y),
            score: 0,
            multiplier: 1,
            respawning: false,
        }
    }
}

/// One invader. Grid members are `Grunt`/`Elite`; the bonus ship is the
/// single `Flagship` instance owned separately by the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Invader {
    pub kind: InvaderKind,
    pub vitals: Vitals,
    pub pos: Position,
    /// Signed horizontal step per swarm step; negated on reversal.
    pub direction: f32,
    /// Spawn row baseline, raised each cleared wave (capped).
    pub start_y: f32,
    /// Whether this invader may fire. Propagates up a column as the
    /// invaders below it die.
    pub can_shoot: bool,
}

impl Invader {
    pub fn new(kind: InvaderKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            vitals: Vitals::new(1),
            pos: Position::new(x, y),
            direction: FLEET_INITIAL_DIRECTION,
            start_y: FLEET_BASE_START_Y,
            can_shoot: false,
        }
    }

    pub fn alive(&self) -> bool {
        self.vitals.alive
    }
}

/// A defensive barrier. Its sprite variant is a pure function of health.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Barrier {
    pub vitals: Vitals,
    pub pos: Position,
}

impl Barrier {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            vitals: Vitals::new(BARRIER_MAX_HEALTH),
            pos: Position::new(x, y),
        }
    }

    /// Map current health onto the sprite variant the render layer
    /// should show.
    pub fn stage(&self) -> BarrierStage {
        match self.vitals.health {
            3.. => BarrierStage::Intact,
            2 => BarrierStage::Damaged,
            1 => BarrierStage::Critical,
            0 => BarrierStage::Destroyed,
        }
    }

    /// Restore to full health for a new round.
    pub fn reset(&mut self) {
        self.vitals.restore(BARRIER_MAX_HEALTH);
    }
}

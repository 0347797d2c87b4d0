//! Simulation engine — the core of the game.
//!
//! `InvadersEngine` owns every actor, the game-state machine, the RNG,
//! and all timing accumulators. Completely headless (no render or audio
//! dependency), enabling deterministic testing: the same seed and the
//! same `dt` sequence reproduce the same run.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use invaders_core::constants::{BASE_SHOOT_ODDS, SWARM_BASE_STEP_SECS};
use invaders_core::enums::{GameAction, GameState, Key, KeyEdge};
use invaders_core::events::AudioCue;
use invaders_core::input;
use invaders_core::state::GameSnapshot;
use invaders_core::types::{Position, SimTime};

use crate::systems;
use crate::world::GameWorld;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for the enemy fire scheduler. Same seed = same run.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns all actors and sim state.
pub struct InvadersEngine {
    world: GameWorld,
    state: GameState,
    /// Last-action-wins latch fed by the input translation.
    action: GameAction,
    time: SimTime,
    rng: ChaCha8Rng,

    // --- Current speed tier ---
    step_secs: f64,
    shoot_odds: u32,

    // --- Accumulators (all dt-driven) ---
    swarm_accumulator: f64,
    respawn_timer: f64,
    flagship_spawn_timer: f64,
    alarm_timer: f64,

    // --- Per-tick output buffers ---
    audio_cues: Vec<AudioCue>,
    explosions: Vec<Position>,
}

impl InvadersEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: GameWorld::new(),
            state: GameState::default(),
            action: GameAction::default(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            step_secs: SWARM_BASE_STEP_SECS,
            shoot_odds: BASE_SHOOT_ODDS,
            swarm_accumulator: 0.0,
            respawn_timer: 0.0,
            flagship_spawn_timer: 0.0,
            alarm_timer: 0.0,
            audio_cues: Vec::new(),
            explosions: Vec::new(),
        }
    }

    /// Feed one key edge through the state-aware translation table and
    /// latch the resulting action for the next tick.
    pub fn handle_key(&mut self, key: Key, edge: KeyEdge) {
        self.action = input::translate(
            self.state,
            self.action,
            key,
            edge,
            self.world.defender.respawning,
        );
    }

    /// Latch an already-translated action (frontends that do their own
    /// mapping, and tests).
    pub fn set_action(&mut self, action: GameAction) {
        self.action = action;
    }

    /// Advance the simulation by one tick of `dt` seconds and return
    /// the resulting snapshot.
    pub fn tick(&mut self, dt: f64) -> GameSnapshot {
        self.process_action();

        if self.state == GameState::Playing {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let audio_cues = std::mem::take(&mut self.audio_cues);
        let explosions = std::mem::take(&mut self.explosions);
        systems::snapshot::build(&self.world, self.time, self.state, audio_cues, explosions)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    /// Mutable world access for test scenarios.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut GameWorld {
        &mut self.world
    }

    /// Drive the state machine with the latched action. One-shot
    /// actions (everything except Left/Right) are consumed here or by
    /// the defender system; movement stays latched while held.
    fn process_action(&mut self) {
        match self.action {
            GameAction::Exit => {
                self.transition(GameState::Exit);
                self.action = GameAction::None;
            }
            GameAction::Return => {
                self.transition(GameState::MainMenu);
                self.action = GameAction::None;
            }
            GameAction::Play => {
                self.reset_round();
                self.transition(GameState::Playing);
                self.action = GameAction::None;
            }
            GameAction::Options => {
                self.transition(GameState::Options);
                self.action = GameAction::None;
            }
            GameAction::Pause => {
                match self.state {
                    GameState::Playing => self.transition(GameState::Pause),
                    GameState::Pause => self.transition(GameState::Playing),
                    _ => {}
                }
                self.action = GameAction::None;
            }
            // Left/Right/Shoot are handled by the defender system.
            _ => {}
        }

        // Defender death overrides any pending action, every tick.
        if self.state == GameState::Playing && !self.world.defender.vitals.alive {
            self.transition(GameState::GameOver);
        }
    }

    fn transition(&mut self, next: GameState) {
        if self.state != next {
            log::info!("state {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    /// Restore the world and the speed tiers for a brand-new game.
    fn reset_round(&mut self) {
        self.world.reset_round();
        self.step_secs = SWARM_BASE_STEP_SECS;
        self.shoot_odds = BASE_SHOOT_ODDS;
        self.swarm_accumulator = 0.0;
        self.respawn_timer = 0.0;
        self.flagship_spawn_timer = 0.0;
        self.alarm_timer = 0.0;
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Defender control: respawn window, movement, firing.
        systems::defender::run(
            &mut self.world,
            &mut self.action,
            &mut self.respawn_timer,
            dt,
            &mut self.audio_cues,
        );
        // 2. Speed/fire tier, re-evaluated from the lead invader's y.
        if let Some((step_secs, shoot_odds)) = systems::swarm::evaluate_tier(self.world.fleet[0].pos.y)
        {
            self.step_secs = step_secs;
            self.shoot_odds = shoot_odds;
        }
        // 3. Swarm movement (discrete steps on the tier interval).
        systems::swarm::run(&mut self.world, &mut self.swarm_accumulator, dt, self.step_secs);
        // 4. Flagship deployment and traversal.
        systems::flagship::run(
            &mut self.world,
            &mut self.flagship_spawn_timer,
            &mut self.alarm_timer,
            dt,
            &mut self.audio_cues,
        );
        // 5. Bullet advancement (and missed-shot multiplier reset).
        systems::ballistics::run(&mut self.world, dt);
        // 6. Enemy fire scheduling.
        systems::gunnery::run(
            &mut self.world,
            &mut self.rng,
            self.shoot_odds,
            &mut self.audio_cues,
        );
        // 7. Collision passes. Order matters only in that a consumed
        //    bullet short-circuits the rest of the tick.
        systems::collision::player_bullet_vs_fleet(
            &mut self.world,
            &mut self.audio_cues,
            &mut self.explosions,
        );
        // 8. Wave-clear check and respawn.
        systems::wave::check_wave_cleared(&mut self.world);
        systems::collision::enemy_bullets_vs_defender(
            &mut self.world,
            &mut self.respawn_timer,
            &mut self.audio_cues,
            &mut self.explosions,
        );
        systems::collision::bullets_vs_barriers(
            &mut self.world,
            &mut self.audio_cues,
            &mut self.explosions,
        );
        systems::collision::player_bullet_vs_flagship(
            &mut self.world,
            &mut self.audio_cues,
            &mut self.explosions,
        );
    }
}

//! Simulation constants and tuning parameters.
//!
//! All values are in screen pixels and seconds unless noted.

// --- Window ---

pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;

// --- Defender ---

/// Defender spawn position.
pub const DEFENDER_SPAWN_X: f32 = 500.0;
pub const DEFENDER_SPAWN_Y: f32 = 675.0;

/// Defender starting lives.
pub const DEFENDER_MAX_HEALTH: u32 = 3;

/// Horizontal movement speeds (px/s). Rightward is faster than leftward,
/// an asymmetry inherited from the original tuning.
pub const DEFENDER_SPEED_RIGHT: f32 = 400.0;
pub const DEFENDER_SPEED_LEFT: f32 = 300.0;

/// Defender x movement clamp: may move right while x < 990, left while x > 10.
pub const DEFENDER_MIN_X: f32 = 10.0;
pub const DEFENDER_MAX_X: f32 = 990.0;

/// Muzzle offset from the defender's x when firing.
pub const DEFENDER_FIRE_OFFSET_X: f32 = 24.0;

/// Invulnerable respawn window after taking a hit (seconds).
pub const RESPAWN_DELAY_SECS: f64 = 1.0;

// --- Bullets ---

/// Player bullet vertical velocity (px/s, negative = upward).
pub const PLAYER_BULLET_SPEED: f32 = -800.0;

/// Enemy bullet vertical velocity (px/s, positive = downward).
pub const ENEMY_BULLET_SPEED: f32 = 650.0;

/// A bullet outside this vertical band deactivates and counts as missed.
pub const BULLET_MIN_Y: f32 = -20.0;
pub const BULLET_MAX_Y: f32 = 700.0;

/// Off-screen parking spot for inactive bullets.
pub const BULLET_PARK_X: f32 = -10.0;
pub const BULLET_PARK_Y: f32 = -10.0;

/// Number of pooled enemy bullets, reused round-robin.
pub const ENEMY_BULLET_POOL: usize = 5;

/// Enemy muzzle offset from the firing invader's position.
pub const ENEMY_FIRE_OFFSET_X: f32 = 15.0;
pub const ENEMY_FIRE_OFFSET_Y: f32 = 5.0;

// --- Fleet geometry ---

pub const FLEET_ROWS: usize = 5;
pub const FLEET_COLS: usize = 11;
pub const FLEET_SIZE: usize = FLEET_ROWS * FLEET_COLS;

/// Top-left spawn corner of the fleet grid.
pub const FLEET_ORIGIN_X: f32 = 300.0;
pub const FLEET_BASE_START_Y: f32 = 100.0;

/// Grid pitch.
pub const FLEET_COL_PITCH: f32 = 50.0;
pub const FLEET_ROW_PITCH: f32 = 40.0;

/// The top two rows (indices < 22) are the elite variant.
pub const ELITE_ROWS: usize = 2;

/// Elite sprites are narrower; their x is nudged to stay centered.
pub const ELITE_X_OFFSET: f32 = 3.0;

/// Initial horizontal step (px per swarm step, sign = direction).
pub const FLEET_INITIAL_DIRECTION: f32 = 10.0;

// --- Swarm movement ---

/// Horizontal bounds that trigger a direction reversal.
pub const SWARM_MIN_X: f32 = 30.0;
pub const SWARM_MAX_X: f32 = 970.0;

/// Vertical descent applied to the whole grid on reversal.
pub const SWARM_DESCENT: f32 = 30.0;

/// Whole-swarm corrective shift applied per out-of-bounds invader.
pub const SWARM_CORRECTION: f32 = 10.0;

/// An alive invader below this line ends the round (swarm reached the
/// defender).
pub const INVASION_LINE_Y: f32 = 620.0;

/// Base interval between discrete swarm steps (seconds). Tightened by
/// the speed tiers as the fleet descends.
pub const SWARM_BASE_STEP_SECS: f64 = 1.2;

/// Base enemy fire odds: one draw in [0, odds] per bullet slot per tick,
/// firing on the sentinel value.
pub const BASE_SHOOT_ODDS: u32 = 20_000;

/// The sentinel a fire draw must hit.
pub const SHOOT_SENTINEL: u32 = 1;

/// Speed/fire tiers keyed on the lead invader's y: (min_y, max_y,
/// step interval secs, shoot odds). Re-evaluated every tick.
pub const SWARM_TIERS: [(f32, f32, f64, u32); 3] = [
    (190.0, 370.0, 0.8, 15_000),
    (370.0, 430.0, 0.4, 10_000),
    (430.0, f32::INFINITY, 0.1, 5_000),
];

// --- Collision boxes ---

/// Half-extent widths/heights used by the overlap test.
pub const ALIEN_BOX_W: f32 = 35.0;
pub const ALIEN_BOX_H: f32 = 20.0;
pub const DEFENDER_BOX_W: f32 = 50.0;
pub const DEFENDER_BOX_H: f32 = 20.0;
pub const BARRIER_BOX_W: f32 = 80.0;
pub const BARRIER_BOX_H: f32 = 50.0;
pub const FLAGSHIP_BOX_W: f32 = 45.0;
pub const FLAGSHIP_BOX_H: f32 = 20.0;

/// Slack added on the bullet side of the overlap test, approximating
/// bullet width.
pub const BULLET_SLACK: f32 = 5.0;

// --- Barriers ---

pub const BARRIER_COUNT: usize = 3;
pub const BARRIER_MAX_HEALTH: u32 = 3;

/// First barrier x and spacing between barriers.
pub const BARRIER_ORIGIN_X: f32 = 200.0;
pub const BARRIER_PITCH: f32 = 300.0;
pub const BARRIER_Y: f32 = 600.0;

// --- Flagship ---

/// Seconds between flagship deployments while it is inactive.
pub const FLAGSHIP_SPAWN_PERIOD_SECS: f64 = 30.0;

/// Flagship traversal speed (px/s, left to right).
pub const FLAGSHIP_SPEED: f32 = 300.0;

/// Entry x and cruise altitude.
pub const FLAGSHIP_ENTRY_X: f32 = -10.0;
pub const FLAGSHIP_CRUISE_Y: f32 = 50.0;

/// The flagship despawns once past this x.
pub const FLAGSHIP_EXIT_X: f32 = 990.0;

/// Alarm cue replay interval while the flagship is alive (seconds).
pub const FLAGSHIP_ALARM_PERIOD_SECS: f64 = 0.75;

// --- Wave lifecycle ---

/// Each cleared wave respawns the fleet 50 px lower, up to the cap.
pub const WAVE_START_Y_STEP: f32 = 50.0;
pub const WAVE_START_Y_CAP: f32 = 450.0;

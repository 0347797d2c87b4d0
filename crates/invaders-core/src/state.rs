//! Game snapshot — the complete visible state handed to the render
//! layer after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{BarrierStage, GameState, InvaderKind};
use crate::events::AudioCue;
use crate::types::{Position, SimTime};

/// Everything the render/audio layer needs for one frame. The
/// simulation owns the actors; collaborators only ever see these views.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub state: GameState,
    pub defender: DefenderView,
    pub invaders: Vec<InvaderView>,
    pub flagship: FlagshipView,
    pub player_bullet: BulletView,
    pub enemy_bullets: Vec<BulletView>,
    pub barriers: Vec<BarrierView>,
    /// Positions where something was destroyed this tick, for one-frame
    /// explosion markers.
    pub explosions: Vec<Position>,
    /// Audio cues emitted this tick, drained on snapshot build.
    pub audio_cues: Vec<AudioCue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefenderView {
    pub pos: Position,
    pub score: u32,
    pub multiplier: u32,
    pub lives: u32,
    /// False while respawning: the defender is not drawn.
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvaderView {
    pub kind: InvaderKind,
    pub pos: Position,
    pub alive: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlagshipView {
    pub pos: Position,
    pub alive: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulletView {
    pub pos: Position,
    pub alive: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarrierView {
    pub pos: Position,
    pub stage: BarrierStage,
    pub alive: bool,
}

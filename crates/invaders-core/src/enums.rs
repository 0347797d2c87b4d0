//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level game state. Drives which inputs are valid and whether the
/// simulation systems run at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    MainMenu,
    Playing,
    Pause,
    Options,
    GameOver,
    /// Terminal: the composing application shuts down the loop.
    Exit,
}

/// Translated input action. The only channel by which input affects the
/// state machine and actor behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    #[default]
    None,
    Left,
    Right,
    Shoot,
    Pause,
    Play,
    Options,
    Return,
    Exit,
}

/// Invader variant. Distinguishes scoring and movement rules; the
/// flagship is a variant, not a subclass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvaderKind {
    /// Bottom three rows of the fleet. 10 points.
    Grunt,
    /// Top two rows: smaller sprite, +3 px x offset. 30 points.
    Elite,
    /// The bonus ship crossing the top of the screen. 200 points.
    Flagship,
}

impl InvaderKind {
    /// Base score awarded for destroying this invader, before the
    /// multiplier is applied.
    pub fn point_value(self) -> u32 {
        match self {
            InvaderKind::Grunt => 10,
            InvaderKind::Elite => 30,
            InvaderKind::Flagship => 200,
        }
    }
}

/// Barrier sprite variant, a pure function of remaining health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarrierStage {
    Intact,
    Damaged,
    Critical,
    Destroyed,
}

/// Physical key reported by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    A,
    D,
    Space,
    P,
    Escape,
    Num1,
    Num2,
    Num3,
}

/// Key edge: the input layer reports discrete state transitions only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEdge {
    Pressed,
    Released,
}

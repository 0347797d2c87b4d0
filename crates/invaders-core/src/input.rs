//! Keyboard-to-action translation.
//!
//! One translation function dispatches on the current [`GameState`],
//! making the state machine the single source of truth for which inputs
//! are valid. Semantics are last-action-wins: a press asserts its
//! action, a release clears back to `None` (movement keys only clear
//! the action they asserted, so overlapping presses behave sanely).

use crate::enums::{GameAction, GameState, Key, KeyEdge};

/// Translate one key edge into the next latched [`GameAction`].
///
/// `current` is the previously latched action; `respawning` gates
/// fire/left-movement while the defender is in its invulnerability
/// window.
pub fn translate(
    state: GameState,
    current: GameAction,
    key: Key,
    edge: KeyEdge,
    respawning: bool,
) -> GameAction {
    match state {
        // Game over and options screens accept only a return to menu.
        GameState::GameOver | GameState::Options => match (key, edge) {
            (Key::Escape, KeyEdge::Pressed) => GameAction::Return,
            (Key::Escape, KeyEdge::Released) => GameAction::None,
            _ => current,
        },

        GameState::MainMenu => match (key, edge) {
            (Key::Num1, KeyEdge::Pressed) => GameAction::Play,
            (Key::Num2, KeyEdge::Pressed) => GameAction::Options,
            (Key::Num3 | Key::Escape, KeyEdge::Pressed) => GameAction::Exit,
            (Key::Num1 | Key::Num2 | Key::Num3 | Key::Escape, KeyEdge::Released) => {
                GameAction::None
            }
            _ => current,
        },

        GameState::Pause => match (key, edge) {
            (Key::P, KeyEdge::Pressed) => GameAction::Pause,
            (Key::P, KeyEdge::Released) => GameAction::None,
            _ => current,
        },

        GameState::Playing => match (key, edge) {
            (Key::Escape, KeyEdge::Pressed) => GameAction::Return,
            (Key::Escape, KeyEdge::Released) => GameAction::None,
            (Key::P, KeyEdge::Pressed) => GameAction::Pause,
            (Key::P, KeyEdge::Released) => GameAction::None,
            (Key::Space, KeyEdge::Pressed) if !respawning => GameAction::Shoot,
            (Key::Space, KeyEdge::Released) => GameAction::None,
            (Key::A, KeyEdge::Pressed) if !respawning => GameAction::Left,
            (Key::A, KeyEdge::Released) if current == GameAction::Left => GameAction::None,
            (Key::D, KeyEdge::Pressed) => GameAction::Right,
            (Key::D, KeyEdge::Released) if current == GameAction::Right => GameAction::None,
            _ => current,
        },

        // Terminal state: input is irrelevant.
        GameState::Exit => current,
    }
}

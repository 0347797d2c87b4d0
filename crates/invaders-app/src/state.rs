//! State shared between the frontend and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use invaders_core::enums::{Key, KeyEdge};
use invaders_core::state::GameSnapshot;

/// Commands sent from the frontend to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A raw keyboard edge; the engine's translation table turns it
    /// into a game action.
    Key(Key, KeyEdge),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// The frontend thread and the game loop thread touch each other only
/// here: the frontend pushes key edges through `command_tx` and reads
/// the latest snapshot; the loop thread writes a fresh snapshot each
/// iteration. This is the seam a frontend binary owns: it constructs
/// one `AppState`, hands `latest_snapshot` to `spawn_game_loop`, and
/// stores the returned sender in `command_tx`.
pub struct AppState {
    /// Channel sender to the game loop thread. `None` until the loop
    /// is spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, replaced wholesale each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

//! Game loop thread — owns the simulation engine and publishes
//! snapshots.
//!
//! The loop is delta-driven: each iteration measures the wall-clock
//! time since the previous one and feeds it to the engine, so the
//! simulation speed is independent of the achieved frame rate. The
//! sleep at the end only paces the loop near the target rate.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use invaders_core::enums::GameState;
use invaders_core::state::GameSnapshot;
use invaders_sim::engine::{InvadersEngine, SimConfig};

use crate::state::GameLoopCommand;

/// Pacing target. The simulation itself is dt-driven and does not
/// depend on this rate being hit.
const TARGET_FRAME_RATE: u64 = 60;

const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TARGET_FRAME_RATE);

/// Spawn the game loop in a new thread.
///
/// Returns the command sender for the frontend plus the join handle;
/// the thread ends when the engine reaches `Exit`, on `Shutdown`, or
/// when every sender is dropped.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
) -> (mpsc::Sender<GameLoopCommand>, thread::JoinHandle<()>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = thread::Builder::new()
        .name("invaders-game-loop".into())
        .spawn(move || {
            run_game_loop(InvadersEngine::new(config), cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    (cmd_tx, handle)
}

fn run_game_loop(
    mut engine: InvadersEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameSnapshot>>,
) {
    log::info!("game loop started");
    let mut last_frame = Instant::now();
    let mut next_frame_time = Instant::now();

    loop {
        // 1. Drain all pending commands into the engine.
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Key(key, edge)) => engine.handle_key(key, edge),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Measure the wall-clock delta and advance one tick.
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;
        let snapshot = engine.tick(dt);
        let exiting = snapshot.state == GameState::Exit;

        // 3. Publish the snapshot for the frontend.
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if exiting {
            log::info!("game loop exiting");
            return;
        }

        // 4. Sleep until the next frame slot.
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral.
            next_frame_time = now;
        }
    }
}

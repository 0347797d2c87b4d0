//! Application shell for the invaders game.
//!
//! Wires the simulation engine to a frontend: the game loop thread owns
//! the engine and publishes snapshots; the frontend (render surface,
//! audio sink, input source) lives behind traits so the simulation
//! never links against a windowing or audio stack.

pub mod frontend;
pub mod game_loop;
pub mod state;

pub use invaders_core as core;

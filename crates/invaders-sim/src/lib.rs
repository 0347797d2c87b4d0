//! Simulation engine for the invaders game.
//!
//! Owns the fixed actor topology, runs per-tick systems driven by a
//! measured wall-clock delta, and produces `GameSnapshot`s for the
//! render layer.

pub mod engine;
pub mod systems;
pub mod world;

pub use engine::{InvadersEngine, SimConfig};
pub use invaders_core as core;

#[cfg(test)]
mod tests;

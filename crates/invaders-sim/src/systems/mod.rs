//! Per-tick systems that operate on the game world.
//!
//! Systems are free functions over `&mut GameWorld`; they own no state.
//! Accumulators and tier settings live in the engine and are threaded
//! through as arguments.

pub mod ballistics;
pub mod collision;
pub mod defender;
pub mod flagship;
pub mod gunnery;
pub mod snapshot;
pub mod swarm;
pub mod wave;

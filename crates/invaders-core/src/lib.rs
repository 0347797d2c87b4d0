//! Core types and definitions for the invaders simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! actor data, enums, constants, audio cues, snapshot views, and the
//! keyboard-to-action translation. It has no dependency on the
//! simulation engine or any runtime framework.

pub mod actors;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

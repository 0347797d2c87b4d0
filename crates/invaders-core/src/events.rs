//! Events emitted by the simulation for the audio collaborator.
//!
//! Cues are fire-and-forget: the simulation never awaits playback and
//! playback failures are not surfaced back. The frontend maps each cue
//! to whatever clip it owns.

use serde::{Deserialize, Serialize};

/// Audio cues drained into each snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioCue {
    /// Defender fired its bullet.
    PlayerFire,
    /// An invader fired a pooled bullet.
    EnemyFire,
    /// The defender took a hit.
    PlayerHit,
    /// A grid invader was destroyed.
    InvaderHit,
    /// A barrier absorbed a bullet.
    BarrierHit,
    /// The flagship was destroyed.
    FlagshipHit,
    /// Periodic alarm while the flagship is crossing.
    FlagshipAlarm,
}

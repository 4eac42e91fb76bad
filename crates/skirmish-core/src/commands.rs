//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Match control ---
    /// Spawn the player and start the wave schedule.
    StartMatch,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Clear the world and go back to the lobby.
    ReturnToLobby,

    // --- Player input ---
    /// Held movement axis. A zero vector stops the player.
    Move { x: f32, y: f32 },
    /// World-space point the player is aiming at.
    Look { x: f32, y: f32 },
    /// Fire immediately, independent of the auto-fire cooldown.
    Attack,
}

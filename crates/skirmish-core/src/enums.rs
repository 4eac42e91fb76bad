//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Coarse ownership tag deciding whether contact damage applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Enemy,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for `StartMatch`.
    #[default]
    Lobby,
    Active,
    Paused,
    /// The player died; the world is frozen until `ReturnToLobby`.
    GameOver,
}

//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::Faction;

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A wave was released.
    WaveSpawned { index: usize, count: u32 },
    /// A weapon launched a projectile.
    ProjectileFired { owner: Faction },
    /// Damage was applied to a victim.
    Hit {
        attacker: Faction,
        victim: Faction,
        shield_absorbed: i32,
        health_lost: i32,
    },
    /// A combatant's health reached zero; it is removed this tick.
    Died { faction: Faction, entity_id: u64 },
    /// A projectile ran out of lifespan without hitting anything.
    ProjectileExpired,
}

//! Game state snapshot: the complete visible state handed to presentation
//! each tick. Read-only from the consumer's side.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{Faction, GamePhase};
use crate::events::SimEvent;
use crate::types::SimTime;

/// Complete game state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// `None` before the match starts and after the player is removed.
    pub player: Option<CombatantView>,
    pub enemies: Vec<CombatantView>,
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<SimEvent>,
    pub score: ScoreView,
}

/// Health/shield bars and placement for one combatant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatantView {
    pub entity_id: u64,
    pub archetype: String,
    pub position: Vec2,
    /// Facing angle in radians, counter-clockwise from +x.
    pub facing: f32,
    pub health: i32,
    pub max_health: i32,
    pub shield: i32,
    pub max_shield: i32,
}

/// An in-flight projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub owner: Faction,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Running score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub enemies_killed: u32,
    pub enemies_spawned: u32,
    pub enemies_total: u32,
    pub projectiles_fired: u32,
    pub survival_secs: f64,
}

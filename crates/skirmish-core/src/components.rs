//! ECS components for hecs entities.
//!
//! Components are plain data. Game logic lives in the combat and movement
//! crates and in the simulation systems.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::Faction;

/// Marks the player-controlled entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks a hostile actor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Archetype name the entity was spawned from (e.g. "melee").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archetype(pub String);

/// Base movement speed handed to the entity's actuator (units/s).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BaseSpeed(pub f32);

/// Circle collider radius. Read by external contact sources only;
/// the simulation never performs its own overlap queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitbox {
    pub radius: f32,
}

/// Movement policy selecting how an AI actor steers relative to its target.
///
/// Policies are plain values with no per-entity state, so one archetype value
/// is shared by every entity spawned from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MovementStrategy {
    /// Close in until within `stop_distance`, then hold.
    MeleeApproach { stop_distance: f32 },
    /// Keep `desired_distance` from the target, holding anywhere inside
    /// `desired_distance ± tolerance`.
    RangedOrbit {
        desired_distance: f32,
        tolerance: f32,
    },
}

/// Held movement input for the player (raw axis, not yet normalized).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MoveInput(pub Vec2);

/// World-space point the player is looking at.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AimPoint(pub Vec2);

/// A weapon that periodically launches projectiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    /// Seconds between automatic shots.
    pub interval_secs: f32,
    /// Seconds until the next automatic shot.
    pub cooldown_secs: f32,
    /// Launch speed (units/s).
    pub projectile_speed: f32,
    /// Lifespan of each projectile (seconds).
    pub projectile_lifespan_secs: f32,
    /// Set by an explicit attack command; fires next weapon pass regardless
    /// of cooldown.
    pub trigger_pulled: bool,
}

/// An in-flight projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Faction of the entity that fired it.
    pub owner: Faction,
    /// Damage dealt on an applied hit.
    pub damage: i32,
    /// Remaining lifespan in seconds of simulation time.
    pub lifespan_secs: f32,
    /// Set once the projectile has resolved its one damaging contact.
    pub spent: bool,
}

//! Entity spawn factories.
//!
//! Creates the player, enemies, and projectiles with their component
//! bundles. Every value comes from configuration; references such as an
//! enemy's target are passed in, never looked up.

use glam::Vec2;
use hecs::{Entity, World};

use skirmish_combat::projectile::new_projectile;
use skirmish_combat::StatsLedger;
use skirmish_core::components::*;
use skirmish_core::config::{ArchetypeConfig, WeaponConfig};
use skirmish_core::enums::Faction;
use skirmish_core::constants::PROJECTILE_HITBOX_RADIUS;
use skirmish_core::types::{Facing, Position, Velocity};

use crate::targeting::Pursuit;

/// Spawn the player at `position`.
pub fn spawn_player(world: &mut World, config: &ArchetypeConfig, position: Vec2) -> Entity {
    let entity = world.spawn((
        Player,
        Faction::Player,
        Archetype("player".to_string()),
        Position(position),
        Velocity::default(),
        Facing::default(),
        BaseSpeed(config.base_speed),
        Hitbox {
            radius: config.hitbox_radius,
        },
        ledger_from(config),
        MoveInput::default(),
        AimPoint(position + Vec2::X),
    ));
    if let Some(weapon) = &config.weapon {
        let _ = world.insert_one(entity, weapon_from(weapon));
    }
    entity
}

/// Spawn an enemy of archetype `name` at `position`, pursuing `target`.
pub fn spawn_enemy(
    world: &mut World,
    name: &str,
    config: &ArchetypeConfig,
    position: Vec2,
    target: Option<Entity>,
) -> Entity {
    let entity = world.spawn((
        Enemy,
        Faction::Enemy,
        Archetype(name.to_string()),
        Position(position),
        Velocity::default(),
        Facing::default(),
        BaseSpeed(config.base_speed),
        Hitbox {
            radius: config.hitbox_radius,
        },
        ledger_from(config),
        Pursuit { target },
    ));
    if let Some(strategy) = config.strategy {
        let _ = world.insert_one(entity, strategy);
    }
    if let Some(weapon) = &config.weapon {
        let _ = world.insert_one(entity, weapon_from(weapon));
    }
    entity
}

/// Launch a projectile from `origin` along `direction`.
///
/// Returns `None` when `direction` has no usable heading.
pub fn spawn_projectile(
    world: &mut World,
    owner: Faction,
    damage: i32,
    origin: Vec2,
    direction: Vec2,
    speed: f32,
    lifespan_secs: f32,
) -> Option<Entity> {
    let heading = direction.try_normalize()?;
    Some(world.spawn((
        new_projectile(owner, damage, lifespan_secs),
        Position(origin),
        Velocity(heading * speed),
        Facing(heading),
        Hitbox {
            radius: PROJECTILE_HITBOX_RADIUS,
        },
    )))
}

fn ledger_from(config: &ArchetypeConfig) -> StatsLedger {
    StatsLedger::new(config.max_health, config.max_shield, config.damage)
}

fn weapon_from(config: &WeaponConfig) -> Weapon {
    Weapon {
        interval_secs: config.interval_secs,
        cooldown_secs: config.interval_secs,
        projectile_speed: config.projectile_speed,
        projectile_lifespan_secs: config.projectile_lifespan_secs,
        trigger_pulled: false,
    }
}

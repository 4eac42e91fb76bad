//! Weapon system: cooldowns, automatic fire, and commanded shots.
//!
//! The player auto-aims at the nearest live enemy and falls back to its aim
//! point. AI shooters fire at their pursuit target and hold fire without one.

use glam::Vec2;
use hecs::{Entity, World};
use tracing::trace;

use skirmish_combat::StatsLedger;
use skirmish_core::components::{AimPoint, Player, Weapon};
use skirmish_core::constants::DT;
use skirmish_core::enums::Faction;
use skirmish_core::events::SimEvent;
use skirmish_core::types::Position;

use crate::score::ScoreState;
use crate::targeting::{nearest_enemy, resolve_target, Pursuit};
use crate::world_setup;

struct Shot {
    owner: Faction,
    damage: i32,
    origin: Vec2,
    direction: Vec2,
    speed: f32,
    lifespan_secs: f32,
}

/// Tick weapon cooldowns and launch due projectiles.
pub fn run(world: &mut World, events: &mut Vec<SimEvent>, score: &mut ScoreState) {
    let shooters: Vec<(Entity, Vec2, Option<Vec2>)> = world
        .query::<(&Weapon, &Position, &StatsLedger)>()
        .iter()
        .filter(|(_, (_, _, ledger))| !ledger.is_dead())
        .map(|(entity, (_, pos, _))| (entity, pos.0, aim_target(world, entity, pos.0)))
        .collect();

    let mut shots = Vec::new();
    for (entity, origin, target) in shooters {
        let Ok((weapon, faction, ledger)) =
            world.query_one_mut::<(&mut Weapon, &Faction, &StatsLedger)>(entity)
        else {
            continue;
        };

        weapon.cooldown_secs = (weapon.cooldown_secs - DT).max(0.0);
        let commanded = std::mem::take(&mut weapon.trigger_pulled);
        let automatic = weapon.cooldown_secs <= 0.0;
        if !(commanded || automatic) {
            continue;
        }

        let Some(direction) = target.and_then(|t| (t - origin).try_normalize()) else {
            continue;
        };

        if automatic {
            weapon.cooldown_secs = weapon.interval_secs;
        }
        shots.push(Shot {
            owner: *faction,
            damage: ledger.damage(),
            origin,
            direction,
            speed: weapon.projectile_speed,
            lifespan_secs: weapon.projectile_lifespan_secs,
        });
    }

    for shot in shots {
        let spawned = world_setup::spawn_projectile(
            world,
            shot.owner,
            shot.damage,
            shot.origin,
            shot.direction,
            shot.speed,
            shot.lifespan_secs,
        );
        if spawned.is_some() {
            trace!(owner = ?shot.owner, x = shot.origin.x, y = shot.origin.y, "projectile fired");
            score.projectiles_fired += 1;
            events.push(SimEvent::ProjectileFired { owner: shot.owner });
        }
    }
}

/// Where `entity` would shoot this tick.
fn aim_target(world: &World, entity: Entity, from: Vec2) -> Option<Vec2> {
    if world.get::<&Player>(entity).is_ok() {
        let fallback = world.get::<&AimPoint>(entity).ok().map(|aim| aim.0);
        return nearest_enemy(world, from).or(fallback);
    }
    let pursuit = world.get::<&Pursuit>(entity).ok().map(|p| p.target)?;
    resolve_target(world, pursuit)
}

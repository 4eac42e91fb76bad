//! Snapshot system: queries the ECS world and builds a GameStateSnapshot.
//!
//! Read-only; never modifies the world.

use hecs::World;

use skirmish_combat::StatsLedger;
use skirmish_core::components::{Archetype, Enemy, Player, Projectile};
use skirmish_core::enums::GamePhase;
use skirmish_core::events::SimEvent;
use skirmish_core::state::*;
use skirmish_core::types::{Facing, Position, SimTime, Velocity};

use crate::score::ScoreState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<SimEvent>,
    score: &ScoreState,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        player: build_player(world),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        events,
        score: ScoreView {
            enemies_killed: score.enemies_killed,
            enemies_spawned: score.enemies_spawned,
            enemies_total: score.enemies_total,
            projectiles_fired: score.projectiles_fired,
            survival_secs: time.elapsed_secs,
        },
    }
}

fn combatant_view(
    entity: hecs::Entity,
    archetype: &Archetype,
    pos: &Position,
    facing: &Facing,
    ledger: &StatsLedger,
) -> CombatantView {
    CombatantView {
        entity_id: entity.to_bits().get(),
        archetype: archetype.0.clone(),
        position: pos.0,
        facing: facing.angle(),
        health: ledger.health(),
        max_health: ledger.max_health(),
        shield: ledger.shield(),
        max_shield: ledger.max_shield(),
    }
}

fn build_player(world: &World) -> Option<CombatantView> {
    world
        .query::<(&Player, &Archetype, &Position, &Facing, &StatsLedger)>()
        .iter()
        .next()
        .map(|(entity, (_, archetype, pos, facing, ledger))| {
            combatant_view(entity, archetype, pos, facing, ledger)
        })
}

/// Enemies sorted by entity id so snapshots are stable.
fn build_enemies(world: &World) -> Vec<CombatantView> {
    let mut enemies: Vec<CombatantView> = world
        .query::<(&Enemy, &Archetype, &Position, &Facing, &StatsLedger)>()
        .iter()
        .map(|(entity, (_, archetype, pos, facing, ledger))| {
            combatant_view(entity, archetype, pos, facing, ledger)
        })
        .collect();
    enemies.sort_by_key(|e| e.entity_id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<(u64, ProjectileView)> = world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(entity, (projectile, pos, vel))| {
            (
                entity.to_bits().get(),
                ProjectileView {
                    owner: projectile.owner,
                    position: pos.0,
                    velocity: vel.0,
                },
            )
        })
        .collect();
    projectiles.sort_by_key(|(id, _)| *id);
    projectiles.into_iter().map(|(_, view)| view).collect()
}

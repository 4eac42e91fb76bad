//! Cleanup system: removes dead combatants and finished projectiles.

use hecs::{Entity, World};
use tracing::info;

use skirmish_combat::StatsLedger;
use skirmish_core::components::{Enemy, Projectile};
use skirmish_core::enums::Faction;
use skirmish_core::events::SimEvent;

use crate::score::ScoreState;

/// Despawn every entity whose death transition fired and every projectile
/// that hit something or outlived its lifespan.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreState,
) {
    despawn_buffer.clear();

    for (entity, (ledger, faction)) in world.query_mut::<(&StatsLedger, &Faction)>() {
        if ledger.is_dead() {
            info!(?faction, entity_id = entity.to_bits().get(), "entity died");
            events.push(SimEvent::Died {
                faction: *faction,
                entity_id: entity.to_bits().get(),
            });
            despawn_buffer.push(entity);
        }
    }

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if projectile.spent || projectile.lifespan_secs <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        if world.get::<&Enemy>(entity).is_ok() {
            score.enemies_killed += 1;
        }
        let _ = world.despawn(entity);
    }
}

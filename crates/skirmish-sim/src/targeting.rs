//! Target providers.
//!
//! Targets are entity references injected at spawn time and re-resolved to
//! positions every tick. A reference to a removed or dead entity resolves to
//! `None`, which every consumer treats as "no target".

use glam::Vec2;
use hecs::{Entity, World};

use skirmish_combat::StatsLedger;
use skirmish_core::components::Enemy;
use skirmish_core::types::Position;

/// The entity an AI actor steers and shoots toward.
#[derive(Debug, Clone, Copy)]
pub struct Pursuit {
    pub target: Option<Entity>,
}

/// Current position of a live target, if it still exists.
pub fn resolve_target(world: &World, target: Option<Entity>) -> Option<Vec2> {
    let entity = target?;
    if let Ok(ledger) = world.get::<&StatsLedger>(entity) {
        if ledger.is_dead() {
            return None;
        }
    }
    world.get::<&Position>(entity).ok().map(|pos| pos.0)
}

/// Position of the live enemy closest to `from`.
pub fn nearest_enemy(world: &World, from: Vec2) -> Option<Vec2> {
    world
        .query::<(&Enemy, &Position, &StatsLedger)>()
        .iter()
        .filter(|(_, (_, _, ledger))| !ledger.is_dead())
        .map(|(_, (_, pos, _))| pos.0)
        .min_by(|a, b| from.distance_squared(*a).total_cmp(&from.distance_squared(*b)))
}

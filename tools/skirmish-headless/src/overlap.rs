//! Naive circle-overlap contact source.
//!
//! The engine only resolves contacts it is told about. This detector plays
//! the physics layer for headless runs: it tests every projectile against
//! every combatant, and every enemy against the player, and reports a pair
//! only on the tick the overlap begins.

use std::collections::HashSet;

use glam::Vec2;
use hecs::{Entity, World};

use skirmish_combat::StatsLedger;
use skirmish_core::components::{Enemy, Hitbox, Player, Projectile};
use skirmish_core::types::Position;

#[derive(Default)]
pub struct OverlapDetector {
    touching: HashSet<(Entity, Entity)>,
}

struct Body {
    entity: Entity,
    center: Vec2,
    radius: f32,
}

impl OverlapDetector {
    /// Pairs `(source, victim)` whose overlap started since the last call.
    pub fn detect(&mut self, world: &World) -> Vec<(Entity, Entity)> {
        let projectiles = bodies::<&Projectile>(world);
        let enemies = bodies::<&Enemy>(world);
        let players = bodies::<&Player>(world);

        let mut now = HashSet::new();
        for shot in &projectiles {
            for victim in enemies.iter().chain(players.iter()) {
                if overlaps(shot, victim) {
                    now.insert((shot.entity, victim.entity));
                }
            }
        }
        for enemy in &enemies {
            for player in &players {
                if overlaps(enemy, player) {
                    now.insert((enemy.entity, player.entity));
                }
            }
        }

        let mut started: Vec<_> = now.difference(&self.touching).copied().collect();
        // Stable order keeps replays identical.
        started.sort_by_key(|(a, b)| (a.to_bits(), b.to_bits()));
        self.touching = now;
        started
    }
}

fn bodies<Q: hecs::Query>(world: &World) -> Vec<Body> {
    world
        .query::<(Q, &Position, &Hitbox)>()
        .iter()
        .filter(|(entity, _)| {
            world
                .get::<&StatsLedger>(*entity)
                .map(|ledger| !ledger.is_dead())
                .unwrap_or(true)
        })
        .map(|(entity, (_, pos, hitbox))| Body {
            entity,
            center: pos.0,
            radius: hitbox.radius,
        })
        .collect()
}

fn overlaps(a: &Body, b: &Body) -> bool {
    let reach = a.radius + b.radius;
    a.center.distance_squared(b.center) <= reach * reach
}

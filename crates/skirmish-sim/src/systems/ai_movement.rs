//! AI locomotion: each actor's strategy steers it relative to its target.
//!
//! Decisions read positions as of the end of the previous tick; all of them
//! are computed before any velocity is written.

use glam::Vec2;
use hecs::{Entity, World};

use skirmish_combat::StatsLedger;
use skirmish_core::components::{BaseSpeed, MovementStrategy};
use skirmish_core::types::{Facing, Position, Velocity};
use skirmish_movement::{strategy, VelocityActuator};

use crate::targeting::{resolve_target, Pursuit};

struct Plan {
    entity: Entity,
    strategy: MovementStrategy,
    position: Vec2,
    target: Option<Vec2>,
}

/// Steer every live AI actor for this tick.
pub fn run(world: &mut World) {
    let plans: Vec<Plan> = world
        .query::<(&MovementStrategy, &Position, &Pursuit, &StatsLedger)>()
        .iter()
        .filter(|(_, (_, _, _, ledger))| !ledger.is_dead())
        .map(|(entity, (strategy, pos, pursuit, _))| Plan {
            entity,
            strategy: *strategy,
            position: pos.0,
            target: resolve_target(world, pursuit.target),
        })
        .collect();

    for plan in plans {
        let Ok((velocity, facing, speed)) =
            world.query_one_mut::<(&mut Velocity, &mut Facing, &BaseSpeed)>(plan.entity)
        else {
            continue;
        };

        let mut actuator = VelocityActuator::new(speed.0, velocity);
        strategy::execute(&plan.strategy, plan.position, plan.target, &mut actuator);

        if let Some(dir) = strategy::facing(plan.position, plan.target) {
            facing.0 = dir;
        }
    }
}

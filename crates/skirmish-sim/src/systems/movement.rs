//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.

use hecs::World;

use skirmish_core::constants::DT;
use skirmish_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.0 += vel.0 * DT;
    }
}

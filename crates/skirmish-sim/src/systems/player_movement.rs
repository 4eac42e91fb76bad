//! Player locomotion from held input, and facing toward the aim point.

use hecs::World;

use skirmish_core::components::{AimPoint, BaseSpeed, MoveInput, Player};
use skirmish_core::types::{Facing, Position, Velocity};
use skirmish_movement::{MovementActuator, VelocityActuator};

/// Apply the player's held input through its actuator.
///
/// Input is re-asserted every tick; a zero axis stops the player.
pub fn run(world: &mut World) {
    for (_entity, (_player, input, aim, speed, pos, velocity, facing)) in world.query_mut::<(
        &Player,
        &MoveInput,
        &AimPoint,
        &BaseSpeed,
        &Position,
        &mut Velocity,
        &mut Facing,
    )>() {
        let mut actuator = VelocityActuator::new(speed.0, velocity);
        if input.0.length_squared() > 0.0 {
            actuator.move_in(input.0, None);
        } else {
            actuator.stop();
        }

        if let Some(dir) = (aim.0 - pos.0).try_normalize() {
            facing.0 = dir;
        }
    }
}

//! Distance-band steering strategies.
//!
//! Pure functions over the actor's position and an optional target position.
//! Strategies carry only their thresholds, so one value is shared by every
//! actor of an archetype.

use glam::Vec2;

use skirmish_core::components::MovementStrategy;

use crate::actuator::MovementActuator;

/// Locomotion chosen for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovementDecision {
    /// Travel along the carried unit vector, which points at the target.
    MoveToward(Vec2),
    /// Travel along the carried unit vector, which points away from the target.
    MoveAway(Vec2),
    Hold,
}

impl MovementDecision {
    /// Heading to travel, or `None` when holding.
    pub fn direction(&self) -> Option<Vec2> {
        match self {
            MovementDecision::MoveToward(dir) | MovementDecision::MoveAway(dir) => Some(*dir),
            MovementDecision::Hold => None,
        }
    }
}

/// Decide locomotion for an actor at `position` chasing `target`.
///
/// Holds when the target is absent, when either position is not finite, or
/// when the two coincide (direction undefined).
pub fn decide(
    strategy: &MovementStrategy,
    position: Vec2,
    target: Option<Vec2>,
) -> MovementDecision {
    let Some((distance, toward)) = target.and_then(|t| offset(position, t)) else {
        return MovementDecision::Hold;
    };

    match *strategy {
        MovementStrategy::MeleeApproach { stop_distance } => {
            if distance > stop_distance {
                MovementDecision::MoveToward(toward)
            } else {
                MovementDecision::Hold
            }
        }
        MovementStrategy::RangedOrbit {
            desired_distance,
            tolerance,
        } => {
            // Both band edges hold; only crossing past the band moves.
            if distance < desired_distance - tolerance {
                MovementDecision::MoveAway(-toward)
            } else if distance > desired_distance + tolerance {
                MovementDecision::MoveToward(toward)
            } else {
                MovementDecision::Hold
            }
        }
    }
}

/// Direction the actor should face: straight at the target, whatever the
/// locomotion decision. `None` leaves the current facing unchanged.
pub fn facing(position: Vec2, target: Option<Vec2>) -> Option<Vec2> {
    target
        .and_then(|t| offset(position, t))
        .map(|(_, toward)| toward)
}

/// Decide and drive `actuator` in one step. Returns the decision taken.
pub fn execute(
    strategy: &MovementStrategy,
    position: Vec2,
    target: Option<Vec2>,
    actuator: &mut impl MovementActuator,
) -> MovementDecision {
    let decision = decide(strategy, position, target);
    match decision.direction() {
        Some(dir) => actuator.move_in(dir, None),
        None => actuator.stop(),
    }
    decision
}

/// Distance and unit vector from `from` to `to`, if defined.
fn offset(from: Vec2, to: Vec2) -> Option<(f32, Vec2)> {
    let delta = to - from;
    let distance = delta.length();
    if !distance.is_finite() || distance <= 0.0 {
        return None;
    }
    Some((distance, delta / distance))
}

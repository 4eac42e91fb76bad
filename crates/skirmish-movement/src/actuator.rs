//! Movement actuators: the one place an entity's velocity gets written.

use glam::Vec2;

use skirmish_core::types::Velocity;

/// Requests motion from whatever physics integration backs the entity.
pub trait MovementActuator {
    /// Move along `direction` (normalized here) at `speed_override`, or the
    /// actuator's base speed when `None`. Replaces any previous request.
    fn move_in(&mut self, direction: Vec2, speed_override: Option<f32>);

    /// Zero the requested motion.
    fn stop(&mut self);
}

/// Writes straight into the kinematic `Velocity` component.
///
/// Holds no state beyond `base_speed`; build one per call site each tick.
pub struct VelocityActuator<'a> {
    base_speed: f32,
    velocity: &'a mut Velocity,
}

impl<'a> VelocityActuator<'a> {
    pub fn new(base_speed: f32, velocity: &'a mut Velocity) -> Self {
        Self {
            base_speed: effective_speed(base_speed, None),
            velocity,
        }
    }
}

impl MovementActuator for VelocityActuator<'_> {
    fn move_in(&mut self, direction: Vec2, speed_override: Option<f32>) {
        let speed = effective_speed(self.base_speed, speed_override);
        self.velocity.0 = direction.normalize_or_zero() * speed;
    }

    fn stop(&mut self) {
        self.velocity.0 = Vec2::ZERO;
    }
}

/// Override if it is a usable number, otherwise base; never negative.
pub fn effective_speed(base_speed: f32, speed_override: Option<f32>) -> f32 {
    let speed = match speed_override {
        Some(s) if s.is_finite() => s,
        _ => base_speed,
    };
    if speed.is_finite() {
        speed.max(0.0)
    } else {
        0.0
    }
}

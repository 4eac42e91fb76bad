//! Movement for SKIRMISH.
//!
//! Distance-band steering strategies for AI actors and the actuator
//! abstraction every entity moves through.

pub mod actuator;
pub mod strategy;

pub use actuator::{MovementActuator, VelocityActuator};
pub use skirmish_core as core;
pub use strategy::{decide, execute, facing, MovementDecision};

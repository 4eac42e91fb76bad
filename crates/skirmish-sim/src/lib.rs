//! Simulation engine for SKIRMISH.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! resolves externally reported contacts, and produces
//! GameStateSnapshots for presentation.

pub mod engine;
pub mod score;
pub mod systems;
pub mod targeting;
pub mod world_setup;

pub use engine::{Contact, SimulationEngine};
pub use skirmish_core as core;

#[cfg(test)]
mod tests;

//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only). They own no state: everything lives in components or is
//! passed in by the engine.

pub mod ai_movement;
pub mod cleanup;
pub mod contacts;
pub mod movement;
pub mod player_movement;
pub mod projectiles;
pub mod snapshot;
pub mod wave_spawner;
pub mod weapons;

//! Combat rules for SKIRMISH.
//!
//! Implements the shield-then-health damage ledger, the faction-gated
//! damage dispatcher, and projectile contact/lifespan rules.
//! No ECS dependency; operates on plain data.

pub mod dispatch;
pub mod projectile;
pub mod stats;

pub use dispatch::{resolve, Resolution};
pub use skirmish_core as core;
pub use stats::{DamageReport, StatsLedger};

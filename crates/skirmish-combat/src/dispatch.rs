//! Faction-gated damage dispatch.
//!
//! One rule serves every damage source: melee touch, player projectile on
//! enemy, enemy projectile on player.

use skirmish_core::enums::Faction;

use crate::stats::{DamageReport, StatsLedger};

/// Outcome of a contact resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Factions differ; damage was forwarded to the victim's ledger.
    Applied(DamageReport),
    /// Same faction; nothing was touched.
    Ignored,
}

impl Resolution {
    pub fn applied(&self) -> bool {
        matches!(self, Resolution::Applied(_))
    }

    pub fn report(&self) -> Option<DamageReport> {
        match self {
            Resolution::Applied(report) => Some(*report),
            Resolution::Ignored => None,
        }
    }
}

/// Forward `damage` to `victim` iff the factions differ.
pub fn resolve(
    attacker: Faction,
    victim: Faction,
    damage: i32,
    victim_ledger: &mut StatsLedger,
) -> Resolution {
    if attacker == victim {
        return Resolution::Ignored;
    }
    Resolution::Applied(victim_ledger.apply_damage(damage))
}

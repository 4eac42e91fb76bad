//! Projectile contact and lifespan rules.

use skirmish_core::components::Projectile;
use skirmish_core::enums::Faction;

use crate::dispatch::{resolve, Resolution};
use crate::stats::StatsLedger;

/// Result of a projectile touching a combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectileImpact {
    pub resolution: Resolution,
    /// Remove the projectile this tick.
    pub despawn: bool,
}

/// Build a fresh projectile.
pub fn new_projectile(owner: Faction, damage: i32, lifespan_secs: f32) -> Projectile {
    Projectile {
        owner,
        damage: damage.max(0),
        lifespan_secs,
        spent: false,
    }
}

/// Resolve a contact between a projectile and a combatant.
///
/// An applied hit spends the projectile; same-faction contact passes
/// through. A spent projectile ignores everything it touches afterwards.
pub fn on_contact(
    projectile: &mut Projectile,
    victim: Faction,
    victim_ledger: &mut StatsLedger,
) -> ProjectileImpact {
    if projectile.spent {
        return ProjectileImpact {
            resolution: Resolution::Ignored,
            despawn: true,
        };
    }

    let resolution = resolve(projectile.owner, victim, projectile.damage, victim_ledger);
    if resolution.applied() {
        projectile.spent = true;
    }

    ProjectileImpact {
        resolution,
        despawn: projectile.spent,
    }
}

/// Count down lifespan by `dt` seconds. Returns true once expired.
pub fn tick_lifespan(projectile: &mut Projectile, dt: f32) -> bool {
    projectile.lifespan_secs -= dt;
    projectile.lifespan_secs <= 0.0
}

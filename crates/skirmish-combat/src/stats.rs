//! Health/shield ledger with shield-first damage absorption.

use serde::{Deserialize, Serialize};

/// Current and maximum health and shield of one combatant.
///
/// Counters are private so the invariants `0 <= health <= max_health` and
/// `0 <= shield <= max_shield` hold for every reachable value. The only
/// mutation is [`StatsLedger::apply_damage`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LedgerFields")]
pub struct StatsLedger {
    health: i32,
    max_health: i32,
    shield: i32,
    max_shield: i32,
    damage: i32,
    /// Latched once the death transition has been reported.
    death_raised: bool,
}

/// Wire form of a ledger. Deserialization goes through the clamping
/// constructors; the death latch is derived, never read.
#[derive(Deserialize)]
struct LedgerFields {
    health: i32,
    max_health: i32,
    shield: i32,
    max_shield: i32,
    damage: i32,
}

impl From<LedgerFields> for StatsLedger {
    fn from(raw: LedgerFields) -> Self {
        StatsLedger::new(raw.max_health, raw.max_shield, raw.damage)
            .with_current(raw.health, raw.shield)
    }
}

/// What a single `apply_damage` call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageReport {
    /// Damage soaked by the shield.
    pub shield_absorbed: i32,
    /// Damage that reached health (after flooring at zero).
    pub health_lost: i32,
    /// True on exactly the call that brought health to zero.
    pub died: bool,
}

impl DamageReport {
    /// Whether the call changed anything.
    pub fn is_noop(&self) -> bool {
        self.shield_absorbed == 0 && self.health_lost == 0 && !self.died
    }
}

impl StatsLedger {
    /// Full health and shield. Out-of-range maxima are clamped:
    /// `max_health` to at least 1, `max_shield` and `damage` to at least 0.
    pub fn new(max_health: i32, max_shield: i32, damage: i32) -> Self {
        let max_health = max_health.max(1);
        let max_shield = max_shield.max(0);
        Self {
            health: max_health,
            max_health,
            shield: max_shield,
            max_shield,
            damage: damage.max(0),
            death_raised: false,
        }
    }

    /// Override current health and shield, clamped into `[0, max]`.
    ///
    /// A ledger starting at zero health counts as already dead and never
    /// raises a death transition.
    pub fn with_current(mut self, health: i32, shield: i32) -> Self {
        self.health = health.clamp(0, self.max_health);
        self.shield = shield.clamp(0, self.max_shield);
        self.death_raised = self.health == 0;
        self
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn shield(&self) -> i32 {
        self.shield
    }

    pub fn max_shield(&self) -> i32 {
        self.max_shield
    }

    /// Outgoing damage this entity deals on contact.
    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Health as a fraction of its maximum, for bar rendering.
    pub fn health_fraction(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }

    /// Shield as a fraction of its maximum; `0.0` for shieldless entities.
    pub fn shield_fraction(&self) -> f32 {
        if self.max_shield == 0 {
            0.0
        } else {
            self.shield as f32 / self.max_shield as f32
        }
    }

    /// Apply incoming damage: shield first, remainder to health.
    ///
    /// Negative amounts are treated as zero. Once dead, further calls are
    /// no-ops and never report a second death.
    pub fn apply_damage(&mut self, amount: i32) -> DamageReport {
        let mut report = DamageReport::default();
        if self.death_raised || amount <= 0 {
            return report;
        }

        let mut remaining = amount;

        if self.shield > 0 {
            let absorbed = self.shield.min(remaining);
            self.shield -= absorbed;
            remaining -= absorbed;
            report.shield_absorbed = absorbed;
        }

        if remaining > 0 {
            let lost = self.health.min(remaining);
            self.health -= lost;
            report.health_lost = lost;
        }

        if self.health == 0 {
            self.death_raised = true;
            report.died = true;
        }

        report
    }
}

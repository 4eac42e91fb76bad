//! Contact resolution: turns externally reported overlaps into damage.
//!
//! The engine never detects collisions itself. Each queued contact names a
//! source (a combatant touching, or a projectile hitting) and a victim;
//! factions and damage are read from the entities and pushed through the
//! one faction-gated dispatch rule.

use hecs::{Entity, World};
use tracing::{debug, trace};

use skirmish_combat::projectile::on_contact;
use skirmish_combat::{resolve, Resolution, StatsLedger};
use skirmish_core::components::Projectile;
use skirmish_core::enums::Faction;
use skirmish_core::events::SimEvent;

use crate::engine::Contact;

/// Resolve every queued contact in order.
pub fn run(world: &mut World, contacts: &mut Vec<Contact>, events: &mut Vec<SimEvent>) {
    for contact in contacts.drain(..) {
        resolve_contact(world, contact, events);
    }
}

fn resolve_contact(world: &mut World, contact: Contact, events: &mut Vec<SimEvent>) {
    let Contact { source, victim } = contact;
    if source == victim {
        return;
    }

    let Some(victim_faction) = live_faction(world, victim) else {
        debug!(?victim, "contact victim missing or dead; ignored");
        return;
    };

    let (attacker, resolution) = if let Ok(mut projectile) = world.get::<&mut Projectile>(source) {
        let Ok(mut ledger) = world.get::<&mut StatsLedger>(victim) else {
            return;
        };
        let impact = on_contact(&mut projectile, victim_faction, &mut ledger);
        (projectile.owner, impact.resolution)
    } else {
        let Some(attacker) = live_faction(world, source) else {
            debug!(?source, "contact source missing or dead; ignored");
            return;
        };
        let damage = match world.get::<&StatsLedger>(source) {
            Ok(ledger) => ledger.damage(),
            Err(_) => return,
        };
        let Ok(mut ledger) = world.get::<&mut StatsLedger>(victim) else {
            return;
        };
        (attacker, resolve(attacker, victim_faction, damage, &mut ledger))
    };

    match resolution {
        Resolution::Applied(report) => {
            trace!(
                ?attacker,
                victim = ?victim_faction,
                shield_absorbed = report.shield_absorbed,
                health_lost = report.health_lost,
                died = report.died,
                "damage applied"
            );
            events.push(SimEvent::Hit {
                attacker,
                victim: victim_faction,
                shield_absorbed: report.shield_absorbed,
                health_lost: report.health_lost,
            });
        }
        Resolution::Ignored => {
            trace!(?attacker, victim = ?victim_faction, "same-faction contact ignored");
        }
    }
}

/// Faction of a combatant that is still alive.
fn live_faction(world: &World, entity: Entity) -> Option<Faction> {
    let faction = *world.get::<&Faction>(entity).ok()?;
    let alive = world
        .get::<&StatsLedger>(entity)
        .map(|ledger| !ledger.is_dead())
        .unwrap_or(false);
    alive.then_some(faction)
}

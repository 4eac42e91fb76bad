//! Projectile lifespan system.

use hecs::World;

use skirmish_combat::projectile::tick_lifespan;
use skirmish_core::components::Projectile;
use skirmish_core::constants::DT;
use skirmish_core::events::SimEvent;

/// Count down every live projectile; report the ones that ran out.
/// Removal happens in cleanup.
pub fn run(world: &mut World, events: &mut Vec<SimEvent>) {
    for (_entity, projectile) in world.query_mut::<&mut Projectile>() {
        if projectile.spent || projectile.lifespan_secs <= 0.0 {
            continue;
        }
        if tick_lifespan(projectile, DT) {
            events.push(SimEvent::ProjectileExpired);
        }
    }
}

//! Wave spawning system: releases enemy waves at scheduled ticks.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use skirmish_core::config::GameConfig;
use skirmish_core::constants::TICK_RATE;
use skirmish_core::events::SimEvent;
use skirmish_core::types::Position;

use crate::score::ScoreState;
use crate::world_setup;

/// A single wave definition.
#[derive(Debug, Clone)]
pub struct WaveEntry {
    /// Tick at which this wave spawns.
    pub spawn_at_tick: u64,
    /// Enemies to spawn: (archetype name, count).
    pub groups: Vec<(String, u32)>,
    /// Whether this wave has already been spawned.
    pub spawned: bool,
}

/// The complete wave schedule for a match.
#[derive(Debug, Clone, Default)]
pub struct WaveSchedule {
    pub waves: Vec<WaveEntry>,
}

impl WaveSchedule {
    /// Build the schedule from configuration, converting seconds to ticks.
    pub fn from_config(config: &GameConfig) -> Self {
        let waves = config
            .waves
            .iter()
            .map(|w| WaveEntry {
                spawn_at_tick: (w.at_secs.max(0.0) * TICK_RATE as f32).round() as u64,
                groups: w.groups.clone(),
                spawned: false,
            })
            .collect();
        Self { waves }
    }

    /// Whether every wave has been released.
    pub fn is_exhausted(&self) -> bool {
        self.waves.iter().all(|w| w.spawned)
    }
}

/// Check the schedule and spawn any due waves on a ring around the player.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    schedule: &mut WaveSchedule,
    config: &GameConfig,
    player: Option<Entity>,
    current_tick: u64,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreState,
) {
    let center = player
        .and_then(|p| world.get::<&Position>(p).ok().map(|pos| pos.0))
        .unwrap_or(Vec2::ZERO);

    for (index, wave) in schedule.waves.iter_mut().enumerate() {
        if wave.spawned || current_tick < wave.spawn_at_tick {
            continue;
        }

        let mut count = 0;
        for (name, n) in &wave.groups {
            let Some(archetype) = config.archetypes.get(name) else {
                warn!(archetype = %name, wave = index, "unknown archetype in wave; skipped");
                continue;
            };
            for _ in 0..*n {
                let angle = rng.gen_range(0.0..std::f32::consts::TAU);
                let position = center + Vec2::from_angle(angle) * config.spawn_radius;
                world_setup::spawn_enemy(world, name, archetype, position, player);
                count += 1;
            }
        }

        wave.spawned = true;
        score.enemies_spawned = score.enemies_spawned.saturating_add(count);
        info!(wave = index, count, tick = current_tick, "wave spawned");
        events.push(SimEvent::WaveSpawned { index, count });
    }
}

//! Simulation engine: the tick loop and its owned state.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands and
//! reported contacts, runs all systems, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use skirmish_core::commands::PlayerCommand;
use skirmish_core::components::{AimPoint, MoveInput, Player, Weapon};
use skirmish_core::config::GameConfig;
use skirmish_core::enums::GamePhase;
use skirmish_core::events::SimEvent;
use skirmish_core::state::GameStateSnapshot;
use skirmish_core::types::SimTime;

use crate::score::ScoreState;
use crate::systems;
use crate::systems::wave_spawner::WaveSchedule;
use crate::world_setup;

/// An overlap reported by the external contact source.
///
/// `source` is the attacker: a combatant touching the victim, or a
/// projectile hitting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub source: Entity,
    pub victim: Entity,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: GameConfig,
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    player: Option<Entity>,
    command_queue: VecDeque<PlayerCommand>,
    contact_queue: Vec<Contact>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
    wave_schedule: WaveSchedule,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new engine in the lobby. The config is assumed validated.
    pub fn new(config: GameConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            player: None,
            command_queue: VecDeque::new(),
            contact_queue: Vec::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            wave_schedule: WaveSchedule::default(),
            score: ScoreState::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Report that `source` touched `victim`. Resolved during the next tick.
    pub fn queue_contact(&mut self, source: Entity, victim: Entity) {
        self.contact_queue.push(Contact { source, victim });
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
            self.check_game_over();
        } else if !self.contact_queue.is_empty() {
            debug!(
                count = self.contact_queue.len(),
                phase = ?self.phase,
                "dropping contacts outside an active match"
            );
            self.contact_queue.clear();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, events, &self.score)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player entity, while it exists.
    pub fn player(&self) -> Option<Entity> {
        self.player.filter(|p| self.world.contains(*p))
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Whether every scheduled wave of the current match has been released.
    /// False outside a match.
    pub fn waves_exhausted(&self) -> bool {
        self.phase != GamePhase::Lobby && self.wave_schedule.is_exhausted()
    }

    /// Mutable world access for tests that place entities by hand.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn one enemy of a configured archetype outside the wave schedule.
    /// Returns `None` for an unknown archetype.
    pub fn spawn_enemy(&mut self, archetype: &str, position: Vec2) -> Option<Entity> {
        let config = self.config.archetypes.get(archetype)?;
        let entity =
            world_setup::spawn_enemy(&mut self.world, archetype, config, position, self.player);
        self.score.enemies_spawned = self.score.enemies_spawned.saturating_add(1);
        Some(entity)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartMatch => {
                if self.phase == GamePhase::Lobby {
                    self.start_match();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::ReturnToLobby => {
                if matches!(self.phase, GamePhase::Paused | GamePhase::GameOver) {
                    self.reset_world();
                    self.phase = GamePhase::Lobby;
                }
            }
            PlayerCommand::Move { x, y } => {
                let axis = Vec2::new(x, y);
                let axis = if axis.is_finite() { axis } else { Vec2::ZERO };
                for (_entity, (_player, input)) in
                    self.world.query_mut::<(&Player, &mut MoveInput)>()
                {
                    input.0 = axis;
                }
            }
            PlayerCommand::Look { x, y } => {
                let point = Vec2::new(x, y);
                if !point.is_finite() {
                    return;
                }
                for (_entity, (_player, aim)) in self.world.query_mut::<(&Player, &mut AimPoint)>()
                {
                    aim.0 = point;
                }
            }
            PlayerCommand::Attack => {
                for (_entity, (_player, weapon)) in
                    self.world.query_mut::<(&Player, &mut Weapon)>()
                {
                    weapon.trigger_pulled = true;
                }
            }
        }
    }

    fn start_match(&mut self) {
        self.reset_world();
        self.player = Some(world_setup::spawn_player(
            &mut self.world,
            &self.config.player,
            Vec2::ZERO,
        ));
        self.wave_schedule = WaveSchedule::from_config(&self.config);
        self.score.enemies_total = self.config.total_enemies();
        self.phase = GamePhase::Active;
        info!(
            seed = self.config.seed,
            waves = self.wave_schedule.waves.len(),
            enemies = self.score.enemies_total,
            "match started"
        );
    }

    fn reset_world(&mut self) {
        self.world.clear();
        self.player = None;
        self.time = SimTime::default();
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.contact_queue.clear();
        self.events.clear();
        self.wave_schedule = WaveSchedule::default();
        self.score = ScoreState::default();
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Wave spawning
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.wave_schedule,
            &self.config,
            self.player,
            self.time.tick,
            &mut self.events,
            &mut self.score,
        );
        // 2. AI steering (targets resolved from last tick's positions)
        systems::ai_movement::run(&mut self.world);
        // 3. Player steering from held input
        systems::player_movement::run(&mut self.world);
        // 4. Weapons (cooldowns, auto-fire, commanded shots)
        systems::weapons::run(&mut self.world, &mut self.events, &mut self.score);
        // 5. Movement integration
        systems::movement::run(&mut self.world);
        // 6. Contacts reported since the last tick
        systems::contacts::run(&mut self.world, &mut self.contact_queue, &mut self.events);
        // 7. Projectile lifespans
        systems::projectiles::run(&mut self.world, &mut self.events);
        // 8. Cleanup (dead, spent, expired)
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.events,
            &mut self.score,
        );
    }

    fn check_game_over(&mut self) {
        if self.player().is_none() {
            self.phase = GamePhase::GameOver;
            info!(
                survived_secs = self.time.elapsed_secs,
                killed = self.score.enemies_killed,
                "player died; game over"
            );
        }
    }
}

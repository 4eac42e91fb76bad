//! Tests for the simulation engine: steering, weapons, contacts, and lifecycle.

use glam::Vec2;
use hecs::World;

use skirmish_combat::StatsLedger;
use skirmish_core::commands::PlayerCommand;
use skirmish_core::components::{Enemy, Projectile};
use skirmish_core::config::{ArchetypeConfig, GameConfig};
use skirmish_core::enums::*;
use skirmish_core::events::SimEvent;
use skirmish_core::types::{Position, Velocity};

use crate::engine::SimulationEngine;
use crate::systems::ai_movement;
use crate::world_setup;

/// No waves and an unarmed player, so tests place every enemy themselves.
fn quiet_config() -> GameConfig {
    GameConfig {
        waves: Vec::new(),
        player: ArchetypeConfig {
            weapon: None,
            ..ArchetypeConfig::player()
        },
        ..GameConfig::default()
    }
}

fn started(config: GameConfig) -> SimulationEngine {
    let mut engine = SimulationEngine::new(config);
    engine.queue_command(PlayerCommand::StartMatch);
    engine.tick();
    engine
}

fn position_of(engine: &SimulationEngine, entity: hecs::Entity) -> Vec2 {
    engine.world().get::<&Position>(entity).unwrap().0
}

fn velocity_of(engine: &SimulationEngine, entity: hecs::Entity) -> Vec2 {
    engine.world().get::<&Velocity>(entity).unwrap().0
}

fn ledger_of(engine: &SimulationEngine, entity: hecs::Entity) -> StatsLedger {
    (*engine.world().get::<&StatsLedger>(entity).unwrap()).clone()
}

fn projectile_count(world: &World) -> usize {
    world.query::<&Projectile>().iter().count()
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = SimulationEngine::new(GameConfig::default());
    let mut engine_b = SimulationEngine::new(GameConfig::default());

    for engine in [&mut engine_a, &mut engine_b] {
        engine.queue_command(PlayerCommand::StartMatch);
        engine.queue_command(PlayerCommand::Move { x: 1.0, y: 0.5 });
    }

    for _ in 0..600 {
        let snap_a = engine_a.tick();
        let snap_b = engine_b.tick();

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_different_seeds_spawn_differently() {
    let mut engine_a = SimulationEngine::new(GameConfig {
        seed: 1,
        ..GameConfig::default()
    });
    let mut engine_b = SimulationEngine::new(GameConfig {
        seed: 2,
        ..GameConfig::default()
    });
    engine_a.queue_command(PlayerCommand::StartMatch);
    engine_b.queue_command(PlayerCommand::StartMatch);

    let snap_a = engine_a.tick();
    let snap_b = engine_b.tick();
    let pos_a: Vec<Vec2> = snap_a.enemies.iter().map(|e| e.position).collect();
    let pos_b: Vec<Vec2> = snap_b.enemies.iter().map(|e| e.position).collect();
    assert_eq!(pos_a.len(), 3);
    assert_ne!(pos_a, pos_b);
}

// ---- Match lifecycle ----

#[test]
fn test_start_match_spawns_player_and_first_wave() {
    let mut engine = SimulationEngine::new(GameConfig::default());
    let lobby = engine.tick();
    assert_eq!(lobby.phase, GamePhase::Lobby);
    assert!(lobby.player.is_none());

    engine.queue_command(PlayerCommand::StartMatch);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Active);

    let player = snap.player.expect("player should exist");
    assert_eq!((player.health, player.max_health), (100, 100));
    assert_eq!((player.shield, player.max_shield), (50, 50));

    assert_eq!(snap.enemies.len(), 3);
    for enemy in &snap.enemies {
        assert_eq!(enemy.archetype, "melee");
        // One tick of movement off the spawn ring at most.
        let d = enemy.position.length();
        assert!((d - engine.config().spawn_radius).abs() < 0.1, "spawned at {d}");
    }
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, SimEvent::WaveSpawned { index: 0, count: 3 })));
    assert_eq!(snap.score.enemies_total, 14);
}

#[test]
fn test_later_waves_follow_schedule() {
    let mut engine = started(GameConfig::default());
    // Second wave is due at 10 s.
    for _ in 0..(10 * skirmish_core::constants::TICK_RATE) {
        engine.tick();
    }
    assert_eq!(engine.score().enemies_spawned, 3 + 4);
}

#[test]
fn test_waves_exhausted_after_last_wave() {
    let lobby = SimulationEngine::new(quiet_config());
    assert!(!lobby.waves_exhausted());
    assert!(started(quiet_config()).waves_exhausted());

    let mut engine = started(GameConfig::default());
    assert!(!engine.waves_exhausted());
    // Last wave is due at 20 s.
    for _ in 0..(20 * skirmish_core::constants::TICK_RATE) {
        engine.tick();
    }
    assert!(engine.waves_exhausted());
    assert_eq!(engine.score().enemies_spawned, 14);
}

#[test]
fn test_pause_freezes_time() {
    let mut engine = started(quiet_config());
    let before = engine.time().tick;
    engine.queue_command(PlayerCommand::Pause);
    for _ in 0..10 {
        assert_eq!(engine.tick().phase, GamePhase::Paused);
    }
    assert_eq!(engine.time().tick, before);

    engine.queue_command(PlayerCommand::Resume);
    engine.tick();
    assert_eq!(engine.time().tick, before + 1);
}

#[test]
fn test_return_to_lobby_clears_world() {
    let mut engine = started(GameConfig::default());
    engine.queue_command(PlayerCommand::Pause);
    engine.queue_command(PlayerCommand::ReturnToLobby);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Lobby);
    assert!(snap.player.is_none());
    assert!(snap.enemies.is_empty());
    assert_eq!(engine.world().len(), 0);
}

// ---- Player movement ----

#[test]
fn test_move_command_drives_player_at_base_speed() {
    let mut engine = started(quiet_config());
    let player = engine.player().unwrap();

    engine.queue_command(PlayerCommand::Move { x: 1.0, y: 1.0 });
    for _ in 0..50 {
        engine.tick();
    }
    let speed = velocity_of(&engine, player).length();
    assert!((speed - 5.0).abs() < 1e-4, "diagonal speed {speed}");
    // 1 s at 5 units/s.
    assert!((position_of(&engine, player).length() - 5.0).abs() < 0.01);

    engine.queue_command(PlayerCommand::Move { x: 0.0, y: 0.0 });
    engine.tick();
    assert_eq!(velocity_of(&engine, player), Vec2::ZERO);
}

#[test]
fn test_look_command_sets_facing() {
    let mut engine = started(quiet_config());
    engine.queue_command(PlayerCommand::Look { x: 0.0, y: 3.0 });
    let snap = engine.tick();
    let facing = snap.player.unwrap().facing;
    assert!((facing - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
}

// ---- AI steering ----

#[test]
fn test_melee_enemy_closes_in_and_holds() {
    let mut engine = started(quiet_config());
    let player = engine.player().unwrap();
    let enemy = engine.spawn_enemy("melee", Vec2::new(5.0, 0.0)).unwrap();

    engine.tick();
    assert!(velocity_of(&engine, enemy).x < 0.0, "should approach");

    for _ in 0..200 {
        engine.tick();
    }
    let d = position_of(&engine, enemy).distance(position_of(&engine, player));
    assert!(d <= 0.5 && d > 0.4, "holding distance {d}");
    assert_eq!(velocity_of(&engine, enemy), Vec2::ZERO);
}

#[test]
fn test_ranged_enemy_backs_off_to_band_edge() {
    let mut engine = started(quiet_config());
    let enemy = engine.spawn_enemy("ranged", Vec2::new(1.0, 0.0)).unwrap();

    engine.tick();
    assert!(velocity_of(&engine, enemy).x > 0.0, "should retreat");

    for _ in 0..200 {
        engine.tick();
    }
    let d = position_of(&engine, enemy).length();
    assert!((3.0..3.1).contains(&d), "settled at {d}");
    assert_eq!(velocity_of(&engine, enemy), Vec2::ZERO);

    // Still facing the player while it retreated and held.
    let snap = engine.tick();
    let facing = snap.enemies[0].facing;
    assert!((facing.abs() - std::f32::consts::PI).abs() < 1e-4);
}

#[test]
fn test_enemy_without_target_holds() {
    let mut world = World::new();
    let config = ArchetypeConfig::melee();
    let enemy = world_setup::spawn_enemy(&mut world, "melee", &config, Vec2::new(4.0, 4.0), None);
    world.get::<&mut Velocity>(enemy).unwrap().0 = Vec2::new(9.0, 9.0);

    ai_movement::run(&mut world);
    assert_eq!(world.get::<&Velocity>(enemy).unwrap().0, Vec2::ZERO);
}

#[test]
fn test_enemy_with_despawned_target_holds() {
    let mut world = World::new();
    let target = world_setup::spawn_player(&mut world, &ArchetypeConfig::player(), Vec2::ZERO);
    let enemy = world_setup::spawn_enemy(
        &mut world,
        "melee",
        &ArchetypeConfig::melee(),
        Vec2::new(4.0, 0.0),
        Some(target),
    );
    ai_movement::run(&mut world);
    assert!(world.get::<&Velocity>(enemy).unwrap().0.x < 0.0);

    world.despawn(target).unwrap();
    ai_movement::run(&mut world);
    assert_eq!(world.get::<&Velocity>(enemy).unwrap().0, Vec2::ZERO);
}

// ---- Contacts ----

#[test]
fn test_melee_contact_damages_player_shield_first() {
    let mut engine = started(quiet_config());
    let player = engine.player().unwrap();
    let enemy = engine.spawn_enemy("melee", Vec2::new(0.4, 0.0)).unwrap();

    engine.queue_contact(enemy, player);
    let snap = engine.tick();

    let ledger = ledger_of(&engine, player);
    assert_eq!((ledger.shield(), ledger.health()), (40, 100));
    assert!(snap.events.contains(&SimEvent::Hit {
        attacker: Faction::Enemy,
        victim: Faction::Player,
        shield_absorbed: 10,
        health_lost: 0,
    }));
}

#[test]
fn test_same_faction_contact_is_ignored() {
    let mut engine = started(quiet_config());
    let a = engine.spawn_enemy("melee", Vec2::new(3.0, 0.0)).unwrap();
    let b = engine.spawn_enemy("melee", Vec2::new(3.2, 0.0)).unwrap();

    engine.queue_contact(a, b);
    let snap = engine.tick();
    assert_eq!(ledger_of(&engine, b).health(), 60);
    assert!(!snap.events.iter().any(|e| matches!(e, SimEvent::Hit { .. })));
}

#[test]
fn test_enemy_projectile_hits_player_and_is_destroyed() {
    let mut engine = started(quiet_config());
    let player = engine.player().unwrap();
    let projectile = world_setup::spawn_projectile(
        engine.world_mut(),
        Faction::Enemy,
        20,
        Vec2::new(0.3, 0.0),
        Vec2::new(-1.0, 0.0),
        10.0,
        1.0,
    )
    .unwrap();

    engine.queue_contact(projectile, player);
    let snap = engine.tick();

    assert!(!engine.world().contains(projectile));
    assert!(snap.projectiles.is_empty());
    let ledger = ledger_of(&engine, player);
    assert_eq!((ledger.shield(), ledger.health()), (30, 100));
}

#[test]
fn test_enemy_projectile_passes_through_enemy() {
    let mut engine = started(quiet_config());
    let ally = engine.spawn_enemy("melee", Vec2::new(6.0, 0.0)).unwrap();
    let projectile = world_setup::spawn_projectile(
        engine.world_mut(),
        Faction::Enemy,
        20,
        Vec2::new(6.0, 0.3),
        Vec2::new(0.0, -1.0),
        10.0,
        1.0,
    )
    .unwrap();

    engine.queue_contact(projectile, ally);
    let snap = engine.tick();

    assert!(engine.world().contains(projectile));
    assert_eq!(snap.projectiles.len(), 1);
    assert_eq!(ledger_of(&engine, ally).health(), 60);
}

#[test]
fn test_projectile_resolves_only_one_hit() {
    let mut engine = started(quiet_config());
    let a = engine.spawn_enemy("melee", Vec2::new(6.0, 0.0)).unwrap();
    let b = engine.spawn_enemy("melee", Vec2::new(6.0, 0.2)).unwrap();
    let projectile = world_setup::spawn_projectile(
        engine.world_mut(),
        Faction::Player,
        20,
        Vec2::new(5.5, 0.1),
        Vec2::X,
        10.0,
        1.0,
    )
    .unwrap();

    engine.queue_contact(projectile, a);
    engine.queue_contact(projectile, b);
    engine.tick();

    assert_eq!(ledger_of(&engine, a).health(), 40);
    assert_eq!(ledger_of(&engine, b).health(), 60);
    assert!(!engine.world().contains(projectile));
}

#[test]
fn test_contacts_with_missing_entities_are_ignored() {
    let mut engine = started(quiet_config());
    let player = engine.player().unwrap();
    let enemy = engine.spawn_enemy("melee", Vec2::new(2.0, 0.0)).unwrap();
    engine.world_mut().despawn(enemy).unwrap();

    engine.queue_contact(enemy, player);
    engine.queue_contact(player, enemy);
    engine.queue_contact(player, player);
    engine.tick();

    let ledger = ledger_of(&engine, player);
    assert_eq!((ledger.shield(), ledger.health()), (50, 100));
}

// ---- Death ----

#[test]
fn test_enemy_killed_by_player_projectiles() {
    let mut engine = started(quiet_config());
    let enemy = engine.spawn_enemy("melee", Vec2::new(8.0, 0.0)).unwrap();

    // 60 health at 20 per hit.
    let mut died = Vec::new();
    for i in 0..3 {
        let projectile = world_setup::spawn_projectile(
            engine.world_mut(),
            Faction::Player,
            20,
            Vec2::new(7.0, 0.0),
            Vec2::X,
            10.0,
            1.0,
        )
        .unwrap();
        engine.queue_contact(projectile, enemy);
        let snap = engine.tick();
        died.extend(
            snap.events
                .into_iter()
                .filter(|e| matches!(e, SimEvent::Died { .. })),
        );
        assert_eq!(engine.world().contains(enemy), i < 2);
    }

    assert_eq!(died.len(), 1);
    assert!(matches!(died[0], SimEvent::Died { faction: Faction::Enemy, .. }));
    assert_eq!(engine.score().enemies_killed, 1);
}

#[test]
fn test_player_death_ends_match() {
    let mut engine = started(quiet_config());
    let player = engine.player().unwrap();
    let enemy = engine.spawn_enemy("melee", Vec2::new(0.4, 0.0)).unwrap();

    // 150 combined shield + health at 10 per touch; extra touches hit a corpse.
    for _ in 0..20 {
        engine.queue_contact(enemy, player);
    }
    let snap = engine.tick();

    assert_eq!(snap.phase, GamePhase::GameOver);
    assert!(snap.player.is_none());
    let deaths = snap
        .events
        .iter()
        .filter(|e| matches!(e, SimEvent::Died { faction: Faction::Player, .. }))
        .count();
    assert_eq!(deaths, 1);
    let hits = snap
        .events
        .iter()
        .filter(|e| matches!(e, SimEvent::Hit { .. }))
        .count();
    assert_eq!(hits, 15);

    let frozen = engine.time().tick;
    engine.tick();
    assert_eq!(engine.time().tick, frozen);

    // The surviving enemy loses its target and stands still.
    assert!(engine.world().get::<&Enemy>(enemy).is_ok());
}

// ---- Weapons and projectiles ----

#[test]
fn test_player_auto_fire_aims_at_nearest_enemy() {
    let mut engine = started(GameConfig {
        waves: Vec::new(),
        ..GameConfig::default()
    });
    engine.spawn_enemy("melee", Vec2::new(-9.0, 0.0)).unwrap();
    engine.spawn_enemy("melee", Vec2::new(0.0, 4.0)).unwrap();

    let mut fired = None;
    for _ in 0..10 {
        let snap = engine.tick();
        if let Some(p) = snap.projectiles.first() {
            fired = Some(p.velocity);
            break;
        }
    }
    let velocity = fired.expect("player should auto-fire within 0.2 s");
    assert!(velocity.x.abs() < 0.5 && velocity.y > 9.0, "aimed {velocity}");
    assert!((velocity.length() - 10.0).abs() < 1e-4);
}

#[test]
fn test_attack_command_fires_at_aim_point_without_enemies() {
    let mut engine = started(GameConfig {
        waves: Vec::new(),
        ..GameConfig::default()
    });
    engine.queue_command(PlayerCommand::Look { x: 0.0, y: -2.0 });
    engine.queue_command(PlayerCommand::Attack);
    let snap = engine.tick();

    assert_eq!(snap.projectiles.len(), 1);
    assert_eq!(snap.projectiles[0].owner, Faction::Player);
    assert!((snap.projectiles[0].velocity - Vec2::new(0.0, -10.0)).length() < 1e-4);
    assert!(snap
        .events
        .contains(&SimEvent::ProjectileFired { owner: Faction::Player }));
}

#[test]
fn test_projectile_expires_after_lifespan() {
    let mut engine = started(quiet_config());
    let projectile = world_setup::spawn_projectile(
        engine.world_mut(),
        Faction::Player,
        20,
        Vec2::ZERO,
        Vec2::X,
        10.0,
        1.0,
    )
    .unwrap();

    let mut expired_at = None;
    for tick in 1..=60 {
        let snap = engine.tick();
        if snap.events.contains(&SimEvent::ProjectileExpired) {
            expired_at = Some(tick);
            break;
        }
    }
    let expired_at = expired_at.expect("projectile should expire");
    assert!((49..=51).contains(&expired_at), "expired at tick {expired_at}");
    assert!(!engine.world().contains(projectile));
    assert_eq!(projectile_count(engine.world()), 0);
}

#[test]
fn test_ranged_enemy_fires_at_player() {
    let mut engine = started(quiet_config());
    engine.spawn_enemy("ranged", Vec2::new(5.0, 0.0)).unwrap();

    let mut enemy_shots = 0;
    for _ in 0..80 {
        let snap = engine.tick();
        enemy_shots += snap
            .events
            .iter()
            .filter(|e| matches!(e, SimEvent::ProjectileFired { owner: Faction::Enemy }))
            .count();
    }
    // 1.6 s at one shot per 1.5 s.
    assert_eq!(enemy_shots, 1);
}

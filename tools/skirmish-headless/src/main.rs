//! skirmish-headless: run a match without a renderer.
//!
//! Drives the engine with scripted player input and a naive overlap
//! detector standing in for physics, then prints a summary.
//!
//! Usage:
//!   skirmish-headless [--config match.json] [--ticks 3000] [--seed 7] [--json]

mod overlap;

use std::path::PathBuf;
use std::process;

use glam::Vec2;
use tracing::info;

use skirmish_core::commands::PlayerCommand;
use skirmish_core::config::GameConfig;
use skirmish_core::constants::TICK_RATE;
use skirmish_core::enums::GamePhase;
use skirmish_core::state::GameStateSnapshot;
use skirmish_sim::SimulationEngine;

use crate::overlap::OverlapDetector;

/// Ticks between changes of the scripted strafe heading.
const STRAFE_PERIOD_TICKS: u64 = 2 * TICK_RATE as u64;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let mut config = match parse_value(&args, "--config") {
        Some(path) => match GameConfig::load(&PathBuf::from(path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {e}");
                process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    if let Some(seed) = parse_value(&args, "--seed") {
        match seed.parse() {
            Ok(seed) => config.seed = seed,
            Err(_) => {
                eprintln!("Error: --seed expects an unsigned integer, got {seed}");
                process::exit(1);
            }
        }
    }

    let max_ticks: u64 = match parse_value(&args, "--ticks").map(|t| t.parse()) {
        None => 60 * TICK_RATE as u64,
        Some(Ok(ticks)) => ticks,
        Some(Err(_)) => {
            eprintln!("Error: --ticks expects an unsigned integer");
            process::exit(1);
        }
    };
    let json = args.iter().any(|a| a == "--json");

    let (last, outcome) = run_match(config, max_ticks);
    info!(outcome = outcome.label(), tick = last.time.tick, "match finished");

    if json {
        match serde_json::to_string_pretty(&last) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error serializing snapshot: {e}");
                process::exit(1);
            }
        }
    } else {
        print_summary(&last, outcome);
    }
}

/// How a headless run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Defeated,
    Cleared,
    TimeLimit,
}

impl Outcome {
    fn label(self) -> &'static str {
        match self {
            Outcome::Defeated => "player defeated",
            Outcome::Cleared => "all waves cleared",
            Outcome::TimeLimit => "time limit reached",
        }
    }
}

/// Cleared only once every wave has been released and no enemy is left.
fn outcome(snapshot: &GameStateSnapshot, waves_exhausted: bool) -> Outcome {
    if snapshot.phase == GamePhase::GameOver {
        Outcome::Defeated
    } else if waves_exhausted && snapshot.enemies.is_empty() {
        Outcome::Cleared
    } else {
        Outcome::TimeLimit
    }
}

fn run_match(config: GameConfig, max_ticks: u64) -> (GameStateSnapshot, Outcome) {
    let mut engine = SimulationEngine::new(config);
    let mut detector = OverlapDetector::default();

    engine.queue_command(PlayerCommand::StartMatch);
    let mut last = engine.tick();

    for tick in 1..max_ticks {
        if (tick - 1) % STRAFE_PERIOD_TICKS == 0 {
            let heading = Vec2::from_angle((tick / STRAFE_PERIOD_TICKS) as f32 * 1.3);
            engine.queue_command(PlayerCommand::Move {
                x: heading.x,
                y: heading.y,
            });
        }
        for (source, victim) in detector.detect(engine.world()) {
            engine.queue_contact(source, victim);
        }

        last = engine.tick();

        if outcome(&last, engine.waves_exhausted()) != Outcome::TimeLimit {
            break;
        }
    }
    let result = outcome(&last, engine.waves_exhausted());
    (last, result)
}

fn print_summary(snapshot: &GameStateSnapshot, outcome: Outcome) {
    let score = &snapshot.score;
    println!("Outcome:           {}", outcome.label());
    println!("Ticks:             {}", snapshot.time.tick);
    println!("Survived:          {:.2}s", score.survival_secs);
    println!(
        "Enemies killed:    {}/{} (spawned {})",
        score.enemies_killed, score.enemies_total, score.enemies_spawned
    );
    println!("Projectiles fired: {}", score.projectiles_fired);
    if let Some(player) = &snapshot.player {
        println!(
            "Player:            health {}/{}, shield {}/{}",
            player.health, player.max_health, player.shield, player.max_shield
        );
    }
}

fn print_usage() {
    eprintln!(
        "skirmish-headless: run a SKIRMISH match without a renderer\n\
         \n\
           --config <path>  JSON match config (default: built-in waves)\n\
           --ticks <N>      Tick limit (default: 3000, one minute)\n\
           --seed <N>       Override the config seed\n\
           --json           Print the final snapshot as JSON\n\
         \n\
         Set RUST_LOG to adjust verbosity and LOG_FORMAT=json for JSON logs.\n"
    );
}

fn parse_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}

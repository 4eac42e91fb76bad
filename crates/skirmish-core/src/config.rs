//! Match configuration: entity archetypes, weapons, and wave schedule.
//!
//! Loaded from JSON. Every field has a default, so an empty object `{}` is a
//! valid configuration reproducing the stock game.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::MovementStrategy;
use crate::constants::*;

/// Errors raised while loading or validating a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("archetype `{archetype}`: {field} must be {requirement}, got {value}")]
    InvalidValue {
        archetype: String,
        field: &'static str,
        requirement: &'static str,
        value: f64,
    },
    #[error("wave {index} references unknown archetype `{archetype}`")]
    UnknownArchetype { index: usize, archetype: String },
    #[error("wave {index} pushes the total enemy count past u32::MAX")]
    TooManyEnemies { index: usize },
}

/// Complete configuration for one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed. Same seed and same inputs produce the same match.
    pub seed: u64,
    pub player: ArchetypeConfig,
    /// Enemy archetypes by name.
    pub archetypes: BTreeMap<String, ArchetypeConfig>,
    pub waves: Vec<WaveConfig>,
    /// Distance from the player at which wave members appear.
    pub spawn_radius: f32,
}

/// Spawn-time values for one kind of entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchetypeConfig {
    pub max_health: i32,
    pub max_shield: i32,
    /// Outgoing contact damage, also used as projectile damage.
    pub damage: i32,
    pub base_speed: f32,
    pub hitbox_radius: f32,
    /// Movement policy for AI actors. `None` for input-driven entities.
    pub strategy: Option<MovementStrategy>,
    pub weapon: Option<WeaponConfig>,
}

/// Weapon tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    pub interval_secs: f32,
    pub projectile_speed: f32,
    pub projectile_lifespan_secs: f32,
}

/// A group of enemies released at a fixed time after match start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveConfig {
    /// Seconds after match start.
    pub at_secs: f32,
    /// (archetype name, count) pairs.
    pub groups: Vec<(String, u32)>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let mut archetypes = BTreeMap::new();
        archetypes.insert("melee".to_string(), ArchetypeConfig::melee());
        archetypes.insert("ranged".to_string(), ArchetypeConfig::ranged());

        Self {
            seed: 42,
            player: ArchetypeConfig::player(),
            archetypes,
            waves: vec![
                WaveConfig {
                    at_secs: 0.0,
                    groups: vec![("melee".to_string(), 3)],
                },
                WaveConfig {
                    at_secs: 10.0,
                    groups: vec![("melee".to_string(), 2), ("ranged".to_string(), 2)],
                },
                WaveConfig {
                    at_secs: 20.0,
                    groups: vec![("melee".to_string(), 4), ("ranged".to_string(), 3)],
                },
            ],
            spawn_radius: WAVE_SPAWN_RADIUS,
        }
    }
}

impl Default for ArchetypeConfig {
    fn default() -> Self {
        Self::player()
    }
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            interval_secs: PLAYER_FIRE_INTERVAL_SECS,
            projectile_speed: PROJECTILE_SPEED,
            projectile_lifespan_secs: PROJECTILE_LIFESPAN_SECS,
        }
    }
}

impl ArchetypeConfig {
    /// The stock player: full shield, auto-firing weapon, input-driven.
    pub fn player() -> Self {
        Self {
            max_health: PLAYER_MAX_HEALTH,
            max_shield: PLAYER_MAX_SHIELD,
            damage: PLAYER_DAMAGE,
            base_speed: PLAYER_SPEED,
            hitbox_radius: PLAYER_HITBOX_RADIUS,
            strategy: None,
            weapon: Some(WeaponConfig::default()),
        }
    }

    /// Contact-damage enemy that walks straight at its target.
    pub fn melee() -> Self {
        Self {
            max_health: ENEMY_MAX_HEALTH,
            max_shield: ENEMY_MAX_SHIELD,
            damage: ENEMY_DAMAGE,
            base_speed: ENEMY_SPEED,
            hitbox_radius: ENEMY_HITBOX_RADIUS,
            strategy: Some(MovementStrategy::MeleeApproach {
                stop_distance: MELEE_STOP_DISTANCE,
            }),
            weapon: None,
        }
    }

    /// Enemy that keeps its distance and shoots.
    pub fn ranged() -> Self {
        Self {
            strategy: Some(MovementStrategy::RangedOrbit {
                desired_distance: RANGED_DESIRED_DISTANCE,
                tolerance: RANGED_TOLERANCE,
            }),
            weapon: Some(WeaponConfig {
                interval_secs: RANGED_FIRE_INTERVAL_SECS,
                ..WeaponConfig::default()
            }),
            ..Self::melee()
        }
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        let invalid = |field, requirement, value: f64| ConfigError::InvalidValue {
            archetype: name.to_string(),
            field,
            requirement,
            value,
        };

        if self.max_health <= 0 {
            return Err(invalid("max_health", "> 0", self.max_health as f64));
        }
        if self.max_shield < 0 {
            return Err(invalid("max_shield", ">= 0", self.max_shield as f64));
        }
        if self.damage < 0 {
            return Err(invalid("damage", ">= 0", self.damage as f64));
        }
        if !(self.base_speed.is_finite() && self.base_speed > 0.0) {
            return Err(invalid("base_speed", "finite and > 0", self.base_speed as f64));
        }
        if !(self.hitbox_radius.is_finite() && self.hitbox_radius >= 0.0) {
            return Err(invalid(
                "hitbox_radius",
                "finite and >= 0",
                self.hitbox_radius as f64,
            ));
        }

        match self.strategy {
            Some(MovementStrategy::MeleeApproach { stop_distance }) => {
                if !is_distance(stop_distance) {
                    return Err(invalid(
                        "stop_distance",
                        "finite and >= 0",
                        stop_distance as f64,
                    ));
                }
            }
            Some(MovementStrategy::RangedOrbit {
                desired_distance,
                tolerance,
            }) => {
                if !is_distance(desired_distance) {
                    return Err(invalid(
                        "desired_distance",
                        "finite and >= 0",
                        desired_distance as f64,
                    ));
                }
                if !is_distance(tolerance) {
                    return Err(invalid("tolerance", "finite and >= 0", tolerance as f64));
                }
            }
            None => {}
        }

        if let Some(weapon) = &self.weapon {
            let positive = |v: f32| v.is_finite() && v > 0.0;
            if !positive(weapon.interval_secs) {
                return Err(invalid(
                    "interval_secs",
                    "finite and > 0",
                    weapon.interval_secs as f64,
                ));
            }
            if !positive(weapon.projectile_speed) {
                return Err(invalid(
                    "projectile_speed",
                    "finite and > 0",
                    weapon.projectile_speed as f64,
                ));
            }
            if !positive(weapon.projectile_lifespan_secs) {
                return Err(invalid(
                    "projectile_lifespan_secs",
                    "finite and > 0",
                    weapon.projectile_lifespan_secs as f64,
                ));
            }
        }

        Ok(())
    }
}

fn is_distance(v: f32) -> bool {
    v.is_finite() && v >= 0.0
}

impl GameConfig {
    /// Read, parse, and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a JSON config document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every archetype and every wave reference.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.player.validate("player")?;
        for (name, archetype) in &self.archetypes {
            archetype.validate(name)?;
        }
        let mut total: u32 = 0;
        for (index, wave) in self.waves.iter().enumerate() {
            for (archetype, count) in &wave.groups {
                if !self.archetypes.contains_key(archetype) {
                    return Err(ConfigError::UnknownArchetype {
                        index,
                        archetype: archetype.clone(),
                    });
                }
                total = total
                    .checked_add(*count)
                    .ok_or(ConfigError::TooManyEnemies { index })?;
            }
        }
        if !is_distance(self.spawn_radius) {
            return Err(ConfigError::InvalidValue {
                archetype: "spawn".to_string(),
                field: "spawn_radius",
                requirement: "finite and >= 0",
                value: self.spawn_radius as f64,
            });
        }
        Ok(())
    }

    /// Total number of enemies across all waves. Saturates on configs that
    /// skipped validation.
    pub fn total_enemies(&self) -> u32 {
        self.waves
            .iter()
            .flat_map(|w| w.groups.iter())
            .fold(0u32, |total, (_, count)| total.saturating_add(*count))
    }
}

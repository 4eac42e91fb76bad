//! Simulation constants and tuning defaults.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 50;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Player defaults ---

pub const PLAYER_MAX_HEALTH: i32 = 100;
pub const PLAYER_MAX_SHIELD: i32 = 50;
pub const PLAYER_DAMAGE: i32 = 20;
/// Player base speed (units/s).
pub const PLAYER_SPEED: f32 = 5.0;
pub const PLAYER_HITBOX_RADIUS: f32 = 0.5;

/// Player auto-fire interval (seconds).
pub const PLAYER_FIRE_INTERVAL_SECS: f32 = 0.1;

// --- Projectiles ---

/// Projectile launch speed (units/s).
pub const PROJECTILE_SPEED: f32 = 10.0;

/// Default projectile lifespan (seconds).
pub const PROJECTILE_LIFESPAN_SECS: f32 = 1.0;

pub const PROJECTILE_HITBOX_RADIUS: f32 = 0.1;

// --- Enemy defaults ---

pub const ENEMY_MAX_HEALTH: i32 = 60;
pub const ENEMY_MAX_SHIELD: i32 = 0;
pub const ENEMY_DAMAGE: i32 = 10;
pub const ENEMY_SPEED: f32 = 3.0;
pub const ENEMY_HITBOX_RADIUS: f32 = 0.5;

/// Melee enemies stop this close to their target (units).
pub const MELEE_STOP_DISTANCE: f32 = 0.5;

/// Ranged enemies try to stay this far from their target (units).
pub const RANGED_DESIRED_DISTANCE: f32 = 5.0;

/// Dead-zone half-width around `RANGED_DESIRED_DISTANCE`.
pub const RANGED_TOLERANCE: f32 = 2.0;

/// Ranged enemy fire interval (seconds).
pub const RANGED_FIRE_INTERVAL_SECS: f32 = 1.5;

// --- Waves ---

/// Radius of the ring around the player on which waves spawn (units).
pub const WAVE_SPAWN_RADIUS: f32 = 12.0;

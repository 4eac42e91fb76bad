//! Running match statistics, stored on the engine rather than in the world.

/// Counters fed into the snapshot's `ScoreView`.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub enemies_killed: u32,
    pub enemies_spawned: u32,
    pub enemies_total: u32,
    pub projectiles_fired: u32,
}

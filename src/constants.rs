//! Game tuning constants.

/// Full-size arena bounds, in arena units.
pub const ARENA_WIDTH: f32 = 600.0;
pub const ARENA_HEIGHT: f32 = 400.0;

/// Compact arena bounds, used on narrow terminals.
pub const COMPACT_ARENA_WIDTH: f32 = 300.0;
pub const COMPACT_ARENA_HEIGHT: f32 = 300.0;

/// Entities spawned per session.
pub const COIN_COUNT: usize = 8;
pub const POWER_UP_COUNT: usize = 2;
pub const OBSTACLE_COUNT: usize = 4;

/// Chance that a generated coin is the special (double-value) kind.
pub const SPECIAL_COIN_CHANCE: f64 = 0.2;

/// Side length of the player's square collision box.
pub const PLAYER_SIZE: f32 = 40.0;
pub const PLAYER_START_X: f32 = 50.0;
pub const PLAYER_START_Y: f32 = 50.0;

/// Distance moved per directional input.
pub const MOVE_STEP: f32 = 20.0;
/// Distance moved per input while invincible.
pub const POWERED_MOVE_STEP: f32 = 30.0;

/// An item is collected when its center is closer than this to the player.
pub const PICKUP_RADIUS: f32 = 30.0;

pub const NORMAL_COIN_VALUE: u32 = 10;
pub const SPECIAL_COIN_VALUE: u32 = 20;

pub const STARTING_LIVES: u32 = 3;
pub const MAX_LIVES: u32 = 5;

/// How long invincibility lasts after pickup. A second pickup resets the
/// remaining time rather than stacking.
pub const POWERED_DURATION_MS: u64 = 5000;
/// How long the cosmetic jump animation lasts.
pub const JUMP_DURATION_MS: u64 = 500;

/// Obstacle side length on each axis is min + [0, variance).
pub const OBSTACLE_MIN_SIZE: f32 = 40.0;
pub const OBSTACLE_SIZE_VARIANCE: f32 = 40.0;

/// Host loop poll interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 50;
/// Upper bound on a single tick's delta, so timers survive suspension.
pub const MAX_TICK_DT_MS: u64 = 500;

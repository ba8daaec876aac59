//! Arena entities and randomized generation.
//!
//! All generation goes through `&mut R: Rng` parameters so tests can inject a
//! seeded generator and get reproducible arenas.

use crate::constants::*;
use rand::Rng;

/// Which way the avatar is drawn facing. Horizontal moves update this, even
/// when the move itself is rejected by an obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinKind {
    Normal,
    Special,
}

impl CoinKind {
    /// Score awarded when a coin of this kind is collected.
    pub fn value(self) -> u32 {
        match self {
            CoinKind::Normal => NORMAL_COIN_VALUE,
            CoinKind::Special => SPECIAL_COIN_VALUE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    Invincibility,
    ExtraLife,
}

/// Rectangular play area. `(0, 0)` is the top-left corner; positions are
/// clamped to `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn full() -> Self {
        Bounds {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }

    pub fn compact() -> Self {
        Bounds {
            width: COMPACT_ARENA_WIDTH,
            height: COMPACT_ARENA_HEIGHT,
        }
    }

    pub fn for_layout(compact: bool) -> Self {
        if compact {
            Self::compact()
        } else {
            Self::full()
        }
    }

    pub fn clamp_x(&self, x: f32) -> f32 {
        x.clamp(0.0, self.width)
    }

    pub fn clamp_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coin {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub kind: CoinKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUp {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub kind: PowerUpKind,
}

/// A static hazard. Spawned once per session, never destroyed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    /// Axis-aligned overlap test against the player's square box anchored at
    /// `(px, py)` (top-left corner).
    pub fn hits_player_box(&self, px: f32, py: f32) -> bool {
        px < self.x + self.width
            && px + PLAYER_SIZE > self.x
            && py < self.y + self.height
            && py + PLAYER_SIZE > self.y
    }
}

/// The player avatar. Jump and powered are remaining-time counters so the
/// host loop can expire them deterministically instead of racing one-shot
/// timers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub facing: Facing,
    /// Remaining milliseconds of the cosmetic jump animation.
    pub jump_ms: u64,
    /// Remaining milliseconds of invincibility.
    pub powered_ms: u64,
}

impl Player {
    pub fn at_start() -> Self {
        Player {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
            facing: Facing::Right,
            jump_ms: 0,
            powered_ms: 0,
        }
    }

    pub fn is_jumping(&self) -> bool {
        self.jump_ms > 0
    }

    pub fn is_powered(&self) -> bool {
        self.powered_ms > 0
    }

    /// Distance covered by one directional input.
    pub fn step(&self) -> f32 {
        if self.is_powered() {
            POWERED_MOVE_STEP
        } else {
            MOVE_STEP
        }
    }
}

/// The generated entity sets for one session.
#[derive(Debug, Clone, Default)]
pub struct Arena {
    pub coins: Vec<Coin>,
    pub power_ups: Vec<PowerUp>,
    pub obstacles: Vec<Obstacle>,
}

/// Populate a fresh arena: 8 coins, 2 power-ups, 4 obstacles, uniformly
/// random positions inside `bounds`. Ids come from the caller's monotone
/// counter so every entity in a session is unique.
pub fn generate_arena<R: Rng>(bounds: Bounds, next_id: &mut u32, rng: &mut R) -> Arena {
    let mut arena = Arena::default();

    for _ in 0..COIN_COUNT {
        let kind = if rng.gen_bool(SPECIAL_COIN_CHANCE) {
            CoinKind::Special
        } else {
            CoinKind::Normal
        };
        arena.coins.push(Coin {
            id: alloc_id(next_id),
            x: rng.gen_range(0.0..bounds.width),
            y: rng.gen_range(0.0..bounds.height),
            kind,
        });
    }

    for _ in 0..POWER_UP_COUNT {
        let kind = if rng.gen_bool(0.5) {
            PowerUpKind::Invincibility
        } else {
            PowerUpKind::ExtraLife
        };
        arena.power_ups.push(PowerUp {
            id: alloc_id(next_id),
            x: rng.gen_range(0.0..bounds.width),
            y: rng.gen_range(0.0..bounds.height),
            kind,
        });
    }

    for _ in 0..OBSTACLE_COUNT {
        arena.obstacles.push(spawn_obstacle(bounds, next_id, rng));
    }

    arena
}

/// Spawn one obstacle, re-rolling while it overlaps the player's start box so
/// the first move is never an unavoidable hit.
fn spawn_obstacle<R: Rng>(bounds: Bounds, next_id: &mut u32, rng: &mut R) -> Obstacle {
    loop {
        let obstacle = Obstacle {
            id: *next_id,
            x: rng.gen_range(0.0..bounds.width),
            y: rng.gen_range(0.0..bounds.height),
            width: OBSTACLE_MIN_SIZE + rng.gen_range(0.0..OBSTACLE_SIZE_VARIANCE),
            height: OBSTACLE_MIN_SIZE + rng.gen_range(0.0..OBSTACLE_SIZE_VARIANCE),
        };
        if !obstacle.hits_player_box(PLAYER_START_X, PLAYER_START_Y) {
            return Obstacle {
                id: alloc_id(next_id),
                ..obstacle
            };
        }
    }
}

fn alloc_id(next_id: &mut u32) -> u32 {
    let id = *next_id;
    *next_id += 1;
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_generate_entity_counts() {
        let mut rng = test_rng();
        let mut next_id = 0;
        let arena = generate_arena(Bounds::full(), &mut next_id, &mut rng);
        assert_eq!(arena.coins.len(), COIN_COUNT);
        assert_eq!(arena.power_ups.len(), POWER_UP_COUNT);
        assert_eq!(arena.obstacles.len(), OBSTACLE_COUNT);
    }

    #[test]
    fn test_generated_positions_within_bounds() {
        let mut rng = test_rng();
        let mut next_id = 0;
        for bounds in [Bounds::full(), Bounds::compact()] {
            let arena = generate_arena(bounds, &mut next_id, &mut rng);
            for coin in &arena.coins {
                assert!(coin.x >= 0.0 && coin.x < bounds.width);
                assert!(coin.y >= 0.0 && coin.y < bounds.height);
            }
            for power_up in &arena.power_ups {
                assert!(power_up.x >= 0.0 && power_up.x < bounds.width);
                assert!(power_up.y >= 0.0 && power_up.y < bounds.height);
            }
            for obstacle in &arena.obstacles {
                assert!(obstacle.x >= 0.0 && obstacle.x < bounds.width);
                assert!(obstacle.y >= 0.0 && obstacle.y < bounds.height);
            }
        }
    }

    #[test]
    fn test_obstacle_sizes() {
        let mut rng = test_rng();
        let mut next_id = 0;
        let arena = generate_arena(Bounds::full(), &mut next_id, &mut rng);
        for obstacle in &arena.obstacles {
            assert!(obstacle.width >= OBSTACLE_MIN_SIZE);
            assert!(obstacle.width < OBSTACLE_MIN_SIZE + OBSTACLE_SIZE_VARIANCE);
            assert!(obstacle.height >= OBSTACLE_MIN_SIZE);
            assert!(obstacle.height < OBSTACLE_MIN_SIZE + OBSTACLE_SIZE_VARIANCE);
        }
    }

    #[test]
    fn test_obstacles_avoid_player_start() {
        // Run many generations; none may trap the spawn position.
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut next_id = 0;
            let arena = generate_arena(Bounds::compact(), &mut next_id, &mut rng);
            for obstacle in &arena.obstacles {
                assert!(
                    !obstacle.hits_player_box(PLAYER_START_X, PLAYER_START_Y),
                    "seed {} spawned an obstacle on the player start",
                    seed
                );
            }
        }
    }

    #[test]
    fn test_ids_are_unique_and_monotone() {
        let mut rng = test_rng();
        let mut next_id = 7;
        let arena = generate_arena(Bounds::full(), &mut next_id, &mut rng);

        let mut ids: Vec<u32> = arena
            .coins
            .iter()
            .map(|c| c.id)
            .chain(arena.power_ups.iter().map(|p| p.id))
            .chain(arena.obstacles.iter().map(|o| o.id))
            .collect();
        let total = COIN_COUNT + POWER_UP_COUNT + OBSTACLE_COUNT;
        assert_eq!(ids.len(), total);
        assert_eq!(next_id, 7 + total as u32);

        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total, "entity ids must be unique");
    }

    #[test]
    fn test_same_seed_same_arena() {
        let mut next_a = 0;
        let mut next_b = 0;
        let arena_a = generate_arena(Bounds::full(), &mut next_a, &mut test_rng());
        let arena_b = generate_arena(Bounds::full(), &mut next_b, &mut test_rng());
        assert_eq!(arena_a.coins, arena_b.coins);
        assert_eq!(arena_a.power_ups, arena_b.power_ups);
        assert_eq!(arena_a.obstacles, arena_b.obstacles);
    }

    #[test]
    fn test_coin_values() {
        assert_eq!(CoinKind::Normal.value(), 10);
        assert_eq!(CoinKind::Special.value(), 20);
    }

    #[test]
    fn test_player_step_speeds() {
        let mut player = Player::at_start();
        assert_eq!(player.step(), MOVE_STEP);
        player.powered_ms = 1;
        assert_eq!(player.step(), POWERED_MOVE_STEP);
    }

    #[test]
    fn test_bounds_clamping() {
        let bounds = Bounds::full();
        assert_eq!(bounds.clamp_x(-5.0), 0.0);
        assert_eq!(bounds.clamp_x(9999.0), ARENA_WIDTH);
        assert_eq!(bounds.clamp_y(-0.1), 0.0);
        assert_eq!(bounds.clamp_y(9999.0), ARENA_HEIGHT);
        assert_eq!(bounds.clamp_x(123.0), 123.0);
    }

    #[test]
    fn test_obstacle_overlap_edges() {
        let obstacle = Obstacle {
            id: 0,
            x: 100.0,
            y: 100.0,
            width: 50.0,
            height: 50.0,
        };
        // Player box is 40x40, anchored top-left.
        assert!(obstacle.hits_player_box(100.0, 100.0));
        assert!(obstacle.hits_player_box(61.0, 100.0));
        // Touching edges do not overlap (strict inequality).
        assert!(!obstacle.hits_player_box(60.0, 100.0));
        assert!(!obstacle.hits_player_box(150.0, 100.0));
        assert!(!obstacle.hits_player_box(100.0, 60.0));
        assert!(!obstacle.hits_player_box(100.0, 150.0));
    }
}

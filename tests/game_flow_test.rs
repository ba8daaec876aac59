//! Integration test: full game session flows.
//!
//! Drives the public game API the way the host loop does: discrete moves,
//! dt-based ticks, pause/restart transitions, and viewport changes.

use coindash::arena::{Coin, CoinKind, Obstacle, PowerUp, PowerUpKind};
use coindash::constants::*;
use coindash::game::{Direction, Game, GameEvent, GameStatus};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

/// A playing game with a hand-built arena for deterministic walkthroughs.
fn scripted_game() -> Game {
    let mut game = Game::new(false, &mut test_rng());
    game.arena.coins.clear();
    game.arena.power_ups.clear();
    game.arena.obstacles.clear();
    game
}

#[test]
fn test_three_collisions_end_the_game() {
    let mut game = scripted_game();
    game.arena.obstacles.push(Obstacle {
        id: 100,
        x: PLAYER_START_X + MOVE_STEP,
        y: PLAYER_START_Y,
        width: 50.0,
        height: 50.0,
    });

    assert_eq!(game.lives, 3);
    assert_eq!(game.score, 0);

    game.handle_move(Direction::Right);
    assert_eq!((game.lives, game.status), (2, GameStatus::Playing));

    game.handle_move(Direction::Right);
    assert_eq!((game.lives, game.status), (1, GameStatus::Playing));

    let events = game.handle_move(Direction::Right);
    assert_eq!((game.lives, game.status), (0, GameStatus::Over));
    assert!(events.contains(&GameEvent::GameOver));
}

#[test]
fn test_collecting_every_coin_sums_the_score() {
    let mut game = scripted_game();
    // A trail of coins straight ahead, one per step.
    for i in 0..4u32 {
        game.arena.coins.push(Coin {
            id: 200 + i,
            x: PLAYER_START_X + MOVE_STEP * (i + 1) as f32,
            y: PLAYER_START_Y,
            kind: if i == 3 {
                CoinKind::Special
            } else {
                CoinKind::Normal
            },
        });
    }

    // The pickup radius (30) exceeds the step (20), so the first move
    // sweeps up the first two coins, and so on down the trail.
    while !game.arena.coins.is_empty() {
        let before = game.arena.coins.len();
        game.handle_move(Direction::Right);
        assert!(game.arena.coins.len() < before, "each move must collect");
    }
    assert_eq!(game.score, 3 * 10 + 20);
}

#[test]
fn test_invincibility_session() {
    let mut game = scripted_game();
    game.arena.obstacles.push(Obstacle {
        id: 300,
        x: PLAYER_START_X + MOVE_STEP + 50.0,
        y: PLAYER_START_Y,
        width: 40.0,
        height: 40.0,
    });
    game.arena.power_ups.push(PowerUp {
        id: 301,
        x: PLAYER_START_X + MOVE_STEP,
        y: PLAYER_START_Y,
        kind: PowerUpKind::Invincibility,
    });

    // Pick up the power-up.
    let events = game.handle_move(Direction::Right);
    assert_eq!(
        events,
        vec![GameEvent::PowerUpCollected {
            kind: PowerUpKind::Invincibility
        }]
    );
    assert!(game.player.is_powered());

    // Powered: walk straight through the obstacle at the faster step.
    let x_before = game.player.x;
    game.handle_move(Direction::Right);
    assert_eq!(game.player.x, x_before + POWERED_MOVE_STEP);
    assert_eq!(game.lives, STARTING_LIVES);

    // Let it expire in host-loop-sized ticks.
    let ticks = POWERED_DURATION_MS / TICK_INTERVAL_MS;
    for _ in 0..ticks {
        game.tick(TICK_INTERVAL_MS);
    }
    assert!(!game.player.is_powered());

    // Back to the normal step once expired.
    let x_before = game.player.x;
    game.handle_move(Direction::Left);
    assert_eq!(game.player.x, x_before - MOVE_STEP);
}

#[test]
fn test_pause_blocks_everything_until_resumed() {
    let mut game = scripted_game();
    game.arena.coins.push(Coin {
        id: 400,
        x: PLAYER_START_X + MOVE_STEP,
        y: PLAYER_START_Y,
        kind: CoinKind::Normal,
    });

    game.toggle_pause();
    assert_eq!(game.status, GameStatus::Paused);

    let events = game.handle_move(Direction::Right);
    assert!(events.is_empty());
    assert_eq!(game.player.x, PLAYER_START_X);
    assert_eq!(game.score, 0);
    assert_eq!(game.arena.coins.len(), 1);

    game.toggle_pause();
    game.handle_move(Direction::Right);
    assert_eq!(game.score, 10);
}

#[test]
fn test_restart_after_game_over_starts_a_clean_session() {
    let mut rng = test_rng();
    let mut game = Game::new(false, &mut rng);

    // Force a game over through the public API.
    game.arena.coins.clear();
    game.arena.power_ups.clear();
    game.arena.obstacles.clear();
    game.arena.obstacles.push(Obstacle {
        id: 500,
        x: PLAYER_START_X + MOVE_STEP,
        y: PLAYER_START_Y,
        width: 50.0,
        height: 50.0,
    });
    for _ in 0..STARTING_LIVES {
        game.handle_move(Direction::Right);
    }
    assert_eq!(game.status, GameStatus::Over);

    let events = game.restart(&mut rng);
    assert_eq!(events, vec![GameEvent::Restarted]);
    assert_eq!(game.status, GameStatus::Playing);
    assert_eq!(game.score, 0);
    assert_eq!(game.lives, STARTING_LIVES);
    assert_eq!(game.player.x, PLAYER_START_X);
    assert_eq!(game.player.y, PLAYER_START_Y);
    assert_eq!(game.arena.coins.len(), COIN_COUNT);
    assert_eq!(game.arena.power_ups.len(), POWER_UP_COUNT);
    assert_eq!(game.arena.obstacles.len(), OBSTACLE_COUNT);
}

#[test]
fn test_extra_life_flow_respects_the_cap() {
    let mut game = scripted_game();
    game.lives = 4;
    for i in 0..2u32 {
        game.arena.power_ups.push(PowerUp {
            id: 600 + i,
            x: PLAYER_START_X + MOVE_STEP * (i + 1) as f32,
            y: PLAYER_START_Y,
            kind: PowerUpKind::ExtraLife,
        });
    }

    // The pickup radius sweeps up both power-ups on the first move; lives
    // never exceed MAX_LIVES.
    game.handle_move(Direction::Right);
    game.handle_move(Direction::Right);
    assert_eq!(game.lives, MAX_LIVES);
    assert!(game.arena.power_ups.is_empty());
}

#[test]
fn test_compact_resize_mid_session_keeps_player_in_bounds() {
    let mut game = scripted_game();
    // Walk deep into the full arena.
    for _ in 0..30 {
        game.handle_move(Direction::Right);
        game.handle_move(Direction::Down);
    }
    assert!(game.player.x > COMPACT_ARENA_WIDTH);

    game.set_compact(true);
    assert!(game.player.x <= COMPACT_ARENA_WIDTH);
    assert!(game.player.y <= COMPACT_ARENA_HEIGHT);

    // Movement keeps respecting the new, tighter bounds.
    for _ in 0..40 {
        game.handle_move(Direction::Right);
    }
    assert_eq!(game.player.x, COMPACT_ARENA_WIDTH);
}

#[test]
fn test_player_position_always_within_bounds_under_random_walks() {
    use rand::Rng;

    let mut rng = test_rng();
    let mut game = Game::new(false, &mut rng);

    for _ in 0..2000 {
        let direction = match rng.gen_range(0..4) {
            0 => Direction::Left,
            1 => Direction::Right,
            2 => Direction::Up,
            _ => Direction::Down,
        };
        game.handle_move(direction);
        if game.status == GameStatus::Over {
            game.restart(&mut rng);
        }
        game.tick(TICK_INTERVAL_MS);

        assert!(game.player.x >= 0.0 && game.player.x <= game.bounds.width);
        assert!(game.player.y >= 0.0 && game.player.y <= game.bounds.height);
    }
}

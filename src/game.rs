//! Core game state and the update operations driven by the host loop.
//!
//! Rendering is a pure projection of [`Game`]; every mutation happens in the
//! methods here, synchronously, in response to a discrete input or a timer
//! tick. Update methods return [`GameEvent`]s for the host to surface.

use crate::arena::{generate_arena, Arena, Bounds, Facing, Player, PowerUpKind};
use crate::constants::*;
use rand::Rng;

/// Directional movement input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Gates input processing. `Over` is terminal until an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Paused,
    Over,
}

/// Observable outcome of a single update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CoinCollected { value: u32 },
    PowerUpCollected { kind: PowerUpKind },
    LifeLost { remaining: u32 },
    GameOver,
    Restarted,
}

/// Full game state for one session.
#[derive(Debug, Clone)]
pub struct Game {
    pub status: GameStatus,
    pub bounds: Bounds,
    /// Narrow-terminal layout: compact arena plus on-screen buttons.
    pub compact: bool,
    pub player: Player,
    pub arena: Arena,
    pub score: u32,
    pub lives: u32,
    next_id: u32,
}

impl Game {
    pub fn new<R: Rng>(compact: bool, rng: &mut R) -> Self {
        let bounds = Bounds::for_layout(compact);
        let mut next_id = 0;
        let arena = generate_arena(bounds, &mut next_id, rng);
        Game {
            status: GameStatus::Playing,
            bounds,
            compact,
            player: Player::at_start(),
            arena,
            score: 0,
            lives: STARTING_LIVES,
            next_id,
        }
    }

    /// Process one directional input: clamp the candidate position, test
    /// obstacles, collect items, commit. No-op unless `Playing`.
    pub fn handle_move(&mut self, direction: Direction) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.status != GameStatus::Playing {
            return events;
        }

        let step = self.player.step();
        let mut nx = self.player.x;
        let mut ny = self.player.y;
        match direction {
            Direction::Left => {
                self.player.facing = Facing::Left;
                nx = self.bounds.clamp_x(nx - step);
            }
            Direction::Right => {
                self.player.facing = Facing::Right;
                nx = self.bounds.clamp_x(nx + step);
            }
            Direction::Up => ny = self.bounds.clamp_y(ny - step),
            Direction::Down => ny = self.bounds.clamp_y(ny + step),
        }

        // An obstacle hit while unpowered rejects the whole move: position
        // stays, one life is lost, and nothing is collected.
        let blocked = !self.player.is_powered()
            && self
                .arena
                .obstacles
                .iter()
                .any(|obstacle| obstacle.hits_player_box(nx, ny));
        if blocked {
            self.lives = self.lives.saturating_sub(1);
            events.push(GameEvent::LifeLost {
                remaining: self.lives,
            });
            if self.lives == 0 {
                self.status = GameStatus::Over;
                events.push(GameEvent::GameOver);
            }
            return events;
        }

        self.collect_items(nx, ny, &mut events);
        self.player.x = nx;
        self.player.y = ny;
        events
    }

    /// Collect every coin and power-up within pickup range of `(px, py)`.
    /// Removal via `retain` makes double-collection impossible.
    fn collect_items(&mut self, px: f32, py: f32, events: &mut Vec<GameEvent>) {
        let mut gained = 0u32;
        self.arena.coins.retain(|coin| {
            if within_pickup(coin.x, coin.y, px, py) {
                gained += coin.kind.value();
                events.push(GameEvent::CoinCollected {
                    value: coin.kind.value(),
                });
                false
            } else {
                true
            }
        });
        self.score += gained;

        let mut extra_lives = 0u32;
        let mut powered = false;
        self.arena.power_ups.retain(|power_up| {
            if within_pickup(power_up.x, power_up.y, px, py) {
                match power_up.kind {
                    PowerUpKind::Invincibility => powered = true,
                    PowerUpKind::ExtraLife => extra_lives += 1,
                }
                events.push(GameEvent::PowerUpCollected {
                    kind: power_up.kind,
                });
                false
            } else {
                true
            }
        });
        if powered {
            // Re-pickup resets the deadline; there is no stacking.
            self.player.powered_ms = POWERED_DURATION_MS;
        }
        self.lives = (self.lives + extra_lives).min(MAX_LIVES);
    }

    /// Advance the powered/jump timers by `dt_ms`. Timers freeze while
    /// paused or over. The delta is clamped so a suspended process does not
    /// expire everything at once with a giant step.
    pub fn tick(&mut self, dt_ms: u64) {
        if self.status != GameStatus::Playing {
            return;
        }
        let dt = dt_ms.min(MAX_TICK_DT_MS);
        self.player.powered_ms = self.player.powered_ms.saturating_sub(dt);
        self.player.jump_ms = self.player.jump_ms.saturating_sub(dt);
    }

    /// Space: start the cosmetic hop. Ignored mid-hop and while not playing.
    pub fn press_jump(&mut self) {
        if self.status == GameStatus::Playing && !self.player.is_jumping() {
            self.player.jump_ms = JUMP_DURATION_MS;
        }
    }

    /// Toggle `Playing <-> Paused`. `Over` only exits through [`Game::restart`].
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Playing => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Playing,
            GameStatus::Over => GameStatus::Over,
        };
    }

    /// Restart after game over: fresh arena, score 0, full starting lives,
    /// player back at the spawn point.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) -> Vec<GameEvent> {
        self.arena = generate_arena(self.bounds, &mut self.next_id, rng);
        self.player = Player::at_start();
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.status = GameStatus::Playing;
        vec![GameEvent::Restarted]
    }

    /// Viewport reclassification from a terminal resize. Swaps the arena
    /// bounds and re-clamps the player into them.
    pub fn set_compact(&mut self, compact: bool) {
        if self.compact == compact {
            return;
        }
        self.compact = compact;
        self.bounds = Bounds::for_layout(compact);
        self.player.x = self.bounds.clamp_x(self.player.x);
        self.player.y = self.bounds.clamp_y(self.player.y);
    }
}

/// Euclidean pickup test between an item center and the player position.
fn within_pickup(item_x: f32, item_y: f32, px: f32, py: f32) -> bool {
    let dx = item_x - px;
    let dy = item_y - py;
    (dx * dx + dy * dy).sqrt() < PICKUP_RADIUS
}

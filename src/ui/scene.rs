//! Arena scene rendering.
//!
//! The arena is projected onto a character grid: unit coordinates scale to
//! terminal cells, entities paint glyphs into the grid, and each grid row is
//! emitted as a line of color-batched spans.

use crate::arena::Facing;
use crate::game::Game;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const OBSTACLE_BLOCK: char = '\u{2588}'; // █
const COIN_GLYPH: char = '\u{25CF}'; // ●
const SPECIAL_COIN_GLYPH: char = '\u{2605}'; // ★
const INVINCIBILITY_GLYPH: char = '\u{25C6}'; // ◆
const EXTRA_LIFE_GLYPH: char = '\u{2665}'; // ♥

const OBSTACLE_COLOR: Color = Color::Rgb(110, 110, 120);
const COIN_COLOR: Color = Color::Yellow;
const SPECIAL_COIN_COLOR: Color = Color::LightYellow;
const INVINCIBILITY_COLOR: Color = Color::Magenta;
const EXTRA_LIFE_COLOR: Color = Color::LightRed;
const PLAYER_COLOR: Color = Color::LightMagenta;
const POWERED_PLAYER_COLOR: Color = Color::Yellow;
const FLOOR_COLOR: Color = Color::Rgb(40, 40, 55);

type Cell = (char, Color);

/// Render the play field into `area`, stretching the arena to fill it.
pub fn render_scene(frame: &mut Frame, area: Rect, game: &Game) {
    if area.width < 2 || area.height < 2 {
        return;
    }

    let cols = area.width as usize;
    let rows = area.height as usize;
    let mut grid: Vec<Vec<Cell>> = vec![vec![('\u{00B7}', FLOOR_COLOR); cols]; rows];

    let to_col = |x: f32| -> usize {
        let t = (x / game.bounds.width).clamp(0.0, 1.0);
        ((t * (cols - 1) as f32).round() as usize).min(cols - 1)
    };
    let to_row = |y: f32| -> usize {
        let t = (y / game.bounds.height).clamp(0.0, 1.0);
        ((t * (rows - 1) as f32).round() as usize).min(rows - 1)
    };

    // Obstacles first so items and the player draw over them.
    for obstacle in &game.arena.obstacles {
        let c0 = to_col(obstacle.x);
        let c1 = to_col(obstacle.x + obstacle.width);
        let r0 = to_row(obstacle.y);
        let r1 = to_row(obstacle.y + obstacle.height);
        for row in grid.iter_mut().take(r1 + 1).skip(r0) {
            for cell in row.iter_mut().take(c1 + 1).skip(c0) {
                *cell = (OBSTACLE_BLOCK, OBSTACLE_COLOR);
            }
        }
    }

    for coin in &game.arena.coins {
        let (glyph, color) = match coin.kind {
            crate::arena::CoinKind::Normal => (COIN_GLYPH, COIN_COLOR),
            crate::arena::CoinKind::Special => (SPECIAL_COIN_GLYPH, SPECIAL_COIN_COLOR),
        };
        grid[to_row(coin.y)][to_col(coin.x)] = (glyph, color);
    }

    for power_up in &game.arena.power_ups {
        let (glyph, color) = match power_up.kind {
            crate::arena::PowerUpKind::Invincibility => (INVINCIBILITY_GLYPH, INVINCIBILITY_COLOR),
            crate::arena::PowerUpKind::ExtraLife => (EXTRA_LIFE_GLYPH, EXTRA_LIFE_COLOR),
        };
        grid[to_row(power_up.y)][to_col(power_up.x)] = (glyph, color);
    }

    // Player last. The jump animation lifts the avatar one row.
    let player_glyph = match game.player.facing {
        Facing::Left => '\u{25C0}',  // ◀
        Facing::Right => '\u{25B6}', // ▶
    };
    let player_color = if game.player.is_powered() {
        POWERED_PLAYER_COLOR
    } else {
        PLAYER_COLOR
    };
    let mut player_row = to_row(game.player.y);
    if game.player.is_jumping() {
        player_row = player_row.saturating_sub(1);
    }
    grid[player_row][to_col(game.player.x)] = (player_glyph, player_color);

    // Emit rows, batching consecutive same-color cells into one span.
    for (row_idx, row) in grid.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut cur_color = row[0].1;
        let mut cur_text = String::new();
        for &(glyph, color) in row {
            if color != cur_color {
                spans.push(Span::styled(
                    std::mem::take(&mut cur_text),
                    Style::default().fg(cur_color),
                ));
                cur_color = color;
            }
            cur_text.push(glyph);
        }
        if !cur_text.is_empty() {
            spans.push(Span::styled(cur_text, Style::default().fg(cur_color)));
        }

        let line = Paragraph::new(Line::from(spans));
        frame.render_widget(
            line,
            Rect::new(area.x, area.y + row_idx as u16, area.width, 1),
        );
    }
}

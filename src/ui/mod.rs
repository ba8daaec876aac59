//! Render boundary: a pure projection of [`Game`] onto the terminal.

pub mod controls;
pub mod responsive;
mod scene;

use crate::arena::Facing;
use crate::constants::MAX_LIVES;
use crate::game::{Game, GameStatus};
use controls::TouchControls;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use responsive::Viewport;

const INFO_PANEL_WIDTH: u16 = 22;

/// Draw one frame. `note` is the latest event message from the host loop.
pub fn draw(frame: &mut Frame, game: &Game, viewport: &Viewport, note: Option<&str>) {
    if viewport.too_small {
        responsive::render_too_small(frame, viewport);
        return;
    }

    let area = frame.size();
    frame.render_widget(Clear, area);

    let border_color = match game.status {
        GameStatus::Over => Color::Red,
        GameStatus::Paused => Color::DarkGray,
        GameStatus::Playing if game.player.is_powered() => Color::Yellow,
        GameStatus::Playing => Color::LightBlue,
    };
    let block = Block::default()
        .title(" Coindash ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(inner);
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(h_chunks[0]);

    scene::render_scene(frame, v_chunks[0], game);
    render_status_bar(frame, v_chunks[1], game, note);
    render_info_panel(frame, h_chunks[1], game);

    if viewport.compact {
        TouchControls::from_area(area).render(frame);
    }

    match game.status {
        GameStatus::Paused => render_overlay(frame, area, game, "Paused", Color::Yellow),
        GameStatus::Over => render_overlay(frame, area, game, "Game Over!", Color::Red),
        GameStatus::Playing => {}
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, game: &Game, note: Option<&str>) {
    if area.height < 1 {
        return;
    }

    let (default_text, color) = match game.status {
        GameStatus::Playing if game.player.is_powered() => ("Invincible!", Color::Yellow),
        GameStatus::Playing => ("Collect the coins!", Color::LightBlue),
        GameStatus::Paused => ("Paused", Color::DarkGray),
        GameStatus::Over => ("Game over", Color::Red),
    };
    let text = note.unwrap_or(default_text);
    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height < 2 {
        return;
    }
    let controls: &[(&str, &str)] = match game.status {
        GameStatus::Playing => &[
            ("[Arrows]", "Move"),
            ("[Space]", "Jump"),
            ("[P]", "Pause"),
            ("[Q]", "Quit"),
        ],
        GameStatus::Paused => &[("[P]", "Resume"), ("[Q]", "Quit")],
        GameStatus::Over => &[("[Enter]", "Play Again"), ("[Q]", "Quit")],
    };
    let mut spans = Vec::new();
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(
        line,
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &Game) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut hearts = String::new();
    for i in 0..MAX_LIVES {
        hearts.push(if i < game.lives { '\u{2665}' } else { '\u{00B7}' });
    }

    let facing = match game.player.facing {
        Facing::Left => "left",
        Facing::Right => "right",
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Lives: ", Style::default().fg(Color::DarkGray)),
            Span::styled(hearts, Style::default().fg(Color::LightRed)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Coins left: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.arena.coins.len().to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Facing: ", Style::default().fg(Color::DarkGray)),
            Span::styled(facing, Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("Arena: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}x{}", game.bounds.width as u32, game.bounds.height as u32),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    if game.player.is_powered() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Power: {:.1}s", game.player.powered_ms as f32 / 1000.0),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Legend:",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(legend_line('\u{25CF}', Color::Yellow, "Coin (+10)"));
    lines.push(legend_line('\u{2605}', Color::LightYellow, "Special (+20)"));
    lines.push(legend_line('\u{25C6}', Color::Magenta, "Invincibility"));
    lines.push(legend_line('\u{2665}', Color::LightRed, "Extra life"));
    lines.push(legend_line('\u{2588}', Color::Gray, "Obstacle"));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn legend_line(glyph: char, color: Color, label: &str) -> Line<'_> {
    Line::from(vec![
        Span::styled(format!(" {} ", glyph), Style::default().fg(color)),
        Span::styled(label, Style::default().fg(Color::DarkGray)),
    ])
}

/// Centered pause/game-over overlay with the final score and a prompt.
fn render_overlay(frame: &mut Frame, area: Rect, game: &Game, title: &str, color: Color) {
    let width = 34.min(area.width);
    let height = 7.min(area.height);
    let overlay = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let prompt = match game.status {
        GameStatus::Over => "[Enter] Play Again",
        _ => "[P] Resume",
    };
    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Score: {}", game.score)),
        Line::from(""),
        Line::from(Span::styled(prompt, Style::default().fg(Color::White))),
    ];
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

//! Viewport classification.
//!
//! Determined once per frame (and on every resize event) and threaded
//! through the draw functions. Narrow terminals get the compact arena and
//! on-screen directional buttons; anything below the hard minimum gets a
//! "please resize" message instead of the game.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Below this column count the full 600x400 arena does not render legibly,
/// so the layout switches to the compact 300x300 arena.
pub const COMPACT_MAX_COLS: u16 = 90;
/// Same switch for short terminals.
pub const COMPACT_MAX_ROWS: u16 = 28;

/// Hard minimum before giving up on rendering entirely.
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 16;

/// Per-frame viewport snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    /// Compact layout: small arena plus on-screen buttons.
    pub compact: bool,
    pub too_small: bool,
}

impl Viewport {
    pub fn from_size(cols: u16, rows: u16) -> Self {
        Viewport {
            cols,
            rows,
            compact: cols < COMPACT_MAX_COLS || rows < COMPACT_MAX_ROWS,
            too_small: cols < MIN_COLS || rows < MIN_ROWS,
        }
    }

    pub fn from_frame(frame: &Frame) -> Self {
        let size = frame.size();
        Self::from_size(size.width, size.height)
    }
}

/// Render the "terminal too small" message.
pub fn render_too_small(frame: &mut Frame, viewport: &Viewport) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Need: {}x{}   Have: {}x{}",
                MIN_COLS, MIN_ROWS, viewport.cols, viewport.rows
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please resize your terminal.",
            Style::default().fg(Color::White),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, area);
}

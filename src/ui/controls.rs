//! On-screen directional buttons for the compact layout.
//!
//! Stand-in for touch controls: the host loop maps mouse clicks on these
//! buttons to the same directional moves as the arrow keys. Button geometry
//! is a pure function of the frame area so the loop can hit-test clicks
//! without any retained render state.

use crate::game::Direction;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BUTTON_WIDTH: u16 = 7;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 2;
/// Rows between the button row and the bottom edge of the frame.
const BOTTOM_MARGIN: u16 = 1;

const ORDER: [(Direction, &str); 4] = [
    (Direction::Left, "\u{2190}"),
    (Direction::Down, "\u{2193}"),
    (Direction::Up, "\u{2191}"),
    (Direction::Right, "\u{2192}"),
];

/// The four directional buttons, centered near the bottom of the frame.
#[derive(Debug, Clone, Copy)]
pub struct TouchControls {
    buttons: [(Direction, Rect); 4],
}

impl TouchControls {
    pub fn from_area(area: Rect) -> Self {
        let total_width = 4 * BUTTON_WIDTH + 3 * BUTTON_GAP;
        let x0 = area.x + area.width.saturating_sub(total_width) / 2;
        let y = (area.y + area.height)
            .saturating_sub(BUTTON_HEIGHT + BOTTOM_MARGIN)
            .max(area.y);

        let mut buttons = [(Direction::Left, Rect::default()); 4];
        for (i, (direction, _)) in ORDER.iter().enumerate() {
            let x = x0 + i as u16 * (BUTTON_WIDTH + BUTTON_GAP);
            buttons[i] = (*direction, Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT));
        }
        TouchControls { buttons }
    }

    /// The direction of the button under `(col, row)`, if any.
    pub fn hit(&self, col: u16, row: u16) -> Option<Direction> {
        self.buttons
            .iter()
            .find(|(_, rect)| {
                col >= rect.x
                    && col < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|(direction, _)| *direction)
    }

    pub fn render(&self, frame: &mut Frame) {
        let frame_area = frame.size();
        for ((_, rect), (_, label)) in self.buttons.iter().zip(ORDER.iter()) {
            if rect.x + rect.width > frame_area.width || rect.y + rect.height > frame_area.height {
                continue;
            }
            frame.render_widget(Clear, *rect);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray));
            let inner = block.inner(*rect);
            frame.render_widget(block, *rect);
            let glyph = Paragraph::new(*label)
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Center);
            frame.render_widget(glyph, inner);
        }
    }
}

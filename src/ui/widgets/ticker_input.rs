//! Ticker input box.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::Store;

const PLACEHOLDER: &str = "Enter stock tickers (e.g., AAPL, MSFT)";

/// Single-line ticker input.
pub struct TickerInput;

impl TickerInput {
    /// Render the input and place the terminal cursor while editing.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let app = &store.app;
        let editing = app.is_editing();

        let border_color = if store.optimization.is_busy() {
            Color::DarkGray
        } else if editing {
            Color::Cyan
        } else {
            Color::White
        };

        let content = if app.input_buffer.is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(app.input_buffer.as_str())
        };

        // Keep the cursor visible on long input
        let inner_width = area.width.saturating_sub(2) as usize;
        let offset = app
            .cursor_position
            .saturating_sub(inner_width.saturating_sub(1));

        let paragraph = Paragraph::new(content)
            .scroll((0, offset as u16))
            .block(
                Block::default()
                    .title(" Tickers ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            );

        frame.render_widget(paragraph, area);

        if editing && !app.show_help && area.height > 2 {
            frame.set_cursor_position(Position::new(
                area.x + 1 + (app.cursor_position - offset) as u16,
                area.y + 1,
            ));
        }
    }
}

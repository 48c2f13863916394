//! Read-only result panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::{Outcome, RequestPhase, Store};

/// Result panel widget.
pub struct ResultView;

impl ResultView {
    /// Render the last rendered result text.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let optimization = &store.optimization;

        let border_color = match optimization.phase {
            RequestPhase::Displaying(Outcome::Success) => Color::Green,
            RequestPhase::Displaying(Outcome::Error) => Color::Red,
            RequestPhase::Displaying(Outcome::InvalidInput) => Color::Yellow,
            _ => Color::Cyan,
        };

        let lines: Vec<Line> = if optimization.output.is_empty() {
            let hint = if optimization.is_busy() {
                format!("Optimizing {}...", optimization.tickers.join(", "))
            } else {
                "Press Enter to optimize the portfolio.".to_string()
            };
            vec![Line::from(Span::styled(
                hint,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))]
        } else {
            optimization.output.lines().map(Self::style_line).collect()
        };

        let title = if optimization.is_busy() && !optimization.output.is_empty() {
            " Results (optimizing...) "
        } else {
            " Results "
        };

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((optimization.scroll, 0))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            );

        frame.render_widget(paragraph, area);
    }

    /// Headings are emphasized; everything else is shown as-is.
    fn style_line(line: &str) -> Line<'_> {
        if line.ends_with(':') {
            Line::from(Span::styled(
                line,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(line)
        }
    }
}

//! Status bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{Outcome, RequestPhase, Store};

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let optimization = &store.optimization;

        let phase = match optimization.phase {
            RequestPhase::Idle => Span::styled("○ Ready", Style::default().fg(Color::Gray)),
            RequestPhase::Validating => {
                Span::styled("… Validating", Style::default().fg(Color::Yellow))
            }
            RequestPhase::Sending => Span::styled(
                "● Optimizing...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ),
            RequestPhase::Displaying(Outcome::Success) => {
                Span::styled("✓ Optimized", Style::default().fg(Color::Green))
            }
            RequestPhase::Displaying(Outcome::InvalidInput) => {
                Span::styled("⚠ Invalid input", Style::default().fg(Color::Yellow))
            }
            RequestPhase::Displaying(Outcome::Error) => {
                Span::styled("✗ Failed", Style::default().fg(Color::Red))
            }
        };

        let mut spans = vec![
            Span::styled(
                " Portfolio Optimizer ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            phase,
        ];

        if let Some(completed) = optimization.completed_at {
            let mut text = format!(" | Last: {}", completed.format("%H:%M:%S"));
            if let Some(took) = optimization.last_duration {
                text.push_str(&format!(" ({} ms)", took.num_milliseconds()));
            }
            spans.push(Span::raw(text));
        }

        let endpoint = Span::styled(
            format!(" {} ", store.app.endpoint),
            Style::default().fg(Color::DarkGray),
        );

        // Right-align the endpoint
        let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let right_len = endpoint.content.chars().count();
        let padding = area
            .width
            .saturating_sub(left_len as u16 + right_len as u16);
        spans.push(Span::raw(" ".repeat(padding as usize)));
        spans.push(endpoint);

        let paragraph =
            Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));

        frame.render_widget(paragraph, area);
    }
}

/// One-line key hint bar.
pub struct HintBar;

impl HintBar {
    /// Render the key hints for the current input mode.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let hints: &[(&str, &str)] = if store.app.is_editing() {
            &[
                ("Enter", "Optimize"),
                ("Ctrl+u", "Clear"),
                ("Esc", "Browse results"),
                ("F1", "Help"),
                ("Ctrl+c", "Quit"),
            ]
        } else {
            &[
                ("j/k", "Scroll"),
                ("i", "Edit tickers"),
                ("Enter", "Optimize"),
                ("?", "Help"),
                ("q", "Quit"),
            ]
        };

        let mut spans = vec![Span::raw(" ")];
        for (key, label) in hints {
            spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                format!(" {label}  "),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

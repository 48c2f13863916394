//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::super::layout::centered_rect;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Ticker input",
        &[
            ("Enter ", "Optimize portfolio"),
            ("Ctrl+u", "Clear input"),
            ("←/→   ", "Move cursor"),
            ("Esc   ", "Browse results"),
        ],
    ),
    (
        "Results",
        &[
            ("j/↓   ", "Scroll down"),
            ("k/↑   ", "Scroll up"),
            ("g     ", "Go to top"),
            ("i     ", "Edit tickers"),
        ],
    ),
    (
        "General",
        &[("F1/?  ", "Toggle help"), ("Ctrl+c", "Quit"), ("q     ", "Quit (browsing)")],
    ),
];

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 70, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let mut help_text = vec![
            Line::from("Tickers are 1-5 letters separated by commas, e.g. AAPL, MSFT, GOOG."),
            Line::from(""),
        ];

        for (title, keys) in SECTIONS {
            help_text.push(Line::from(Span::styled(
                *title,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            for (key, description) in *keys {
                help_text.push(Line::from(vec![
                    Span::styled(format!("  {key}  "), Style::default().fg(Color::Cyan)),
                    Span::raw(*description),
                ]));
            }
            help_text.push(Line::from(""));
        }

        let help = Paragraph::new(help_text)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(help, popup_area);
    }
}

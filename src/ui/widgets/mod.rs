//! TUI widgets.

mod help;
mod notifications;
mod result_view;
mod status_bar;
mod ticker_input;

pub use help::HelpPanel;
pub use notifications::render_notification;
pub use result_view::ResultView;
pub use status_bar::{HintBar, StatusBar};
pub use ticker_input::TickerInput;

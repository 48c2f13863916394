//! # portopt - Portfolio Optimizer terminal client
//!
//! Collects a comma separated list of stock tickers, forwards them to a
//! portfolio optimization HTTP endpoint and shows the returned weights and
//! performance metrics.
//!
//! ## Architecture
//!
//! - **App**: Terminal lifecycle and the event loop
//! - **Portfolio**: Ticker validation, request/response contract, presentation
//! - **API**: HTTP client for the optimization endpoint
//! - **State**: Centralized state management
//! - **Events**: Input handling
//! - **UI**: Layout and rendering logic
//! - **Config**: Configuration management

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod portfolio;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};

//! Optimization endpoint integration.
//!
//! This module provides the HTTP client for the portfolio optimization
//! backend and the service trait the rest of the application talks to.

mod client;
mod service;

pub use client::{OptimizerClient, OptimizerClientBuilder};
#[cfg(test)]
pub use service::MockOptimizationService;
pub use service::OptimizationService;

//! Seam between the application and the optimization backend.

use crate::error::Result;
use async_trait::async_trait;

/// Something that can forward a ticker list to an optimization backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OptimizationService: Send + Sync {
    /// Send a raw, already validated ticker list and return the reply body
    /// unmodified.
    ///
    /// Every failure (connection, non-success status, unreadable body) is
    /// reported as [`crate::Error::RequestFailed`].
    async fn send_optimization_request(&self, raw: &str) -> Result<String>;
}

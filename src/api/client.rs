//! HTTP client for the optimization endpoint.

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::portfolio::OptimizationRequest;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

use super::OptimizationService;

/// Builder for creating an optimizer client.
pub struct OptimizerClientBuilder {
    config: ApiConfig,
}

impl OptimizerClientBuilder {
    /// Create a new builder with default config.
    pub fn new() -> Self {
        Self {
            config: ApiConfig::default(),
        }
    }

    /// Set the API configuration.
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the target return sent with every request.
    pub fn target_return(mut self, target_return: f64) -> Self {
        self.config.target_return = Some(target_return);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<OptimizerClient> {
        OptimizerClient::new(self.config)
    }
}

impl Default for OptimizerClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the portfolio optimization endpoint.
///
/// Keeps no idle connections: every request opens its own connection and
/// releases it when the response is dropped, whichever way the call ends.
#[derive(Debug, Clone)]
pub struct OptimizerClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl OptimizerClient {
    /// Create a new client.
    pub fn new(config: ApiConfig) -> Result<Self> {
        Self::from_builder(config, reqwest::Client::builder())
    }

    fn from_builder(config: ApiConfig, builder: reqwest::ClientBuilder) -> Result<Self> {
        let mut builder = builder.pool_max_idle_per_host(0);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self { config, http })
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl OptimizationService for OptimizerClient {
    async fn send_optimization_request(&self, raw: &str) -> Result<String> {
        let request =
            OptimizationRequest::from_raw(raw).with_target_return(self.config.target_return);
        tracing::info!(
            "Requesting optimization for {:?} from {}",
            request.stocks,
            self.config.endpoint
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("Optimization endpoint answered {}", status);
            return Err(Error::request_failed(format!("API Error: {body}")));
        }

        tracing::debug!("Received {} byte response", body.len());
        Ok(body)
    }
}

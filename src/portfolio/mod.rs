//! Portfolio optimization domain: ticker validation, the request/response
//! contract with the optimization endpoint, and result presentation.
//!
//! One user action flows through [`perform`]:
//!
//! 1. the raw ticker list is trimmed and validated,
//! 2. a valid list is sent through an [`OptimizationService`],
//! 3. the reply body is classified into an [`ActionResult`],
//! 4. [`render`] turns that result into display text.

mod presenter;
mod request;
mod response;
mod tickers;

pub use presenter::{
    ActionResult, INVALID_INPUT_MESSAGE, PARSE_ERROR_MESSAGE, TRANSPORT_ERROR_PREFIX, render,
};
pub use request::OptimizationRequest;
pub use response::{OptimizationResponse, Performance, Weight};
pub use tickers::{is_valid_ticker_list, split_tickers, trim_input, validate_input};

use crate::api::OptimizationService;

/// Run a full optimization action for a raw ticker list.
pub async fn perform<S>(service: &S, raw: &str) -> ActionResult
where
    S: OptimizationService + ?Sized,
{
    let raw = trim_input(raw);
    if !is_valid_ticker_list(raw) {
        tracing::debug!("Rejected ticker input {:?}", raw);
        return ActionResult::ValidationError;
    }
    request(service, raw).await
}

/// Send an already validated ticker list and classify the reply.
pub async fn request<S>(service: &S, raw: &str) -> ActionResult
where
    S: OptimizationService + ?Sized,
{
    match service.send_optimization_request(raw).await {
        Ok(body) => ActionResult::from_body(&body),
        Err(e) => {
            tracing::error!("Optimization request failed: {}", e);
            ActionResult::TransportError(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockOptimizationService;
    use crate::error::Error;

    #[tokio::test]
    async fn test_invalid_input_never_reaches_service() {
        let mut service = MockOptimizationService::new();
        service.expect_send_optimization_request().never();

        let result = perform(&service, "AAPL123").await;
        assert_eq!(result, ActionResult::ValidationError);
        assert_eq!(render(&result), INVALID_INPUT_MESSAGE);
    }

    #[tokio::test]
    async fn test_input_is_trimmed_before_sending() {
        let mut service = MockOptimizationService::new();
        service
            .expect_send_optimization_request()
            .withf(|raw| raw == "AAPL, MSFT")
            .times(1)
            .returning(|_| Ok(r#"{"status":"error","message":"bad ticker"}"#.to_string()));

        let result = perform(&service, "  AAPL, MSFT  ").await;
        assert_eq!(render(&result), "Error: bad ticker");
    }

    #[tokio::test]
    async fn test_transport_failure_embeds_cause() {
        let mut service = MockOptimizationService::new();
        service
            .expect_send_optimization_request()
            .times(1)
            .returning(|_| Err(Error::request_failed("API Error: overloaded")));

        let result = perform(&service, "AAPL").await;
        assert!(result.is_error());
        let text = render(&result);
        assert!(text.starts_with(TRANSPORT_ERROR_PREFIX));
        assert!(text.ends_with("API Error: overloaded"));
    }

    #[tokio::test]
    async fn test_success_flow() {
        let mut service = MockOptimizationService::new();
        service.expect_send_optimization_request().returning(|_| {
            Ok(r#"{"status":"success","optimized_weights":{"AAPL":1.0},
                "performance":{"expected_return":0.1,"risk":0.2,"sharpe_ratio":0.5}}"#
                .to_string())
        });

        let text = render(&perform(&service, "AAPL").await);
        assert!(text.contains("AAPL: 100.00%"));
        assert!(text.contains("Sharpe Ratio: 0.50"));
    }
}

use gloo::net::http::Request;

use super::dto::AtrAnalysisResponse;
use crate::domain::errors::{ChartError, ChartResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{Symbol, TimeInterval};

/// HTTP client for the collaborator-owned ATR analysis endpoint.
///
/// The default base URL is empty, so `/api/v1/atr-analysis` requests go
/// same-origin.
pub struct AtrAnalysisClient {
    base_url: String,
}

impl AtrAnalysisClient {
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Fetch one analysis window for the given symbol and interval.
    ///
    /// Transport errors and non-2xx statuses map to `NetworkFailure`;
    /// body shape violations map to `InvalidPayload`. Either way the
    /// refresh controller treats the cycle as failed.
    pub async fn fetch_analysis(
        &self,
        symbol: &Symbol,
        interval: TimeInterval,
    ) -> ChartResult<AtrAnalysisResponse> {
        let url = format!(
            "{}/api/v1/atr-analysis?symbol={}&interval={}",
            self.base_url,
            symbol.value(),
            interval.to_query_str()
        );

        get_logger().info(
            LogComponent::Infrastructure("AnalysisHTTP"),
            &format!("📡 Fetching ATR analysis: {}", url),
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| ChartError::NetworkFailure(format!("request failed: {err:?}")))?;

        if !response.ok() {
            return Err(ChartError::NetworkFailure(format!(
                "HTTP status {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|err| ChartError::NetworkFailure(format!("body read failed: {err:?}")))?;

        let payload = AtrAnalysisResponse::from_json(&body)?;

        get_logger().info(
            LogComponent::Infrastructure("AnalysisHTTP"),
            &format!(
                "✅ Received {} klines, {} signals for {}",
                payload.klines.len(),
                payload.signals.len(),
                symbol.value()
            ),
        );

        Ok(payload)
    }
}

impl Default for AtrAnalysisClient {
    fn default() -> Self {
        Self::new()
    }
}

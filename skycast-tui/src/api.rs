//! Forecast service client
//!
//! The reducer never calls this directly: the effect handler spawns
//! [`ForecastProvider::fetch_forecast`] as a task and the task reports back
//! with a result action.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::forecast::Forecast;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const FORECAST_PATH: &str = "/weather-service/api/weather/forecast";

/// Why a forecast could not be obtained.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("forecast request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("forecast service returned {0}")]
    Status(StatusCode),

    #[error("malformed forecast payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of forecasts.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch the forecast for `city`, passed through as entered.
    async fn fetch_forecast(&self, city: &str) -> Result<Forecast, ForecastError>;
}

/// Forecast provider backed by the HTTP forecast service.
#[derive(Debug, Clone)]
pub struct HttpForecastProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpForecastProvider {
    /// Create a provider for the service at `base_url`.
    ///
    /// `timeout` bounds the whole request; `None` waits indefinitely.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ForecastError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ForecastError::Client)?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for `city`.
    pub fn forecast_url(&self, city: &str) -> String {
        format!(
            "{}{}?city={}",
            self.base_url,
            FORECAST_PATH,
            urlencoding::encode(city)
        )
    }
}

#[async_trait]
impl ForecastProvider for HttpForecastProvider {
    async fn fetch_forecast(&self, city: &str) -> Result<Forecast, ForecastError> {
        let url = self.forecast_url(city);
        debug!(%url, "GET forecast");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ForecastError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForecastError::Status(status));
        }

        let body = response.bytes().await.map_err(ForecastError::Transport)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_url_encodes_city() {
        let provider = HttpForecastProvider::new("http://localhost:8080/", None).expect("client");
        assert_eq!(provider.base_url(), "http://localhost:8080");
        assert_eq!(
            provider.forecast_url("Paris"),
            "http://localhost:8080/weather-service/api/weather/forecast?city=Paris"
        );
        assert_eq!(
            provider.forecast_url("São Paulo & co"),
            "http://localhost:8080/weather-service/api/weather/forecast?city=S%C3%A3o%20Paulo%20%26%20co"
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ForecastError::Status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "forecast service returned 404 Not Found");

        let decode = serde_json::from_str::<Forecast>("{}").unwrap_err();
        let err = ForecastError::from(decode);
        assert!(err.to_string().starts_with("malformed forecast payload"));
    }
}

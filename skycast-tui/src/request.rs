//! Forecast request lifecycle
//!
//! [`ForecastRequest`] is the only owner of [`ForecastRequestState`]. Every
//! call to [`ForecastRequest::begin`] hands out a fresh [`RequestId`]; a
//! settlement is accepted only for the latest id, so a slow response can never
//! overwrite the outcome of a newer request.

use std::fmt;

use tracing::{debug, warn};

use crate::forecast::Forecast;

/// User-facing message shown for every kind of fetch failure.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch weather data. Please try again.";

/// Generation number attached to each outbound forecast call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the forecast fetch currently stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ForecastRequestState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request succeeded.
    Success(Forecast),
    /// The latest request failed; holds the message to display.
    Failed(String),
}

impl ForecastRequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ForecastRequestState::Loading)
    }

    pub fn forecast(&self) -> Option<&Forecast> {
        match self {
            ForecastRequestState::Success(forecast) => Some(forecast),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ForecastRequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// A request that was accepted and must now be sent to the provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: RequestId,
    /// City exactly as entered.
    pub city: String,
}

/// Request controller: state plus the id of the only request allowed to settle.
#[derive(Clone, Debug, Default)]
pub struct ForecastRequest {
    state: ForecastRequestState,
    latest: Option<RequestId>,
    issued: u64,
}

impl ForecastRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &ForecastRequestState {
        &self.state
    }

    /// Id of the request still allowed to settle, if one is in flight.
    pub fn in_flight(&self) -> Option<RequestId> {
        self.latest
    }

    /// Start a request for `city`.
    ///
    /// Blank input (empty or whitespace only) is ignored and returns `None`
    /// without touching the state. Otherwise the state moves to `Loading`,
    /// any in-flight request is superseded, and the caller receives the
    /// request to issue.
    pub fn begin(&mut self, city: &str) -> Option<PendingRequest> {
        if city.trim().is_empty() {
            return None;
        }

        self.issued += 1;
        let id = RequestId(self.issued);
        if let Some(previous) = self.latest.replace(id) {
            debug!(superseded = %previous, request = %id, "Superseding in-flight forecast request");
        }
        self.state = ForecastRequestState::Loading;

        Some(PendingRequest {
            id,
            city: city.to_string(),
        })
    }

    /// Settle request `id` with its outcome.
    ///
    /// Returns `true` if the state changed. Outcomes for anything but the
    /// latest request are discarded.
    pub fn settle(&mut self, id: RequestId, outcome: Result<Forecast, String>) -> bool {
        if self.latest != Some(id) {
            debug!(request = %id, latest = ?self.latest, "Discarding stale forecast response");
            return false;
        }
        self.latest = None;

        self.state = match outcome {
            Ok(forecast) => {
                debug!(
                    request = %id,
                    city = %forecast.city,
                    days = forecast.days.len(),
                    "Forecast loaded"
                );
                ForecastRequestState::Success(forecast)
            }
            Err(reason) => {
                warn!(request = %id, %reason, "Forecast request failed");
                ForecastRequestState::Failed(FETCH_FAILED_MESSAGE.to_string())
            }
        };
        true
    }
}

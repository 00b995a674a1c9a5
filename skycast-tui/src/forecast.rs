//! Forecast data as delivered by the forecast service
//!
//! Values are passed through verbatim: no unit conversion, no re-ordering.

use serde::{Deserialize, Serialize};

/// A multi-day forecast for one city.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// City name as echoed by the service.
    pub city: String,
    /// Days in the order received.
    #[serde(rename = "forecasts")]
    pub days: Vec<ForecastDay>,
}

/// One day of a forecast.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub date: String,
    /// Degrees Celsius.
    pub temp_max: f64,
    /// Degrees Celsius.
    pub temp_min: f64,
    /// Free-form condition label, e.g. "Rain".
    pub condition: String,
    /// Metres per second.
    pub wind_speed: f64,
    pub recommendation: String,
}

impl Forecast {
    /// True when the service returned no days at all.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

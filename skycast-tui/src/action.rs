//! Application actions
//!
//! Naming convention:
//! - Prefix names the area: `Forecast*`, `CityInput*`, `Ui*`
//! - `Did` marks the result of async work (`ForecastDidLoad`, `ForecastDidFail`)

use tui_dispatch::ActionSummary;

use crate::forecast::Forecast;
use crate::request::RequestId;

/// Categories are inferred from the name prefix, e.g. `Forecast*` -> `forecast`.
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum Action {
    /// The city input text changed
    CityInputChange(String),

    /// Intent: fetch the forecast for this city (blank input is ignored)
    ForecastRequest(String),

    /// Intent: fetch the last requested city again
    ForecastRefresh,

    /// Result: the provider answered request `request_id`
    ForecastDidLoad {
        request_id: RequestId,
        forecast: Forecast,
    },

    /// Result: request `request_id` failed; `reason` is for the log only
    ForecastDidFail { request_id: RequestId, reason: String },

    /// Scroll the day list by this many days
    UiScroll(i32),

    UiToggleTheme,

    UiTerminalResize(u16, u16),

    /// Animation clock
    Tick,

    Quit,
}

/// Concise summaries for the action log
impl ActionSummary for Action {
    fn summary(&self) -> String {
        match self {
            // Day count instead of the full payload
            Action::ForecastDidLoad {
                request_id,
                forecast,
            } => format!(
                "ForecastDidLoad {{ request: {}, city: {:?}, days: {} }}",
                request_id,
                forecast.city,
                forecast.days.len()
            ),
            Action::ForecastDidFail { request_id, reason } => {
                let reason = if reason.chars().count() > 60 {
                    format!("{}...", reason.chars().take(57).collect::<String>())
                } else {
                    reason.clone()
                };
                format!(
                    "ForecastDidFail {{ request: {}, reason: {:?} }}",
                    request_id, reason
                )
            }
            _ => format!("{:?}", self),
        }
    }
}

//! Effects - side effects declared by the reducer
//!
//! Effects are returned from the reducer and executed by [`handle_effect`].
//! This keeps the reducer pure while making async operations explicit.

use std::sync::Arc;

use tui_dispatch::{EffectContext, TaskManager};
use tracing::debug;

use crate::action::Action;
use crate::api::ForecastProvider;
use crate::request::RequestId;

/// Task key shared by every forecast fetch; a new fetch aborts the previous one.
pub const FORECAST_TASK: &str = "forecast";

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the forecast for `city` and report back tagged with `request_id`
    FetchForecast { request_id: RequestId, city: String },
}

/// Execute an effect on the runtime's task manager.
pub fn handle_effect(
    effect: Effect,
    ctx: &mut EffectContext<Action>,
    provider: &Arc<dyn ForecastProvider>,
) {
    spawn_effect(effect, ctx.tasks(), provider);
}

/// Spawn the work for `effect`; its result comes back as an action.
pub fn spawn_effect(
    effect: Effect,
    tasks: &mut TaskManager<Action>,
    provider: &Arc<dyn ForecastProvider>,
) {
    match effect {
        Effect::FetchForecast { request_id, city } => {
            debug!(request = %request_id, %city, "Spawning forecast fetch");
            let provider = Arc::clone(provider);
            tasks.spawn(FORECAST_TASK, async move {
                match provider.fetch_forecast(&city).await {
                    Ok(forecast) => Action::ForecastDidLoad {
                        request_id,
                        forecast,
                    },
                    Err(e) => Action::ForecastDidFail {
                        request_id,
                        reason: e.to_string(),
                    },
                }
            });
        }
    }
}

//! Reducer - (state, action) -> (changed, effects)
//!
//! All state mutations happen here. The reducer never performs I/O; fetching
//! is declared as [`Effect::FetchForecast`].

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::request::PendingRequest;
use crate::state::AppState;

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::CityInputChange(value) => {
            if state.city_input == value {
                return DispatchResult::unchanged();
            }
            state.city_input = value;
            DispatchResult::changed()
        }

        Action::ForecastRequest(city) => request_forecast(state, &city),

        Action::ForecastRefresh => match state.last_city.clone() {
            Some(city) => request_forecast(state, &city),
            None => DispatchResult::unchanged(),
        },

        Action::ForecastDidLoad {
            request_id,
            forecast,
        } => {
            if !state.request.settle(request_id, Ok(forecast)) {
                return DispatchResult::unchanged();
            }
            state.scroll = 0;
            DispatchResult::changed()
        }

        Action::ForecastDidFail { request_id, reason } => {
            if state.request.settle(request_id, Err(reason)) {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::UiScroll(delta) => {
            let last = state.day_count().saturating_sub(1);
            let target = if delta < 0 {
                state.scroll.saturating_sub(delta.unsigned_abs() as usize)
            } else {
                state.scroll.saturating_add(delta as usize)
            }
            .min(last);

            if target == state.scroll {
                return DispatchResult::unchanged();
            }
            state.scroll = target;
            DispatchResult::changed()
        }

        Action::UiToggleTheme => {
            state.theme = state.theme.toggle();
            DispatchResult::changed()
        }

        Action::UiTerminalResize(width, height) => {
            if state.terminal_size == (width, height) {
                return DispatchResult::unchanged();
            }
            state.terminal_size = (width, height);
            DispatchResult::changed()
        }

        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Only spinner and sprites move
            let request = state.request.state();
            if request.is_loading() || request.forecast().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // Handled by the runtime
        Action::Quit => DispatchResult::unchanged(),
    }
}

fn request_forecast(state: &mut AppState, city: &str) -> DispatchResult<Effect> {
    match state.request.begin(city) {
        Some(PendingRequest { id, city }) => {
            state.last_city = Some(city.clone());
            DispatchResult::changed_with(Effect::FetchForecast {
                request_id: id,
                city,
            })
        }
        None => DispatchResult::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::{Forecast, ForecastDay};
    use crate::request::{FETCH_FAILED_MESSAGE, ForecastRequestState, RequestId};
    use crate::state::Theme;

    fn forecast(city: &str, days: usize) -> Forecast {
        Forecast {
            city: city.into(),
            days: (0..days)
                .map(|i| ForecastDay {
                    date: format!("2025-01-0{}", i + 1),
                    temp_max: 20.0,
                    temp_min: 10.0,
                    condition: "Rain".into(),
                    wind_speed: 5.0,
                    recommendation: "Umbrella".into(),
                })
                .collect(),
        }
    }

    fn fetch(result: &DispatchResult<Effect>) -> (RequestId, &str) {
        match result.effects.as_slice() {
            [Effect::FetchForecast { request_id, city }] => (*request_id, city.as_str()),
            other => panic!("expected one fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_request_declares_fetch_and_loads() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::ForecastRequest("Paris".into()));

        assert!(result.changed);
        assert_eq!(fetch(&result).1, "Paris");
        assert_eq!(state.request.state(), &ForecastRequestState::Loading);
        assert_eq!(state.last_city.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_blank_request_is_noop() {
        let mut state = AppState::default();
        for blank in ["", "   ", "\t\n"] {
            let result = reducer(&mut state, Action::ForecastRequest(blank.into()));
            assert_eq!(result, DispatchResult::unchanged());
        }
        assert_eq!(state.request.state(), &ForecastRequestState::Idle);
        assert_eq!(state.last_city, None);
    }

    #[test]
    fn test_blank_request_keeps_previous_forecast() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::ForecastRequest("Paris".into()));
        let (request_id, _) = fetch(&result);
        reducer(
            &mut state,
            Action::ForecastDidLoad {
                request_id,
                forecast: forecast("Paris", 2),
            },
        );

        let result = reducer(&mut state, Action::ForecastRequest("  ".into()));
        assert!(!result.has_effects());
        assert_eq!(state.day_count(), 2);
    }

    #[test]
    fn test_success_and_failure_transitions() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::ForecastRequest("Paris".into()));
        let (request_id, _) = fetch(&result);

        let result = reducer(
            &mut state,
            Action::ForecastDidLoad {
                request_id,
                forecast: forecast("Paris", 3),
            },
        );
        assert!(result.changed);
        assert_eq!(state.day_count(), 3);

        let result = reducer(&mut state, Action::ForecastRequest("Atlantis".into()));
        let (request_id, _) = fetch(&result);
        assert!(state.request.state().forecast().is_none());

        reducer(
            &mut state,
            Action::ForecastDidFail {
                request_id,
                reason: "forecast service returned 404 Not Found".into(),
            },
        );
        assert_eq!(state.request.state().error(), Some(FETCH_FAILED_MESSAGE));
    }

    #[test]
    fn test_latest_request_wins() {
        let mut state = AppState::default();
        let (first, _) = fetch(&reducer(&mut state, Action::ForecastRequest("A".into())));
        let (second, city) = {
            let result = reducer(&mut state, Action::ForecastRequest("B".into()));
            let (id, city) = fetch(&result);
            (id, city.to_string())
        };
        assert_eq!(city, "B");

        let stale = reducer(
            &mut state,
            Action::ForecastDidLoad {
                request_id: first,
                forecast: forecast("A", 1),
            },
        );
        assert!(!stale.changed);
        assert!(state.request.state().is_loading());

        reducer(
            &mut state,
            Action::ForecastDidLoad {
                request_id: second,
                forecast: forecast("B", 1),
            },
        );
        assert_eq!(
            state.request.state().forecast().map(|f| f.city.as_str()),
            Some("B")
        );
    }

    #[test]
    fn test_refresh_reuses_last_city() {
        let mut state = AppState::default();
        assert_eq!(
            reducer(&mut state, Action::ForecastRefresh),
            DispatchResult::unchanged()
        );

        reducer(&mut state, Action::ForecastRequest("Oslo".into()));
        let result = reducer(&mut state, Action::ForecastRefresh);
        assert_eq!(fetch(&result).1, "Oslo");
    }

    #[test]
    fn test_city_input_change() {
        let mut state = AppState::default();
        assert!(reducer(&mut state, Action::CityInputChange("Ber".into())).changed);
        assert_eq!(state.city_input, "Ber");
        assert!(!reducer(&mut state, Action::CityInputChange("Ber".into())).changed);
    }

    #[test]
    fn test_scroll_is_clamped_and_reset() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, Action::UiScroll(1)).changed);

        let (request_id, _) = fetch(&reducer(&mut state, Action::ForecastRequest("X".into())));
        reducer(
            &mut state,
            Action::ForecastDidLoad {
                request_id,
                forecast: forecast("X", 3),
            },
        );

        assert!(reducer(&mut state, Action::UiScroll(1)).changed);
        assert_eq!(state.scroll, 1);
        reducer(&mut state, Action::UiScroll(10));
        assert_eq!(state.scroll, 2);
        reducer(&mut state, Action::UiScroll(-10));
        assert_eq!(state.scroll, 0);

        state.scroll = 2;
        let (request_id, _) = fetch(&reducer(&mut state, Action::ForecastRequest("Y".into())));
        reducer(
            &mut state,
            Action::ForecastDidLoad {
                request_id,
                forecast: forecast("Y", 3),
            },
        );
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_toggle_theme() {
        let mut state = AppState::default();
        reducer(&mut state, Action::UiToggleTheme);
        assert_eq!(state.theme, Theme::Dark);
        reducer(&mut state, Action::UiToggleTheme);
        assert_eq!(state.theme, Theme::Light);
    }

    #[test]
    fn test_terminal_resize() {
        let mut state = AppState::default();
        assert!(reducer(&mut state, Action::UiTerminalResize(100, 40)).changed);
        assert_eq!(state.terminal_size, (100, 40));
        assert!(!reducer(&mut state, Action::UiTerminalResize(100, 40)).changed);
    }

    #[test]
    fn test_tick_rerenders_only_when_animating() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, Action::Tick).changed);
        assert_eq!(state.tick_count, 1);

        reducer(&mut state, Action::ForecastRequest("Paris".into()));
        assert!(reducer(&mut state, Action::Tick).changed);
        assert!(!reducer(&mut state, Action::Quit).changed);
    }
}

//! Application state - single source of truth
//!
//! Components receive `&AppState` as props; only the reducer mutates it.

use std::time::Duration;

use ratatui::style::Color;

use crate::request::ForecastRequest;

/// Default animation tick.
pub const DEFAULT_TICK_MS: u64 = 100;

/// Light or dark presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub card: Color,
    pub error: Color,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: Color::Rgb(0xff, 0xff, 0xff),
                text: Color::Rgb(0x00, 0x00, 0x00),
                muted: Color::Rgb(0x75, 0x75, 0x75),
                accent: Color::Rgb(0x19, 0x76, 0xd2),
                border: Color::Rgb(0xdd, 0xdd, 0xdd),
                card: Color::Rgb(0xff, 0xff, 0xff),
                error: Color::Rgb(0xd3, 0x2f, 0x2f),
            },
            Theme::Dark => Palette {
                background: Color::Rgb(0x12, 0x12, 0x12),
                text: Color::Rgb(0xff, 0xff, 0xff),
                muted: Color::Rgb(0x9e, 0x9e, 0x9e),
                accent: Color::Rgb(0x90, 0xca, 0xf9),
                border: Color::Rgb(0x55, 0x55, 0x55),
                card: Color::Rgb(0x33, 0x33, 0x33),
                error: Color::Rgb(0xf4, 0x43, 0x36),
            },
        }
    }
}

/// Everything the UI needs to render
#[derive(Clone, Debug)]
pub struct AppState {
    /// Text currently in the city input
    pub city_input: String,

    /// City of the most recent accepted request, for refresh
    pub last_city: Option<String>,

    /// Forecast request lifecycle
    pub request: ForecastRequest,

    pub theme: Theme,

    /// Animation clock, advanced by `Tick`
    pub tick_count: u32,
    pub tick_interval: Duration,

    /// Index of the first visible day
    pub scroll: usize,

    pub terminal_size: (u16, u16),
}

impl AppState {
    pub fn new(theme: Theme, tick_interval: Duration) -> Self {
        Self {
            city_input: String::new(),
            last_city: None,
            request: ForecastRequest::new(),
            theme,
            tick_count: 0,
            tick_interval,
            scroll: 0,
            terminal_size: (80, 24),
        }
    }

    /// Animation time derived from the tick clock.
    pub fn elapsed(&self) -> Duration {
        self.tick_interval.saturating_mul(self.tick_count)
    }

    /// Number of days in the current forecast, 0 when there is none.
    pub fn day_count(&self) -> usize {
        self.request
            .state()
            .forecast()
            .map_or(0, |forecast| forecast.days.len())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::default(), Duration::from_millis(DEFAULT_TICK_MS))
    }
}

//! Condition label to visual treatment
//!
//! The mapping is a fixed table with an explicit fallback row, so every input
//! resolves to something and nothing here can fail.

use std::time::Duration;

use ratatui::style::Color;

use crate::forecast::{Forecast, ForecastDay};

/// Which sprite to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    Sun,
    Rain,
    Snow,
    Thunderstorm,
    Cloud,
    Wind,
    None,
}

/// How the sprite moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionKind {
    /// Horizontal oscillation.
    Sway,
    /// Downward bounce.
    Bob,
    /// Visibility blink.
    Flicker,
    /// Emphasis pulse.
    Pulse,
    /// Upward float.
    Drift,
    None,
}

/// Everything needed to present one condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisualDescriptor {
    pub icon: IconKind,
    pub motion: MotionKind,
    pub color: Option<Color>,
    /// Duration of one full motion cycle.
    pub period: Option<Duration>,
}

impl VisualDescriptor {
    /// Descriptor for unrecognised conditions: no icon, no motion.
    pub const NONE: Self = Self {
        icon: IconKind::None,
        motion: MotionKind::None,
        color: None,
        period: None,
    };

    const fn new(icon: IconKind, motion: MotionKind, rgb: (u8, u8, u8), period_ms: u64) -> Self {
        Self {
            icon,
            motion,
            color: Some(Color::Rgb(rgb.0, rgb.1, rgb.2)),
            period: Some(Duration::from_millis(period_ms)),
        }
    }

    /// True if the descriptor moves over time.
    pub fn is_animated(&self) -> bool {
        self.motion != MotionKind::None && self.period.is_some_and(|p| !p.is_zero())
    }
}

// Keys are lower-case; lookup lower-cases the input.
const VISUALS: [(&str, VisualDescriptor); 6] = [
    (
        "clouds",
        VisualDescriptor::new(IconKind::Cloud, MotionKind::Sway, (0x90, 0xa4, 0xae), 3000),
    ),
    (
        "rain",
        VisualDescriptor::new(IconKind::Rain, MotionKind::Bob, (0x1e, 0x88, 0xe5), 500),
    ),
    (
        "thunderstorm",
        VisualDescriptor::new(
            IconKind::Thunderstorm,
            MotionKind::Flicker,
            (0xff, 0x98, 0x00),
            500,
        ),
    ),
    (
        "clear",
        VisualDescriptor::new(IconKind::Sun, MotionKind::Pulse, (0xf9, 0xd7, 0x1c), 2000),
    ),
    (
        "snow",
        VisualDescriptor::new(IconKind::Snow, MotionKind::Drift, (0x90, 0xca, 0xf9), 1000),
    ),
    (
        "windy",
        VisualDescriptor::new(IconKind::Wind, MotionKind::Sway, (0x60, 0x7d, 0x8b), 1500),
    ),
];

/// Resolve a condition label, case-insensitively, to its visual treatment.
///
/// Unknown labels, including the empty string, yield [`VisualDescriptor::NONE`].
pub fn resolve_visual(condition: &str) -> VisualDescriptor {
    let key = condition.to_lowercase();
    VISUALS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, visual)| *visual)
        .unwrap_or(VisualDescriptor::NONE)
}

/// Pair each forecast day with its descriptor, in received order.
pub fn forecast_rows(forecast: &Forecast) -> Vec<(&ForecastDay, VisualDescriptor)> {
    forecast
        .days
        .iter()
        .map(|day| (day, resolve_visual(&day.condition)))
        .collect()
}

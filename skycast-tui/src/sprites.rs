//! Condition sprites
//!
//! Sprites are loaded from text files at compile time using `include_str!`.
//! Every sprite is [`SPRITE_HEIGHT`] lines tall and at most [`SPRITE_WIDTH`]
//! columns wide.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};

use crate::motion::MotionFrame;
use crate::visual::{IconKind, VisualDescriptor};

mod sprite_data {
    pub const SUN: &str = include_str!("../sprites/sun.txt");
    pub const CLOUD: &str = include_str!("../sprites/cloud.txt");
    pub const RAIN: &str = include_str!("../sprites/rain.txt");
    pub const SNOW: &str = include_str!("../sprites/snow.txt");
    pub const THUNDERSTORM: &str = include_str!("../sprites/thunderstorm.txt");
    pub const WIND: &str = include_str!("../sprites/wind.txt");
}

pub const SPRITE_HEIGHT: u16 = 5;
pub const SPRITE_WIDTH: u16 = 12;

/// Raw art for an icon. `IconKind::None` has none.
pub fn sprite_art(icon: IconKind) -> Option<&'static str> {
    match icon {
        IconKind::Sun => Some(sprite_data::SUN),
        IconKind::Cloud => Some(sprite_data::CLOUD),
        IconKind::Rain => Some(sprite_data::RAIN),
        IconKind::Snow => Some(sprite_data::SNOW),
        IconKind::Thunderstorm => Some(sprite_data::THUNDERSTORM),
        IconKind::Wind => Some(sprite_data::WIND),
        IconKind::None => None,
    }
}

/// Styled sprite for one animation frame.
///
/// Horizontal motion is applied as left padding around a resting offset of
/// two columns; vertical motion is left to the caller. Returns an empty
/// `Text` for hidden frames and for icons without art.
pub fn sprite_text(visual: &VisualDescriptor, frame: MotionFrame) -> Text<'static> {
    let Some(art) = sprite_art(visual.icon) else {
        return Text::default();
    };
    if !frame.visible {
        return Text::default();
    }

    let mut style = Style::default();
    if let Some(color) = visual.color {
        style = style.fg(color);
    }
    if frame.emphasized {
        style = style.add_modifier(Modifier::BOLD);
    }

    let pad = " ".repeat(usize::try_from(2 + frame.dx).unwrap_or(0));
    art.lines()
        .map(|line| Line::from(format!("{pad}{line}")).style(style))
        .collect()
}

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::forecast::ForecastDay;
use crate::motion::motion_frame;
use crate::sprites::{self, SPRITE_HEIGHT, SPRITE_WIDTH};
use crate::state::Palette;
use crate::visual::VisualDescriptor;

/// One forecast day: animated sprite on the left, details on the right.
pub struct DayCard;

pub struct DayCardProps<'a> {
    pub day: &'a ForecastDay,
    pub visual: VisualDescriptor,
    /// Animation time
    pub elapsed: Duration,
    pub palette: Palette,
}

impl DayCard {
    /// Sprite plus one row of vertical travel either way.
    const CONTENT_HEIGHT: u16 = SPRITE_HEIGHT + 2;
    /// Content plus the bottom separator.
    pub const HEIGHT: u16 = Self::CONTENT_HEIGHT + 1;
    /// Sprite plus two columns of horizontal travel either way.
    const SPRITE_COLUMN: u16 = SPRITE_WIDTH + 4;
}

impl Component<Action> for DayCard {
    type Props<'a> = DayCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.palette;
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [sprite_area, details_area] = Layout::horizontal([
            Constraint::Length(Self::SPRITE_COLUMN),
            Constraint::Min(1),
        ])
        .areas(inner);

        let motion = motion_frame(&props.visual, props.elapsed);
        let rest_y = i32::from(sprite_area.y) + 1;
        let y = u16::try_from(rest_y + i32::from(motion.dy)).unwrap_or(sprite_area.y);
        let sprite_rect = Rect {
            y,
            height: SPRITE_HEIGHT,
            ..sprite_area
        }
        .intersection(sprite_area);
        frame.render_widget(
            Paragraph::new(sprites::sprite_text(&props.visual, motion)),
            sprite_rect,
        );

        let day = props.day;
        let label = Style::default().fg(palette.text).bold();
        let value = Style::default().fg(palette.text);
        let field = |name: &'static str, text: String| {
            Line::from(vec![Span::styled(name, label), Span::styled(text, value)])
        };

        let lines = vec![
            Line::default(),
            field("Date: ", day.date.clone()),
            field(
                "Temperature: ",
                format!("{}°C / {}°C", day.temp_max, day.temp_min),
            ),
            field("Condition: ", day.condition.clone()),
            field("Wind Speed: ", format!("{} m/s", day.wind_speed)),
            Line::from(Span::styled(
                day.recommendation.clone(),
                Style::default().fg(palette.accent).bold(),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), details_area);
    }
}

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::Palette;

/// "Weather in {city}" plus a day count.
pub struct ForecastHeader;

pub struct ForecastHeaderProps<'a> {
    pub city: &'a str,
    pub day_count: usize,
    /// Index of the first visible day
    pub first_visible: usize,
    pub palette: Palette,
}

impl ForecastHeader {
    pub const HEIGHT: u16 = 2;
}

impl Component<Action> for ForecastHeader {
    type Props<'a> = ForecastHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [title_area, count_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let title = Line::styled(
            format!("Weather in {}", props.city),
            Style::default().fg(props.palette.text).bold(),
        )
        .centered();
        frame.render_widget(Paragraph::new(title), title_area);

        let count = match props.day_count {
            0 => "No forecast days returned".to_string(),
            1 => "1-day forecast".to_string(),
            n if props.first_visible > 0 => {
                format!("{n}-day forecast (from day {})", props.first_visible + 1)
            }
            n => format!("{n}-day forecast"),
        };
        let count = Line::styled(count, Style::default().fg(props.palette.muted)).centered();
        frame.render_widget(Paragraph::new(count), count_area);
    }
}

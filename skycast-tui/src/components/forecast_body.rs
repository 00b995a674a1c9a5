use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Component, DayCard, DayCardProps, ForecastHeader, ForecastHeaderProps, SPINNERS};
use crate::action::Action;
use crate::forecast::Forecast;
use crate::request::ForecastRequestState;
use crate::state::{AppState, Palette};
use crate::visual::forecast_rows;

/// Shows exactly one of: prompt, loading indicator, forecast, error.
pub struct ForecastBody;

pub struct ForecastBodyProps<'a> {
    pub state: &'a AppState,
}

impl Component<Action> for ForecastBody {
    type Props<'a> = ForecastBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let palette = state.theme.palette();

        match state.request.state() {
            ForecastRequestState::Idle => render_centered(
                frame,
                area,
                vec![Line::from(vec![
                    Span::styled("Type a city and press ", Style::default().fg(palette.muted)),
                    Span::styled("Enter", Style::default().fg(palette.accent).bold()),
                    Span::styled(" to get the forecast", Style::default().fg(palette.muted)),
                ])],
            ),
            ForecastRequestState::Loading => {
                let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
                let dots = ".".repeat((state.tick_count as usize / 3) % 4);
                render_centered(
                    frame,
                    area,
                    vec![Line::from(vec![
                        Span::styled(spinner, Style::default().fg(palette.accent)),
                        Span::styled(
                            format!(" Fetching forecast{:<3}", dots),
                            Style::default().fg(palette.muted),
                        ),
                    ])],
                );
            }
            ForecastRequestState::Failed(message) => render_centered(
                frame,
                area,
                vec![
                    Line::styled(message.as_str(), Style::default().fg(palette.error).bold()),
                    Line::default(),
                    Line::from(vec![
                        Span::styled("Press ", Style::default().fg(palette.muted)),
                        Span::styled("F5", Style::default().fg(palette.accent).bold()),
                        Span::styled(" to retry", Style::default().fg(palette.muted)),
                    ]),
                ],
            ),
            ForecastRequestState::Success(forecast) => {
                render_forecast(frame, area, forecast, state, palette);
            }
        }
    }
}

fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_forecast(
    frame: &mut Frame,
    area: Rect,
    forecast: &Forecast,
    state: &AppState,
    palette: Palette,
) {
    let [header_area, list_area] = Layout::vertical([
        Constraint::Length(ForecastHeader::HEIGHT + 1),
        Constraint::Min(0),
    ])
    .areas(area);

    ForecastHeader.render(
        frame,
        header_area,
        ForecastHeaderProps {
            city: &forecast.city,
            day_count: forecast.days.len(),
            first_visible: state.scroll,
            palette,
        },
    );

    let elapsed = state.elapsed();
    let mut y = list_area.y;
    for (day, visual) in forecast_rows(forecast).into_iter().skip(state.scroll) {
        // Whole cards only, except that the first one is always shown
        let overflows = y.saturating_add(DayCard::HEIGHT) > list_area.bottom();
        if y >= list_area.bottom() || (y > list_area.y && overflows) {
            break;
        }
        let card_area = Rect {
            y,
            height: DayCard::HEIGHT,
            ..list_area
        }
        .intersection(list_area);

        DayCard.render(
            frame,
            card_area,
            DayCardProps {
                day,
                visual,
                elapsed,
                palette,
            },
        );
        y = y.saturating_add(DayCard::HEIGHT);
    }
}

//! Top-level screen
//!
//! Owns the key map: global keys are handled here, everything else goes to
//! the city input.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders},
};
use tui_dispatch::EventKind;

use super::{
    CityInput, CityInputProps, Component, DayCard, ForecastBody, ForecastBodyProps,
    ForecastHeader, HelpBar, HelpBarProps,
};
use crate::action::Action;
use crate::state::{AppState, Theme};

pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Rows used by everything but the day cards: border, input, header, help.
const CHROME_ROWS: u16 = 2 + CityInput::HEIGHT + ForecastHeader::HEIGHT + 1 + 1;

/// Days moved by PageUp / PageDown: one screenful, at least one.
pub fn page_days(state: &AppState) -> i32 {
    let rows = state.terminal_size.1.saturating_sub(CHROME_ROWS);
    i32::from((rows / DayCard::HEIGHT).max(1))
}

pub struct ForecastScreenProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct ForecastScreen {
    input: CityInput,
}

impl ForecastScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn input_props(state: &AppState, is_focused: bool) -> CityInputProps<'_> {
        CityInputProps {
            value: &state.city_input,
            is_focused,
            palette: state.theme.palette(),
        }
    }
}

impl Component<Action> for ForecastScreen {
    type Props<'a> = ForecastScreenProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return vec![];
        }

        match event {
            EventKind::Key(key) => {
                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                let page = page_days(props.state);
                match key.code {
                    KeyCode::Esc => vec![Action::Quit],
                    KeyCode::Char('c') if ctrl => vec![Action::Quit],
                    KeyCode::Char('t') if ctrl => vec![Action::UiToggleTheme],
                    KeyCode::F(5) => vec![Action::ForecastRefresh],
                    KeyCode::Up => vec![Action::UiScroll(-1)],
                    KeyCode::Down => vec![Action::UiScroll(1)],
                    KeyCode::PageUp => vec![Action::UiScroll(-page)],
                    KeyCode::PageDown => vec![Action::UiScroll(page)],
                    _ => self
                        .input
                        .handle_event(event, Self::input_props(props.state, true))
                        .into_iter()
                        .collect(),
                }
            }
            EventKind::Scroll { delta, .. } => {
                vec![Action::UiScroll(if *delta < 0 { -1 } else { 1 })]
            }
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let palette = state.theme.palette();

        let loading = if state.request.state().is_loading() {
            format!(" {}", SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()])
        } else {
            String::new()
        };
        let theme_label = match state.theme {
            Theme::Light => " light ",
            Theme::Dark => " dark ",
        };

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.background).fg(palette.text))
            .title(
                Line::styled(
                    format!(" Weather Prediction App{loading} "),
                    Style::default().fg(palette.accent).bold(),
                )
                .centered(),
            )
            .title(Line::styled(theme_label, Style::default().fg(palette.muted)).right_aligned());

        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let [input_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(CityInput::HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.input.render(
            frame,
            input_area,
            Self::input_props(state, props.is_focused),
        );
        ForecastBody.render(frame, body_area, ForecastBodyProps { state });
        HelpBar.render(frame, help_area, HelpBarProps { palette });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::{Forecast, ForecastDay};
    use tui_dispatch::assert_emitted;
    use tui_dispatch::testing::*;

    fn handle(state: &AppState, event: EventKind) -> Vec<Action> {
        ForecastScreen::new()
            .handle_event(
                &event,
                ForecastScreenProps {
                    state,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(state: &AppState, width: u16, height: u16) -> String {
        let mut render = RenderHarness::new(width, height);
        let mut screen = ForecastScreen::new();
        render.render_to_string_plain(|frame| {
            let area = frame.area();
            screen.render(
                frame,
                area,
                ForecastScreenProps {
                    state,
                    is_focused: true,
                },
            );
        })
    }

    #[test]
    fn test_global_keys() {
        let state = AppState::default();
        assert_eq!(handle(&state, EventKind::Key(key("esc"))), vec![Action::Quit]);
        assert_eq!(handle(&state, EventKind::Key(ctrl_key('c'))), vec![Action::Quit]);
        assert_eq!(handle(&state, EventKind::Key(ctrl_key('t'))), vec![Action::UiToggleTheme]);
        assert_eq!(handle(&state, EventKind::Key(key("f5"))), vec![Action::ForecastRefresh]);
        assert_eq!(handle(&state, EventKind::Key(key("down"))), vec![Action::UiScroll(1)]);
        assert_eq!(handle(&state, EventKind::Key(key("pageup"))), vec![Action::UiScroll(-1)]);
    }

    #[test]
    fn test_page_follows_terminal_height() {
        let mut state = AppState::default();
        assert_eq!(page_days(&state), 1);

        state.terminal_size = (80, 2);
        assert_eq!(page_days(&state), 1);

        state.terminal_size = (80, 40);
        assert_eq!(page_days(&state), 3);
        assert_eq!(handle(&state, EventKind::Key(key("pagedown"))), vec![Action::UiScroll(3)]);
    }

    #[test]
    fn test_letters_go_to_input() {
        let mut state = AppState::default();
        // 't' without Ctrl is text, not the theme toggle
        assert_eq!(
            handle(&state, EventKind::Key(char_key('t'))),
            vec![Action::CityInputChange("t".into())]
        );

        state.city_input = "Lima".into();
        assert_eq!(
            handle(&state, EventKind::Key(key("enter"))),
            vec![Action::ForecastRequest("Lima".into())]
        );
    }

    #[test]
    fn test_mouse_scroll() {
        let state = AppState::default();
        let actions = handle(
            &state,
            EventKind::Scroll {
                column: 0,
                row: 0,
                delta: -1,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert_emitted!(actions, Action::UiScroll(n) if *n < 0);
        assert!(handle(&state, EventKind::Resize(80, 24)).is_empty());
    }

    #[test]
    fn test_unfocused_ignores_everything() {
        let state = AppState::default();
        let actions: Vec<Action> = ForecastScreen::new()
            .handle_event(
                &EventKind::Key(key("esc")),
                ForecastScreenProps {
                    state: &state,
                    is_focused: false,
                },
            )
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_render_idle() {
        let output = render(&AppState::default(), 80, 20);
        assert!(output.contains("Weather Prediction App"));
        assert!(output.contains("Enter city name"));
        assert!(output.contains("to get the forecast"));
        assert!(output.contains("light"));
        assert!(output.contains("quit"));
    }

    #[test]
    fn test_render_loading_and_dark_theme() {
        let mut state = AppState {
            theme: Theme::Dark,
            ..AppState::default()
        };
        state.request.begin("Paris");

        let output = render(&state, 80, 20);
        assert!(output.contains("Fetching forecast"));
        assert!(output.contains("dark"));
    }

    #[test]
    fn test_render_forecast() {
        let mut state = AppState::default();
        let pending = state.request.begin("Paris").expect("accepted");
        state.request.settle(
            pending.id,
            Ok(Forecast {
                city: "Paris".into(),
                days: vec![ForecastDay {
                    date: "2025-06-01".into(),
                    temp_max: 25.0,
                    temp_min: 15.0,
                    condition: "Clear".into(),
                    wind_speed: 2.5,
                    recommendation: "Wear sunscreen".into(),
                }],
            }),
        );

        let output = render(&state, 80, 24);
        assert!(output.contains("Weather in Paris"));
        assert!(output.contains("Temperature: 25°C / 15°C"));
        assert!(output.contains("Wear sunscreen"));
        assert!(!output.contains("Fetching forecast"));
    }
}

//! City name field: a themed frame around the stock text input

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    widgets::{Block, Borders},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;
use crate::state::Palette;

pub const PLACEHOLDER: &str = "Enter city name";

pub struct CityInputProps<'a> {
    pub value: &'a str,
    pub is_focused: bool,
    pub palette: Palette,
}

/// Edits go out as `CityInputChange`, Enter submits a `ForecastRequest`.
#[derive(Default)]
pub struct CityInput {
    input: TextInput,
}

impl CityInput {
    pub const HEIGHT: u16 = 3;

    pub fn new() -> Self {
        Self::default()
    }

    fn text_props<'a>(value: &'a str, is_focused: bool) -> TextInputProps<'a, Action> {
        TextInputProps {
            value,
            placeholder: PLACEHOLDER,
            is_focused,
            style: TextInputStyle::minimal(),
            on_change: Action::CityInputChange,
            on_submit: Action::ForecastRequest,
            on_cursor_move: None,
        }
    }
}

impl Component<Action> for CityInput {
    type Props<'a> = CityInputProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        self.input
            .handle_event(event, Self::text_props(props.value, props.is_focused))
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.palette;
        let border = if props.is_focused {
            palette.accent
        } else {
            palette.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" City ".fg(palette.muted))
            .style(Style::default().bg(palette.card).fg(palette.text));

        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.input.render(
            frame,
            inner,
            Self::text_props(props.value, props.is_focused),
        );
    }
}

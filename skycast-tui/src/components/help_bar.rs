use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::Palette;

pub struct HelpBar;

pub struct HelpBarProps {
    pub palette: Palette,
}

const HINTS: [(&str, &str); 5] = [
    ("Enter", "fetch"),
    ("F5", "refresh"),
    ("↑↓", "scroll"),
    ("Ctrl+T", "theme"),
    ("Esc", "quit"),
];

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let key_style = Style::default().fg(props.palette.accent).bold();
        let text_style = Style::default().fg(props.palette.muted);

        let spans: Vec<Span> = HINTS
            .iter()
            .flat_map(|(key, what)| {
                [
                    Span::styled(format!(" {key}"), key_style),
                    Span::styled(format!(" {what} "), text_style),
                ]
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}

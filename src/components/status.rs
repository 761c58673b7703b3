use crate::app::AppState;
use crate::components::Component;
use crate::events::{Action, Mode};
use crate::geometry::{fmt_num, sector_under_pointer};
use crate::spin::SpinState;
use crate::ui::styles::{StatusSymbols, StyledComponent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub struct StatusBar {}

impl StatusBar {
    pub fn new() -> Self {
        Self {}
    }
}

impl Component for StatusBar {
    fn handle_key_events(
        &mut self,
        _key: crossterm::event::KeyCode,
        _app: &mut AppState,
    ) -> Option<Action> {
        None
    }

    fn draw(&mut self, f: &mut Frame, app: &mut AppState, area: Rect) {
        let colors = app.colors();
        let mode_info = match app.mode {
            Mode::Normal => (
                "NORMAL",
                colors.success,
                "↑↓ target | Enter spin | Esc cancel | 'e' export | 't' palette | '?' help | 'q' quit",
            ),
            Mode::Help => ("HELP", colors.warning, "Esc or 'q' to close"),
        };

        let mode_span = Span::styled(
            format!(" {} ", mode_info.0),
            Style::default()
                .fg(Color::Black)
                .bg(mode_info.1)
                .add_modifier(Modifier::BOLD),
        );

        let rotation = app.displayed_rotation();
        let spin_span = match app.spin.state() {
            SpinState::Animating { .. } | SpinState::Requested { .. } => Span::styled(
                format!(" {} {} ", StatusSymbols::SPINNING, app.spin.state().name()),
                Style::default()
                    .fg(colors.warning)
                    .add_modifier(Modifier::BOLD),
            ),
            state => Span::styled(
                format!(" {} ", state.name()),
                Style::default().fg(colors.muted),
            ),
        };

        let total = app.segments().len();
        let under_pointer = sector_under_pointer(rotation, total)
            .and_then(|i| app.segments().get(i))
            .map(|s| s.flat_label())
            .unwrap_or_else(|| "-".to_string());
        let wheel_span = Span::styled(
            format!(" {}° {} ", fmt_num(rotation), under_pointer),
            Style::default().fg(colors.text),
        );

        let message_span = match &app.status {
            Some(message) if message.is_error => {
                Span::styled(format!(" {} ", message.text), StyledComponent::error_text(colors))
            }
            Some(message) => Span::styled(
                format!(" {} ", message.text),
                Style::default().fg(colors.primary),
            ),
            None => Span::raw(""),
        };

        let help_text = Span::styled(
            format!(" {} ", mode_info.2),
            Style::default().fg(colors.muted),
        );

        let separator = || Span::styled("│", Style::default().fg(colors.muted));
        let status_line = Line::from(vec![
            mode_span,
            Span::raw(" "),
            spin_span,
            separator(),
            wheel_span,
            separator(),
            message_span,
            separator(),
            help_text,
        ]);

        let status_bar =
            Paragraph::new(status_line).style(Style::default().bg(Color::Rgb(30, 30, 30)));

        f.render_widget(status_bar, area);
    }
}

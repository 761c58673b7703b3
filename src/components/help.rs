use crate::app::AppState;
use crate::components::Component;
use crate::events::Action;
use crate::ui::layout::centered_rect;
use crate::ui::styles::StyledComponent;
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const KEYS: [(&str, &str); 8] = [
    ("  ↑↓ / j k     ", "Choose the target prize"),
    ("  Enter / Space ", "Spin the wheel"),
    ("  Esc           ", "Cancel the spin in flight"),
    ("  e             ", "Export the wheel as SVG"),
    ("  t             ", "Cycle palette"),
    ("  ?             ", "Toggle this help screen"),
    ("  q             ", "Quit application"),
    ("  Ctrl+C        ", "Force quit"),
];

pub struct Help {}

impl Help {
    pub fn new() -> Self {
        Self {}
    }
}

impl Component for Help {
    fn handle_key_events(&mut self, key: KeyCode, _app: &mut AppState) -> Option<Action> {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::EnterNormalMode),
            _ => None,
        }
    }

    fn draw(&mut self, f: &mut Frame, app: &mut AppState, area: Rect) {
        let colors = app.colors();
        let popup_area = centered_rect(60, 70, area);

        f.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(popup_area);

        // Title
        let title = Block::default()
            .title(" Prize Wheel ")
            .title_alignment(Alignment::Center)
            .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
            .border_style(StyledComponent::block_title(colors));
        f.render_widget(title, chunks[0]);

        let section = Style::default()
            .fg(colors.warning)
            .add_modifier(Modifier::BOLD);

        let mut help_lines = vec![
            Line::from(vec![Span::styled("Keys", section)]),
            Line::from(""),
        ];
        help_lines.extend(KEYS.iter().map(|(key, description)| {
            Line::from(vec![
                Span::styled(*key, StyledComponent::help_key(colors)),
                Span::raw(*description),
            ])
        }));
        help_lines.extend([
            Line::from(""),
            Line::from(vec![Span::styled("Tips", section)]),
            Line::from(""),
            Line::from("  • The highlighted prize is where the next spin lands"),
            Line::from("  • Exports use the rotation shown on screen"),
            Line::from(format!(
                "  • Current palette: {}",
                app.config.theme.display_name()
            )),
        ]);

        let help_para = Paragraph::new(help_lines)
            .block(Block::default().borders(Borders::LEFT | Borders::RIGHT))
            .wrap(Wrap { trim: false });

        f.render_widget(help_para, chunks[1]);

        // Footer
        let footer = Paragraph::new(" Press ? or Esc to close ")
            .style(Style::default().fg(colors.muted))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(StyledComponent::block_border(colors)),
            );
        f.render_widget(footer, chunks[2]);
    }
}

use crate::app::AppState;
use crate::components::Component;
use crate::events::Action;
use crate::segment::SegmentFill;
use crate::ui::styles::{StatusSymbols, StyledComponent};
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

/// Prize list; the highlighted row is the target of the next spin
pub struct PrizeList {}

impl PrizeList {
    pub fn new() -> Self {
        Self {}
    }
}

impl Component for PrizeList {
    fn handle_key_events(&mut self, key: KeyCode, _app: &mut AppState) -> Option<Action> {
        match key {
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
            _ => None,
        }
    }

    fn draw(&mut self, f: &mut Frame, app: &mut AppState, area: Rect) {
        let colors = app.colors();
        let palette = app.palette();
        let selected_index = app.list_state.selected();

        let items: Vec<ListItem> = app
            .segments()
            .iter()
            .enumerate()
            .map(|(idx, segment)| {
                let is_target = selected_index == Some(idx);
                let is_winner = app.last_winner == Some(idx);

                let indicator = if is_target {
                    format!("{} ", StatusSymbols::SELECTION)
                } else {
                    "  ".to_string()
                };

                let fill = SegmentFill::classify(idx, segment);
                let name_style = if is_target {
                    StyledComponent::target_selected(colors)
                } else if is_winner {
                    StyledComponent::winner(colors)
                } else {
                    Style::default().fg(colors.text)
                };

                let mut spans = vec![
                    Span::raw(indicator),
                    Span::styled(
                        StatusSymbols::SWATCH,
                        Style::default().fg(palette.fill_color(fill)),
                    ),
                    Span::raw(" "),
                    Span::raw(segment.icon().to_string()),
                    Span::raw(" "),
                    Span::styled(segment.flat_label(), name_style),
                ];
                if segment.is_grand_prize() {
                    spans.push(Span::styled(
                        " (grand prize)",
                        Style::default().fg(palette.fill_color(fill)),
                    ));
                }
                if is_winner {
                    spans.push(Span::styled(
                        format!(" {}", StatusSymbols::WINNER),
                        StyledComponent::winner(colors),
                    ));
                }

                ListItem::new(Line::from(spans))
            })
            .collect();

        let title = if app.spins_completed > 0 {
            format!(
                " Prizes ({}, {} spins) ",
                items.len(),
                app.spins_completed
            )
        } else {
            format!(" Prizes ({}) ", items.len())
        };

        let prize_list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(Span::styled(title, StyledComponent::block_title(colors)))
                    .border_style(StyledComponent::block_border(colors)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol("");

        f.render_stateful_widget(prize_list, area, &mut app.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_navigation_keys() {
        let mut list = PrizeList::new();
        let mut app = AppState::new(Config::default());
        assert_eq!(
            list.handle_key_events(KeyCode::Char('j'), &mut app),
            Some(Action::SelectNext)
        );
        assert_eq!(
            list.handle_key_events(KeyCode::Up, &mut app),
            Some(Action::SelectPrevious)
        );
        assert_eq!(list.handle_key_events(KeyCode::Enter, &mut app), None);
    }
}

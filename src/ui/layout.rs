//! Layout helpers for the wheel screen

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the prize list, in columns
pub const PRIZE_LIST_WIDTH: u16 = 36;

/// Helper to create a centered rectangle for modals
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Splits the screen into the wheel, the prize list and the status bar
pub fn main_layout(area: Rect) -> [Rect; 3] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(PRIZE_LIST_WIDTH)])
        .split(rows[0]);

    [columns[0], columns[1], rows[1]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 100);
        let centered = centered_rect(50, 50, area);
        assert!(centered.width < area.width);
        assert!(centered.height < area.height);
    }

    #[test]
    fn test_main_layout() {
        let [wheel, prizes, status] = main_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(prizes.width, PRIZE_LIST_WIDTH);
        assert_eq!(wheel.width, 120 - PRIZE_LIST_WIDTH);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 39);
        assert_eq!(wheel.height, 39);
    }
}

//! UI module for the prize wheel
//!
//! This module contains the styling, the layout helpers and the rendering
//! orchestration of the components.

pub mod layout;
pub mod styles;

use crate::app::AppState;
use crate::components::{
    Component, help::Help, prizes::PrizeList, status::StatusBar, wheel::WheelView,
};
use crate::events::Mode;
use ratatui::Frame;

// Re-export commonly used items
pub use styles::{ColorScheme, Colors, WheelPalette};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let mut wheel = WheelView::new();
    let mut prizes = PrizeList::new();
    let mut status = StatusBar::new();

    let [wheel_area, prizes_area, status_area] = layout::main_layout(f.area());

    wheel.draw(f, app, wheel_area);
    prizes.draw(f, app, prizes_area);
    status.draw(f, app, status_area);

    if app.mode == Mode::Help {
        let mut help = Help::new();
        help.draw(f, app, f.area());
    }
}

//! Application state management
//!
//! This module defines the state of the interactive wheel and the reducer that
//! applies actions to it. The wheel itself is driven by [`SpinController`];
//! the host only picks the target segment and reacts to completion.

use crate::config::Config;
use crate::events::{Action, Mode};
use crate::geometry::{SectorGeometry, layout_wheel};
use crate::segment::Segment;
use crate::spin::SpinController;
use crate::timer::SpinTimer;
use crate::ui::styles::{Colors, WheelPalette};
use ratatui::widgets::ListState;
use std::time::Instant;

/// A one-line message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Represents the complete state of the wheel application
#[derive(Debug)]
pub struct AppState {
    /// Whether the application should quit
    pub should_quit: bool,
    /// Current application mode
    pub mode: Mode,
    /// Loaded configuration (segments, timing, theme)
    pub config: Config,
    /// Precomputed sector layout, one per segment
    pub sectors: Vec<SectorGeometry>,
    /// Selection of the target segment in the prize list
    pub list_state: ListState,
    /// Rotation and spin lifecycle
    pub spin: SpinController,
    /// Completion timer of the spin in flight
    pub spin_timer: Option<SpinTimer>,
    /// Index of the most recent winner
    pub last_winner: Option<usize>,
    /// Number of spins that ran to completion
    pub spins_completed: u32,
    /// Latest status bar message
    pub status: Option<StatusMessage>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let sectors = layout_wheel(&config.segments);
        let mut list_state = ListState::default();
        if !sectors.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            should_quit: false,
            mode: Mode::Normal,
            spin: SpinController::new(config.spin),
            config,
            sectors,
            list_state,
            spin_timer: None,
            last_winner: None,
            spins_completed: 0,
            status: None,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.config.segments
    }

    /// The segment the next spin will land on
    pub fn selected_target(&self) -> Option<usize> {
        self.list_state
            .selected()
            .filter(|&index| index < self.segments().len())
    }

    pub fn palette(&self) -> WheelPalette {
        self.config.theme.current_scheme().palette()
    }

    pub fn colors(&self) -> Colors {
        self.config.theme.current_scheme().colors()
    }

    /// Rotation to draw right now
    pub fn displayed_rotation(&self) -> f64 {
        self.spin.displayed_rotation(Instant::now())
    }

    pub fn set_status(&mut self, message: StatusMessage) {
        self.status = Some(message);
    }
}

/// Main reducer function that dispatches actions to appropriate handlers
///
/// This function acts as a clean dispatch layer, delegating actual state
/// mutations to specialized handler functions in the handlers module.
pub fn reducer(state: &mut AppState, action: Action) {
    use crate::handlers::*;

    match action {
        Action::Quit => handle_quit(state),
        Action::EnterNormalMode => handle_enter_normal_mode(state),
        Action::ShowHelp => handle_show_help(state),
        Action::SelectNext => handle_select_next(state),
        Action::SelectPrevious => handle_select_previous(state),
        Action::Spin => {
            // Spins are started in the main event loop, which owns the timer
        }
        Action::SpinComplete(spin_id) => handle_spin_complete(state, spin_id),
        Action::CancelSpin => handle_cancel_spin(state),
        Action::CycleTheme => handle_cycle_theme(state),
        Action::ExportSvg => handle_export_svg(state),
    }
}

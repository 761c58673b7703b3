//! Action handlers for state mutations
//!
//! This module contains handler functions for each Action type, providing
//! a clean separation between action dispatch and state mutation logic.

use crate::app::{AppState, StatusMessage};
use crate::events::Mode;
use crate::spin::SpinCommit;
use crate::svg::export_svg;
use std::time::Instant;
use tracing::{info, warn};

/// Handle application quit
pub fn handle_quit(state: &mut AppState) {
    state.should_quit = true;
    // Tearing down mid-spin must not deliver a completion afterwards.
    if let Some(timer) = state.spin_timer.take() {
        timer.cancel();
    }
}

/// Handle entering normal mode
pub fn handle_enter_normal_mode(state: &mut AppState) {
    state.mode = Mode::Normal;
}

/// Handle showing help
pub fn handle_show_help(state: &mut AppState) {
    state.mode = Mode::Help;
}

/// Move the target to the next segment, wrapping around
pub fn handle_select_next(state: &mut AppState) {
    let total = state.segments().len();
    if total == 0 {
        return;
    }
    let next = match state.list_state.selected() {
        Some(i) => (i + 1) % total,
        None => 0,
    };
    state.list_state.select(Some(next));
}

/// Move the target to the previous segment, wrapping around
pub fn handle_select_previous(state: &mut AppState) {
    let total = state.segments().len();
    if total == 0 {
        return;
    }
    let previous = match state.list_state.selected() {
        Some(0) | None => total - 1,
        Some(i) => i - 1,
    };
    state.list_state.select(Some(previous));
}

/// Start a spin towards the selected target.
///
/// Returns the committed spin so the caller can arm its completion timer.
pub fn handle_spin(state: &mut AppState) -> Option<SpinCommit> {
    let total = state.segments().len();
    let Some(winner) = state.selected_target() else {
        state.set_status(StatusMessage::error("The wheel has no segments"));
        return None;
    };

    match state.spin.spin(winner, total, Instant::now()) {
        Ok(commit) => {
            let label = state.segments()[winner].flat_label();
            info!(spin_id = commit.spin_id, winner, %label, "spinning");
            state.set_status(StatusMessage::info(format!("Spinning for {label}...")));
            Some(commit)
        }
        Err(e) => {
            warn!(error = %e, winner, "spin rejected");
            state.set_status(StatusMessage::error(format!("Spin rejected: {e}")));
            None
        }
    }
}

/// Handle the completion notification of a spin
pub fn handle_spin_complete(state: &mut AppState, spin_id: u64) {
    let Some(winner) = state.spin.complete(spin_id) else {
        return;
    };

    state.spin_timer = None;
    state.last_winner = Some(winner);
    state.spins_completed += 1;

    let label = state
        .segments()
        .get(winner)
        .map(|s| s.flat_label())
        .unwrap_or_default();
    info!(spin_id, winner, %label, "spin finished");
    state.set_status(StatusMessage::info(format!("Winner: {label}")));

    // Ready for the next request.
    state.spin.acknowledge();
}

/// Withdraw the spin in flight, if any
pub fn handle_cancel_spin(state: &mut AppState) {
    if state.spin.cancel(Instant::now()) {
        if let Some(timer) = state.spin_timer.take() {
            timer.cancel();
        }
        state.set_status(StatusMessage::info("Spin cancelled"));
    }
}

/// Handle cycling the wheel palette
pub fn handle_cycle_theme(state: &mut AppState) {
    state.config.theme.cycle_next();
    let name = state.config.theme.display_name();
    state.set_status(StatusMessage::info(format!("Palette: {name}")));
}

/// Write the wheel, as currently shown, to the configured SVG path
pub fn handle_export_svg(state: &mut AppState) {
    let rotation = state.displayed_rotation();
    let path = state.config.export.path.clone();
    let palette = state.palette();

    match export_svg(&path, state.segments(), rotation, &palette) {
        Ok(()) => {
            info!(path = %path.display(), rotation, "exported wheel");
            state.set_status(StatusMessage::info(format!(
                "Exported to {}",
                path.display()
            )));
        }
        Err(e) => {
            warn!("SVG export failed: {:#}", e);
            state.set_status(StatusMessage::error(format!("Export failed: {e:#}")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::path::PathBuf;

    #[test]
    fn test_export_svg_writes_file() {
        let path = std::env::temp_dir().join(format!(
            "prizewheel-handler-test-{}.svg",
            std::process::id()
        ));
        let mut config = Config::default();
        config.export.path = path.clone();
        let mut state = AppState::new(config);

        handle_export_svg(&mut state);

        let status = state.status.clone().expect("status set");
        assert!(!status.is_error, "{}", status.text);
        let written = std::fs::read_to_string(&path).expect("Failed to read export");
        assert!(written.contains("<svg"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_export_svg_reports_failure() {
        let mut config = Config::default();
        config.export.path = PathBuf::from("/nonexistent-dir/for/prizewheel.svg");
        let mut state = AppState::new(config);

        handle_export_svg(&mut state);

        let status = state.status.clone().expect("status set");
        assert!(status.is_error);
    }

    #[test]
    fn test_quit_without_spin() {
        let mut state = AppState::new(Config::default());
        handle_quit(&mut state);
        assert!(state.should_quit);
        assert!(state.spin_timer.is_none());
    }
}

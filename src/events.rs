//! Event handling types
//!
//! This module defines the actions the interactive wheel understands and the
//! modes the UI can be in.

/// Application actions that can be performed by the user or internal events
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Return to normal mode
    EnterNormalMode,
    /// Show help screen
    ShowHelp,
    /// Move the target to the next segment
    SelectNext,
    /// Move the target to the previous segment
    SelectPrevious,
    /// Spin the wheel towards the selected target
    Spin,
    /// The completion timer for the given spin fired
    SpinComplete(u64),
    /// Withdraw the spin in flight
    CancelSpin,
    /// Cycle to next palette
    CycleTheme,
    /// Write the current wheel to the configured SVG path
    ExportSvg,
}

/// Represents the current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Wheel view
    Normal,
    /// Help overlay
    Help,
}

//! Centralized style system for the wheel
//!
//! This module defines the colors used by the terminal chrome and the wheel
//! palettes shared by the terminal canvas and the SVG renderer. Palette colors
//! are kept as hex strings so both renderers read the same source.

use crate::segment::SegmentFill;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Core color definitions for the terminal chrome
#[derive(Debug, Clone, Copy)]
pub struct Colors {
    /// Primary selection/focus color
    pub selection: Color,
    /// Success/winner highlight
    pub success: Color,
    /// Warning/attention needed
    pub warning: Color,
    /// Error/failure status
    pub error: Color,
    /// Muted/disabled/secondary text
    pub muted: Color,
    /// Default text color
    pub text: Color,
    /// Primary foreground color (borders, headers)
    pub primary: Color,
}

impl Colors {
    pub fn rose() -> Self {
        Self {
            selection: Color::Rgb(211, 135, 159),
            success: Color::Rgb(251, 191, 36),
            warning: Color::Yellow,
            error: Color::Red,
            muted: Color::DarkGray,
            text: Color::White,
            primary: Color::Rgb(211, 135, 159),
        }
    }

    pub fn classic() -> Self {
        Self {
            selection: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            muted: Color::DarkGray,
            text: Color::White,
            primary: Color::Cyan,
        }
    }

    /// Midnight theme - slate blues with an amber accent
    pub fn midnight() -> Self {
        Self {
            selection: Color::Rgb(125, 211, 252), // sky
            success: Color::Rgb(250, 204, 21),    // amber
            warning: Color::Rgb(251, 146, 60),    // orange
            error: Color::Rgb(248, 113, 113),     // red
            muted: Color::Rgb(100, 116, 139),     // slate
            text: Color::Rgb(241, 245, 249),
            primary: Color::Rgb(125, 211, 252),
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self::rose()
    }
}

/// Gradient stops of the grand prize texture, as (offset percent, color)
pub const GOLD_STOPS: [(u8, &str); 5] = [
    (0, "#fef3c7"),
    (25, "#f59e0b"),
    (50, "#fbbf24"),
    (75, "#d97706"),
    (100, "#b45309"),
];

/// Colors of the wheel itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelPalette {
    /// Even-indexed segments
    pub dark: &'static str,
    /// Odd-indexed segments
    pub light: &'static str,
    /// Flat stand-in for the gold texture where gradients are unavailable
    pub gold: &'static str,
    pub text: &'static str,
    pub grand_prize_text: &'static str,
    /// Sector dividers and rim
    pub divider: &'static str,
    pub pointer: &'static str,
    pub hub_outer: &'static str,
    pub hub_inner: &'static str,
    pub heart: &'static str,
}

impl WheelPalette {
    /// Teal and dusty rose with a gold grand prize
    pub const ROSE: WheelPalette = WheelPalette {
        dark: "#466871",
        light: "#d3879f",
        gold: "#f59e0b",
        text: "#ffffff",
        grand_prize_text: "#78350f",
        divider: "#fbbf24",
        pointer: "#e11d48",
        hub_outer: "#fbbf24",
        hub_inner: "#fff1f2",
        heart: "#e11d48",
    };

    pub const CLASSIC: WheelPalette = WheelPalette {
        dark: "#b91c1c",
        light: "#1d4ed8",
        gold: "#f59e0b",
        text: "#ffffff",
        grand_prize_text: "#78350f",
        divider: "#f8fafc",
        pointer: "#facc15",
        hub_outer: "#f8fafc",
        hub_inner: "#1f2937",
        heart: "#ef4444",
    };

    pub const MIDNIGHT: WheelPalette = WheelPalette {
        dark: "#1e293b",
        light: "#334155",
        gold: "#facc15",
        text: "#e2e8f0",
        grand_prize_text: "#422006",
        divider: "#7dd3fc",
        pointer: "#7dd3fc",
        hub_outer: "#7dd3fc",
        hub_inner: "#0f172a",
        heart: "#f472b6",
    };

    /// Flat hex fill for a sector
    pub fn fill_hex(&self, fill: SegmentFill) -> &'static str {
        match fill {
            SegmentFill::Dark => self.dark,
            SegmentFill::Light => self.light,
            SegmentFill::GrandPrize => self.gold,
        }
    }

    pub fn text_hex(&self, fill: SegmentFill) -> &'static str {
        match fill {
            SegmentFill::GrandPrize => self.grand_prize_text,
            _ => self.text,
        }
    }

    /// Terminal color for a sector
    pub fn fill_color(&self, fill: SegmentFill) -> Color {
        hex_color(self.fill_hex(fill))
    }
}

impl Default for WheelPalette {
    fn default() -> Self {
        Self::ROSE
    }
}

/// Parses `#rrggbb` into a terminal color, falling back to white
pub fn hex_color(hex: &str) -> Color {
    Color::from_str(hex).unwrap_or(Color::White)
}

/// Named color scheme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Rose,
    Classic,
    Midnight,
}

impl ColorScheme {
    pub fn colors(self) -> Colors {
        match self {
            ColorScheme::Rose => Colors::rose(),
            ColorScheme::Classic => Colors::classic(),
            ColorScheme::Midnight => Colors::midnight(),
        }
    }

    pub fn palette(self) -> WheelPalette {
        match self {
            ColorScheme::Rose => WheelPalette::ROSE,
            ColorScheme::Classic => WheelPalette::CLASSIC,
            ColorScheme::Midnight => WheelPalette::MIDNIGHT,
        }
    }

    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Rose, ColorScheme::Classic, ColorScheme::Midnight]
    }
}

/// Styled components - named style presets for common UI elements
pub struct StyledComponent;

impl StyledComponent {
    pub fn block_border(colors: Colors) -> Style {
        Style::default().fg(colors.primary)
    }

    pub fn block_title(colors: Colors) -> Style {
        Style::default()
            .fg(colors.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn target_selected(colors: Colors) -> Style {
        Style::default()
            .fg(colors.selection)
            .add_modifier(Modifier::BOLD)
    }

    pub fn winner(colors: Colors) -> Style {
        Style::default()
            .fg(colors.success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn help_key(colors: Colors) -> Style {
        Style::default()
            .fg(colors.selection)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_text(colors: Colors) -> Style {
        Style::default()
            .fg(colors.error)
            .add_modifier(Modifier::BOLD)
    }
}

/// Status indicator symbols for consistent icon usage
pub struct StatusSymbols;

impl StatusSymbols {
    pub const SPINNING: &'static str = "⟳";
    pub const WINNER: &'static str = "★";
    pub const SELECTION: &'static str = "▶";
    pub const SWATCH: &'static str = "■";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_parses() {
        assert_eq!(hex_color("#466871"), Color::Rgb(0x46, 0x68, 0x71));
        assert_eq!(hex_color("not a color"), Color::White);
    }

    #[test]
    fn test_palette_fills() {
        let palette = WheelPalette::ROSE;
        assert_eq!(palette.fill_hex(SegmentFill::Dark), "#466871");
        assert_eq!(palette.fill_hex(SegmentFill::Light), "#d3879f");
        assert_eq!(palette.text_hex(SegmentFill::GrandPrize), "#78350f");
        assert_eq!(palette.text_hex(SegmentFill::Light), "#ffffff");
    }

    #[test]
    fn test_color_scheme_all() {
        assert_eq!(ColorScheme::all().len(), 3);
        assert_eq!(ColorScheme::Midnight.palette(), WheelPalette::MIDNIGHT);
    }

    #[test]
    fn test_styled_component_styles() {
        let colors = Colors::default();
        let style = StyledComponent::winner(colors);
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}

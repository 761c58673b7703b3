//! Theme configuration and management
//!
//! Handles selecting and cycling the wheel palette from the config file.

use crate::ui::styles::ColorScheme;
use serde::{Deserialize, Serialize};

/// Theme configuration stored in config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Current active theme name
    #[serde(default = "default_theme")]
    pub current: String,
}

fn default_theme() -> String {
    "rose".to_string()
}

impl ThemeConfig {
    /// Create a new theme config with specified scheme
    pub fn new(scheme: &str) -> Self {
        Self {
            current: scheme.to_string(),
        }
    }

    /// Get the current color scheme; unknown names fall back to rose
    pub fn current_scheme(&self) -> ColorScheme {
        match self.current.as_str() {
            "classic" => ColorScheme::Classic,
            "midnight" => ColorScheme::Midnight,
            _ => ColorScheme::Rose,
        }
    }

    /// Get the next theme in the cycle
    pub fn next_scheme(&self) -> ColorScheme {
        match self.current_scheme() {
            ColorScheme::Rose => ColorScheme::Classic,
            ColorScheme::Classic => ColorScheme::Midnight,
            ColorScheme::Midnight => ColorScheme::Rose,
        }
    }

    /// Get the theme name as a display string
    pub fn display_name(&self) -> String {
        match self.current_scheme() {
            ColorScheme::Rose => "Rose".to_string(),
            ColorScheme::Classic => "Classic".to_string(),
            ColorScheme::Midnight => "Midnight".to_string(),
        }
    }

    /// List all available theme names
    pub fn available_themes() -> Vec<&'static str> {
        vec!["rose", "classic", "midnight"]
    }

    /// Set the active theme by name; unknown names are ignored
    pub fn set_theme(&mut self, name: &str) {
        if Self::available_themes().contains(&name) {
            self.current = name.to_string();
        }
    }

    /// Switch to the next theme
    pub fn cycle_next(&mut self) {
        self.current = match self.next_scheme() {
            ColorScheme::Rose => "rose",
            ColorScheme::Classic => "classic",
            ColorScheme::Midnight => "midnight",
        }
        .to_string();
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            current: default_theme(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_config_default() {
        let config = ThemeConfig::default();
        assert_eq!(config.current, "rose");
        assert_eq!(config.current_scheme(), ColorScheme::Rose);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = ThemeConfig::new("neon");
        assert_eq!(config.current_scheme(), ColorScheme::Rose);
        assert_eq!(config.display_name(), "Rose");
    }

    #[test]
    fn test_cycle_next() {
        let mut config = ThemeConfig::new("rose");
        config.cycle_next();
        assert_eq!(config.current, "classic");
        config.cycle_next();
        assert_eq!(config.current, "midnight");
        config.cycle_next();
        assert_eq!(config.current, "rose");
    }

    #[test]
    fn test_set_theme() {
        let mut config = ThemeConfig::default();
        config.set_theme("midnight");
        assert_eq!(config.current_scheme(), ColorScheme::Midnight);
        config.set_theme("bogus");
        assert_eq!(config.current, "midnight");
    }
}

//! Wheel segments and their visual classification

use serde::{Deserialize, Serialize};

/// Glyph shown when a segment has no icon of its own
pub const DEFAULT_ICON: &str = "🎁";

/// Prize tier of a segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    #[default]
    Standard,
    GrandPrize,
}

/// One slice of the wheel as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Display text; `\n` separates lines
    pub label: String,
    #[serde(default)]
    pub tier: Tier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Segment {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tier: Tier::Standard,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn grand_prize(mut self) -> Self {
        self.tier = Tier::GrandPrize;
        self
    }

    pub fn is_grand_prize(&self) -> bool {
        self.tier == Tier::GrandPrize
    }

    pub fn icon(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_ICON)
    }

    /// Label with line breaks collapsed, for one-line displays
    pub fn flat_label(&self) -> String {
        self.label.split('\n').collect::<Vec<_>>().join(" ")
    }
}

/// Fill used for a sector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentFill {
    /// Even-indexed standard segment
    Dark,
    /// Odd-indexed standard segment
    Light,
    /// Gold texture reserved for the grand prize
    GrandPrize,
}

impl SegmentFill {
    pub fn classify(index: usize, segment: &Segment) -> Self {
        if segment.is_grand_prize() {
            SegmentFill::GrandPrize
        } else if index % 2 == 0 {
            SegmentFill::Dark
        } else {
            SegmentFill::Light
        }
    }
}

/// The prizes of the stock wheel
pub fn default_segments() -> Vec<Segment> {
    vec![
        Segment::new("Youlry.com\nVoucher").with_icon("🎟️"),
        Segment::new("Chocolate").with_icon("🍫"),
        Segment::new("Roses").with_icon("🌹"),
        Segment::new("Teddy").with_icon("🧸"),
        Segment::new("Necklace").with_icon("📿").grand_prize(),
        Segment::new("Pendant").with_icon("✨"),
        Segment::new("Dinner\nfor Two").with_icon("🍽️"),
        Segment::new("Watch").with_icon("⌚"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_alternates_by_parity() {
        let plain = Segment::new("Roses");
        assert_eq!(SegmentFill::classify(0, &plain), SegmentFill::Dark);
        assert_eq!(SegmentFill::classify(1, &plain), SegmentFill::Light);
        assert_eq!(SegmentFill::classify(6, &plain), SegmentFill::Dark);
    }

    #[test]
    fn test_grand_prize_fill_ignores_parity() {
        let gold = Segment::new("Necklace").grand_prize();
        assert_eq!(SegmentFill::classify(3, &gold), SegmentFill::GrandPrize);
        assert_eq!(SegmentFill::classify(4, &gold), SegmentFill::GrandPrize);
    }

    #[test]
    fn test_classification_does_not_read_label() {
        // A label that mentions the grand prize does not make it one.
        let imposter = Segment::new("Not a Necklace");
        assert_eq!(SegmentFill::classify(0, &imposter), SegmentFill::Dark);
    }

    #[test]
    fn test_icon_fallback() {
        assert_eq!(Segment::new("Mystery").icon(), DEFAULT_ICON);
        assert_eq!(Segment::new("Teddy").with_icon("🧸").icon(), "🧸");
    }

    #[test]
    fn test_flat_label() {
        assert_eq!(Segment::new("Dinner\nfor Two").flat_label(), "Dinner for Two");
    }

    #[test]
    fn test_default_segments_have_one_grand_prize() {
        let segments = default_segments();
        assert_eq!(segments.len(), 8);
        assert_eq!(segments.iter().filter(|s| s.is_grand_prize()).count(), 1);
    }

    #[test]
    fn test_segment_from_toml() {
        let segment: Segment = toml::from_str(
            r#"
            label = "Necklace"
            tier = "grand-prize"
            icon = "📿"
            "#,
        )
        .expect("Failed to parse segment");
        assert!(segment.is_grand_prize());
        assert_eq!(segment.icon(), "📿");

        let plain: Segment = toml::from_str("label = \"Roses\"").expect("Failed to parse");
        assert_eq!(plain.tier, Tier::Standard);
        assert!(plain.icon.is_none());
    }
}

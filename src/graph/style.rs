// src/graph/style.rs
//! Node styling derived from label text alone.

use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH_PER_CHAR: usize = 21;

const DEFAULT_COLOR: &str = "#035afc";
const META_COLOR: &str = "#808080";

/// Indexed by level digit.
const LEVEL_COLORS: [&str; 10] = [
    "#ffd700", "#ff08d6", "#de08ff", "#9808ff", "#5a08ff", "#ff1493", "#adff2f", "#f08080",
    "#ffc0cb", "#ffe7ba",
];

/// Levels are checked 1 through 9, then 0.
const LEVEL_ORDER: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0];

/// Colour family a label falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Gate or meta label (contains ` of`).
    Meta,
    /// Course level: a digit right after `*` or a space.
    Level(u8),
    Default,
}

impl Tone {
    #[must_use]
    pub fn of(label: &str) -> Self {
        if label.contains(" of") {
            return Self::Meta;
        }
        LEVEL_ORDER
            .iter()
            .copied()
            .find(|&digit| has_level_marker(label, digit))
            .map_or(Self::Default, Self::Level)
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Meta => META_COLOR,
            Self::Level(digit) => LEVEL_COLORS
                .get(usize::from(digit))
                .copied()
                .unwrap_or(DEFAULT_COLOR),
            Self::Default => DEFAULT_COLOR,
        }
    }
}

fn has_level_marker(label: &str, digit: u8) -> bool {
    let d = char::from(b'0' + digit);
    label.contains(&format!("*{d}")) || label.contains(&format!(" {d}"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleHint {
    pub color: String,
    pub font_weight: String,
    pub font_family: String,
    pub font_size: String,
    pub background_color: String,
    pub border: String,
    pub border_color: String,
    pub width: usize,
}

impl StyleHint {
    fn with_color(label: &str, background: &str, width_per_char: usize) -> Self {
        Self {
            color: "white".to_string(),
            font_weight: "bold".to_string(),
            font_family: "Ubuntu".to_string(),
            font_size: "1.5rem".to_string(),
            background_color: background.to_string(),
            border: "1px solid".to_string(),
            border_color: background.to_string(),
            width: label.chars().count() * width_per_char,
        }
    }

    /// Style for a course label.
    #[must_use]
    pub fn for_label(label: &str, width_per_char: usize) -> Self {
        Self::with_color(label, Tone::of(label).color(), width_per_char)
    }

    /// Neutral style used for every gate, whatever its label says.
    #[must_use]
    pub fn gate(label: &str, width_per_char: usize) -> Self {
        Self::with_color(label, Tone::Meta.color(), width_per_char)
    }
}

/// Style for `label` at the default width.
#[must_use]
pub fn style_for(label: &str) -> StyleHint {
    StyleHint::for_label(label, DEFAULT_WIDTH_PER_CHAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_from_label() {
        let cases = vec![
            ("CIS*1300", Tone::Level(1), "guelph first year"),
            ("CIS*4650", Tone::Level(4), "guelph fourth year"),
            ("PHYS 106", Tone::Level(1), "space separator"),
            ("CPSC 500", Tone::Level(5), "graduate"),
            ("MATH*0100", Tone::Level(0), "level zero"),
            ("1 of", Tone::Meta, "quantifier label"),
            ("2.00 credits of", Tone::Meta, "meta label"),
            ("all", Tone::Default, "plain label"),
        ];
        for (label, expected, desc) in cases {
            assert_eq!(Tone::of(label), expected, "Failed: {desc}");
        }
    }

    #[test]
    fn test_first_matching_level_wins() {
        // " 1" and "*3" both present: levels are checked in ascending order.
        assert_eq!(Tone::of("CIS*3110 1"), Tone::Level(1));
    }

    #[test]
    fn test_style_hint_fields() {
        let style = style_for("CIS*2500");
        assert_eq!(style.background_color, "#de08ff");
        assert_eq!(style.border_color, style.background_color);
        assert_eq!(style.width, 8 * DEFAULT_WIDTH_PER_CHAR);

        let gate = StyleHint::gate("all", 10);
        assert_eq!(gate.background_color, META_COLOR);
        assert_eq!(gate.width, 30);
    }

    #[test]
    fn test_style_is_deterministic() {
        assert_eq!(style_for("ECON*1050"), style_for("ECON*1050"));
    }
}

//! Colors and fonts for the wheel painter.

use wheel_core::Color;

/// Segment fills, applied in option order and repeating after eight.
pub const SEGMENT_PALETTE: [&str; 8] = [
    "#f2c97d", "#f4a27c", "#cf6f5a", "#c4a77d", "#86a9c9", "#a5c6a5", "#e4b5a1", "#d7c08a",
];

const INK: Color = Color::rgb(0x1b, 0x1a, 0x16);
const WHITE: Color = Color::rgb(255, 255, 255);

/// Theme colors are written as CSS hex; a malformed entry falls back to ink.
fn hex(css: &str) -> Color {
    Color::from_hex(css).unwrap_or_else(|| {
        log::warn!("bad theme color {css:?}");
        INK
    })
}

/// Theme-dependent colors for the wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelTheme {
    pub palette: [Color; 8],
    pub wedge_border: Color,
    pub label: Color,
    pub placeholder_bg: Color,
    pub placeholder_border: Color,
    pub placeholder_text: Color,
    pub hub_fill: Color,
    pub hub_border: Color,
    pub font_family: &'static str,
}

impl WheelTheme {
    /// Warm paper look.
    pub fn light() -> Self {
        Self {
            palette: SEGMENT_PALETTE.map(hex),
            wedge_border: INK.with_alpha(0.15),
            label: INK,
            placeholder_bg: hex("#fdf9f1"),
            placeholder_border: INK.with_alpha(0.1),
            placeholder_text: INK.with_alpha(0.6),
            hub_fill: hex("#fffaf0"),
            hub_border: INK.with_alpha(0.4),
            font_family: "\"Trebuchet MS\", sans-serif",
        }
    }

    /// Same palette, darker chrome.
    pub fn dark() -> Self {
        Self {
            placeholder_bg: hex("#2a2824"),
            placeholder_border: WHITE.with_alpha(0.12),
            placeholder_text: WHITE.with_alpha(0.6),
            hub_fill: hex("#2a2824"),
            hub_border: WHITE.with_alpha(0.4),
            ..Self::light()
        }
    }

    pub fn segment_color(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for WheelTheme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_repeats_after_eight() {
        let theme = WheelTheme::light();
        assert_eq!(theme.segment_color(0), theme.segment_color(8));
        assert_eq!(theme.segment_color(3), theme.segment_color(11));
        assert_ne!(theme.segment_color(0), theme.segment_color(1));
    }

    #[test]
    fn palette_parses_from_css_hex() {
        let theme = WheelTheme::light();
        assert_eq!(theme.segment_color(0), Color::rgb(0xf2, 0xc9, 0x7d));
        assert_eq!(theme.segment_color(4), Color::rgb(0x86, 0xa9, 0xc9));
        assert_eq!(theme.segment_color(7), Color::rgb(0xd7, 0xc0, 0x8a));
        assert!(theme.palette.iter().all(|c| *c != INK));
        assert_eq!(theme.hub_fill.to_css(), "#fffaf0");
    }

    #[test]
    fn dark_keeps_palette() {
        assert_eq!(WheelTheme::dark().palette, WheelTheme::light().palette);
    }
}

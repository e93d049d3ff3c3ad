//! Core data model for the spin wheel.
//!
//! Options are parsed from free text and rebuilt on every edit. Segments
//! are derived from the options on demand and never stored, so the wheel
//! geometry always reflects the latest text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Helper to parse a single hex digit.
pub fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Same color with alpha given as a 0.0..=1.0 fraction.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`. The `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();
        let pair = |i: usize| -> Option<u8> { Some(hex_val(bytes[i])? << 4 | hex_val(bytes[i + 1])?) };

        match bytes.len() {
            3 => Some(Self::rgb(
                hex_val(bytes[0])? * 17,
                hex_val(bytes[1])? * 17,
                hex_val(bytes[2])? * 17,
            )),
            6 => Some(Self::rgb(pair(0)?, pair(2)?, pair(4)?)),
            8 => Some(Self::rgba(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
            _ => None,
        }
    }

    /// CSS color string: `#rrggbb` when opaque, `rgba(...)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let alpha = (self.a as f32 / 255.0 * 100.0).round() / 100.0;
            format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
        }
    }
}

// ─── Options ─────────────────────────────────────────────────────────────

/// One weighted choice on the wheel.
///
/// The label is trimmed and never empty; the weight is finite and positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelOption {
    pub label: String,
    pub weight: f64,
}

/// Why a non-blank input line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LineError {
    #[error("expected `<label> <number>%`")]
    Malformed,
    #[error("label is empty")]
    EmptyLabel,
    #[error("percentage must be greater than zero")]
    NonPositiveWeight,
    #[error("percentage is not a finite number")]
    NonFiniteWeight,
}

/// A rejected line with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineIssue {
    pub line: usize,
    pub error: LineError,
}

/// Output of `parse_options`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Valid options, in input order.
    pub options: Vec<WheelOption>,
    /// 1-based numbers of non-blank lines that failed, in encounter order.
    pub invalid_lines: Vec<usize>,
    /// Unrounded sum of `options[..].weight`.
    pub total_weight: f64,
    /// Reason for each entry of `invalid_lines`, same order.
    pub issues: Vec<LineIssue>,
}

impl ParseResult {
    pub fn push_option(&mut self, option: WheelOption) {
        self.total_weight += option.weight;
        self.options.push(option);
    }

    pub fn push_issue(&mut self, line: usize, error: LineError) {
        self.invalid_lines.push(line);
        self.issues.push(LineIssue { line, error });
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.label.as_str())
    }
}

// ─── Segments ────────────────────────────────────────────────────────────

/// Angular wedge for one option, in the un-rotated wheel frame.
///
/// Angles are radians; angle 0 sits at 3 o'clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub label: String,
    pub weight: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Segment {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.span() / 2.0
    }

    /// Half-open containment: `start <= angle < end`.
    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.start_angle && angle < self.end_angle
    }
}

//! Readiness checks for parsed options.
//!
//! Only the highest-priority problem is reported; fixing it reveals the
//! next one.

use crate::config::WheelConfig;
use crate::format::format_percent;
use crate::model::ParseResult;
use serde::Serialize;
use std::fmt;

/// Outcome of validating a `ParseResult`, highest priority first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Status {
    InvalidLines(Vec<usize>),
    TooFewOptions,
    /// Total percentage, unrounded.
    TotalOff(f64),
    Ready,
}

impl Status {
    /// Check `result` against the default tolerance.
    pub fn of(result: &ParseResult) -> Self {
        Self::with_config(result, &WheelConfig::default())
    }

    pub fn with_config(result: &ParseResult, config: &WheelConfig) -> Self {
        if !result.invalid_lines.is_empty() {
            Self::InvalidLines(result.invalid_lines.clone())
        } else if result.options.len() < 2 {
            Self::TooFewOptions
        } else if !config.total_ok(result.total_weight) {
            Self::TotalOff(result.total_weight)
        } else {
            Self::Ready
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Status text for the UI; empty when ready.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLines(lines) => {
                let noun = if lines.len() == 1 { "line" } else { "lines" };
                let list = lines
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Invalid {noun}: {list}. Use \"Name 25%\".")
            }
            Self::TooFewOptions => write!(f, "Add at least two options with percentages."),
            Self::TotalOff(total) => write!(
                f,
                "Total must be 100%. Current total: {}%.",
                format_percent(*total)
            ),
            Self::Ready => Ok(()),
        }
    }
}

/// Status text for `result`; empty string means ready to spin.
pub fn status_message(result: &ParseResult) -> String {
    Status::of(result).message()
}

/// At least two options, no invalid lines, total within tolerance of 100.
pub fn can_spin(result: &ParseResult) -> bool {
    Status::of(result).is_ready()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_options;
    use pretty_assertions::assert_eq;

    #[test]
    fn ready_when_two_halves() {
        let result = parse_options("A 50%\nB 50%");
        assert_eq!(status_message(&result), "");
        assert!(can_spin(&result));
    }

    #[test]
    fn reports_single_invalid_line() {
        let result = parse_options("A\nB 100%");
        assert_eq!(status_message(&result), "Invalid line: 1. Use \"Name 25%\".");
        assert!(!can_spin(&result));
    }

    #[test]
    fn reports_multiple_invalid_lines() {
        let result = parse_options("x\nA 50%\n\ny\nB 50%");
        assert_eq!(
            status_message(&result),
            "Invalid lines: 1, 4. Use \"Name 25%\"."
        );
    }

    #[test]
    fn invalid_lines_win_over_count() {
        let result = parse_options("nope");
        assert_eq!(Status::of(&result), Status::InvalidLines(vec![1]));
    }

    #[test]
    fn too_few_options() {
        let result = parse_options("Only 100%");
        assert_eq!(
            status_message(&result),
            "Add at least two options with percentages."
        );
        assert_eq!(Status::of(&parse_options("")), Status::TooFewOptions);
    }

    #[test]
    fn reports_current_total() {
        let result = parse_options("A 60%\nB 30%");
        assert_eq!(
            status_message(&result),
            "Total must be 100%. Current total: 90%."
        );
        assert!(!can_spin(&result));

        let result = parse_options("A 60.25%\nB 30%");
        assert_eq!(
            status_message(&result),
            "Total must be 100%. Current total: 90.3%."
        );
    }

    #[test]
    fn tolerance_edges() {
        assert!(can_spin(&parse_options("A 50.01%\nB 50%")));
        assert!(can_spin(&parse_options("A 49.99%\nB 50%")));
        assert!(!can_spin(&parse_options("A 50.02%\nB 50%")));
        assert!(!can_spin(&parse_options("A 49.98%\nB 50%")));
    }

    #[test]
    fn custom_tolerance() {
        let config = WheelConfig {
            tolerance: 1.0,
            ..WheelConfig::default()
        };
        let result = parse_options("A 50%\nB 49.5%");
        assert!(Status::with_config(&result, &config).is_ready());
        assert!(!can_spin(&result));
    }
}

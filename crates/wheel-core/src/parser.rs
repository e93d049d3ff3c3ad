//! Parser for wheel option text → `ParseResult`.
//!
//! Built on `winnow` 0.7. One option per line, written `<label> <number>%`
//! with an optional `:`, `|`, `,` or `-` between label and number.
//! Blank lines are skipped but still count toward line numbers.

use crate::config::DEFAULT_OPTIONS;
use crate::model::*;
use winnow::ascii::digit1;
use winnow::combinator::{eof, opt};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

/// Parse option text. Never fails: bad lines are reported in
/// `invalid_lines` / `issues` instead.
#[must_use = "parsing result should be used"]
pub fn parse_options(text: &str) -> ParseResult {
    let mut result = ParseResult::default();

    for (index, raw) in text.split('\n').enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(option) => result.push_option(option),
            Err(error) => result.push_issue(index + 1, error),
        }
    }

    log::trace!(
        "parsed {} options, {} invalid lines, total {}",
        result.options.len(),
        result.invalid_lines.len(),
        result.total_weight
    );
    result
}

/// The built-in six options, one per line.
pub fn default_text() -> String {
    DEFAULT_OPTIONS.join("\n")
}

/// Parse one trimmed, non-blank line.
pub fn parse_line(line: &str) -> Result<WheelOption, LineError> {
    let (label, weight) = split_weight(line).ok_or(LineError::Malformed)?;

    if label.is_empty() {
        return Err(LineError::EmptyLabel);
    }
    if !weight.is_finite() {
        return Err(LineError::NonFiniteWeight);
    }
    if weight <= 0.0 {
        return Err(LineError::NonPositiveWeight);
    }

    Ok(WheelOption {
        label: label.to_string(),
        weight,
    })
}

/// Find the shortest label prefix whose remainder is a weight tail.
///
/// Trying split points left to right keeps digits inside labels
/// (`Room 101 - 50%` → `Room 101`, 50).
fn split_weight(line: &str) -> Option<(&str, f64)> {
    line.char_indices().find_map(|(at, _)| {
        let mut rest = &line[at..];
        weight_tail(&mut rest)
            .ok()
            .map(|weight| (line[..at].trim(), weight))
    })
}

// ─── Low-level parsers ──────────────────────────────────────────────────

fn gap<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_while(0.., |c: char| c.is_whitespace()).parse_next(input)
}

fn separator(input: &mut &str) -> ModalResult<Option<char>> {
    opt(one_of([':', '|', ',', '-'])).parse_next(input)
}

/// `\d+(\.\d+)?`
fn decimal<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    (digit1, opt(('.', digit1))).take().parse_next(input)
}

/// `\s*[:|,-]?\s*<decimal>\s*%` up to end of input.
fn weight_tail(input: &mut &str) -> ModalResult<f64> {
    let _ = (gap, separator, gap).parse_next(input)?;
    let number = decimal.parse_next(input)?;
    let _ = (gap, '%', eof).parse_next(input)?;
    number
        .parse::<f64>()
        .map_err(|_| ErrMode::Backtrack(ContextError::new()))
}

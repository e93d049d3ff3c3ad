//! Display formatting for percentages and segment labels.

/// Longest label drawn on a wedge, in characters.
pub const MAX_LABEL_CHARS: usize = 16;

/// Round to one decimal; whole numbers drop the `.0` (`20`, `12.5`).
pub fn format_percent(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        // `-0` would otherwise print as "-0"
        format!("{}", rounded + 0.0)
    } else {
        format!("{rounded:.1}")
    }
}

/// Clip to `MAX_LABEL_CHARS`, replacing the tail with `...`.
pub fn truncate_label(text: &str) -> String {
    if text.chars().count() <= MAX_LABEL_CHARS {
        return text.to_string();
    }
    let head: String = text.chars().take(MAX_LABEL_CHARS - 3).collect();
    format!("{head}...")
}

/// The text drawn on a wedge: `"<label> <pct>%"`, truncated.
pub fn segment_label(label: &str, weight: f64) -> String {
    truncate_label(&format!("{label} {}%", format_percent(weight)))
}

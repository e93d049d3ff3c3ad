//! Options → angular segments.
//!
//! Segments tile the full circle in option order, starting at angle 0.

use crate::model::{Segment, WheelOption};
use std::f64::consts::TAU;

/// Build one segment per option, each spanning `weight / total * TAU`.
///
/// Returns nothing when there are no options or `total_weight <= 0`.
pub fn build_segments(options: &[WheelOption], total_weight: f64) -> Vec<Segment> {
    if options.is_empty() || total_weight <= 0.0 {
        return Vec::new();
    }

    let mut cursor = 0.0;
    options
        .iter()
        .map(|option| {
            let span = option.weight / total_weight * TAU;
            let segment = Segment {
                label: option.label.clone(),
                weight: option.weight,
                start_angle: cursor,
                end_angle: cursor + span,
            };
            cursor = segment.end_angle;
            segment
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_options;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    #[test]
    fn empty_without_options() {
        assert!(build_segments(&[], 100.0).is_empty());
    }

    #[test]
    fn empty_for_non_positive_total() {
        let options = vec![WheelOption {
            label: "A".into(),
            weight: 10.0,
        }];
        assert!(build_segments(&options, 0.0).is_empty());
        assert!(build_segments(&options, -5.0).is_empty());
    }

    #[test]
    fn two_halves_span_pi_each() {
        let result = parse_options("A 50%\nB 50%");
        let segments = build_segments(&result.options, result.total_weight);
        assert_eq!(segments.len(), 2);
        for seg in &segments {
            assert!((seg.span() - PI).abs() < EPS, "span {}", seg.span());
        }
        assert_eq!(segments[0].start_angle, 0.0);
    }

    #[test]
    fn segments_are_contiguous() {
        let result = parse_options("A 20%\nB 18%\nC 15%\nD 17%\nE 12%\nF 18%");
        let segments = build_segments(&result.options, result.total_weight);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
        let last = segments.last().unwrap();
        assert!((last.end_angle - TAU).abs() < EPS);
    }

    #[test]
    fn spans_scale_with_total_not_100() {
        // Geometry does not care whether the total is valid.
        let result = parse_options("A 30%\nB 10%");
        let segments = build_segments(&result.options, result.total_weight);
        assert!((segments[0].span() - 1.5 * PI).abs() < EPS);
        assert!((segments[1].span() - 0.5 * PI).abs() < EPS);
    }
}

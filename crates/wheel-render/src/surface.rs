//! The drawing-surface abstraction the wheel painter targets.
//!
//! Surfaces work in pixels with the origin at the top-left and y pointing
//! down. Angles are radians measured clockwise from 3 o'clock, the same
//! convention as Canvas2D `arc()`.

use kurbo::{Arc, BezPath, Point, Vec2};
use wheel_core::Color;

/// Horizontal anchoring of a text run relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Canvas2D `textAlign` value.
    pub fn as_canvas(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    /// SVG `text-anchor` value.
    pub fn as_svg_anchor(self) -> &'static str {
        match self {
            Self::Left => "start",
            Self::Center => "middle",
            Self::Right => "end",
        }
    }
}

/// A single line of text, vertically centered on `position` and rotated
/// by `angle` around it.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub position: Point,
    pub angle: f64,
    pub font_px: f64,
    pub font_family: &'static str,
    pub align: TextAlign,
    pub color: Color,
}

impl TextRun {
    /// CSS font shorthand, e.g. `18px "Trebuchet MS", sans-serif`.
    pub fn css_font(&self) -> String {
        format!("{}px {}", self.font_px, self.font_family)
    }
}

/// Everything the wheel painter needs from a backend.
pub trait DrawSurface {
    /// Start a new frame on a square surface of side `size`.
    fn clear(&mut self, size: f64);

    fn fill_disc(&mut self, center: Point, radius: f64, color: Color);

    fn stroke_disc(&mut self, center: Point, radius: f64, width: f64, color: Color);

    /// Pie wedge from `start` to `end` (absolute angles).
    fn fill_wedge(&mut self, center: Point, radius: f64, start: f64, end: f64, color: Color);

    fn stroke_wedge(
        &mut self,
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        width: f64,
        color: Color,
    );

    fn draw_text(&mut self, run: &TextRun);
}

/// Point at `angle` on the circle of `radius` around `center`.
pub fn polar(center: Point, radius: f64, angle: f64) -> Point {
    center + Vec2::from_angle(angle) * radius
}

/// Closed pie-wedge outline: center → arc start → arc → center.
pub fn wedge_path(center: Point, radius: f64, start: f64, end: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(center);
    path.line_to(polar(center, radius, start));
    let arc = Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle: start,
        sweep_angle: end - start,
        x_rotation: 0.0,
    };
    path.extend(arc.append_iter(0.1));
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Shape;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn polar_follows_canvas_convention() {
        let p = polar(Point::new(10.0, 10.0), 5.0, FRAC_PI_2);
        assert!((p.x - 10.0).abs() < 1e-9);
        assert!((p.y - 15.0).abs() < 1e-9, "positive angles turn downward");
    }

    #[test]
    fn half_wedge_covers_half_disc() {
        let path = wedge_path(Point::new(0.0, 0.0), 10.0, 0.0, PI);
        let half_disc = PI * 100.0 / 2.0;
        assert!((path.area().abs() - half_disc).abs() < 1.0);
    }

    #[test]
    fn text_css_font() {
        let run = TextRun {
            text: "A".into(),
            position: Point::ORIGIN,
            angle: 0.0,
            font_px: 18.0,
            font_family: "sans-serif",
            align: TextAlign::Right,
            color: Color::rgb(0, 0, 0),
        };
        assert_eq!(run.css_font(), "18px sans-serif");
        assert_eq!(run.align.as_svg_anchor(), "end");
    }
}

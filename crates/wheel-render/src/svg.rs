//! SVG export: a `DrawSurface` that writes SVG markup.

use crate::surface::{DrawSurface, TextRun, wedge_path};
use kurbo::Point;
use std::fmt::Write as _;
use wheel_core::Color;

#[derive(Debug, Default)]
pub struct SvgSurface {
    size: f64,
    body: String,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The finished document.
    pub fn finish(&self) -> String {
        let size = self.size;
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\n{}</svg>\n",
            self.body
        )
    }
}

/// `fill="#rrggbb"` plus `fill-opacity` when translucent (or `stroke…`).
fn paint_attrs(kind: &str, color: Color) -> String {
    let mut out = format!(
        "{kind}=\"#{:02x}{:02x}{:02x}\"",
        color.r, color.g, color.b
    );
    if color.a != 255 {
        let alpha = (color.a as f64 / 255.0 * 100.0).round() / 100.0;
        let _ = write!(out, " {kind}-opacity=\"{alpha}\"");
    }
    out
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

impl DrawSurface for SvgSurface {
    fn clear(&mut self, size: f64) {
        self.size = size;
        self.body.clear();
    }

    fn fill_disc(&mut self, center: Point, radius: f64, color: Color) {
        let _ = writeln!(
            self.body,
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{radius}\" {}/>",
            center.x,
            center.y,
            paint_attrs("fill", color)
        );
    }

    fn stroke_disc(&mut self, center: Point, radius: f64, width: f64, color: Color) {
        let _ = writeln!(
            self.body,
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{radius}\" fill=\"none\" {} stroke-width=\"{width}\"/>",
            center.x,
            center.y,
            paint_attrs("stroke", color)
        );
    }

    fn fill_wedge(&mut self, center: Point, radius: f64, start: f64, end: f64, color: Color) {
        let d = wedge_path(center, radius, start, end).to_svg();
        let _ = writeln!(self.body, "  <path d=\"{d}\" {}/>", paint_attrs("fill", color));
    }

    fn stroke_wedge(
        &mut self,
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        width: f64,
        color: Color,
    ) {
        let d = wedge_path(center, radius, start, end).to_svg();
        let _ = writeln!(
            self.body,
            "  <path d=\"{d}\" fill=\"none\" {} stroke-width=\"{width}\"/>",
            paint_attrs("stroke", color)
        );
    }

    fn draw_text(&mut self, run: &TextRun) {
        let (x, y) = (run.position.x, run.position.y);
        let degrees = run.angle.to_degrees();
        let _ = writeln!(
            self.body,
            "  <text x=\"{x}\" y=\"{y}\" font-size=\"{}\" font-family=\"{}\" text-anchor=\"{}\" dominant-baseline=\"middle\" {} transform=\"rotate({degrees} {x} {y})\">{}</text>",
            run.font_px,
            escape_xml(run.font_family),
            run.align.as_svg_anchor(),
            paint_attrs("fill", run.color),
            escape_xml(&run.text)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::TextAlign;

    #[test]
    fn translucent_colors_get_opacity() {
        let ink = Color::rgb(27, 26, 22).with_alpha(0.4);
        assert_eq!(
            paint_attrs("stroke", ink),
            "stroke=\"#1b1a16\" stroke-opacity=\"0.4\""
        );
        assert_eq!(paint_attrs("fill", Color::rgb(255, 0, 0)), "fill=\"#ff0000\"");
    }

    #[test]
    fn text_is_escaped() {
        let mut svg = SvgSurface::new();
        svg.clear(100.0);
        svg.draw_text(&TextRun {
            text: "Fish & <Chips> 50%".into(),
            position: Point::new(50.0, 50.0),
            angle: 0.0,
            font_px: 12.0,
            font_family: "\"Trebuchet MS\", sans-serif",
            align: TextAlign::Center,
            color: Color::rgb(0, 0, 0),
        });
        let out = svg.finish();
        assert!(out.contains("Fish &amp; &lt;Chips&gt; 50%"));
        assert!(out.contains("font-family=\"&quot;Trebuchet MS&quot;, sans-serif\""));
        assert!(out.starts_with("<svg "));
    }
}

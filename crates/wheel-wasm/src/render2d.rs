//! Canvas2D backend.
//!
//! Draws the wheel to an HTML `<canvas>` via `CanvasRenderingContext2d`.

use std::f64::consts::TAU;
use wheel_core::Color;
use wheel_render::kurbo::Point;
use wheel_render::{DrawSurface, TextRun};
use web_sys::CanvasRenderingContext2d;

pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn disc_path(&self, center: Point, radius: f64) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
    }

    fn wedge_path(&self, center: Point, radius: f64, start: f64, end: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(center.x, center.y);
        let _ = self.ctx.arc(center.x, center.y, radius, start, end);
        self.ctx.close_path();
    }

    fn fill_with(&self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn stroke_with(&self, width: f64, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }
}

impl DrawSurface for CanvasSurface<'_> {
    fn clear(&mut self, size: f64) {
        self.ctx.clear_rect(0.0, 0.0, size, size);
    }

    fn fill_disc(&mut self, center: Point, radius: f64, color: Color) {
        self.disc_path(center, radius);
        self.fill_with(color);
    }

    fn stroke_disc(&mut self, center: Point, radius: f64, width: f64, color: Color) {
        self.disc_path(center, radius);
        self.stroke_with(width, color);
    }

    fn fill_wedge(&mut self, center: Point, radius: f64, start: f64, end: f64, color: Color) {
        self.wedge_path(center, radius, start, end);
        self.fill_with(color);
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
        self.wedge_path(center, radius, start, end);
        self.stroke_with(width, color);
    }

    fn draw_text(&mut self, run: &TextRun) {
        let ctx = self.ctx;
        ctx.save();
        let _ = ctx.translate(run.position.x, run.position.y);
        let _ = ctx.rotate(run.angle);
        ctx.set_font(&run.css_font());
        ctx.set_text_align(run.align.as_canvas());
        ctx.set_text_baseline("middle");
        ctx.set_fill_style_str(&run.color.to_css());
        let _ = ctx.fill_text(&run.text, 0.0, 0.0);
        ctx.restore();
    }
}

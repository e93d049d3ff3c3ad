//! Vello backend: wheel draw calls → `vello::Scene` paint operations.
//!
//! The caller presents the scene via wgpu. Text is only traced for now;
//! glyph output needs a font context the wheel does not carry yet.

use crate::surface::{DrawSurface, TextRun, wedge_path};
use kurbo::{Affine, Circle, Point, Shape, Stroke};
use peniko::Fill;
use vello::Scene;
use wheel_core::Color;

pub struct VelloSurface<'a> {
    scene: &'a mut Scene,
    /// Shapes emitted since the last `clear`.
    shapes: usize,
}

impl<'a> VelloSurface<'a> {
    pub fn new(scene: &'a mut Scene) -> Self {
        Self { scene, shapes: 0 }
    }

    pub fn shape_count(&self) -> usize {
        self.shapes
    }

    fn fill_shape(&mut self, shape: &impl Shape, color: Color) {
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, to_peniko(color), None, shape);
        self.shapes += 1;
    }

    fn stroke_shape(&mut self, shape: &impl Shape, width: f64, color: Color) {
        self.scene.stroke(
            &Stroke::new(width),
            Affine::IDENTITY,
            to_peniko(color),
            None,
            shape,
        );
        self.shapes += 1;
    }
}

fn to_peniko(c: Color) -> peniko::Color {
    peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

impl DrawSurface for VelloSurface<'_> {
    fn clear(&mut self, _size: f64) {
        self.scene.reset();
        self.shapes = 0;
    }

    fn fill_disc(&mut self, center: Point, radius: f64, color: Color) {
        self.fill_shape(&Circle::new(center, radius), color);
    }

    fn stroke_disc(&mut self, center: Point, radius: f64, width: f64, color: Color) {
        self.stroke_shape(&Circle::new(center, radius), width, color);
    }

    fn fill_wedge(&mut self, center: Point, radius: f64, start: f64, end: f64, color: Color) {
        self.fill_shape(&wedge_path(center, radius, start, end), color);
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
        self.stroke_shape(&wedge_path(center, radius, start, end), width, color);
    }

    fn draw_text(&mut self, run: &TextRun) {
        log::trace!(
            "TEXT {:?} at ({:.1}, {:.1}) angle {:.3}",
            run.text,
            run.position.x,
            run.position.y,
            run.angle
        );
    }
}

//! A surface that records draw calls instead of drawing them.
//!
//! Used by tests and by anything that wants to inspect a frame without a
//! real canvas.

use crate::surface::{DrawSurface, TextRun};
use kurbo::Point;
use wheel_core::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear {
        size: f64,
    },
    FillDisc {
        center: Point,
        radius: f64,
        color: Color,
    },
    StrokeDisc {
        center: Point,
        radius: f64,
        width: f64,
        color: Color,
    },
    FillWedge {
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        color: Color,
    },
    StrokeWedge {
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        width: f64,
        color: Color,
    },
    Text(TextRun),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_wedges(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillWedge { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text(run) => Some(run),
            _ => None,
        })
    }

    pub fn discs(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillDisc { .. }))
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, size: f64) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear { size });
    }

    fn fill_disc(&mut self, center: Point, radius: f64, color: Color) {
        self.calls.push(DrawCall::FillDisc {
            center,
            radius,
            color,
        });
    }

    fn stroke_disc(&mut self, center: Point, radius: f64, width: f64, color: Color) {
        self.calls.push(DrawCall::StrokeDisc {
            center,
            radius,
            width,
            color,
        });
    }

    fn fill_wedge(&mut self, center: Point, radius: f64, start: f64, end: f64, color: Color) {
        self.calls.push(DrawCall::FillWedge {
            center,
            radius,
            start,
            end,
            color,
        });
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
        self.calls.push(DrawCall::StrokeWedge {
            center,
            radius,
            start,
            end,
            width,
            color,
        });
    }

    fn draw_text(&mut self, run: &TextRun) {
        self.calls.push(DrawCall::Text(run.clone()));
    }
}

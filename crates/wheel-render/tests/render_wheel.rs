//! Integration tests: parsed options → segments → recorded draw calls.

use pretty_assertions::assert_eq;
use std::f64::consts::{FRAC_PI_2, PI};
use vello::Scene;
use wheel_core::{Segment, build_segments, parse_options};
use wheel_render::paint::PLACEHOLDER_TEXT;
use wheel_render::{
    DrawCall, RecordingSurface, SvgSurface, TextAlign, VelloSurface, WheelTheme, render_wheel,
};

const EPS: f64 = 1e-9;
const SIZE: f64 = 400.0;

fn segments(text: &str) -> Vec<Segment> {
    let result = parse_options(text);
    build_segments(&result.options, result.total_weight)
}

fn record(segs: &[Segment], rotation: f64) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    render_wheel(&mut surface, segs, rotation, SIZE, &WheelTheme::light());
    surface
}

// ─── Placeholder ────────────────────────────────────────────────────────

#[test]
fn single_option_draws_placeholder() {
    let surface = record(&segments("Only 100%"), 0.0);
    assert_eq!(surface.fill_wedges().count(), 0);

    let texts: Vec<_> = surface.texts().collect();
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0].text, PLACEHOLDER_TEXT);
    assert_eq!(texts[0].align, TextAlign::Center);

    // One disc only: the placeholder, no hub.
    let discs: Vec<_> = surface.discs().collect();
    assert_eq!(discs.len(), 1);
    match discs[0] {
        DrawCall::FillDisc { radius, .. } => assert_eq!(*radius, SIZE / 2.0 - 4.0),
        other => panic!("expected FillDisc, got {other:?}"),
    }
}

#[test]
fn empty_input_draws_placeholder() {
    let surface = record(&[], 1.0);
    assert_eq!(surface.texts().count(), 1);
    assert_eq!(surface.calls[0], DrawCall::Clear { size: SIZE });
}

// ─── Wedges ─────────────────────────────────────────────────────────────

#[test]
fn wedges_start_under_the_pointer() {
    let surface = record(&segments("A 50%\nB 50%"), 0.0);
    let wedges: Vec<_> = surface.fill_wedges().collect();
    assert_eq!(wedges.len(), 2);

    match wedges[0] {
        DrawCall::FillWedge { start, end, .. } => {
            assert!((start + FRAC_PI_2).abs() < EPS);
            assert!((end - FRAC_PI_2).abs() < EPS);
        }
        other => panic!("expected FillWedge, got {other:?}"),
    }
}

#[test]
fn rotation_shifts_every_wedge() {
    let segs = segments("A 25%\nB 25%\nC 50%");
    let still = record(&segs, 0.0);
    let turned = record(&segs, 1.25);

    for (a, b) in still.fill_wedges().zip(turned.fill_wedges()) {
        match (a, b) {
            (DrawCall::FillWedge { start: s0, .. }, DrawCall::FillWedge { start: s1, .. }) => {
                assert!((s1 - s0 - 1.25).abs() < EPS);
            }
            _ => unreachable!(),
        }
    }
}

#[test]
fn palette_cycles_after_eight_segments() {
    let text: String = (1..=10).map(|i| format!("Opt{i} 10%\n")).collect();
    let surface = record(&segments(&text), 0.0);
    let theme = WheelTheme::light();

    let colors: Vec<_> = surface
        .fill_wedges()
        .map(|c| match c {
            DrawCall::FillWedge { color, .. } => *color,
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(colors.len(), 10);
    assert_eq!(colors[8], theme.palette[0]);
    assert_eq!(colors[9], theme.palette[1]);
}

#[test]
fn labels_sit_at_mid_angle_and_are_truncated() {
    let surface = record(&segments("Extraordinarily long name 50%\nB 50%"), 0.0);
    let labels: Vec<_> = surface.texts().collect();
    assert_eq!(labels.len(), 2);

    assert_eq!(labels[0].text, "Extraordinari...");
    assert_eq!(labels[1].text, "B 50%");
    assert_eq!(labels[0].align, TextAlign::Right);

    // First half spans -π/2..π/2 after the offset; its middle is 3 o'clock.
    assert!(labels[0].angle.abs() < EPS);
    assert!((labels[1].angle - PI).abs() < EPS);
    assert!((labels[0].position.x - (200.0 + 200.0 * 0.82)).abs() < 1e-6);
    assert!((labels[0].position.y - 200.0).abs() < 1e-6);
    assert_eq!(labels[0].font_px, 16.0);
}

#[test]
fn hub_is_drawn_last() {
    let surface = record(&segments("A 50%\nB 50%"), 2.0);
    let n = surface.calls.len();
    match (&surface.calls[n - 2], &surface.calls[n - 1]) {
        (DrawCall::FillDisc { radius, .. }, DrawCall::StrokeDisc { .. }) => {
            assert!((radius - 24.0).abs() < EPS);
        }
        other => panic!("expected hub discs, got {other:?}"),
    }
}

#[test]
fn small_surfaces_keep_minimum_font_and_border() {
    let segs = segments("A 50%\nB 50%");
    let mut surface = RecordingSurface::new();
    render_wheel(&mut surface, &segs, 0.0, 100.0, &WheelTheme::light());

    assert!(surface.texts().all(|t| t.font_px == 12.0));
    assert!(surface.calls.iter().any(|c| matches!(
        c,
        DrawCall::StrokeWedge { width, .. } if *width == 1.0
    )));
}

#[test]
fn tiny_surfaces_never_use_a_negative_radius() {
    let segs = segments("A 50%\nB 50%");
    let mut surface = RecordingSurface::new();
    render_wheel(&mut surface, &segs, 0.0, 6.0, &WheelTheme::light());

    assert_eq!(surface.fill_wedges().count(), 2);
    for call in &surface.calls {
        match call {
            DrawCall::FillWedge { radius, .. }
            | DrawCall::StrokeWedge { radius, .. }
            | DrawCall::FillDisc { radius, .. }
            | DrawCall::StrokeDisc { radius, .. } => assert!(*radius >= 0.0, "{call:?}"),
            _ => {}
        }
    }
}

// ─── Other backends ─────────────────────────────────────────────────────

#[test]
fn svg_export_contains_every_wedge() {
    let segs = segments("A 20%\nB 30%\nC 50%");
    let mut svg = SvgSurface::new();
    render_wheel(&mut svg, &segs, 0.0, SIZE, &WheelTheme::light());
    let out = svg.finish();

    assert_eq!(out.matches("<path").count(), 6, "fill + stroke per wedge");
    assert_eq!(out.matches("<text").count(), 3);
    assert!(out.contains("C 50%"));
    assert!(out.contains("width=\"400\""));
}

#[test]
fn vello_scene_receives_shapes() {
    let segs = segments("A 50%\nB 50%");
    let mut scene = Scene::new();
    let mut surface = VelloSurface::new(&mut scene);
    render_wheel(&mut surface, &segs, 0.0, SIZE, &WheelTheme::light());
    // 2 × (fill + stroke) + hub fill + hub stroke
    assert_eq!(surface.shape_count(), 6);
}

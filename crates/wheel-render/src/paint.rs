//! Segments → drawing calls on a `DrawSurface`.
//!
//! The pointer sits at 12 o'clock. Segment angles start at 3 o'clock, so
//! every wedge is turned back a quarter turn before the spin rotation is
//! added.

use crate::surface::{DrawSurface, TextAlign, TextRun, polar};
use crate::theme::WheelTheme;
use kurbo::Point;
use std::f64::consts::FRAC_PI_2;
use wheel_core::{Segment, segment_label};

/// Shown instead of the wheel when there is nothing to spin.
pub const PLACEHOLDER_TEXT: &str = "Add at least two options with %";

/// Gap between the wheel edge and the surface edge.
const RIM_INSET: f64 = 4.0;

/// Side of the square surface for a container `container_width` wide.
pub fn fit_surface(container_width: f64, max_size: f64) -> f64 {
    container_width.min(max_size).max(0.0).floor()
}

/// Paint the wheel for `segments` turned by `rotation` radians.
///
/// Fewer than two segments draw the placeholder disc instead.
pub fn render_wheel(
    surface: &mut dyn DrawSurface,
    segments: &[Segment],
    rotation: f64,
    size: f64,
    theme: &WheelTheme,
) {
    surface.clear(size);

    let radius = size / 2.0;
    let center = Point::new(radius, radius);

    if segments.len() < 2 {
        draw_placeholder(surface, center, radius, theme);
        return;
    }

    let base = rotation - FRAC_PI_2;
    let wheel_radius = (radius - RIM_INSET).max(0.0);
    let border = (radius * 0.01).max(1.0);
    let font_px = (radius * 0.08).max(12.0);

    for (i, segment) in segments.iter().enumerate() {
        let start = base + segment.start_angle;
        let end = base + segment.end_angle;

        surface.fill_wedge(center, wheel_radius, start, end, theme.segment_color(i));
        surface.stroke_wedge(center, wheel_radius, start, end, border, theme.wedge_border);

        let mid = base + segment.mid_angle();
        surface.draw_text(&TextRun {
            text: segment_label(&segment.label, segment.weight),
            position: polar(center, radius * 0.82, mid),
            angle: mid,
            font_px,
            font_family: theme.font_family,
            align: TextAlign::Right,
            color: theme.label,
        });
    }

    log::trace!(
        "painted {} wedges at rotation {:.3} (size {size})",
        segments.len(),
        rotation
    );

    // Hub cap does not rotate with the wheel.
    let hub = radius * 0.12;
    surface.fill_disc(center, hub, theme.hub_fill);
    surface.stroke_disc(center, hub, 2.0, theme.hub_border);
}

fn draw_placeholder(surface: &mut dyn DrawSurface, center: Point, radius: f64, theme: &WheelTheme) {
    let disc = (radius - RIM_INSET).max(0.0);
    surface.fill_disc(center, disc, theme.placeholder_bg);
    surface.stroke_disc(center, disc, 2.0, theme.placeholder_border);

    surface.draw_text(&TextRun {
        text: PLACEHOLDER_TEXT.to_string(),
        position: Point::new(center.x, center.y - 6.0),
        angle: 0.0,
        font_px: (radius * 0.09).max(12.0),
        font_family: theme.font_family,
        align: TextAlign::Center,
        color: theme.placeholder_text,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_is_capped() {
        assert_eq!(fit_surface(800.0, 460.0), 460.0);
        assert_eq!(fit_surface(320.5, 460.0), 320.0);
        assert_eq!(fit_surface(-3.0, 460.0), 0.0);
    }
}

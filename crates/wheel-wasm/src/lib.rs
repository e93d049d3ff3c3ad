//! WASM bridge for the spin wheel: exposes the controller to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page owns the DOM: it
//! forwards textarea edits, button clicks, resizes and
//! `requestAnimationFrame` ticks here, then repaints when told to.

mod render2d;

use rand::SeedableRng;
use rand::rngs::StdRng;
use render2d::CanvasSurface;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wheel_app::{Controller, WheelEvent};
use wheel_core::{Status, WheelConfig, build_segments, parse_options};
use wheel_render::{SvgSurface, WheelTheme};

/// The JS-facing wheel.
///
/// Every mutating method returns `true` when the canvas should be redrawn.
#[wasm_bindgen]
pub struct WheelApp {
    controller: Controller<StdRng>,
    /// Dark mode flag: `false` = light (default), `true` = dark.
    dark_mode: bool,
}

#[wasm_bindgen]
impl WheelApp {
    /// Create a wheel with the default options for a container
    /// `container_width` pixels wide.
    #[wasm_bindgen(constructor)]
    pub fn new(container_width: f64) -> Self {
        Self::from_config(WheelConfig::default(), container_width)
    }

    /// Like `new`, with a (partial) JSON config.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(container_width: f64, config_json: &str) -> Result<WheelApp, JsValue> {
        let config =
            WheelConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_config(config, container_width))
    }

    /// Replace the option text. Ignored mid-spin.
    pub fn set_text(&mut self, text: &str) -> bool {
        self.controller.handle(WheelEvent::text(text))
    }

    pub fn get_text(&self) -> String {
        self.controller.text().to_string()
    }

    /// Start a spin at host time `now_ms` (`performance.now()`).
    pub fn spin(&mut self, now_ms: f64) -> bool {
        self.controller.handle(WheelEvent::SpinRequested { now_ms })
    }

    /// Advance the animation. Keep requesting frames while this returns
    /// `true`.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.controller.handle(WheelEvent::Frame { now_ms })
    }

    pub fn reset(&mut self) -> bool {
        self.controller.handle(WheelEvent::ResetRequested)
    }

    /// Recompute the canvas side for a new container width.
    pub fn resize(&mut self, container_width: f64) -> f64 {
        self.controller.handle(WheelEvent::Resized { container_width });
        self.controller.size()
    }

    pub fn size(&self) -> f64 {
        self.controller.size()
    }

    /// Set the canvas element's pixel size to the current wheel size.
    pub fn apply_size(&self, canvas: &HtmlCanvasElement) {
        let side = self.controller.size() as u32;
        canvas.set_width(side);
        canvas.set_height(side);
    }

    /// Render the wheel to a Canvas2D context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        let mut surface = CanvasSurface::new(ctx);
        self.controller.render(&mut surface, &self.theme());
    }

    /// Set the canvas theme.
    pub fn set_theme(&mut self, is_dark: bool) {
        self.dark_mode = is_dark;
    }

    /// Status line; empty when the wheel can spin.
    pub fn status(&self) -> String {
        self.controller.status_message()
    }

    pub fn result(&self) -> String {
        self.controller.result().to_string()
    }

    /// Changes each time a spin lands; replay the highlight animation then.
    pub fn pulse(&self) -> u32 {
        self.controller.pulse() as u32
    }

    pub fn is_spinning(&self) -> bool {
        self.controller.is_spinning()
    }

    /// `{"text_enabled":…,"reset_enabled":…,"spin_enabled":…}`
    pub fn controls_json(&self) -> String {
        serde_json::to_string(&self.controller.controls()).unwrap_or_else(|_| "{}".to_string())
    }

    /// The wheel as it currently looks, as an SVG document.
    pub fn export_svg(&self) -> String {
        let mut svg = SvgSurface::new();
        self.controller.render(&mut svg, &self.theme());
        svg.finish()
    }
}

impl WheelApp {
    fn from_config(config: WheelConfig, container_width: f64) -> Self {
        console_error_panic_hook_setup();
        Self {
            controller: Controller::new(config, StdRng::from_entropy(), container_width),
            dark_mode: false,
        }
    }

    fn theme(&self) -> WheelTheme {
        if self.dark_mode {
            WheelTheme::dark()
        } else {
            WheelTheme::light()
        }
    }
}

// ─── Panic hook and logging for WASM debugging ───────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// `level` is one of `error`, `warn`, `info`, `debug`, `trace`; anything
/// else means `warn`.
fn log_level(level: &str) -> log::Level {
    level.parse().unwrap_or(log::Level::Warn)
}

/// Route `log` output to the browser console. Fails if a logger is
/// already installed.
#[wasm_bindgen]
pub fn init_logging(level: &str) -> Result<(), JsValue> {
    console_log::init_with_level(log_level(level)).map_err(|e| JsValue::from_str(&e.to_string()))
}

// ─── Standalone functions (no canvas needed) ─────────────────────────────

/// Validate option text.
/// Returns JSON `{"ok":true,"status":""}` or `{"ok":false,"status":"..."}`.
#[wasm_bindgen]
pub fn validate(text: &str) -> String {
    let status = Status::of(&parse_options(text));
    serde_json::json!({
        "ok": status.is_ready(),
        "status": status.message(),
    })
    .to_string()
}

/// Parse option text and return options, invalid lines, and segments as
/// JSON for previews.
#[wasm_bindgen]
pub fn parse_to_json(text: &str) -> String {
    let parsed = parse_options(text);
    let segments = build_segments(&parsed.options, parsed.total_weight);
    let status = Status::of(&parsed);
    let value = serde_json::json!({
        "ok": status.is_ready(),
        "status": status.message(),
        "parsed": parsed,
        "segments": segments,
    });
    value.to_string()
}

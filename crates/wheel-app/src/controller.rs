//! The controller owns all wheel state and turns host events into state
//! changes and redraw requests.
//!
//! - **Idle**: text edits re-parse and re-validate, reset restores the
//!   defaults, spin starts an animation if the options are valid.
//! - **Spinning**: text and reset are locked; frames advance the animation
//!   until it settles, then the landed option becomes the result.
//!
//! Resizes are honoured in either phase.

use crate::input::WheelEvent;
use rand::Rng;
use serde::Serialize;
use wheel_core::spin::{SpinPlan, SpinState};
use wheel_core::{ParseResult, Segment, Status, WheelConfig, build_segments, parse_options};
use wheel_render::{DrawSurface, WheelTheme, fit_surface, render_wheel};

/// Result text before the first spin and after a reset.
pub const RESULT_PLACEHOLDER: &str = "--";

/// Result text while the wheel is turning.
pub const RESULT_SPINNING: &str = "Spinning...";

/// Which UI controls accept input right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub text_enabled: bool,
    pub reset_enabled: bool,
    pub spin_enabled: bool,
}

pub struct Controller<R: Rng> {
    config: WheelConfig,
    rng: R,
    text: String,
    parsed: ParseResult,
    status: Status,
    spin: SpinState,
    size: f64,
    result: String,
    /// Bumped each time a spin settles; hosts replay the highlight on change.
    pulse: u64,
}

impl<R: Rng> Controller<R> {
    /// Start with the configured default options on a surface sized for
    /// `container_width`.
    pub fn new(config: WheelConfig, rng: R, container_width: f64) -> Self {
        let text = config.default_text();
        let parsed = parse_options(&text);
        let status = Status::with_config(&parsed, &config);
        let size = fit_surface(container_width, config.max_size);

        Self {
            config,
            rng,
            text,
            parsed,
            status,
            spin: SpinState::new(),
            size,
            result: RESULT_PLACEHOLDER.to_string(),
            pulse: 0,
        }
    }

    /// Apply one event. Returns `true` if the wheel must be redrawn.
    pub fn handle(&mut self, event: WheelEvent) -> bool {
        if self.spin.is_spinning() && event.is_mutating() {
            log::debug!("ignoring {event:?} while spinning");
            return false;
        }

        match event {
            WheelEvent::TextChanged(text) => {
                self.text = text;
                self.sync_options();
                true
            }
            WheelEvent::SpinRequested { now_ms } => self.start_spin(now_ms),
            WheelEvent::ResetRequested => {
                self.reset();
                true
            }
            WheelEvent::Resized { container_width } => {
                self.size = fit_surface(container_width, self.config.max_size);
                true
            }
            WheelEvent::Frame { now_ms } => self.advance(now_ms),
        }
    }

    // ─── Transitions ─────────────────────────────────────────────────────

    fn sync_options(&mut self) {
        self.parsed = parse_options(&self.text);
        self.status = Status::with_config(&self.parsed, &self.config);
    }

    /// Returns `true` when a redraw is due: either the spin began or it
    /// was refused and the status changed.
    fn start_spin(&mut self, now_ms: f64) -> bool {
        if self.spin.is_spinning() {
            return false;
        }

        self.sync_options();
        if !self.status.is_ready() {
            log::warn!("spin refused: {}", self.status);
            return true;
        }

        let plan = SpinPlan::random(self.spin.current_rotation, &self.config, &mut self.rng);
        self.result = RESULT_SPINNING.to_string();
        self.spin.begin(plan, now_ms)
    }

    fn advance(&mut self, now_ms: f64) -> bool {
        let Some(frame) = self.spin.advance(now_ms) else {
            return false;
        };
        if frame.done {
            self.settle();
        }
        true
    }

    fn settle(&mut self) {
        let segments = self.segments();
        self.result = self
            .spin
            .landed_index(&segments)
            .and_then(|i| self.parsed.options.get(i))
            .map_or_else(|| RESULT_PLACEHOLDER.to_string(), |o| o.label.clone());
        self.pulse += 1;
        log::debug!("landed on {:?}", self.result);
    }

    fn reset(&mut self) {
        self.text = self.config.default_text();
        self.spin.reset();
        self.sync_options();
        self.result = RESULT_PLACEHOLDER.to_string();
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    /// Segments for the current options; rebuilt on every call.
    pub fn segments(&self) -> Vec<Segment> {
        build_segments(&self.parsed.options, self.parsed.total_weight)
    }

    /// Draw the wheel at the current rotation.
    pub fn render(&self, surface: &mut dyn DrawSurface, theme: &WheelTheme) {
        render_wheel(
            surface,
            &self.segments(),
            self.spin.current_rotation,
            self.size,
            theme,
        );
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn controls(&self) -> Controls {
        let spinning = self.spin.is_spinning();
        Controls {
            text_enabled: !spinning,
            reset_enabled: !spinning,
            spin_enabled: !spinning && self.status.is_ready(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parsed(&self) -> &ParseResult {
        &self.parsed
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Status line for the UI; empty when ready.
    pub fn status_message(&self) -> String {
        self.status.message()
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn pulse(&self) -> u64 {
        self.pulse
    }

    pub fn rotation(&self) -> f64 {
        self.spin.current_rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_spinning()
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Option index under the pointer at the current rotation.
    pub fn current_index(&self) -> Option<usize> {
        self.spin.landed_index(&self.segments())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn controller() -> Controller<StdRng> {
        Controller::new(WheelConfig::default(), StdRng::seed_from_u64(3), 500.0)
    }

    #[test]
    fn starts_ready_with_defaults() {
        let c = controller();
        assert_eq!(c.parsed().options.len(), 6);
        assert_eq!(c.status_message(), "");
        assert_eq!(c.result(), RESULT_PLACEHOLDER);
        assert_eq!(c.size(), 460.0);
        assert!(c.controls().spin_enabled);
    }

    #[test]
    fn frames_while_idle_do_nothing() {
        let mut c = controller();
        assert!(!c.handle(WheelEvent::Frame { now_ms: 10.0 }));
    }

    #[test]
    fn refused_spin_still_redraws() {
        let mut c = controller();
        c.handle(WheelEvent::text("A 60%\nB 30%"));
        assert!(c.handle(WheelEvent::SpinRequested { now_ms: 0.0 }));
        assert!(!c.is_spinning());
        assert_eq!(c.status_message(), "Total must be 100%. Current total: 90%.");
        assert_eq!(c.result(), RESULT_PLACEHOLDER);
    }
}

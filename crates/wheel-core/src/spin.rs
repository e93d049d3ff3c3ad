//! Spin engine: random target selection, cubic ease-out, landing lookup.
//!
//! The animation is a pure function of elapsed time. Whatever drives the
//! frames (`requestAnimationFrame`, a timer, a test feeding synthetic
//! timestamps) calls `SpinState::advance` with the current time.
//!
//! ```text
//! Idle ──begin──▶ Spinning ──advance (progress = 1)──▶ Idle
//! ```

use crate::config::WheelConfig;
use crate::model::Segment;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// `1 - (1 - p)^3`.
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Linear progress through a spin, clamped to `[0, 1]`.
pub fn progress_at(duration_ms: f64, elapsed_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Wheel rotation `elapsed_ms` into a spin from `start` to `target`.
pub fn rotation_at(start: f64, target: f64, duration_ms: f64, elapsed_ms: f64) -> f64 {
    let eased = ease_out_cubic(progress_at(duration_ms, elapsed_ms));
    start + (target - start) * eased
}

/// Index of the segment under the fixed top pointer.
///
/// The wheel turns under a fixed pointer, so the pointer sits at
/// `-rotation` in the wheel's own frame. Falls back to the last segment
/// when rounding leaves the angle just past the final edge.
pub fn current_index(rotation: f64, segments: &[Segment]) -> Option<usize> {
    if segments.is_empty() {
        return None;
    }
    let normalized = (TAU - rotation.rem_euclid(TAU)) % TAU;
    segments
        .iter()
        .position(|seg| seg.contains(normalized))
        .or(Some(segments.len() - 1))
}

// ─── Spin plan ───────────────────────────────────────────────────────────

/// Where a spin starts, where it ends, and how long it takes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinPlan {
    pub start_rotation: f64,
    pub target_rotation: f64,
    pub duration_ms: f64,
}

impl SpinPlan {
    /// Plan a forward spin of several full turns plus a random offset.
    ///
    /// With the default config: 4–7 extra turns, an offset in `[0, TAU)`,
    /// and a duration in `[3200, 3800)` ms.
    pub fn random<R: Rng + ?Sized>(current: f64, config: &WheelConfig, rng: &mut R) -> Self {
        let extra_turns = config.min_extra_turns + rng.r#gen::<f64>() * config.extra_turn_range;
        let offset = rng.r#gen::<f64>() * TAU;
        let duration_ms = config.min_duration_ms + rng.r#gen::<f64>() * config.duration_range_ms;

        Self {
            start_rotation: current,
            target_rotation: current + extra_turns * TAU + offset,
            duration_ms,
        }
    }

    pub fn rotation_at(&self, elapsed_ms: f64) -> f64 {
        rotation_at(
            self.start_rotation,
            self.target_rotation,
            self.duration_ms,
            elapsed_ms,
        )
    }
}

/// A spin in flight, anchored to the host clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinAnimation {
    pub plan: SpinPlan,
    pub started_at_ms: f64,
}

/// One sampled animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub rotation: f64,
    pub progress: f64,
    pub done: bool,
}

impl SpinAnimation {
    pub fn sample(&self, now_ms: f64) -> Frame {
        let elapsed = now_ms - self.started_at_ms;
        let progress = progress_at(self.plan.duration_ms, elapsed);
        Frame {
            rotation: self.plan.rotation_at(elapsed),
            progress,
            done: progress >= 1.0,
        }
    }
}

// ─── Spin state ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum SpinPhase {
    #[default]
    Idle,
    Spinning(SpinAnimation),
}

/// Rotation and phase of the wheel.
///
/// `current_rotation` only grows across spins and survives redraws; only
/// `reset` puts it back to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpinState {
    pub current_rotation: f64,
    pub phase: SpinPhase,
}

impl SpinState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning(_))
    }

    /// Start animating along `plan`. Returns `false` if a spin is already
    /// running; there is no way to interrupt one.
    pub fn begin(&mut self, plan: SpinPlan, now_ms: f64) -> bool {
        if self.is_spinning() {
            return false;
        }
        log::debug!(
            "spin: {:.3} -> {:.3} rad over {:.0} ms",
            plan.start_rotation,
            plan.target_rotation,
            plan.duration_ms
        );
        self.phase = SpinPhase::Spinning(SpinAnimation {
            plan,
            started_at_ms: now_ms,
        });
        true
    }

    /// Move the animation to `now_ms`. Returns `None` while idle.
    ///
    /// The frame with `done == true` leaves the state idle.
    pub fn advance(&mut self, now_ms: f64) -> Option<Frame> {
        let SpinPhase::Spinning(animation) = self.phase else {
            return None;
        };
        let frame = animation.sample(now_ms);
        self.current_rotation = frame.rotation;
        if frame.done {
            log::debug!("spin settled at {:.3} rad", frame.rotation);
            self.phase = SpinPhase::Idle;
        }
        Some(frame)
    }

    /// Zero the rotation. Ignored mid-spin.
    pub fn reset(&mut self) -> bool {
        if self.is_spinning() {
            return false;
        }
        self.current_rotation = 0.0;
        true
    }

    pub fn landed_index(&self, segments: &[Segment]) -> Option<usize> {
        current_index(self.current_rotation, segments)
    }
}

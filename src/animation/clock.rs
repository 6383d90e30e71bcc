//! Wall-clock driven playback across a keyframe sequence.
//!
//! The clock maps elapsed time to a segment (pair of consecutive keyframes) and an eased
//! local progress. Progress comes from time deltas, not frame counts, so a stalled render
//! loop catches up on its next call.

use std::{cell::Cell, time::Instant};

use crate::{
    animation::ease::{EaseFn, EasingRegistry},
    config::{DEFAULT_DURATION_MS, TweenConfig},
    model::{drawing::Drawing, stroke::Stroke},
    tween::drawing::tween_drawings,
};

/// Monotonic millisecond time source.
pub trait TimeSource {
    /// Current time in milliseconds. Only differences are meaningful.
    fn now_ms(&self) -> f64;
}

#[derive(Clone, Copy, Debug)]
/// Real time, measured from construction.
pub struct MonotonicTime {
    origin: Instant,
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicTime {
    /// Start measuring now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl TimeSource for MonotonicTime {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

#[derive(Debug, Default)]
/// Hand-driven time, for tests and offline frame stepping.
pub struct ManualTime {
    now: Cell<f64>,
}

impl ManualTime {
    /// Time source reading `start_ms`.
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    /// Jump to `ms`.
    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    /// Move forward by `delta_ms`.
    pub fn advance(&self, delta_ms: f64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl TimeSource for ManualTime {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Playback state.
pub enum ClockState {
    /// Never started, or stopped.
    #[default]
    Idle,
    /// Playing; `advance` renders frames.
    Running,
    /// Reached the last keyframe. Behaves like `Idle` for the next `start`.
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// What the caller was told to draw for one frame.
pub enum RenderInstruction {
    /// Nothing to draw: the clock is not running or there are fewer than two keyframes.
    Nothing,
    /// Draw keyframe `index` as stored; playback is over.
    Final {
        /// Keyframe index (always the last one).
        index: usize,
    },
    /// Draw keyframe `segment` tweened toward `segment + 1` at `local_t`.
    Tween {
        /// Index of the segment's first keyframe.
        segment: usize,
        /// Eased progress within the segment, in `[0, 1]`.
        local_t: f64,
    },
}

#[derive(Clone, Debug, Default)]
/// Playback clock for one animation.
///
/// Owned by a single controller and passed by `&mut` to the render loop; independent
/// clocks never share state.
pub struct AnimationClock {
    state: ClockState,
    start_ms: f64,
    duration_ms: f64,
}

impl AnimationClock {
    /// Idle clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> ClockState {
        self.state
    }

    /// Whether frames are being produced.
    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    /// Active duration in milliseconds (0 before the first start).
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Begin playback at `now_ms`, superseding any animation in flight.
    ///
    /// Non-positive or non-finite durations fall back to 10 seconds.
    pub fn start(&mut self, duration_ms: f64, now_ms: f64) {
        let duration_ms = if duration_ms.is_finite() && duration_ms > 0.0 {
            duration_ms
        } else {
            tracing::warn!(duration_ms, fallback = DEFAULT_DURATION_MS, "bad duration");
            DEFAULT_DURATION_MS
        };
        self.start_ms = now_ms;
        self.duration_ms = duration_ms;
        self.state = ClockState::Running;
        tracing::debug!(duration_ms, "animation started");
    }

    /// Cancel playback. Nothing needs cleaning up; per-frame data is never kept.
    pub fn stop(&mut self) {
        self.state = ClockState::Idle;
    }

    /// Global progress at `now_ms`; may exceed 1.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 0.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).max(0.0)
    }

    /// Split global progress over `keyframe_count` keyframes into a render instruction.
    ///
    /// Pure; does not touch clock state.
    pub fn segment(keyframe_count: usize, ease: EaseFn, t_global: f64) -> RenderInstruction {
        if keyframe_count < 2 {
            return RenderInstruction::Nothing;
        }
        if t_global >= 1.0 {
            return RenderInstruction::Final {
                index: keyframe_count - 1,
            };
        }

        let segments = keyframe_count - 1;
        let seg_t = t_global.max(0.0) * segments as f64;
        let segment = (seg_t.floor() as usize).min(segments - 1);
        let raw = (seg_t - segment as f64).clamp(0.0, 1.0);
        // Clamp again: custom curves may overshoot at the boundaries.
        let local_t = ease(raw).clamp(0.0, 1.0);
        RenderInstruction::Tween { segment, local_t }
    }

    /// Produce one frame.
    ///
    /// Calls `render` with either the tweened strokes or the last keyframe's strokes
    /// verbatim, and returns the instruction it acted on. Once progress reaches 1 the
    /// clock becomes [`ClockState::Complete`]. Does nothing unless running with at least
    /// two keyframes.
    #[tracing::instrument(level = "trace", skip(self, keyframes, easings, cfg, render))]
    pub fn advance<F>(
        &mut self,
        keyframes: &[Drawing],
        easing: &str,
        easings: &EasingRegistry,
        cfg: &TweenConfig,
        now_ms: f64,
        render: F,
    ) -> RenderInstruction
    where
        F: FnOnce(&[Stroke]),
    {
        if !self.is_running() || keyframes.len() < 2 {
            return RenderInstruction::Nothing;
        }

        let instruction = Self::segment(
            keyframes.len(),
            easings.resolve(easing),
            self.progress(now_ms),
        );
        match instruction {
            RenderInstruction::Nothing => {}
            RenderInstruction::Final { index } => {
                render(&keyframes[index].strokes);
                self.state = ClockState::Complete;
                tracing::debug!(index, "animation complete");
            }
            RenderInstruction::Tween { segment, local_t } => {
                tracing::trace!(segment, local_t, "tween frame");
                let strokes =
                    tween_drawings(&keyframes[segment], &keyframes[segment + 1], local_t, cfg);
                render(&strokes);
            }
        }
        instruction
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;

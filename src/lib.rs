//! inkbetween is a keyframe tweening engine for freehand vector drawings.
//!
//! Given two drawings made of arbitrary polyline strokes, it produces a stable in-between
//! drawing for any progress `t`, even when the two keyframes hold different numbers of
//! strokes.
//!
//! # Pipeline overview
//!
//! 1. **Segment**: `AnimationClock + elapsed time -> (segment, eased local t)`
//! 2. **Match**: greedy nearest-cost stroke correspondence between the two keyframes
//! 3. **Tween**: arc-length resample each pair to a shared point count and lerp; strokes
//!    without a partner fade against a ghost collapsed on their centroid
//! 4. **Render**: the caller draws the flat stroke list (see [`SvgRenderer`] for a demo)
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No IO in the core**: geometry, matching, tweening and the clock are pure.
//! - **Frame-local state**: matches and ghosts are recomputed every frame and never cached.
//! - **Explicit clocks**: playback state lives in an owned [`AnimationClock`], no statics.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod model;
mod render;
mod tween;

/// Engine configuration (matching weights, sample counts, playback defaults).
pub mod config;

pub use animation::clock::{
    AnimationClock, ClockState, ManualTime, MonotonicTime, RenderInstruction, TimeSource,
};
pub use animation::ease::{Ease, EaseFn, EasingRegistry};
pub use animation::player::Player;
pub use config::{Config, DEFAULT_DURATION_MS, DEFAULT_EASING, PlaybackConfig, TweenConfig};
pub use foundation::core::{BezPath, Hsva, Lerp, Point, Vec2};
pub use foundation::error::{InkbetweenError, InkbetweenResult};
pub use foundation::geometry::{centroid, polyline_length, resample};
pub use model::drawing::{Drawing, KeyframeSequence};
pub use model::stroke::{
    DEFAULT_OPACITY, DEFAULT_THICKNESS, RawColor, RawStroke, Stroke, resolve_alpha,
};
pub use render::svg::{SvgRenderer, stroke_path};
pub use tween::drawing::tween_drawings;
pub use tween::ghost::ghost_from;
pub use tween::matcher::{MatchResult, match_cost, match_strokes};
pub use tween::stroke::tween_strokes;

use crate::{
    animation::{
        clock::{AnimationClock, MonotonicTime, RenderInstruction, TimeSource},
        ease::EasingRegistry,
    },
    config::{Config, PlaybackConfig, TweenConfig},
    foundation::error::{InkbetweenError, InkbetweenResult},
    model::{
        drawing::{Drawing, KeyframeSequence},
        stroke::Stroke,
    },
};

/// Keyframe store plus playback controller.
///
/// Owns the keyframe sequence and the clock. The sequence is read-only while an animation
/// runs: storing, removing or clearing keyframes is rejected until playback stops or
/// completes.
pub struct Player<T: TimeSource = MonotonicTime> {
    keyframes: KeyframeSequence,
    clock: AnimationClock,
    easings: EasingRegistry,
    tween: TweenConfig,
    playback: PlaybackConfig,
    time: T,
}

impl Player<MonotonicTime> {
    /// Player on real time with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            keyframes: KeyframeSequence::default(),
            clock: AnimationClock::new(),
            easings: EasingRegistry::builtin(),
            tween: TweenConfig::default(),
            playback: PlaybackConfig::default(),
            time: MonotonicTime::new(),
        }
    }
}

impl<T: TimeSource> Player<T> {
    /// Player with a validated configuration and the given time source.
    pub fn new(config: Config, time: T) -> InkbetweenResult<Self> {
        config.validate()?;
        Ok(Self {
            keyframes: KeyframeSequence::default(),
            clock: AnimationClock::new(),
            easings: EasingRegistry::builtin(),
            tween: config.tween,
            playback: config.playback,
            time,
        })
    }

    /// Stored keyframes.
    pub fn keyframes(&self) -> &KeyframeSequence {
        &self.keyframes
    }

    /// The time source.
    pub fn time(&self) -> &T {
        &self.time
    }

    /// The playback clock.
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Easing registry, for adding custom curves.
    pub fn easings_mut(&mut self) -> &mut EasingRegistry {
        &mut self.easings
    }

    /// Tweening parameters.
    pub fn tween_config(&self) -> &TweenConfig {
        &self.tween
    }

    /// Playback parameters.
    pub fn playback_config(&self) -> &PlaybackConfig {
        &self.playback
    }

    /// Whether an animation is playing.
    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Select the easing curve by name. Unknown names fall back at playback time.
    pub fn set_easing(&mut self, name: impl Into<String>) {
        self.playback.easing = name.into();
    }

    /// Change the total playback duration used by the next [`Player::play`].
    pub fn set_duration_ms(&mut self, duration_ms: f64) {
        self.playback.duration_ms = duration_ms;
    }

    fn ensure_idle(&self, action: &str) -> InkbetweenResult<()> {
        if self.clock.is_running() {
            return Err(InkbetweenError::playback(format!(
                "cannot {action} while an animation is running"
            )));
        }
        Ok(())
    }

    /// Append a keyframe and return its index.
    #[tracing::instrument(skip(self, drawing), fields(strokes = drawing.len()))]
    pub fn store(&mut self, drawing: Drawing) -> InkbetweenResult<usize> {
        self.ensure_idle("store a keyframe")?;
        if self.keyframes.len() >= self.playback.capacity {
            return Err(InkbetweenError::playback(format!(
                "keyframe capacity reached ({})",
                self.playback.capacity
            )));
        }
        self.keyframes.push(drawing);
        Ok(self.keyframes.len() - 1)
    }

    /// Snapshot live canvas strokes as a new keyframe.
    pub fn capture(&mut self, live: &[Stroke]) -> InkbetweenResult<usize> {
        self.store(Drawing::snapshot(live))
    }

    /// Remove the keyframe at `index`.
    #[tracing::instrument(skip(self))]
    pub fn remove(&mut self, index: usize) -> InkbetweenResult<Drawing> {
        self.ensure_idle("remove a keyframe")?;
        self.keyframes.remove(index)
    }

    /// Remove every keyframe.
    pub fn clear(&mut self) -> InkbetweenResult<()> {
        self.ensure_idle("clear keyframes")?;
        self.keyframes.clear();
        Ok(())
    }

    /// Start (or restart) playback from the current time.
    #[tracing::instrument(skip(self), fields(keyframes = self.keyframes.len()))]
    pub fn play(&mut self) -> InkbetweenResult<()> {
        if !self.keyframes.can_animate() {
            return Err(InkbetweenError::animation(
                "at least two keyframes are required to animate",
            ));
        }
        let now = self.time.now_ms();
        self.clock.start(self.playback.duration_ms, now);
        Ok(())
    }

    /// Cancel playback.
    pub fn stop(&mut self) {
        self.clock.stop();
    }

    /// Render the frame for the current time. See [`AnimationClock::advance`].
    pub fn frame<F>(&mut self, render: F) -> RenderInstruction
    where
        F: FnOnce(&[Stroke]),
    {
        let now = self.time.now_ms();
        self.clock.advance(
            self.keyframes.as_slice(),
            &self.playback.easing,
            &self.easings,
            &self.tween,
            now,
            render,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/player.rs"]
mod tests;

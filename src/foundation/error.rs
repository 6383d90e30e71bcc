/// Convenience result type used across inkbetween.
pub type InkbetweenResult<T> = Result<T, InkbetweenError>;

/// Top-level error taxonomy for the outer layers of the engine.
///
/// Geometry and tweening never fail; errors only come from ingestion, configuration,
/// serialization and playback-controller misuse.
#[derive(thiserror::Error, Debug)]
pub enum InkbetweenError {
    /// Invalid user-provided stroke, drawing or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while setting up or sampling an animation.
    #[error("animation error: {0}")]
    Animation(String),

    /// Keyframe store operations rejected by the playback controller.
    #[error("playback error: {0}")]
    Playback(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InkbetweenError {
    /// Build an [`InkbetweenError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`InkbetweenError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build an [`InkbetweenError::Playback`] value.
    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }

    /// Build an [`InkbetweenError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for InkbetweenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

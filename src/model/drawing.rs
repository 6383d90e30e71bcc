use crate::{
    foundation::error::{InkbetweenError, InkbetweenResult},
    model::stroke::Stroke,
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A complete drawing: the unit stored as a keyframe.
pub struct Drawing {
    /// Strokes in painter's order.
    #[serde(default)]
    pub strokes: Vec<Stroke>,
}

impl Drawing {
    /// Wrap a stroke list.
    pub fn new(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }

    /// Clone live canvas strokes into a detached keyframe.
    pub fn snapshot(live: &[Stroke]) -> Self {
        Self {
            strokes: live.to_vec(),
        }
    }

    /// Number of strokes, erasers included.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Whether the drawing holds no strokes.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Strokes that take part in tweening (everything except erasers).
    pub fn drawable(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter().filter(|s| !s.eraser)
    }

    /// Drawable strokes with enough points to be drawn.
    pub fn renderable(&self) -> impl Iterator<Item = &Stroke> {
        self.drawable().filter(|s| s.is_renderable())
    }

    /// Parse a drawing from JSON (`{"strokes": [...]}`).
    pub fn from_json_str(s: &str) -> InkbetweenResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Ordered keyframe drawings.
///
/// Holds any number of drawings; the capacity limit lives in the playback controller.
pub struct KeyframeSequence {
    /// Keyframes in playback order.
    #[serde(default)]
    pub keyframes: Vec<Drawing>,
}

impl KeyframeSequence {
    /// Build a sequence from drawings.
    pub fn new(keyframes: Vec<Drawing>) -> Self {
        Self { keyframes }
    }

    /// Number of keyframes.
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Playback needs at least two keyframes.
    pub fn can_animate(&self) -> bool {
        self.keyframes.len() >= 2
    }

    /// Keyframes as a slice.
    pub fn as_slice(&self) -> &[Drawing] {
        &self.keyframes
    }

    /// Keyframe at `index`.
    pub fn get(&self, index: usize) -> Option<&Drawing> {
        self.keyframes.get(index)
    }

    /// Append a keyframe.
    pub fn push(&mut self, drawing: Drawing) {
        self.keyframes.push(drawing);
    }

    /// Remove and return the keyframe at `index`.
    pub fn remove(&mut self, index: usize) -> InkbetweenResult<Drawing> {
        if index >= self.keyframes.len() {
            return Err(InkbetweenError::validation(format!(
                "keyframe index {index} out of range (len {})",
                self.keyframes.len()
            )));
        }
        Ok(self.keyframes.remove(index))
    }

    /// Drop every keyframe.
    pub fn clear(&mut self) {
        self.keyframes.clear();
    }

    /// Parse a sequence from JSON (`{"keyframes": [...]}`).
    pub fn from_json_str(s: &str) -> InkbetweenResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Pretty JSON for storage.
    pub fn to_json_string(&self) -> InkbetweenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/drawing.rs"]
mod tests;

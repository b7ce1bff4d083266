// Event label normalization

use crate::model::Phase;

/// Maps a platform event label onto the canonical phase vocabulary.
/// Labels outside the known set are not actionable and yield `None`.
pub fn normalize_event(label: &str) -> Option<Phase> {
    match label {
        "touchstart" | "mousedown" | "pointerdown" => Some(Phase::Start),
        "touchmove" | "mousemove" | "pointermove" => Some(Phase::Move),
        "touchend" | "mouseup" | "pointerup" => Some(Phase::End),
        "touchcancel" | "pointercancel" => Some(Phase::Cancel),
        _ => None,
    }
}

use riposte_gesture::{Gesture, Handedness};

/// Observable pipeline events for display sinks.
///
/// `Frame` fires once per detected hand per frame; `Confirmed` when a
/// gesture survives the stability gate; `Dispatched` after a counter-move
/// was handed to the actuator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Frame {
        handedness: Handedness,
        gesture: Gesture,
        confidence: f32,
        /// The detector's own confidence for the hand itself.
        hand_confidence: f32,
    },
    Confirmed {
        gesture: Gesture,
        confidence: f32,
    },
    Dispatched {
        detected: Gesture,
        played: Gesture,
    },
}

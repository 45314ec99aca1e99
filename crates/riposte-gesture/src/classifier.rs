use crate::fingers::FingerState;
use crate::hand::Hand;
use std::fmt;

/// Discrete gesture categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    Unrecognized,
}

impl Gesture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::Rock => "rock",
            Gesture::Paper => "paper",
            Gesture::Scissors => "scissors",
            Gesture::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One per-frame classification result. Transient: recomputed every frame,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureObservation {
    pub gesture: Gesture,
    pub confidence: f32,
}

/// Classify a finger state into a gesture with a fixed confidence.
///
/// The rules run in priority order and the first match wins:
///
///   1. all five fingers closed        → rock (0.90)
///   2. at least four fingers open     → paper (0.85)
///   3. index and middle open, ring and pinky closed, thumb unconstrained
///                                     → scissors (0.80)
///   4. anything else                  → unrecognized (0.50)
///
/// The order matters: scissors does not constrain the thumb, so the paper
/// check must run first or an open thumb with index+middle open would be
/// ambiguous. Confidence values are fixed per category, not derived from
/// geometric margin.
pub fn classify(fingers: &FingerState) -> GestureObservation {
    if fingers.all_closed() {
        return GestureObservation {
            gesture: Gesture::Rock,
            confidence: 0.90,
        };
    }

    if fingers.open_count() >= 4 {
        return GestureObservation {
            gesture: Gesture::Paper,
            confidence: 0.85,
        };
    }

    if fingers.index && fingers.middle && !fingers.ring && !fingers.pinky {
        return GestureObservation {
            gesture: Gesture::Scissors,
            confidence: 0.80,
        };
    }

    GestureObservation {
        gesture: Gesture::Unrecognized,
        confidence: 0.50,
    }
}

/// Classify a hand directly from its landmarks.
pub fn classify_hand(hand: &Hand) -> GestureObservation {
    classify(&FingerState::of(hand))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingers::tests::synthetic_hand;

    fn observe(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> GestureObservation {
        classify_hand(&synthetic_hand(thumb, index, middle, ring, pinky))
    }

    #[test]
    fn test_all_closed_is_rock() {
        let obs = observe(false, false, false, false, false);
        assert_eq!(obs.gesture, Gesture::Rock);
        assert!((obs.confidence - 0.90).abs() < 1e-6);
    }

    #[test]
    fn test_all_open_is_paper() {
        let obs = observe(true, true, true, true, true);
        assert_eq!(obs.gesture, Gesture::Paper);
        assert!((obs.confidence - 0.85).abs() < 1e-6);
    }

    #[test]
    fn test_four_open_is_paper_regardless_of_thumb() {
        // Thumb closed, four fingers open.
        let obs = observe(false, true, true, true, true);
        assert_eq!(obs.gesture, Gesture::Paper);
    }

    #[test]
    fn test_index_middle_open_is_scissors() {
        let obs = observe(false, true, true, false, false);
        assert_eq!(obs.gesture, Gesture::Scissors);
        assert!((obs.confidence - 0.80).abs() < 1e-6);
    }

    #[test]
    fn test_scissors_with_open_thumb_stays_scissors() {
        // Three fingers open in total: not enough for paper, so the
        // thumb-unconstrained scissors rule must catch it.
        let obs = observe(true, true, true, false, false);
        assert_eq!(obs.gesture, Gesture::Scissors);
    }

    #[test]
    fn test_single_finger_is_unrecognized() {
        let obs = observe(false, true, false, false, false);
        assert_eq!(obs.gesture, Gesture::Unrecognized);
        assert!((obs.confidence - 0.50).abs() < 1e-6);
    }

    #[test]
    fn test_ring_pinky_open_is_unrecognized() {
        let obs = observe(false, false, false, true, true);
        assert_eq!(obs.gesture, Gesture::Unrecognized);
    }

    #[test]
    fn test_three_open_without_index_middle_pair_is_unrecognized() {
        let obs = observe(true, true, false, true, false);
        assert_eq!(obs.gesture, Gesture::Unrecognized);
    }
}

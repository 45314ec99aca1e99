use crate::hand::{Hand, HandLandmark};

/// The five fingers, thumb to pinky.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Tip landmark for this finger.
    pub fn tip(self) -> HandLandmark {
        match self {
            Finger::Thumb => HandLandmark::ThumbTip,
            Finger::Index => HandLandmark::IndexTip,
            Finger::Middle => HandLandmark::MiddleTip,
            Finger::Ring => HandLandmark::RingTip,
            Finger::Pinky => HandLandmark::PinkyTip,
        }
    }

    /// Joint the tip is compared against: the IP joint for the thumb, the
    /// PIP joint for the other fingers.
    pub fn joint(self) -> HandLandmark {
        match self {
            Finger::Thumb => HandLandmark::ThumbIp,
            Finger::Index => HandLandmark::IndexPip,
            Finger::Middle => HandLandmark::MiddlePip,
            Finger::Ring => HandLandmark::RingPip,
            Finger::Pinky => HandLandmark::PinkyPip,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }
}

/// Open/closed state of all five fingers for one hand in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerState {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerState {
    /// Evaluate the per-finger extension predicates over a hand.
    ///
    /// The thumb is open iff its tip sits left of its IP joint in image
    /// space (tip.x < joint.x). This lateral heuristic only holds for one
    /// canonical hand orientation and is not rotation-invariant.
    ///
    /// Each other finger is open iff its tip sits above its PIP joint in
    /// image space (tip.y < joint.y, y grows downward).
    pub fn of(hand: &Hand) -> Self {
        Self {
            thumb: is_thumb_open(hand),
            index: is_finger_open(hand, Finger::Index),
            middle: is_finger_open(hand, Finger::Middle),
            ring: is_finger_open(hand, Finger::Ring),
            pinky: is_finger_open(hand, Finger::Pinky),
        }
    }

    /// Number of open fingers, thumb included.
    pub fn open_count(&self) -> usize {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
            .iter()
            .filter(|&&open| open)
            .count()
    }

    pub fn all_closed(&self) -> bool {
        self.open_count() == 0
    }
}

fn is_thumb_open(hand: &Hand) -> bool {
    let tip = hand.landmark(Finger::Thumb.tip());
    let ip = hand.landmark(Finger::Thumb.joint());
    tip.x < ip.x
}

fn is_finger_open(hand: &Hand, finger: Finger) -> bool {
    let tip = hand.landmark(finger.tip());
    let pip = hand.landmark(finger.joint());
    tip.y < pip.y
}

use crate::fingers::Finger;
use crate::GestureError;

/// Number of landmarks the detector produces per hand
pub const HAND_LANDMARK_COUNT: usize = 21;

/// A single tracked landmark in normalized image coordinates.
///
/// x and y are conceptually in [0, 1] (image space, y grows downward);
/// z is relative depth. Produced fresh each detection frame, no
/// cross-frame identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Which hand the detector believes it is tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Handedness::Left => "left",
            Handedness::Right => "right",
        }
    }
}

/// Landmark indices for the 21-point hand topology (MediaPipe Hands layout)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandLandmark {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl From<HandLandmark> for usize {
    fn from(index: HandLandmark) -> usize {
        index as usize
    }
}

impl TryFrom<usize> for HandLandmark {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(HandLandmark::Wrist),
            1 => Ok(HandLandmark::ThumbCmc),
            2 => Ok(HandLandmark::ThumbMcp),
            3 => Ok(HandLandmark::ThumbIp),
            4 => Ok(HandLandmark::ThumbTip),
            5 => Ok(HandLandmark::IndexMcp),
            6 => Ok(HandLandmark::IndexPip),
            7 => Ok(HandLandmark::IndexDip),
            8 => Ok(HandLandmark::IndexTip),
            9 => Ok(HandLandmark::MiddleMcp),
            10 => Ok(HandLandmark::MiddlePip),
            11 => Ok(HandLandmark::MiddleDip),
            12 => Ok(HandLandmark::MiddleTip),
            13 => Ok(HandLandmark::RingMcp),
            14 => Ok(HandLandmark::RingPip),
            15 => Ok(HandLandmark::RingDip),
            16 => Ok(HandLandmark::RingTip),
            17 => Ok(HandLandmark::PinkyMcp),
            18 => Ok(HandLandmark::PinkyPip),
            19 => Ok(HandLandmark::PinkyDip),
            20 => Ok(HandLandmark::PinkyTip),
            _ => Err(format!(
                "Invalid hand landmark index: {}. Must be in range 0-20.",
                value
            )),
        }
    }
}

/// One detected hand for one frame: 21 landmarks, handedness, and the
/// detector's confidence score in [0, 1]. Discarded after the frame is
/// processed.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    landmarks: [Landmark; HAND_LANDMARK_COUNT],
    handedness: Handedness,
    confidence: f32,
}

impl Hand {
    /// Build a hand from a detector landmark sequence.
    ///
    /// Rejects sequences whose length is not exactly 21 rather than risking
    /// out-of-range indexed access downstream.
    pub fn new(
        landmarks: Vec<Landmark>,
        handedness: Handedness,
        confidence: f32,
    ) -> Result<Self, GestureError> {
        let landmarks: [Landmark; HAND_LANDMARK_COUNT] =
            landmarks
                .try_into()
                .map_err(|v: Vec<Landmark>| GestureError::MalformedHand {
                    expected: HAND_LANDMARK_COUNT,
                    got: v.len(),
                })?;

        Ok(Self {
            landmarks,
            handedness,
            confidence,
        })
    }

    /// Get a landmark by its semantic index
    pub fn landmark(&self, index: HandLandmark) -> &Landmark {
        &self.landmarks[usize::from(index)]
    }

    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    /// Detector confidence for this hand, in [0, 1].
    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    /// The five fingertip landmarks in thumb-to-pinky order, paired with
    /// their finger. Display sinks show these per frame.
    pub fn fingertips(&self) -> [(Finger, Landmark); 5] {
        Finger::ALL.map(|finger| (finger, *self.landmark(finger.tip())))
    }
}

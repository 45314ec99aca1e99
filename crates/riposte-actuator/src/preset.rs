use riposte_gesture::Gesture;

/// Number of elements in a finger pose vector.
pub const FINGER_POSE_LEN: usize = 6;

/// Number of elements in a palm pose vector.
pub const PALM_POSE_LEN: usize = 4;

/// A named actuator pose: per-finger curl intensities plus palm
/// orientation, each component 0-255. The table is fixed at compile time
/// and must match the actuator firmware exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosePreset {
    name: &'static str,
    pub finger: [u8; FINGER_POSE_LEN],
    pub palm: [u8; PALM_POSE_LEN],
}

pub const ROCK: PosePreset = PosePreset {
    name: "rock",
    finger: [49, 32, 40, 36, 41, 46],
    palm: [255, 235, 128, 128],
};

pub const PAPER: PosePreset = PosePreset {
    name: "paper",
    finger: [255, 255, 255, 255, 255, 255],
    palm: [128, 128, 128, 128],
};

pub const SCISSORS: PosePreset = PosePreset {
    name: "scissors",
    finger: [0, 103, 255, 255, 0, 0],
    palm: [255, 235, 128, 128],
};

impl PosePreset {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up a preset by name, case-insensitive.
    pub fn by_name(name: &str) -> Option<&'static PosePreset> {
        match name.to_ascii_lowercase().as_str() {
            "rock" => Some(&ROCK),
            "paper" => Some(&PAPER),
            "scissors" => Some(&SCISSORS),
            _ => None,
        }
    }

    /// The preset that plays a given gesture. None for unrecognized.
    pub fn for_gesture(gesture: Gesture) -> Option<&'static PosePreset> {
        match gesture {
            Gesture::Rock => Some(&ROCK),
            Gesture::Paper => Some(&PAPER),
            Gesture::Scissors => Some(&SCISSORS),
            Gesture::Unrecognized => None,
        }
    }
}

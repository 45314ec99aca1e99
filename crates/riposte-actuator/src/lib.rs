//! Actuator side of the counter-move pipeline: fixed pose presets, the
//! detected-gesture → counter-move mapping, and the HTTP client that drives
//! the robot hand through its palm and finger endpoints.

pub mod client;
pub mod dispatcher;
pub mod error;
pub mod preset;

pub use client::{ActuatorClient, DEFAULT_BASE_URL, FINGERS_ENDPOINT, PALM_ENDPOINT};
pub use dispatcher::{counter_move, CounterMoveDispatcher};
pub use error::ActuatorError;
pub use preset::{PosePreset, FINGER_POSE_LEN, PALM_POSE_LEN, PAPER, ROCK, SCISSORS};

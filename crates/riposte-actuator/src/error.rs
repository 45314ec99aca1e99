use std::fmt;

#[derive(Debug)]
pub enum ActuatorError {
    /// Transport-level failure talking to the actuator.
    Http(reqwest::Error),
    /// The actuator answered, but not with a success status.
    Status {
        endpoint: String,
        status: String,
        message: String,
    },
    /// A pose was requested by a name the preset table does not contain.
    UnknownPreset(String),
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActuatorError::Http(err) => write!(f, "http error: {err}"),
            ActuatorError::Status {
                endpoint,
                status,
                message,
            } => {
                write!(f, "actuator rejected {endpoint}: status {status}: {message}")
            }
            ActuatorError::UnknownPreset(name) => write!(f, "unknown pose preset: {name}"),
        }
    }
}

impl std::error::Error for ActuatorError {}

impl From<reqwest::Error> for ActuatorError {
    fn from(err: reqwest::Error) -> Self {
        ActuatorError::Http(err)
    }
}

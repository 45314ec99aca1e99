use crate::preset::PosePreset;
use crate::ActuatorError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default actuator control endpoint.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9099";

/// Palm orientation endpoint (4-element pose vector).
pub const PALM_ENDPOINT: &str = "/api/palm";

/// Finger curl endpoint (6-element pose vector).
pub const FINGERS_ENDPOINT: &str = "/api/fingers";

/// Settle delay between the palm send and the finger send. The hand must
/// reach its palm orientation before the fingers curl, or it passes through
/// a physically invalid intermediate pose.
const SETTLE_DELAY: Duration = Duration::from_millis(30);

#[derive(Serialize)]
struct PoseRequest<'a> {
    pose: &'a [u8],
}

#[derive(Deserialize)]
struct PoseReply {
    status: String,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the robot hand's pose API.
///
/// Sends are best-effort: failures are logged with the endpoint and payload
/// and never retried, and the pipeline stays responsive for the next frame.
pub struct ActuatorClient {
    http: reqwest::Client,
    base_url: String,
}

impl ActuatorClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST one pose vector to an endpoint and check the reply status.
    async fn send_pose(&self, endpoint: &str, pose: &[u8]) -> Result<(), ActuatorError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let reply: PoseReply = self
            .http
            .post(&url)
            .json(&PoseRequest { pose })
            .send()
            .await?
            .json()
            .await?;

        if reply.status != "success" {
            return Err(ActuatorError::Status {
                endpoint: endpoint.to_string(),
                status: reply.status,
                message: reply.error.unwrap_or_default(),
            });
        }

        Ok(())
    }

    /// Drive the actuator through a preset: palm orientation first, then
    /// finger curl after the settle delay.
    ///
    /// Both phases are attempted even if the first fails; each failure is
    /// logged and dropped.
    pub async fn perform(&self, preset: &PosePreset) {
        log::debug!("performing {} pose", preset.name());

        if let Err(err) = self.send_pose(PALM_ENDPOINT, &preset.palm).await {
            log::error!(
                "palm pose {:?} to {} failed: {}",
                preset.palm,
                PALM_ENDPOINT,
                err
            );
        }

        tokio::time::sleep(SETTLE_DELAY).await;

        if let Err(err) = self.send_pose(FINGERS_ENDPOINT, &preset.finger).await {
            log::error!(
                "finger pose {:?} to {} failed: {}",
                preset.finger,
                FINGERS_ENDPOINT,
                err
            );
        }
    }

    /// Perform a preset looked up by name. Unknown names are logged and no
    /// request is sent.
    pub async fn perform_named(&self, name: &str) {
        match PosePreset::by_name(name) {
            Some(preset) => self.perform(preset).await,
            None => {
                let err = ActuatorError::UnknownPreset(name.to_string());
                log::error!("{err}, request not sent");
            }
        }
    }
}

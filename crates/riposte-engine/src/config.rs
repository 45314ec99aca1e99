use riposte_actuator::DEFAULT_BASE_URL;
use riposte_gesture::DEFAULT_DEBOUNCE;
use std::time::Duration;

/// Configuration for the gesture pipeline.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    actuator_url: String,
    debounce: Duration,
    dispatch: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            actuator_url: DEFAULT_BASE_URL.to_string(),
            debounce: DEFAULT_DEBOUNCE,
            dispatch: true,
        }
    }
}

impl EngineConfig {
    /// Set the actuator base URL (e.g., "http://localhost:9099").
    pub fn with_actuator_url(mut self, url: impl Into<String>) -> Self {
        self.actuator_url = url.into();
        self
    }

    /// Set the stability debounce interval.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Enable or disable counter-move dispatch. Disabled, the pipeline
    /// still classifies and confirms gestures for display sinks.
    pub fn with_dispatch(mut self, dispatch: bool) -> Self {
        self.dispatch = dispatch;
        self
    }

    // Getters
    pub fn actuator_url(&self) -> &str {
        &self.actuator_url
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn dispatch(&self) -> bool {
        self.dispatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.actuator_url(), "http://localhost:9099");
        assert_eq!(config.debounce(), Duration::from_millis(100));
        assert!(config.dispatch());
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::default()
            .with_actuator_url("http://10.0.0.5:9099")
            .with_debounce(Duration::from_millis(250))
            .with_dispatch(false);
        assert_eq!(config.actuator_url(), "http://10.0.0.5:9099");
        assert_eq!(config.debounce(), Duration::from_millis(250));
        assert!(!config.dispatch());
    }
}

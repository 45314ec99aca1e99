use crate::client::ActuatorClient;
use crate::preset::PosePreset;
use riposte_gesture::{ConfirmedGesture, Gesture, CONFIDENCE_THRESHOLD};

/// The winning response to a detected gesture. None for unrecognized.
pub fn counter_move(gesture: Gesture) -> Option<Gesture> {
    match gesture {
        Gesture::Rock => Some(Gesture::Paper),
        Gesture::Paper => Some(Gesture::Scissors),
        Gesture::Scissors => Some(Gesture::Rock),
        Gesture::Unrecognized => None,
    }
}

/// Turns confirmed opponent gestures into counter-move commands for the
/// actuator.
pub struct CounterMoveDispatcher {
    client: ActuatorClient,
}

impl CounterMoveDispatcher {
    pub fn new(client: ActuatorClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ActuatorClient {
        &self.client
    }

    /// Handle one confirmed gesture. Returns the gesture played, or None if
    /// nothing was dispatched.
    ///
    /// The confidence gate re-checks the threshold: confirmations at or
    /// below 0.70 are dropped here even though the stability gate admits
    /// observations at exactly 0.70.
    pub async fn dispatch(&self, confirmed: ConfirmedGesture) -> Option<Gesture> {
        if confirmed.confidence <= CONFIDENCE_THRESHOLD {
            log::debug!(
                "not countering {}: confidence {:.2} too low",
                confirmed.gesture,
                confirmed.confidence
            );
            return None;
        }

        let counter = counter_move(confirmed.gesture)?;
        let preset = PosePreset::for_gesture(counter)?;

        log::info!("countering {} with {}", confirmed.gesture, counter);
        self.client.perform(preset).await;

        Some(counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_move_table() {
        assert_eq!(counter_move(Gesture::Rock), Some(Gesture::Paper));
        assert_eq!(counter_move(Gesture::Paper), Some(Gesture::Scissors));
        assert_eq!(counter_move(Gesture::Scissors), Some(Gesture::Rock));
        assert_eq!(counter_move(Gesture::Unrecognized), None);
    }

    #[test]
    fn test_counter_move_always_wins() {
        // The counter must beat the move it answers.
        fn beats(a: Gesture, b: Gesture) -> bool {
            matches!(
                (a, b),
                (Gesture::Paper, Gesture::Rock)
                    | (Gesture::Scissors, Gesture::Paper)
                    | (Gesture::Rock, Gesture::Scissors)
            )
        }

        for detected in [Gesture::Rock, Gesture::Paper, Gesture::Scissors] {
            let counter = counter_move(detected).unwrap();
            assert!(beats(counter, detected), "{counter} does not beat {detected}");
        }
    }
}

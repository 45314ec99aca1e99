use crate::classifier::{Gesture, GestureObservation};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

/// Minimum observation confidence for a candidate to start (or restart)
/// the stability timer.
pub const CONFIDENCE_THRESHOLD: f32 = 0.70;

/// Interval a candidate gesture must stay the most recent qualifying
/// observation before it is confirmed.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Event emitted when a gesture has held stable for the debounce interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfirmedGesture {
    pub gesture: Gesture,
    pub confidence: f32,
}

struct GateState {
    last_confirmed: Option<Gesture>,
    /// Token of the live pending timer, if any. A timer task only acts if
    /// its captured token still matches at fire time, so superseded timers
    /// are no-ops even when their sleep has already completed.
    generation: u64,
}

/// Debounces a stream of per-frame gesture observations into discrete
/// confirmed-gesture events.
///
/// Feed one `observe` call per detected hand per frame. Confirmations
/// arrive on the receiver returned by [`StabilityGate::new`]. At most one
/// stability timer is pending at a time; every qualifying observation
/// supersedes the previous timer and restarts the clock.
pub struct StabilityGate {
    state: Arc<Mutex<GateState>>,
    debounce: Duration,
    tx: mpsc::Sender<ConfirmedGesture>,
}

impl StabilityGate {
    /// Create a gate and the channel its confirmations are delivered on.
    pub fn new(debounce: Duration) -> (Self, mpsc::Receiver<ConfirmedGesture>) {
        let (tx, rx) = mpsc::channel(16);

        let gate = Self {
            state: Arc::new(Mutex::new(GateState {
                last_confirmed: None,
                generation: 0,
            })),
            debounce,
            tx,
        };

        (gate, rx)
    }

    /// Feed one per-frame observation.
    ///
    /// An unrecognized observation resets the gate immediately: the pending
    /// timer (if any) is invalidated and the confirmed gesture cleared, with
    /// no debounce. An observation matching the last confirmed gesture, or
    /// one below the confidence threshold, is ignored and does not disturb a
    /// pending timer. Anything else becomes the pending candidate and
    /// restarts the clock.
    ///
    /// Must be called from within a tokio runtime; the stability timer is a
    /// spawned single-shot sleep task.
    pub fn observe(&self, observation: GestureObservation) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        if observation.gesture == Gesture::Unrecognized {
            state.generation = state.generation.wrapping_add(1);
            if state.last_confirmed.take().is_some() {
                log::debug!("gate reset: hand no longer recognized");
            }
            return;
        }

        if Some(observation.gesture) == state.last_confirmed
            || observation.confidence < CONFIDENCE_THRESHOLD
        {
            return;
        }

        state.generation = state.generation.wrapping_add(1);
        let token = state.generation;
        drop(state);

        let state = Arc::clone(&self.state);
        let tx = self.tx.clone();
        let debounce = self.debounce;

        tokio::spawn(async move {
            tokio::time::sleep(debounce).await;

            {
                let mut state = state.lock().unwrap_or_else(|e| e.into_inner());
                if state.generation != token {
                    // Superseded by a newer observation before the interval
                    // elapsed.
                    return;
                }
                state.last_confirmed = Some(observation.gesture);
            }

            if tx
                .send(ConfirmedGesture {
                    gesture: observation.gesture,
                    confidence: observation.confidence,
                })
                .await
                .is_err()
            {
                log::debug!("confirmation receiver dropped, gesture discarded");
            }
        });
    }

    /// The gesture most recently confirmed, if the gate has not been reset
    /// since.
    pub fn last_confirmed(&self) -> Option<Gesture> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last_confirmed
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }
}

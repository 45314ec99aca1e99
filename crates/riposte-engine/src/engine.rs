use crate::config::EngineConfig;
use crate::event::GestureEvent;
use riposte_actuator::{ActuatorClient, CounterMoveDispatcher};
use riposte_gesture::{classify_hand, Hand, StabilityGate};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Event channel capacity. Display sinks that fall this far behind lose
/// frame events, never confirmations in practice: confirmations are rare.
const EVENT_CAPACITY: usize = 64;

/// The assembled gesture pipeline.
///
/// Call [`Engine::process_frame`] once per detector frame with every hand
/// found in that frame. Classification runs synchronously in the call;
/// confirmations and counter-move dispatches happen on a background task
/// fed by the stability gate.
pub struct Engine {
    gate: StabilityGate,
    events: mpsc::Sender<GestureEvent>,
    forward_task: JoinHandle<()>,
}

impl Engine {
    /// Build the pipeline and spawn its confirmation-forwarding task.
    ///
    /// Returns the engine and the receiver display sinks consume events
    /// from. Must be called from within a tokio runtime.
    pub fn spawn(config: EngineConfig) -> (Self, mpsc::Receiver<GestureEvent>) {
        let (event_tx, event_rx) = mpsc::channel(EVENT_CAPACITY);
        let (gate, mut confirmed_rx) = StabilityGate::new(config.debounce());

        let dispatcher = config
            .dispatch()
            .then(|| CounterMoveDispatcher::new(ActuatorClient::new(config.actuator_url())));

        let tx = event_tx.clone();
        let forward_task = tokio::spawn(async move {
            while let Some(confirmed) = confirmed_rx.recv().await {
                log::info!(
                    "confirmed {} ({:.0}%)",
                    confirmed.gesture,
                    confirmed.confidence * 100.0
                );

                send_event(
                    &tx,
                    GestureEvent::Confirmed {
                        gesture: confirmed.gesture,
                        confidence: confirmed.confidence,
                    },
                );

                if let Some(dispatcher) = &dispatcher {
                    if let Some(played) = dispatcher.dispatch(confirmed).await {
                        send_event(
                            &tx,
                            GestureEvent::Dispatched {
                                detected: confirmed.gesture,
                                played,
                            },
                        );
                    }
                }
            }
        });

        let engine = Self {
            gate,
            events: event_tx,
            forward_task,
        };

        (engine, event_rx)
    }

    /// Process one detector frame.
    ///
    /// Zero hands is a no-op. Each hand is classified independently; there
    /// is no cross-hand interaction. Must be called from within a tokio
    /// runtime.
    pub fn process_frame(&self, hands: &[Hand]) {
        for hand in hands {
            let observation = classify_hand(hand);

            log::debug!(
                "{} hand: {} ({:.0}%)",
                hand.handedness().as_str(),
                observation.gesture,
                observation.confidence * 100.0
            );

            send_event(
                &self.events,
                GestureEvent::Frame {
                    handedness: hand.handedness(),
                    gesture: observation.gesture,
                    confidence: observation.confidence,
                    hand_confidence: hand.confidence(),
                },
            );

            self.gate.observe(observation);
        }
    }

    /// The gesture currently confirmed by the stability gate, if any.
    pub fn last_confirmed(&self) -> Option<riposte_gesture::Gesture> {
        self.gate.last_confirmed()
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.forward_task.abort();
    }
}

/// Best-effort event delivery: a full or closed channel drops the event.
/// The display sink is an observer, never back-pressure on the pipeline.
fn send_event(tx: &mpsc::Sender<GestureEvent>, event: GestureEvent) {
    if let Err(err) = tx.try_send(event) {
        log::debug!("event dropped: {err}");
    }
}

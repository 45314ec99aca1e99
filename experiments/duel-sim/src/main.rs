use riposte_base::log;
use riposte_engine::{Engine, EngineConfig, GestureEvent};
use riposte_gesture::{Finger, Gesture, Hand, Handedness, Landmark, HAND_LANDMARK_COUNT};
use std::env;
use tokio::time::{sleep, Duration};

const DEFAULT_ACTUATOR_URL: &str = "http://localhost:9099";

/// Frame cadence, just past the stability interval so each scripted
/// gesture confirms on its first held frame.
const FRAME_INTERVAL: Duration = Duration::from_millis(120);

/// Frames each scripted gesture is held for.
const FRAMES_PER_ROUND: usize = 5;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    riposte_base::init_stdout_logger();

    let actuator_url =
        env::var("RIPOSTE_ACTUATOR_URL").unwrap_or_else(|_| DEFAULT_ACTUATOR_URL.to_string());
    let dispatch = env::var("RIPOSTE_DISPATCH").map(|v| v != "0").unwrap_or(true);

    log::info!("Duel Simulator - Scripted Opponent");
    log::info!(
        "Actuator: {} (dispatch {})",
        actuator_url,
        if dispatch { "on" } else { "off" }
    );

    let config = EngineConfig::default()
        .with_actuator_url(actuator_url)
        .with_dispatch(dispatch);
    let (engine, mut events) = Engine::spawn(config);

    // Drain pipeline events to the log, the way a UI would.
    let ui_task = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match event {
                GestureEvent::Frame {
                    handedness,
                    gesture,
                    confidence,
                    hand_confidence,
                } => {
                    log::debug!(
                        "{} hand ({:.2}): {} ({:.0}%)",
                        handedness.as_str(),
                        hand_confidence,
                        gesture,
                        confidence * 100.0
                    );
                }
                GestureEvent::Confirmed {
                    gesture,
                    confidence,
                } => {
                    log::info!("opponent plays {} ({:.0}%)", gesture, confidence * 100.0);
                }
                GestureEvent::Dispatched { detected, played } => {
                    log::info!("{} countered with {}", detected, played);
                }
            }
        }
    });

    // Scripted rounds: hold each gesture, then drop the hand between
    // rounds so the gate resets.
    for round in [Gesture::Rock, Gesture::Paper, Gesture::Scissors] {
        log::info!("--- opponent shows {} ---", round);

        let hand = hand_for(round);
        for _ in 0..FRAMES_PER_ROUND {
            engine.process_frame(&[hand.clone()]);
            sleep(FRAME_INTERVAL).await;
        }

        // Hand leaves the frame: feed the lost-hand pose so the gate
        // resets before the next round.
        engine.process_frame(&[lost_hand()]);
        sleep(FRAME_INTERVAL).await;
    }

    // Let the last dispatch finish before tearing the pipeline down.
    sleep(Duration::from_millis(300)).await;
    drop(engine);
    ui_task.abort();

    log::info!("duel finished");
    Ok(())
}

/// A synthetic hand showing the given gesture.
fn hand_for(gesture: Gesture) -> Hand {
    match gesture {
        Gesture::Rock => synthetic_hand(false, false, false, false, false),
        Gesture::Paper => synthetic_hand(true, true, true, true, true),
        Gesture::Scissors => synthetic_hand(false, true, true, false, false),
        Gesture::Unrecognized => lost_hand(),
    }
}

/// A pose no rule matches, standing in for a hand leaving the frame.
fn lost_hand() -> Hand {
    synthetic_hand(false, true, false, false, false)
}

/// Build a hand with the requested per-finger extension states. Joints sit
/// at the frame center; open tips are placed above their joint, the open
/// thumb left of its joint.
fn synthetic_hand(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> Hand {
    let mut landmarks = vec![Landmark::new(0.5, 0.5, 0.0); HAND_LANDMARK_COUNT];

    landmarks[usize::from(Finger::Thumb.tip())].x = if thumb { 0.3 } else { 0.7 };
    for (finger, open) in [
        (Finger::Index, index),
        (Finger::Middle, middle),
        (Finger::Ring, ring),
        (Finger::Pinky, pinky),
    ] {
        landmarks[usize::from(finger.tip())].y = if open { 0.3 } else { 0.7 };
    }

    Hand::new(landmarks, Handedness::Right, 0.95).expect("landmark count is fixed")
}

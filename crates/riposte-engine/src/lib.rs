//! Per-frame pipeline assembly: hand frames in, gesture events and
//! counter-move dispatches out.
//!
//! The engine wires the pieces of the riposte ecosystem together: landmark
//! geometry and classification per hand, the stability gate across frames,
//! and the counter-move dispatcher behind it. Display sinks subscribe to
//! the event channel; the actuator is driven in the background.

pub mod config;
pub mod engine;
pub mod event;

pub use config::EngineConfig;
pub use engine::Engine;
pub use event::GestureEvent;

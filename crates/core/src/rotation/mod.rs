//! Display window rotation.
//!
//! The ticker shows a small window into the merged feed and advances it
//! on a timer. Advancing is a two-phase handshake so a frontend can play
//! an exit animation: phase one marks the window as leaving, phase two
//! fires after a fixed delay and moves the cursor by however many items
//! were actually on screen at that moment.
//!
//! The controller is pure state; all timing lives in the engine.

mod controller;
mod window;

pub use controller::{RotationController, RotationPhase};
pub use window::{DisplayWindow, WindowMode};

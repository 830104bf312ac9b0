//! Input handling: event types, click and tap recognition, and the input
//! processor that converts raw window or DOM events into pointer events.

/// Platform-agnostic input events.
pub mod event;
/// Cursor tracking and drag suppression.
pub(crate) mod mouse;
/// Converts raw events into pointer events.
pub mod processor;
/// Single-finger tap recognition.
pub mod tap;

pub use event::{
    InputEvent, MouseButton, PointerEvent, PointerSource, TouchPhase,
};
pub use processor::InputProcessor;
pub use tap::TapRecognizer;

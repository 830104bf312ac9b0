//! Converts raw platform events into pointer events.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! drag detection, touch tracking). It is the only thing that sits between
//! raw window or DOM events and the
//! [`PickController`](crate::controller::PickController).

use std::time::Duration;

use glam::DVec2;
use web_time::Instant;

use super::event::{InputEvent, MouseButton, PointerEvent, PointerSource};
use super::mouse::ClickTracker;
use super::tap::TapRecognizer;
use crate::options::InputOptions;

/// Converts raw input events into [`PointerEvent`]s.
///
/// # Usage
///
/// ```ignore
/// for event in platform_events {
///     if let Some(pointer) = input_processor.handle_event(event) {
///         controller.handle_pick(&mut scene, pointer);
///     }
/// }
/// ```
pub struct InputProcessor {
    /// Cursor tracking and drag detection.
    clicks: ClickTracker,
    /// Single-finger tap detection.
    taps: TapRecognizer,
}

impl InputProcessor {
    /// Create a processor with default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(&InputOptions::default())
    }

    /// Create a processor with configured thresholds.
    #[must_use]
    pub fn with_options(options: &InputOptions) -> Self {
        Self {
            clicks: ClickTracker::new(options.click_slop),
            taps: TapRecognizer::new(
                options.tap_slop,
                Duration::from_millis(options.tap_max_millis),
            ),
        }
    }

    /// Current cursor position in client pixels.
    #[must_use]
    pub fn cursor(&self) -> DVec2 {
        self.clicks.cursor
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.clicks.is_pressed()
    }

    /// Process a raw input event and return a pointer event when it
    /// completes a click or tap.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<PointerEvent> {
        self.handle_event_at(event, Instant::now())
    }

    /// [`handle_event`](Self::handle_event) with an explicit timestamp.
    pub fn handle_event_at(
        &mut self,
        event: InputEvent,
        now: Instant,
    ) -> Option<PointerEvent> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.clicks.handle_cursor(DVec2::new(x, y));
                None
            }
            InputEvent::MouseButton { button, pressed } => {
                if button != MouseButton::Left {
                    return None;
                }
                if pressed {
                    self.clicks.handle_press();
                    return None;
                }
                self.clicks
                    .handle_release()
                    .map(|at| pointer(at, PointerSource::Click))
            }
            InputEvent::Touch { phase, id, x, y } => self
                .taps
                .handle(phase, id, DVec2::new(x, y), now)
                .map(|at| pointer(at, PointerSource::Tap)),
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

fn pointer(at: DVec2, source: PointerSource) -> PointerEvent {
    PointerEvent {
        x: at.x,
        y: at.y,
        source,
    }
}

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// turns completed clicks and taps into [`PointerEvent`]s.
///
/// # Example
///
/// ```ignore
/// if let Some(pointer) = input.handle_event(InputEvent::MouseButton {
///     button: MouseButton::Left,
///     pressed: false,
/// }) {
///     controller.handle_pick(&mut scene, pointer);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to an absolute client position.
    CursorMoved {
        /// Horizontal position in client pixels.
        x: f64,
        /// Vertical position in client pixels.
        y: f64,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// A touch point changed.
    Touch {
        /// What happened to the touch.
        phase: TouchPhase,
        /// Identifier stable for the lifetime of one touch.
        id: u64,
        /// Horizontal position in client pixels.
        x: f64,
        /// Vertical position in client pixels.
        y: f64,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub const fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Right,
            _ => Self::Left,
        }
    }
}

/// Lifecycle stage of a touch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// Finger down.
    Started,
    /// Finger moved.
    Moved,
    /// Finger lifted.
    Ended,
    /// The platform took the touch away (e.g. for a system gesture).
    Cancelled,
}

/// How a [`PointerEvent`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    /// Primary mouse button press and release without a drag.
    Click,
    /// Short single-finger touch.
    Tap,
}

/// A completed click or tap, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Horizontal position in client pixels.
    pub x: f64,
    /// Vertical position in client pixels.
    pub y: f64,
    /// Mouse click or touch tap.
    pub source: PointerSource,
}

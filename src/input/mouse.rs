use glam::DVec2;

/// Tracks cursor position and whether the current press became a drag.
pub(crate) struct ClickTracker {
    /// Last known cursor position in client pixels.
    pub(crate) cursor: DVec2,
    /// Cursor position at primary-button press, while held.
    press_origin: Option<DVec2>,
    /// Set once the cursor travels beyond the slop while pressed.
    is_dragging: bool,
    /// Travel in pixels that turns a press into a drag.
    slop: f64,
}

impl ClickTracker {
    /// Create a tracker with no active press.
    pub(crate) fn new(slop: f64) -> Self {
        Self {
            cursor: DVec2::ZERO,
            press_origin: None,
            is_dragging: false,
            slop,
        }
    }

    /// Whether the primary button is held.
    pub(crate) fn is_pressed(&self) -> bool {
        self.press_origin.is_some()
    }

    /// Update cursor position, marking a drag once beyond the slop.
    pub(crate) fn handle_cursor(&mut self, position: DVec2) {
        self.cursor = position;
        if let Some(origin) = self.press_origin {
            if position.distance(origin) > self.slop {
                self.is_dragging = true;
            }
        }
    }

    /// Record a primary-button press at the current cursor.
    pub(crate) fn handle_press(&mut self) {
        self.press_origin = Some(self.cursor);
        self.is_dragging = false;
    }

    /// Finish a press. Returns the click position, or `None` for a drag or
    /// a release without a matching press.
    pub(crate) fn handle_release(&mut self) -> Option<DVec2> {
        let origin = self.press_origin.take();
        let was_dragging = std::mem::take(&mut self.is_dragging);
        // If we were dragging, don't pick
        if was_dragging {
            return None;
        }
        origin.map(|_| self.cursor)
    }
}

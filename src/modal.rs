//! Modal dialog visibility state machine.
//!
//! ```text
//! Hidden ──show()──▶ Shown ──click(CloseControl | Outside)──▶ Hidden
//!                     ▲  │
//!                     └──┘ click(Modal), show()
//! ```
//!
//! Dismissal is handled by one persistent click handler that consults the
//! current state, so repeated `show()` calls never stack listeners.

/// Visibility of the modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    /// Not displayed. Initial state.
    #[default]
    Hidden,
    /// Displayed over the page.
    Shown,
}

/// Where a page click landed, relative to the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The modal's close control.
    CloseControl,
    /// Inside the modal body.
    Modal,
    /// Anywhere else on the page.
    Outside,
}

impl ClickTarget {
    /// Classify a page click. `inside_modal` is true for the modal element
    /// itself and anything it contains; `on_close` is true when the target
    /// is the close control or lies within it.
    #[must_use]
    pub const fn from_hit(inside_modal: bool, on_close: bool) -> Self {
        match (inside_modal, on_close) {
            (false, _) => Self::Outside,
            (true, true) => Self::CloseControl,
            (true, false) => Self::Modal,
        }
    }
}

/// Applies modal visibility to the actual UI element.
pub trait ModalSurface {
    /// Show (`display: block`) or hide (`display: none`) the element.
    fn set_visible(&mut self, visible: bool);
}

/// Surface with nothing to update, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessSurface;

impl ModalSurface for HeadlessSurface {
    fn set_visible(&mut self, _visible: bool) {}
}

/// The modal dialog: its state plus the surface it drives.
#[derive(Debug, Default)]
pub struct Modal<S> {
    state: ModalState,
    surface: S,
}

impl<S: ModalSurface> Modal<S> {
    /// A hidden modal driving `surface`.
    pub fn new(surface: S) -> Self {
        Self {
            state: ModalState::Hidden,
            surface,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Whether the modal is displayed.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.state == ModalState::Shown
    }

    /// The driven surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Display the modal. Returns `true` if it was hidden before.
    pub fn show(&mut self) -> bool {
        if self.is_shown() {
            return false;
        }
        self.state = ModalState::Shown;
        self.surface.set_visible(true);
        log::info!("modal shown");
        true
    }

    /// Hide the modal. Returns `true` if it was shown before.
    pub fn hide(&mut self) -> bool {
        if !self.is_shown() {
            return false;
        }
        self.state = ModalState::Hidden;
        self.surface.set_visible(false);
        log::info!("modal hidden");
        true
    }

    /// Route a page click. Clicks on the close control or outside the
    /// modal hide it; clicks inside the body do nothing. Returns `true` if
    /// the modal was hidden.
    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::CloseControl | ClickTarget::Outside => self.hide(),
            ClickTarget::Modal => false,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records every visibility change applied to it.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub(crate) changes: Vec<bool>,
    }

    impl ModalSurface for RecordingSurface {
        fn set_visible(&mut self, visible: bool) {
            self.changes.push(visible);
        }
    }

    fn shown() -> Modal<RecordingSurface> {
        let mut modal = Modal::new(RecordingSurface::default());
        assert!(modal.show());
        modal
    }

    #[test]
    fn starts_hidden() {
        let modal = Modal::new(RecordingSurface::default());
        assert_eq!(modal.state(), ModalState::Hidden);
        assert!(modal.surface().changes.is_empty());
    }

    #[test]
    fn click_inside_keeps_it_shown() {
        let mut modal = shown();
        assert!(!modal.handle_click(ClickTarget::Modal));
        assert_eq!(modal.state(), ModalState::Shown);
        assert_eq!(modal.surface().changes, vec![true]);
    }

    #[test]
    fn click_outside_hides_it() {
        let mut modal = shown();
        assert!(modal.handle_click(ClickTarget::Outside));
        assert_eq!(modal.state(), ModalState::Hidden);
        assert_eq!(modal.surface().changes, vec![true, false]);
    }

    #[test]
    fn click_on_the_modal_element_keeps_it_shown() {
        // The target is the modal element itself: inside, not on close.
        let target = ClickTarget::from_hit(true, false);
        assert_eq!(target, ClickTarget::Modal);
        let mut modal = shown();
        assert!(!modal.handle_click(target));
        assert_eq!(modal.state(), ModalState::Shown);
    }

    #[test]
    fn hits_classify_by_containment() {
        assert_eq!(ClickTarget::from_hit(false, false), ClickTarget::Outside);
        assert_eq!(ClickTarget::from_hit(true, true), ClickTarget::CloseControl);
        // A close control that is not part of the modal is just the page.
        assert_eq!(ClickTarget::from_hit(false, true), ClickTarget::Outside);
    }

    #[test]
    fn close_control_hides_it() {
        let mut modal = shown();
        assert!(modal.handle_click(ClickTarget::CloseControl));
        assert_eq!(modal.state(), ModalState::Hidden);
    }

    #[test]
    fn repeated_show_does_not_touch_the_surface_again() {
        let mut modal = shown();
        assert!(!modal.show());
        assert!(!modal.show());
        assert_eq!(modal.surface().changes, vec![true]);
        // A single dismissal suffices after repeated shows.
        assert!(modal.handle_click(ClickTarget::Outside));
        assert!(!modal.handle_click(ClickTarget::Outside));
        assert_eq!(modal.surface().changes, vec![true, false]);
    }

    #[test]
    fn clicks_while_hidden_are_ignored() {
        let mut modal = Modal::new(RecordingSurface::default());
        assert!(!modal.handle_click(ClickTarget::CloseControl));
        assert!(!modal.handle_click(ClickTarget::Outside));
        assert!(modal.surface().changes.is_empty());
    }

    #[test]
    fn cycle_repeats() {
        let mut modal = shown();
        assert!(modal.hide());
        assert!(modal.show());
        assert_eq!(modal.surface().changes, vec![true, false, true]);
    }
}

//! Pick-and-highlight controller.
//!
//! Owns the highlighted set and the modal. Each pointer event clears the
//! previous highlights, picks at the event's position, highlights exactly
//! what was picked, and opens the modal when the designated placemark is
//! among the results. A redraw is requested only when highlight state
//! changed.

use glam::DVec2;

use crate::geo::Location;
use crate::input::{PointerEvent, PointerSource};
use crate::modal::{ClickTarget, Modal, ModalState, ModalSurface};
use crate::picking::PickScene;
use crate::scene::PlacemarkId;

/// What one [`PickController::handle_pick`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PickOutcome {
    /// Placemarks de-highlighted from the previous cycle.
    pub cleared: usize,
    /// Placemarks highlighted by this cycle.
    pub highlighted: usize,
    /// Picked entries whose label (rather than image) was hit.
    pub labels_picked: usize,
    /// Whether a redraw was requested.
    pub redrawn: bool,
    /// Whether the modal went from hidden to shown.
    pub modal_opened: bool,
}

/// Highlights picked placemarks and opens the modal for the designated one.
#[derive(Debug)]
pub struct PickController<S> {
    highlighted: Vec<PlacemarkId>,
    designated: Location,
    modal: Modal<S>,
}

impl<S: ModalSurface> PickController<S> {
    /// A controller with nothing highlighted and the modal hidden.
    ///
    /// `designated` is the location of the placemark that opens the modal.
    pub fn new(designated: Location, surface: S) -> Self {
        Self {
            highlighted: Vec::new(),
            designated,
            modal: Modal::new(surface),
        }
    }

    /// Currently highlighted placemarks, in pick order.
    #[must_use]
    pub fn highlighted(&self) -> &[PlacemarkId] {
        &self.highlighted
    }

    /// Location of the placemark that opens the modal.
    #[must_use]
    pub fn designated(&self) -> Location {
        self.designated
    }

    /// Current modal state.
    #[must_use]
    pub fn modal_state(&self) -> ModalState {
        self.modal.state()
    }

    /// The modal.
    pub fn modal(&self) -> &Modal<S> {
        &self.modal
    }

    /// Handle a click or tap: re-highlight from a fresh pick at the event's
    /// position.
    pub fn handle_pick<P: PickScene + ?Sized>(
        &mut self,
        scene: &mut P,
        event: PointerEvent,
    ) -> PickOutcome {
        let point =
            scene.canvas_coordinates(DVec2::new(event.x, event.y));

        let mut outcome = PickOutcome {
            cleared: self.clear_highlights(scene),
            ..PickOutcome::default()
        };
        let mut redraw_required = outcome.cleared > 0;

        let picked = scene.pick(point);
        if !picked.is_empty() {
            redraw_required = true;
        }

        for object in picked {
            scene.set_highlighted(object.id, true);
            self.highlighted.push(object.id);
            outcome.highlighted += 1;

            if object.label_picked {
                outcome.labels_picked += 1;
                log::info!(
                    "label picked: layer {} placemark {}",
                    object.id.layer,
                    object.id.index
                );
            }

            if object.position.is_at(self.designated) {
                outcome.modal_opened |= self.open_modal();
            }
        }

        if redraw_required {
            scene.redraw();
        }
        outcome.redrawn = redraw_required;

        log::debug!(
            "{:?} at ({:.1}, {:.1}): {outcome:?}",
            event.source,
            point.x,
            point.y
        );
        outcome
    }

    /// Show the modal. Returns `true` if it was hidden before.
    pub fn open_modal(&mut self) -> bool {
        self.modal.show()
    }

    /// Route a page click to the modal's dismissal handler. Returns `true`
    /// if the modal was hidden.
    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        self.modal.handle_click(target)
    }

    /// De-highlight everything and request a redraw if anything changed.
    /// Returns the number of placemarks cleared.
    pub fn clear<P: PickScene + ?Sized>(&mut self, scene: &mut P) -> usize {
        let cleared = self.clear_highlights(scene);
        if cleared > 0 {
            scene.redraw();
        }
        cleared
    }

    fn clear_highlights<P: PickScene + ?Sized>(
        &mut self,
        scene: &mut P,
    ) -> usize {
        let cleared = self.highlighted.len();
        for id in self.highlighted.drain(..) {
            scene.set_highlighted(id, false);
        }
        cleared
    }
}

// ── Page click routing ──

/// Routes page clicks to the modal's dismissal handler.
///
/// A mouse pick runs on `mouseup`, and the browser follows it with a
/// `click` on the canvas. When that pick opened the modal, the follow-up
/// click would reach the page handler as an outside click and close the
/// modal again, so exactly one click is dropped. Taps arm nothing: the
/// touch handler cancels the emulated click instead.
#[derive(Debug, Default)]
pub struct DismissalRouter {
    swallow_next_click: bool,
}

impl DismissalRouter {
    /// A router with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the next page click will be dropped.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.swallow_next_click
    }

    /// Record a finished pick cycle.
    pub fn note_pick(&mut self, source: PointerSource, outcome: &PickOutcome) {
        if outcome.modal_opened && source == PointerSource::Click {
            self.swallow_next_click = true;
        }
    }

    /// Route one page click. Returns `true` if the modal was hidden.
    pub fn route_click<S: ModalSurface>(
        &mut self,
        controller: &mut PickController<S>,
        target: ClickTarget,
    ) -> bool {
        if std::mem::take(&mut self.swallow_next_click) {
            log::debug!("dropped follow-up click ({target:?})");
            return false;
        }
        controller.handle_click(target)
    }
}

//! Pick queries against the scene.
//!
//! [`PickScene`] is the seam between the highlight controller and whatever
//! owns the placemarks: the in-crate [`Scene`](crate::scene::Scene), a web
//! wrapper around it, or a test double.

mod footprint;

use glam::DVec2;

pub use footprint::{Footprint, FootprintHit, ScreenRect};

use crate::geo::Position;
use crate::scene::PlacemarkId;

/// One entry of a pick result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickedObject {
    /// The picked placemark.
    pub id: PlacemarkId,
    /// `true` when the label was hit rather than the image.
    pub label_picked: bool,
    /// The placemark's geographic position.
    pub position: Position,
}

/// Ordered result of one pick query. Empty when nothing is under the
/// point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickList {
    objects: Vec<PickedObject>,
}

impl PickList {
    /// An empty pick result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a picked object.
    pub fn push(&mut self, object: PickedObject) {
        self.objects.push(object);
    }

    /// Picked objects in scene order.
    #[must_use]
    pub fn objects(&self) -> &[PickedObject] {
        &self.objects
    }

    /// Number of picked objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether nothing was picked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl From<Vec<PickedObject>> for PickList {
    fn from(objects: Vec<PickedObject>) -> Self {
        Self { objects }
    }
}

impl IntoIterator for PickList {
    type Item = PickedObject;
    type IntoIter = std::vec::IntoIter<PickedObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.into_iter()
    }
}

/// Scene operations the highlight controller relies on.
///
/// Implementations own the placemarks; the controller only ever flips
/// their highlight flags through [`set_highlighted`](Self::set_highlighted).
pub trait PickScene {
    /// Convert client (page) coordinates to canvas coordinates.
    fn canvas_coordinates(&self, client: DVec2) -> DVec2;

    /// Every placemark under the canvas point, in scene order.
    fn pick(&self, point: DVec2) -> PickList;

    /// Set a placemark's highlight flag. Unknown ids are ignored.
    fn set_highlighted(&mut self, id: PlacemarkId, highlighted: bool);

    /// Request that the scene be drawn again.
    fn redraw(&mut self);
}

//! Scene model handed to the external globe renderer.
//!
//! A [`Scene`] is an ordered list of [`Layer`]s plus the camera and the
//! canvas viewport. Placemarks live inside renderable layers and are
//! addressed by [`PlacemarkId`]. The scene answers pick queries by
//! projecting each placemark and hit-testing its image and label.

mod layer;
mod placemark;

use glam::DVec2;
pub use layer::{ImagerySource, Layer, LayerKind};
pub use placemark::{
    Color, Offset, OffsetUnits, Placemark, PlacemarkAttributes, PlacemarkId,
    TextAttributes,
};

use crate::camera::{GlobeCamera, Viewport};
use crate::geo::Location;
use crate::picking::{Footprint, FootprintHit, PickList, PickScene, PickedObject};

/// Callback invoked whenever the scene requests a redraw.
pub type RedrawHook = Box<dyn FnMut()>;

/// Layers, camera, and canvas of one globe view.
pub struct Scene {
    layers: Vec<Layer>,
    camera: GlobeCamera,
    viewport: Viewport,
    redraw_requests: u64,
    redraw_hook: Option<RedrawHook>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new(camera: GlobeCamera, viewport: Viewport) -> Self {
        Self {
            layers: Vec::new(),
            camera,
            viewport,
            redraw_requests: 0,
            redraw_hook: None,
        }
    }

    /// Append a layer on top of the existing ones and return its index.
    pub fn add_layer(&mut self, layer: Layer) -> usize {
        log::debug!("adding layer '{}' (enabled: {})", layer.name, layer.enabled);
        self.layers.push(layer);
        self.layers.len() - 1
    }

    /// Layers in draw order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Mutable layer by index.
    pub fn layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    /// Index of the first layer with the given name.
    #[must_use]
    pub fn layer_index(&self, name: &str) -> Option<usize> {
        self.layers.iter().position(|l| l.name == name)
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &GlobeCamera {
        &self.camera
    }

    /// Mutable camera. Callers should [`redraw`](PickScene::redraw) after
    /// moving it.
    pub fn camera_mut(&mut self) -> &mut GlobeCamera {
        &mut self.camera
    }

    /// The canvas viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Replace the canvas viewport (after a resize or scroll).
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Install a callback run on every redraw request.
    pub fn set_redraw_hook(&mut self, hook: RedrawHook) {
        self.redraw_hook = Some(hook);
    }

    /// Number of redraws requested so far.
    #[must_use]
    pub fn redraw_requests(&self) -> u64 {
        self.redraw_requests
    }

    /// Placemark by id.
    #[must_use]
    pub fn placemark(&self, id: PlacemarkId) -> Option<&Placemark> {
        self.layers.get(id.layer)?.placemarks().get(id.index)
    }

    /// Mutable placemark by id.
    pub fn placemark_mut(&mut self, id: PlacemarkId) -> Option<&mut Placemark> {
        self.layers
            .get_mut(id.layer)?
            .placemarks_mut()?
            .get_mut(id.index)
    }

    /// All placemarks with their ids, in draw order.
    pub fn placemarks(&self) -> impl Iterator<Item = (PlacemarkId, &Placemark)> {
        self.layers.iter().enumerate().flat_map(|(layer, l)| {
            l.placemarks()
                .iter()
                .enumerate()
                .map(move |(index, p)| (PlacemarkId { layer, index }, p))
        })
    }

    /// First placemark positioned exactly at `location`.
    #[must_use]
    pub fn find_placemark_at(&self, location: Location) -> Option<PlacemarkId> {
        self.placemarks()
            .find(|(_, p)| p.position.is_at(location))
            .map(|(id, _)| id)
    }

    /// Ids of all highlighted placemarks, in draw order.
    #[must_use]
    pub fn highlighted(&self) -> Vec<PlacemarkId> {
        self.placemarks()
            .filter(|(_, p)| p.highlighted)
            .map(|(id, _)| id)
            .collect()
    }

    /// Canvas point of a visible placemark, or `None` when it is hidden
    /// behind the globe or outside the view volume.
    #[must_use]
    pub fn screen_point(&self, placemark: &Placemark) -> Option<DVec2> {
        let world = placemark.position.to_cartesian(placemark.altitude_mode);
        if self.camera.is_occluded(world) {
            return None;
        }
        self.camera.project(world, &self.viewport)
    }

    /// Drawn footprint of a placemark, if visible.
    #[must_use]
    pub fn footprint(&self, id: PlacemarkId) -> Option<Footprint> {
        let placemark = self.placemark(id)?;
        if !placemark.enabled || !self.layers[id.layer].is_pickable() {
            return None;
        }
        self.screen_point(placemark).map(|s| placemark.footprint(s))
    }
}

impl PickScene for Scene {
    fn canvas_coordinates(&self, client: DVec2) -> DVec2 {
        self.viewport.canvas_coordinates(client)
    }

    fn pick(&self, point: DVec2) -> PickList {
        let mut list = PickList::new();
        for (layer, l) in self.layers.iter().enumerate() {
            if !l.is_pickable() {
                continue;
            }
            for (index, placemark) in l.placemarks().iter().enumerate() {
                if !placemark.enabled {
                    continue;
                }
                let Some(screen) = self.screen_point(placemark) else {
                    continue;
                };
                if let Some(hit) = placemark.footprint(screen).hit(point) {
                    list.push(PickedObject {
                        id: PlacemarkId { layer, index },
                        label_picked: hit == FootprintHit::Label,
                        position: placemark.position,
                    });
                }
            }
        }
        log::debug!("pick at ({:.1}, {:.1}): {} object(s)", point.x, point.y, list.len());
        list
    }

    fn set_highlighted(&mut self, id: PlacemarkId, highlighted: bool) {
        if let Some(placemark) = self.placemark_mut(id) {
            placemark.highlighted = highlighted;
        }
    }

    fn redraw(&mut self) {
        self.redraw_requests += 1;
        if let Some(hook) = self.redraw_hook.as_mut() {
            hook();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::geo::{AltitudeMode, Position};

    fn pin(lat: f64, lon: f64) -> Placemark {
        let mut p = Placemark::new(Position::new(lat, lon, 100.0));
        p.altitude_mode = AltitudeMode::RelativeToGround;
        p.label = Some("Pin".to_owned());
        p.attributes.label_attributes.offset = Offset::fraction(0.5, 1.0);
        p.attributes.image_offset = Offset::fraction(0.5, 0.0);
        p
    }

    fn scene_with(placemarks: Vec<Placemark>) -> Scene {
        let mut scene =
            Scene::new(GlobeCamera::default(), Viewport::from_size(800.0, 600.0));
        let _ = scene.add_layer(Layer::compass());
        let _ = scene.add_layer(Layer::renderable("Pins").with_placemarks(placemarks));
        scene
    }

    fn pin_id(index: usize) -> PlacemarkId {
        PlacemarkId { layer: 1, index }
    }

    #[test]
    fn picking_the_image_reports_no_label_hit() {
        let scene = scene_with(vec![pin(30.0, -110.0)]);
        let image = scene.footprint(pin_id(0)).unwrap().image;
        let picked = scene.pick(image.center());
        assert_eq!(picked.len(), 1);
        assert_eq!(picked.objects()[0].id, pin_id(0));
        assert!(!picked.objects()[0].label_picked);
        assert_eq!(picked.objects()[0].position, Position::new(30.0, -110.0, 100.0));
    }

    #[test]
    fn picking_the_label_reports_label_hit() {
        let scene = scene_with(vec![pin(30.0, -110.0)]);
        let label = scene.footprint(pin_id(0)).unwrap().label.unwrap();
        let picked = scene.pick(label.center());
        assert_eq!(picked.len(), 1);
        assert!(picked.objects()[0].label_picked);
    }

    #[test]
    fn empty_sky_picks_nothing() {
        let scene = scene_with(vec![pin(30.0, -110.0)]);
        assert!(scene.pick(DVec2::new(5.0, 5.0)).is_empty());
    }

    #[test]
    fn overlapping_placemarks_are_all_picked_in_order() {
        let scene = scene_with(vec![pin(30.0, -110.0), pin(30.0, -110.0)]);
        let image = scene.footprint(pin_id(0)).unwrap().image;
        let ids: Vec<_> =
            scene.pick(image.center()).into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![pin_id(0), pin_id(1)]);
    }

    #[test]
    fn far_side_placemarks_are_not_pickable() {
        let scene = scene_with(vec![pin(-30.0, 70.0)]);
        assert!(scene.footprint(pin_id(0)).is_none());
        assert!(scene.pick(scene.viewport().center()).is_empty());
    }

    #[test]
    fn disabled_layers_and_placemarks_are_skipped() {
        let mut scene = scene_with(vec![pin(30.0, -110.0)]);
        let center = scene.footprint(pin_id(0)).unwrap().image.center();

        scene.placemark_mut(pin_id(0)).unwrap().enabled = false;
        assert!(scene.pick(center).is_empty());

        scene.placemark_mut(pin_id(0)).unwrap().enabled = true;
        scene.layer_mut(1).unwrap().enabled = false;
        assert!(scene.pick(center).is_empty());
    }

    #[test]
    fn set_highlighted_flips_only_the_target() {
        let mut scene = scene_with(vec![pin(30.0, -110.0), pin(31.0, -110.0)]);
        scene.set_highlighted(pin_id(1), true);
        assert_eq!(scene.highlighted(), vec![pin_id(1)]);
        // Unknown ids are ignored.
        scene.set_highlighted(PlacemarkId { layer: 0, index: 0 }, true);
        scene.set_highlighted(PlacemarkId { layer: 9, index: 0 }, true);
        assert_eq!(scene.highlighted(), vec![pin_id(1)]);
    }

    #[test]
    fn redraw_counts_and_runs_hook() {
        let mut scene = scene_with(Vec::new());
        let calls = Rc::new(Cell::new(0));
        let hook_calls = Rc::clone(&calls);
        scene.set_redraw_hook(Box::new(move || hook_calls.set(hook_calls.get() + 1)));
        scene.redraw();
        scene.redraw();
        assert_eq!(scene.redraw_requests(), 2);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn find_placemark_at_matches_exact_location() {
        let scene = scene_with(vec![pin(30.0, -110.0), pin(41.4459, -74.4229)]);
        assert_eq!(
            scene.find_placemark_at(Location::new(41.4459, -74.4229)),
            Some(pin_id(1))
        );
        assert_eq!(scene.find_placemark_at(Location::new(0.0, 0.0)), None);
    }
}

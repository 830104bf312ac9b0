use serde::{Deserialize, Serialize};

use super::placemark::Placemark;

/// Base imagery sets drawn by the external tile renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImagerySource {
    /// NASA Blue Marble.
    BlueMarble,
    /// Blue Marble with Landsat detail.
    BlueMarbleLandsat,
    /// Bing aerial imagery with road and place labels.
    BingAerialWithLabels,
}

impl ImagerySource {
    /// Display name shown in layer lists.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BlueMarble => "Blue Marble",
            Self::BlueMarbleLandsat => "Blue Marble & Landsat",
            Self::BingAerialWithLabels => "Bing Aerial with Labels",
        }
    }
}

/// What a layer contributes to the frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// Tiled base imagery.
    Imagery(ImagerySource),
    /// Atmosphere and sky drawn over the base layers.
    Atmosphere,
    /// Compass rose overlay.
    Compass,
    /// Cursor coordinates readout overlay.
    CoordinatesDisplay,
    /// Pan/zoom/tilt control overlay.
    ViewControls,
    /// User placemarks; the only pickable kind.
    Renderable(Vec<Placemark>),
}

/// A named, toggleable layer of the globe display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Display name.
    pub name: String,
    /// Whether the layer is drawn (and, for renderables, picked).
    pub enabled: bool,
    /// Layer contents. Private so placemarks can only be appended.
    kind: LayerKind,
}

impl Layer {
    fn with_kind(name: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            kind,
        }
    }

    /// Base imagery layer.
    #[must_use]
    pub fn imagery(source: ImagerySource) -> Self {
        Self::with_kind(source.display_name(), LayerKind::Imagery(source))
    }

    /// Atmosphere layer.
    #[must_use]
    pub fn atmosphere() -> Self {
        Self::with_kind("Atmosphere", LayerKind::Atmosphere)
    }

    /// Compass overlay layer.
    #[must_use]
    pub fn compass() -> Self {
        Self::with_kind("Compass", LayerKind::Compass)
    }

    /// Coordinates readout layer.
    #[must_use]
    pub fn coordinates_display() -> Self {
        Self::with_kind("Coordinates", LayerKind::CoordinatesDisplay)
    }

    /// View controls layer.
    #[must_use]
    pub fn view_controls() -> Self {
        Self::with_kind("View Controls", LayerKind::ViewControls)
    }

    /// Empty placemark layer.
    #[must_use]
    pub fn renderable(name: impl Into<String>) -> Self {
        Self::with_kind(name, LayerKind::Renderable(Vec::new()))
    }

    /// Set the enabled flag.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Append placemarks. No effect on non-renderable layers.
    #[must_use]
    pub fn with_placemarks(
        mut self,
        placemarks: impl IntoIterator<Item = Placemark>,
    ) -> Self {
        if let LayerKind::Renderable(existing) = &mut self.kind {
            existing.extend(placemarks);
        }
        self
    }

    /// Layer contents.
    #[must_use]
    pub fn kind(&self) -> &LayerKind {
        &self.kind
    }

    /// Placemarks in this layer; empty for non-renderable layers.
    #[must_use]
    pub fn placemarks(&self) -> &[Placemark] {
        match &self.kind {
            LayerKind::Renderable(placemarks) => placemarks,
            _ => &[],
        }
    }

    /// Mutable placemarks, or `None` for non-renderable layers. The slice
    /// cannot grow or shrink, so [`PlacemarkId`](super::PlacemarkId)s stay
    /// valid.
    pub fn placemarks_mut(&mut self) -> Option<&mut [Placemark]> {
        match &mut self.kind {
            LayerKind::Renderable(placemarks) => Some(placemarks.as_mut_slice()),
            _ => None,
        }
    }

    /// Whether this layer takes part in pick queries.
    #[must_use]
    pub fn is_pickable(&self) -> bool {
        self.enabled && matches!(self.kind, LayerKind::Renderable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Position;

    #[test]
    fn only_enabled_renderables_are_pickable() {
        assert!(Layer::renderable("Placemarks").is_pickable());
        assert!(!Layer::renderable("Placemarks")
            .with_enabled(false)
            .is_pickable());
        assert!(!Layer::compass().is_pickable());
        assert!(!Layer::imagery(ImagerySource::BlueMarble).is_pickable());
    }

    #[test]
    fn placemarks_are_ignored_on_overlay_layers() {
        let pin = Placemark::new(Position::default());
        let mut compass = Layer::compass().with_placemarks([pin.clone()]);
        assert!(compass.placemarks().is_empty());
        assert!(compass.placemarks_mut().is_none());

        let layer = Layer::renderable("Pins").with_placemarks([pin]);
        assert_eq!(layer.placemarks().len(), 1);
    }

    #[test]
    fn placemark_edits_keep_indices() {
        let pins = [
            Placemark::new(Position::new(1.0, 2.0, 0.0)),
            Placemark::new(Position::new(3.0, 4.0, 0.0)),
        ];
        let mut layer = Layer::renderable("Pins").with_placemarks(pins);
        let slice = layer.placemarks_mut().unwrap();
        slice[1].highlighted = true;
        assert_eq!(slice.len(), 2);

        let layer = layer.with_placemarks([Placemark::new(Position::default())]);
        assert_eq!(layer.placemarks().len(), 3);
        assert!(layer.placemarks()[1].highlighted);
        assert!(matches!(layer.kind(), LayerKind::Renderable(p) if p.len() == 3));
    }

    #[test]
    fn imagery_layers_are_named_after_their_source() {
        let layer = Layer::imagery(ImagerySource::BingAerialWithLabels);
        assert_eq!(layer.name, "Bing Aerial with Labels");
    }
}

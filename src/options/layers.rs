use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Layers", inline)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
/// Which base and overlay layers start enabled.
pub struct LayerOptions {
    /// Blue Marble base imagery.
    #[schemars(title = "Blue Marble")]
    pub blue_marble: bool,
    /// Blue Marble + Landsat imagery.
    #[schemars(title = "Blue Marble Landsat")]
    pub blue_marble_landsat: bool,
    /// Bing aerial imagery with labels.
    #[schemars(title = "Bing Aerial with Labels")]
    pub bing_aerial_with_labels: bool,
    /// Atmosphere drawn over the base layers.
    #[schemars(title = "Atmosphere")]
    pub atmosphere: bool,
    /// Compass overlay.
    #[schemars(title = "Compass")]
    pub compass: bool,
    /// Cursor coordinates readout.
    #[schemars(title = "Coordinates")]
    pub coordinates_display: bool,
    /// Pan/zoom/tilt controls overlay.
    #[schemars(title = "View Controls")]
    pub view_controls: bool,
}

impl Default for LayerOptions {
    fn default() -> Self {
        Self {
            blue_marble: true,
            blue_marble_landsat: false,
            bing_aerial_with_labels: true,
            atmosphere: true,
            compass: true,
            coordinates_display: true,
            view_controls: true,
        }
    }
}

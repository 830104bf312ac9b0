use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pushpin images shipped with the globe library, one placemark each.
const PUSHPIN_IMAGES: [&str; 21] = [
    "plain-black.png",
    "plain-blue.png",
    "plain-brown.png",
    "plain-gray.png",
    "plain-green.png",
    "plain-orange.png",
    "plain-purple.png",
    "plain-red.png",
    "plain-teal.png",
    "plain-white.png",
    "plain-yellow.png",
    "castshadow-black.png",
    "castshadow-blue.png",
    "castshadow-brown.png",
    "castshadow-gray.png",
    "castshadow-green.png",
    "castshadow-orange.png",
    "castshadow-purple.png",
    "castshadow-red.png",
    "castshadow-teal.png",
    "castshadow-white.png",
];

/// A single named placemark outside the pushpin row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct LandmarkOptions {
    /// Label text (first line).
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Altitude above ground in meters.
    pub altitude: f64,
    /// Image path relative to the base URL.
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Placemarks", inline)]
#[serde(default)]
/// Layout and appearance of the demo placemarks.
pub struct PlacemarkOptions {
    /// Prefix prepended to every image path.
    #[schemars(skip)]
    pub base_url: String,
    /// Latitude of the pushpin row in degrees.
    #[schemars(title = "Row Latitude", range(min = -90.0, max = 90.0))]
    pub origin_latitude: f64,
    /// Longitude of the first pushpin in degrees.
    #[schemars(title = "Row Longitude", range(min = -180.0, max = 180.0))]
    pub origin_longitude: f64,
    /// Longitude increment between consecutive pushpins.
    #[schemars(title = "Spacing", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub longitude_step: f64,
    /// Pushpin altitude above ground in meters.
    #[schemars(title = "Altitude", range(min = 0.0))]
    pub altitude: f64,
    /// Pushpin image file names under `images/pushpins/`.
    #[schemars(skip)]
    pub images: Vec<String>,
    /// Image scale when not highlighted.
    #[schemars(title = "Image Scale", range(min = 0.1, max = 4.0), extend("step" = 0.1))]
    pub image_scale: f64,
    /// Image scale when highlighted.
    #[schemars(title = "Highlight Scale", range(min = 0.1, max = 4.0), extend("step" = 0.1))]
    pub highlight_image_scale: f64,
    /// Unscaled image edge length in pixels.
    #[schemars(skip)]
    pub image_size: f64,
    /// Label font size in pixels.
    #[schemars(title = "Label Size", range(min = 6.0, max = 48.0), extend("step" = 1.0))]
    pub label_font_size: f64,
    /// Named placemarks placed in their own layer.
    #[schemars(skip)]
    pub landmarks: Vec<LandmarkOptions>,
}

impl Default for PlacemarkOptions {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            origin_latitude: 47.684444,
            origin_longitude: -121.129722,
            longitude_step: 1.0,
            altitude: 1e2,
            images: PUSHPIN_IMAGES.iter().map(|&s| s.to_owned()).collect(),
            image_scale: 1.0,
            highlight_image_scale: 1.2,
            image_size: 64.0,
            label_font_size: 14.0,
            landmarks: vec![
                LandmarkOptions {
                    name: "Naa".to_owned(),
                    latitude: 41.4459,
                    longitude: -74.4229,
                    altitude: 1e2,
                    image: "images/Naa.png".to_owned(),
                },
                LandmarkOptions {
                    name: "Kunming".to_owned(),
                    latitude: 24.8797,
                    longitude: 102.8332,
                    altitude: 1e2,
                    image: "images/cloud.png".to_owned(),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Modal", inline)]
#[serde(default)]
/// Where the placemark that opens the modal dialog sits.
pub struct ModalOptions {
    /// Latitude of the designated placemark in degrees.
    #[schemars(title = "Trigger Latitude", range(min = -90.0, max = 90.0))]
    pub trigger_latitude: f64,
    /// Longitude of the designated placemark in degrees.
    #[schemars(title = "Trigger Longitude", range(min = -180.0, max = 180.0))]
    pub trigger_longitude: f64,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            trigger_latitude: 41.4459,
            trigger_longitude: -74.4229,
        }
    }
}

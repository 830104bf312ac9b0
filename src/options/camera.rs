use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial look-at navigator state.
pub struct CameraOptions {
    /// Latitude of the look-at point in degrees.
    #[schemars(title = "Look-at Latitude", range(min = -90.0, max = 90.0))]
    pub look_at_latitude: f64,
    /// Longitude of the look-at point in degrees.
    #[schemars(title = "Look-at Longitude", range(min = -180.0, max = 180.0))]
    pub look_at_longitude: f64,
    /// Eye distance from the look-at point in meters.
    #[schemars(title = "Range", range(min = 1.0))]
    pub range: f64,
    /// Heading in degrees clockwise from north.
    #[schemars(title = "Heading", range(min = -180.0, max = 180.0))]
    pub heading: f64,
    /// Tilt in degrees away from straight down.
    #[schemars(title = "Tilt", range(min = 0.0, max = 90.0))]
    pub tilt: f64,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            look_at_latitude: 30.0,
            look_at_longitude: -110.0,
            range: 10e6,
            heading: 0.0,
            tilt: 0.0,
            fovy: 45.0,
        }
    }
}

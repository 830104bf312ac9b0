//! Centralized scene and interaction options with TOML support.
//!
//! Camera, layer toggles, placemark layout, the modal trigger, and input
//! thresholds are consolidated here. Options serialize to/from TOML so a
//! scene can be described by a partial file.

mod camera;
mod input;
mod layers;
mod placemarks;

use std::path::Path;

pub use camera::CameraOptions;
pub use input::InputOptions;
pub use layers::LayerOptions;
pub use placemarks::{LandmarkOptions, ModalOptions, PlacemarkOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GeoPickError;
use crate::geo::Location;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Initial camera state.
    pub camera: CameraOptions,
    /// Base and overlay layer toggles.
    pub layers: LayerOptions,
    /// Pushpin row and landmark placemarks.
    pub placemarks: PlacemarkOptions,
    /// Designated placemark that opens the modal.
    pub modal: ModalOptions,
    /// Click and tap thresholds.
    pub input: InputOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Location whose placemark opens the modal dialog when picked.
    #[must_use]
    pub fn modal_trigger(&self) -> Location {
        Location::new(
            self.modal.trigger_latitude,
            self.modal.trigger_longitude,
        )
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, GeoPickError> {
        toml::from_str(content)
            .map_err(|e| GeoPickError::OptionsParse(e.to_string()))
    }

    /// Parse options from a JSON string. Missing fields use defaults.
    pub fn from_json(content: &str) -> Result<Self, GeoPickError> {
        serde_json::from_str(content)
            .map_err(|e| GeoPickError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GeoPickError> {
        let content =
            std::fs::read_to_string(path).map_err(GeoPickError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GeoPickError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GeoPickError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GeoPickError::Io)?;
        }
        std::fs::write(path, content).map_err(GeoPickError::Io)
    }
}

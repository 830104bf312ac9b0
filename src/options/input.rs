use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Click and tap recognition thresholds.
pub struct InputOptions {
    /// Cursor travel in pixels beyond which a press becomes a drag.
    #[schemars(title = "Click Slop", range(min = 0.0, max = 20.0), extend("step" = 0.5))]
    pub click_slop: f64,
    /// Touch travel in pixels beyond which a touch is no longer a tap.
    #[schemars(title = "Tap Slop", range(min = 0.0, max = 40.0), extend("step" = 1.0))]
    pub tap_slop: f64,
    /// Longest touch, in milliseconds, still recognized as a tap.
    #[schemars(title = "Tap Duration", range(min = 50, max = 2000))]
    pub tap_max_millis: u64,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            click_slop: 1.0,
            tap_slop: 10.0,
            tap_max_millis: 500,
        }
    }
}

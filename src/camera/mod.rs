//! Globe camera and canvas viewport.
//!
//! Provides a look-at navigator around a spherical globe, world-to-canvas
//! projection, and horizon occlusion for picking.

/// Look-at camera, projection, and canvas viewport.
pub mod core;

pub use self::core::{GlobeCamera, Viewport};

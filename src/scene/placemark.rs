use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::geo::{AltitudeMode, Position};
use crate::picking::{Footprint, ScreenRect};

/// Average glyph advance as a fraction of the font size.
const GLYPH_WIDTH: f64 = 0.6;
/// Line height as a fraction of the font size.
const LINE_HEIGHT: f64 = 1.2;

/// Stable identity of a placemark: its layer index and its index within
/// that layer. Layers and placemarks are append-only, so ids never move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
pub struct PlacemarkId {
    /// Index of the owning layer in the scene's layer list.
    pub layer: usize,
    /// Index of the placemark within its layer.
    pub index: usize,
}

/// RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque red.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);

    /// Opaque color from RGB components.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Units of one offset component.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OffsetUnits {
    /// Fraction of the image or label size.
    #[default]
    Fraction,
    /// Pixels from the left/bottom edge.
    Pixels,
    /// Pixels from the right/top edge.
    InsetPixels,
}

/// Point within an image or label, measured from its bottom-left corner
/// with y up. That point is placed at the placemark's screen point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    /// Units of `x`.
    pub x_units: OffsetUnits,
    /// Horizontal component.
    pub x: f64,
    /// Units of `y`.
    pub y_units: OffsetUnits,
    /// Vertical component.
    pub y: f64,
}

impl Offset {
    /// Offset with both components as fractions.
    #[must_use]
    pub const fn fraction(x: f64, y: f64) -> Self {
        Self {
            x_units: OffsetUnits::Fraction,
            x,
            y_units: OffsetUnits::Fraction,
            y,
        }
    }

    /// Resolve to pixels for a rectangle of the given size.
    #[must_use]
    pub fn to_pixels(&self, width: f64, height: f64) -> DVec2 {
        let resolve = |units: OffsetUnits, value: f64, extent: f64| match units
        {
            OffsetUnits::Fraction => value * extent,
            OffsetUnits::Pixels => value,
            OffsetUnits::InsetPixels => extent - value,
        };
        DVec2::new(
            resolve(self.x_units, self.x, width),
            resolve(self.y_units, self.y, height),
        )
    }

    /// Canvas rectangle (y down) of a `size` box whose offset point sits at
    /// `anchor`.
    fn place(&self, anchor: DVec2, size: DVec2) -> ScreenRect {
        let offset = self.to_pixels(size.x, size.y);
        let left = anchor.x - offset.x;
        let bottom = anchor.y + offset.y;
        ScreenRect::new(
            DVec2::new(left, bottom - size.y),
            DVec2::new(left + size.x, bottom),
        )
    }
}

/// Label appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAttributes {
    /// Text color.
    pub color: Color,
    /// Label point placed at the placemark's screen point.
    pub offset: Offset,
    /// Font size in pixels.
    pub font_size: f64,
}

impl Default for TextAttributes {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            offset: Offset::fraction(0.5, 0.0),
            font_size: 14.0,
        }
    }
}

/// Appearance of a placemark's image, label, and leader line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacemarkAttributes {
    /// Image URL or path, if any.
    pub image_source: Option<String>,
    /// Image scale factor.
    pub image_scale: f64,
    /// Image point placed at the placemark's screen point.
    pub image_offset: Offset,
    /// Color the image is modulated with.
    pub image_color: Color,
    /// Unscaled image edge length in pixels.
    pub image_size: f64,
    /// Label appearance.
    pub label_attributes: TextAttributes,
    /// Whether to draw a line from the image down to the ground.
    pub draw_leader_line: bool,
    /// Leader line color.
    pub leader_line_color: Color,
}

impl Default for PlacemarkAttributes {
    fn default() -> Self {
        Self {
            image_source: None,
            image_scale: 1.0,
            image_offset: Offset::fraction(0.5, 0.5),
            image_color: Color::WHITE,
            image_size: 64.0,
            label_attributes: TextAttributes::default(),
            draw_leader_line: false,
            leader_line_color: Color::WHITE,
        }
    }
}

/// A pickable, labeled image at a geographic position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placemark {
    /// Geographic position.
    pub position: Position,
    /// How `position.altitude` is interpreted.
    pub altitude_mode: AltitudeMode,
    /// Label text; lines separated by `\n`.
    pub label: Option<String>,
    /// Normal appearance.
    pub attributes: PlacemarkAttributes,
    /// Appearance while highlighted; falls back to `attributes`.
    pub highlight_attributes: Option<PlacemarkAttributes>,
    /// Whether the placemark is currently highlighted.
    pub highlighted: bool,
    /// Whether the placemark is drawn and pickable.
    pub enabled: bool,
}

impl Placemark {
    /// Create a placemark with default attributes.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self {
            position,
            altitude_mode: AltitudeMode::Absolute,
            label: None,
            attributes: PlacemarkAttributes::default(),
            highlight_attributes: None,
            highlighted: false,
            enabled: true,
        }
    }

    /// Attributes in effect for the current highlight state.
    #[must_use]
    pub fn active_attributes(&self) -> &PlacemarkAttributes {
        match (&self.highlight_attributes, self.highlighted) {
            (Some(highlight), true) => highlight,
            _ => &self.attributes,
        }
    }

    /// Image and label rectangles when the placemark's point is drawn at
    /// `screen`.
    #[must_use]
    pub fn footprint(&self, screen: DVec2) -> Footprint {
        let attrs = self.active_attributes();
        let edge = attrs.image_size * attrs.image_scale;
        let image = attrs.image_offset.place(screen, DVec2::splat(edge));

        let label = self
            .label
            .as_deref()
            .and_then(|text| label_size(text, attrs.label_attributes.font_size))
            .map(|size| attrs.label_attributes.offset.place(screen, size));

        Footprint { image, label }
    }
}

/// Estimated label extent, or `None` for a blank label.
fn label_size(text: &str, font_size: f64) -> Option<DVec2> {
    let lines = text.lines().count();
    let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    if longest == 0 {
        return None;
    }
    Some(DVec2::new(
        longest as f64 * font_size * GLYPH_WIDTH,
        lines as f64 * font_size * LINE_HEIGHT,
    ))
}

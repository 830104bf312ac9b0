//! The placemark demo scene.
//!
//! Base imagery and UI overlay layers, a row of labeled pushpins (one per
//! pushpin image), and a landmark layer whose first placemark opens the
//! modal dialog when picked.

use crate::camera::{GlobeCamera, Viewport};
use crate::geo::{AltitudeMode, Position};
use crate::options::{LandmarkOptions, LayerOptions, Options, PlacemarkOptions};
use crate::scene::{
    Color, ImagerySource, Layer, Offset, Placemark, PlacemarkAttributes, Scene,
};
use crate::util::to_precision;

/// Name of the pushpin layer.
pub const PLACEMARKS_LAYER: &str = "Placemarks";
/// Name of the landmark layer.
pub const LANDMARKS_LAYER: &str = "Go Naa";

/// Directory of pushpin images under the base URL.
const PUSHPIN_DIR: &str = "images/pushpins/";

/// Build the full demo scene.
#[must_use]
pub fn build_scene(options: &Options, viewport: Viewport) -> Scene {
    let mut scene =
        Scene::new(GlobeCamera::from_options(&options.camera), viewport);
    for layer in base_layers(&options.layers) {
        let _ = scene.add_layer(layer);
    }
    let _ = scene.add_layer(
        Layer::renderable(PLACEMARKS_LAYER)
            .with_placemarks(pushpins(&options.placemarks)),
    );
    let _ = scene.add_layer(
        Layer::renderable(LANDMARKS_LAYER)
            .with_placemarks(landmarks(&options.placemarks)),
    );
    log::info!(
        "demo scene: {} layers, {} placemarks",
        scene.layers().len(),
        scene.placemarks().count()
    );
    scene
}

/// Imagery first, atmosphere on top of them, then the UI overlays.
fn base_layers(layers: &LayerOptions) -> Vec<Layer> {
    vec![
        Layer::imagery(ImagerySource::BlueMarble)
            .with_enabled(layers.blue_marble),
        Layer::imagery(ImagerySource::BlueMarbleLandsat)
            .with_enabled(layers.blue_marble_landsat),
        Layer::imagery(ImagerySource::BingAerialWithLabels)
            .with_enabled(layers.bing_aerial_with_labels),
        Layer::atmosphere().with_enabled(layers.atmosphere),
        Layer::compass().with_enabled(layers.compass),
        Layer::coordinates_display().with_enabled(layers.coordinates_display),
        Layer::view_controls().with_enabled(layers.view_controls),
    ]
}

/// Attributes shared by every pushpin; only the image differs.
fn pushpin_attributes(options: &PlacemarkOptions) -> PlacemarkAttributes {
    let mut attributes = PlacemarkAttributes {
        image_scale: options.image_scale,
        image_offset: Offset::fraction(0.3, 0.0),
        image_color: Color::WHITE,
        image_size: options.image_size,
        draw_leader_line: true,
        leader_line_color: Color::RED,
        ..PlacemarkAttributes::default()
    };
    attributes.label_attributes.offset = Offset::fraction(0.5, 1.0);
    attributes.label_attributes.color = Color::YELLOW;
    attributes.label_attributes.font_size = options.label_font_size;
    attributes
}

/// One pushpin per configured image, stepping east along a parallel.
#[must_use]
pub fn pushpins(options: &PlacemarkOptions) -> Vec<Placemark> {
    let common = pushpin_attributes(options);
    options
        .images
        .iter()
        .enumerate()
        .map(|(i, image)| {
            let position = Position::new(
                options.origin_latitude,
                options.origin_longitude + i as f64 * options.longitude_step,
                options.altitude,
            );
            let mut placemark = Placemark::new(position);
            placemark.label = Some(pushpin_label(i, position));
            placemark.altitude_mode = AltitudeMode::RelativeToGround;

            placemark.attributes = PlacemarkAttributes {
                image_source: Some(format!(
                    "{}{PUSHPIN_DIR}{image}",
                    options.base_url
                )),
                ..common.clone()
            };
            // Identical to the normal attributes except for the scale.
            placemark.highlight_attributes = Some(PlacemarkAttributes {
                image_scale: options.highlight_image_scale,
                ..placemark.attributes.clone()
            });
            placemark
        })
        .collect()
}

/// `"Placemark 3\nLat 47.68\nLon -118.13"`.
fn pushpin_label(index: usize, position: Position) -> String {
    format!(
        "Placemark {index}\nLat {}\nLon {}",
        to_precision(position.latitude, 4),
        to_precision(position.longitude, 5)
    )
}

/// Named placemarks with their own images and unscaled highlights.
#[must_use]
pub fn landmarks(options: &PlacemarkOptions) -> Vec<Placemark> {
    options
        .landmarks
        .iter()
        .map(|landmark| landmark_placemark(landmark, options))
        .collect()
}

fn landmark_placemark(
    landmark: &LandmarkOptions,
    options: &PlacemarkOptions,
) -> Placemark {
    let mut placemark = Placemark::new(Position::new(
        landmark.latitude,
        landmark.longitude,
        landmark.altitude,
    ));
    placemark.label = Some(format!(
        "{}\nLat {}\nLon {}",
        landmark.name, landmark.latitude, landmark.longitude
    ));
    placemark.altitude_mode = AltitudeMode::RelativeToGround;

    let mut attributes = PlacemarkAttributes {
        image_source: Some(format!("{}{}", options.base_url, landmark.image)),
        image_size: options.image_size,
        ..PlacemarkAttributes::default()
    };
    attributes.label_attributes.font_size = options.label_font_size;
    placemark.highlight_attributes = Some(attributes.clone());
    placemark.attributes = attributes;
    placemark
}

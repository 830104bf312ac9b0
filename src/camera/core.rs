use glam::{DMat4, DVec2, DVec3, DVec4};

use crate::geo::{Location, GLOBE_RADIUS};
use crate::options::CameraOptions;

/// Smallest near-plane distance in meters.
const MIN_NEAR: f64 = 1.0;

/// Slack, in meters, before a point counts as hidden behind the globe.
/// Keeps points lying exactly on the surface visible.
const OCCLUSION_EPSILON: f64 = 1.0;

/// Canvas rectangle in client (page) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Left edge of the canvas in client pixels.
    pub left: f64,
    /// Top edge of the canvas in client pixels.
    pub top: f64,
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
}

impl Viewport {
    /// A viewport of the given size anchored at the client origin.
    #[must_use]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    /// Width / height, guarded against a collapsed canvas.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.width.max(1.0) / self.height.max(1.0)
    }

    /// Canvas center in canvas coordinates.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Convert client coordinates to canvas coordinates (origin at the
    /// canvas' upper-left corner, y down).
    #[must_use]
    pub fn canvas_coordinates(&self, client: DVec2) -> DVec2 {
        client - DVec2::new(self.left, self.top)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_size(1024.0, 768.0)
    }
}

/// Look-at camera orbiting a spherical globe.
///
/// The eye sits `range` meters from the look-at point on the surface,
/// rotated clockwise from north by `heading` and tilted away from the
/// surface normal by `tilt`.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobeCamera {
    /// Surface point the camera looks at.
    pub look_at: Location,
    /// Distance from the eye to the look-at point in meters.
    pub range: f64,
    /// Heading in degrees clockwise from north.
    pub heading: f64,
    /// Tilt in degrees away from looking straight down.
    pub tilt: f64,
    /// Vertical field of view in degrees.
    pub fovy: f64,
}

impl GlobeCamera {
    /// Build a camera from configured options.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            look_at: Location::new(
                options.look_at_latitude,
                options.look_at_longitude,
            ),
            range: options.range,
            heading: options.heading,
            tilt: options.tilt,
            fovy: options.fovy,
        }
    }

    /// Look-at point in Cartesian coordinates.
    #[must_use]
    pub fn target(&self) -> DVec3 {
        self.look_at.unit_normal() * GLOBE_RADIUS
    }

    /// Eye position and up vector.
    fn frame(&self) -> (DVec3, DVec3) {
        let normal = self.look_at.unit_normal();
        let north = self.look_at.north_tangent();
        let east = north.cross(normal);

        let heading = self.heading.to_radians();
        let forward = north * heading.cos() + east * heading.sin();

        let tilt = self.tilt.to_radians();
        let eye = self.target()
            + (normal * tilt.cos() - forward * tilt.sin()) * self.range;
        let up = forward * tilt.cos() + normal * tilt.sin();
        (eye, up)
    }

    /// Eye position in Cartesian coordinates.
    #[must_use]
    pub fn eye(&self) -> DVec3 {
        self.frame().0
    }

    /// Near and far clip distances for the current eye.
    fn clip_distances(&self) -> (f64, f64) {
        let eye_altitude = self.eye().length() - GLOBE_RADIUS;
        let near = (eye_altitude * 0.5).max(MIN_NEAR);
        let far = self.range + 2.0 * GLOBE_RADIUS;
        (near, far)
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self, aspect: f64) -> DMat4 {
        let (eye, up) = self.frame();
        let view = DMat4::look_at_rh(eye, self.target(), up);
        let (near, far) = self.clip_distances();
        // perspective_rh uses a [0,1] depth range
        let proj =
            DMat4::perspective_rh(self.fovy.to_radians(), aspect, near, far);
        proj * view
    }

    /// Project a Cartesian point to canvas coordinates (y down).
    ///
    /// Returns `None` when the point is behind the eye or outside the
    /// depth range. Points off the sides of the canvas still project.
    #[must_use]
    pub fn project(&self, point: DVec3, viewport: &Viewport) -> Option<DVec2> {
        let clip = self.build_matrix(viewport.aspect())
            * DVec4::new(point.x, point.y, point.z, 1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        if !(0.0..=1.0).contains(&ndc.z) {
            return None;
        }
        Some(DVec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.width,
            (1.0 - ndc.y) * 0.5 * viewport.height,
        ))
    }

    /// Whether the globe lies between the eye and `point`.
    #[must_use]
    pub fn is_occluded(&self, point: DVec3) -> bool {
        let eye = self.eye();
        let to_point = point - eye;
        let distance = to_point.length();
        if distance <= f64::EPSILON {
            return false;
        }
        let dir = to_point / distance;

        let b = eye.dot(dir);
        let c = eye.length_squared() - GLOBE_RADIUS * GLOBE_RADIUS;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return false;
        }
        let t = -b - discriminant.sqrt();
        t > 0.0 && t < distance - OCCLUSION_EPSILON
    }
}

impl Default for GlobeCamera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{AltitudeMode, Position};

    #[test]
    fn look_at_point_projects_to_canvas_center() {
        let camera = GlobeCamera::default();
        let viewport = Viewport::from_size(800.0, 600.0);
        let screen = camera.project(camera.target(), &viewport).unwrap();
        assert!((screen - viewport.center()).length() < 1e-6);
    }

    #[test]
    fn north_is_up_on_screen() {
        let camera = GlobeCamera::default();
        let viewport = Viewport::from_size(800.0, 600.0);
        let north = Position::new(
            camera.look_at.latitude + 5.0,
            camera.look_at.longitude,
            0.0,
        )
        .to_cartesian(AltitudeMode::Absolute);
        let screen = camera.project(north, &viewport).unwrap();
        assert!(screen.y < viewport.center().y);
        assert!((screen.x - viewport.center().x).abs() < 1.0);
    }

    #[test]
    fn heading_rotates_the_view() {
        let viewport = Viewport::from_size(800.0, 600.0);
        let camera = GlobeCamera {
            heading: 90.0,
            ..GlobeCamera::default()
        };
        let east = Position::new(
            camera.look_at.latitude,
            camera.look_at.longitude + 5.0,
            0.0,
        )
        .to_cartesian(AltitudeMode::Absolute);
        let screen = camera.project(east, &viewport).unwrap();
        // Facing east, points to the east appear above the center.
        assert!(screen.y < viewport.center().y);
    }

    #[test]
    fn far_side_of_globe_is_occluded() {
        let camera = GlobeCamera::default();
        let antipode = Position::new(
            -camera.look_at.latitude,
            camera.look_at.longitude + 180.0,
            100.0,
        )
        .to_cartesian(AltitudeMode::Absolute);
        assert!(camera.is_occluded(antipode));
        assert!(!camera.is_occluded(camera.target()));
    }

    #[test]
    fn canvas_coordinates_subtract_origin() {
        let viewport = Viewport {
            left: 20.0,
            top: 50.0,
            width: 640.0,
            height: 480.0,
        };
        let canvas = viewport.canvas_coordinates(DVec2::new(120.0, 80.0));
        assert_eq!(canvas, DVec2::new(100.0, 30.0));
    }
}

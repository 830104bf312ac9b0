use glam::DVec2;

/// Axis-aligned rectangle in canvas coordinates (y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Upper-left corner.
    pub min: DVec2,
    /// Lower-right corner.
    pub max: DVec2,
}

impl ScreenRect {
    /// Rectangle spanning two corners.
    #[must_use]
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Whether `point` lies inside or on the edge.
    #[must_use]
    pub fn contains(&self, point: DVec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Which part of a placemark a pick point landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FootprintHit {
    /// The image (takes precedence where image and label overlap).
    Image,
    /// The label only.
    Label,
}

/// Where a placemark's image and label are drawn on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    /// Image rectangle.
    pub image: ScreenRect,
    /// Label rectangle, absent for unlabeled placemarks.
    pub label: Option<ScreenRect>,
}

impl Footprint {
    /// Hit-test a canvas point.
    #[must_use]
    pub fn hit(&self, point: DVec2) -> Option<FootprintHit> {
        if self.image.contains(point) {
            Some(FootprintHit::Image)
        } else if self.label.is_some_and(|l| l.contains(point)) {
            Some(FootprintHit::Label)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footprint() -> Footprint {
        Footprint {
            image: ScreenRect::new(DVec2::new(0.0, 0.0), DVec2::new(10.0, 10.0)),
            label: Some(ScreenRect::new(
                DVec2::new(-5.0, 8.0),
                DVec2::new(15.0, 20.0),
            )),
        }
    }

    #[test]
    fn image_wins_over_overlapping_label() {
        assert_eq!(
            footprint().hit(DVec2::new(5.0, 9.0)),
            Some(FootprintHit::Image)
        );
    }

    #[test]
    fn label_only_region_reports_label() {
        assert_eq!(
            footprint().hit(DVec2::new(-2.0, 15.0)),
            Some(FootprintHit::Label)
        );
    }

    #[test]
    fn outside_both_misses() {
        assert_eq!(footprint().hit(DVec2::new(30.0, 30.0)), None);
    }

    #[test]
    fn corners_are_normalized() {
        let rect = ScreenRect::new(DVec2::new(4.0, 1.0), DVec2::new(0.0, 3.0));
        assert_eq!(rect.min, DVec2::new(0.0, 1.0));
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 2.0);
        assert_eq!(rect.center(), DVec2::new(2.0, 2.0));
    }
}

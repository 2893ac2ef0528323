use crate::GeoPoint;
use crate::geodesy::check_inside_longitude;

/// Bounding box for geographic areas, in degrees
///
/// A box whose `left` is greater than its `right` crosses the antimeridian:
/// it spans from `left` eastward through ±180° to `right`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f64,   // west longitude
    pub top: f64,    // north latitude
    pub right: f64,  // east longitude
    pub bottom: f64, // south latitude
}

impl BoundingBox {
    /// Create a bounding box from a closed ring of points
    ///
    /// The ring is treated as closed (last point connects back to the first).
    /// If any edge spans more than 180° of longitude the ring is taken to
    /// cross the antimeridian and a wrapped box is returned.
    ///
    /// Returns `None` if the slice is empty.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let first = points.first()?;

        let crosses_antimeridian = points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .any(|(a, b)| (b.longitude - a.longitude).abs() > 180.0);

        // Shift the western hemisphere by a full turn so the span is contiguous
        let shift = |lon: f64| {
            if crosses_antimeridian && lon < 0.0 {
                lon + 360.0
            } else {
                lon
            }
        };

        let mut bbox = Self::from(GeoPoint::new(first.latitude, shift(first.longitude)));
        for point in &points[1..] {
            bbox.extend(GeoPoint::new(point.latitude, shift(point.longitude)));
        }

        if bbox.right > 180.0 {
            bbox.right -= 360.0;
        }
        if bbox.left > 180.0 {
            bbox.left -= 360.0;
        }
        Some(bbox)
    }

    /// Extend bounding box to include a point
    ///
    /// Only valid on boxes that do not wrap.
    pub fn extend(&mut self, point: GeoPoint) {
        self.left = self.left.min(point.longitude);
        self.right = self.right.max(point.longitude);
        self.top = self.top.max(point.latitude);
        self.bottom = self.bottom.min(point.latitude);
    }

    /// Whether the box crosses the antimeridian
    pub fn is_wrapped(&self) -> bool {
        self.left > self.right
    }

    /// Strict longitude containment, wrap-aware
    pub fn contains_longitude(&self, longitude: f64) -> bool {
        check_inside_longitude(longitude, self.left, self.right)
    }

    /// Strict latitude containment
    pub fn contains_latitude(&self, latitude: f64) -> bool {
        latitude > self.bottom && latitude < self.top
    }

    /// Cheap pre-check before a full point-in-polygon walk
    pub fn may_contain(&self, point: &GeoPoint) -> bool {
        self.contains_latitude(point.latitude) && self.contains_longitude(point.longitude)
    }
}

impl From<GeoPoint> for BoundingBox {
    fn from(point: GeoPoint) -> Self {
        Self {
            left: point.longitude,
            top: point.latitude,
            right: point.longitude,
            bottom: point.latitude,
        }
    }
}

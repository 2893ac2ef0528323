use crate::geodesy;
use crate::{AirspaceClass, AltitudeLimit, BoundingBox, GeoPoint};
use geo::{Closest, Contains, HaversineClosestPoint, LineString, Polygon};

/// Attributes shared by circular and polygonal airspaces
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AirspaceRecord {
    pub class: AirspaceClass,
    pub base: AltitudeLimit,
    pub top: AltitudeLimit,
    /// Cleared by callers to hide a single record from display
    pub visible: bool,
}

impl AirspaceRecord {
    pub fn new(class: AirspaceClass, base: AltitudeLimit, top: AltitudeLimit) -> Self {
        Self {
            class,
            base,
            top,
            visible: true,
        }
    }

    /// Resolve `(base, top)` into altitudes above mean sea level
    pub fn resolve_limits(&self, terrain_altitude: f64, qnh: f64) -> (f64, f64) {
        (
            self.base.resolve(terrain_altitude, qnh),
            self.top.resolve(terrain_altitude, qnh),
        )
    }
}

/// Distance and bearing from a query point to an airspace boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryRange {
    /// Meters to the boundary
    pub distance: f64,
    /// Initial bearing toward the closest boundary point, degrees true
    pub bearing: f64,
}

/// Geometry queries common to both airspace shapes
pub trait Airspace {
    fn record(&self) -> &AirspaceRecord;

    /// Whether the point lies horizontally inside the airspace
    fn contains(&self, point: &GeoPoint) -> bool;

    /// Range to the boundary, negative distance when the point is inside
    fn signed_range(&self, point: &GeoPoint) -> BoundaryRange;
}

/// Circular airspace
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub record: AirspaceRecord,
    pub center: GeoPoint,
    /// Radius in meters
    pub radius: f64,
}

impl Circle {
    pub fn new(record: AirspaceRecord, center: GeoPoint, radius: f64) -> Self {
        Self {
            record,
            center,
            radius,
        }
    }

    /// Great-circle distance to the center minus the radius
    ///
    /// Negative means `point` is inside.
    pub fn distance(&self, point: &GeoPoint) -> f64 {
        geodesy::distance(point, &self.center) - self.radius
    }

    /// Signed distance plus the bearing toward the nearest boundary point
    pub fn range(&self, point: &GeoPoint) -> BoundaryRange {
        let distance = self.distance(point);
        let mut bearing = geodesy::bearing(point, &self.center);
        if distance < 0.0 {
            // the nearest boundary point lies behind us
            bearing = geodesy::normalize_bearing(bearing + 180.0);
        }
        BoundaryRange { distance, bearing }
    }
}

impl Airspace for Circle {
    fn record(&self) -> &AirspaceRecord {
        &self.record
    }

    fn contains(&self, point: &GeoPoint) -> bool {
        self.distance(point) < 0.0
    }

    fn signed_range(&self, point: &GeoPoint) -> BoundaryRange {
        self.range(point)
    }
}

/// Polygonal airspace
///
/// The ring is implicitly closed; the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "AreaParts", into = "AreaParts"))]
pub struct Area {
    pub record: AirspaceRecord,
    points: Vec<GeoPoint>,
    bounds: Option<BoundingBox>,
}

impl Area {
    pub fn new(record: AirspaceRecord, points: Vec<GeoPoint>) -> Self {
        let bounds = BoundingBox::from_points(&points);
        Self {
            record,
            points,
            bounds,
        }
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Bounding box, wrapped if the ring crosses the antimeridian
    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        self.bounds.as_ref()
    }

    /// Remove an explicit closing vertex equal to the first one
    ///
    /// Returns `true` if a vertex was removed.
    pub(crate) fn drop_closing_vertex(&mut self) -> bool {
        if self.points.len() > 1 && self.points.first() == self.points.last() {
            self.points.pop();
            true
        } else {
            false
        }
    }

    /// Point-in-polygon test
    ///
    /// Rejects points outside the bounding box first. The full test runs on a
    /// copy of the ring whose longitudes are taken relative to the point, so
    /// rings across the antimeridian need no special casing. Points on the
    /// boundary are outside.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        match &self.bounds {
            Some(bounds) if bounds.may_contain(point) => {}
            _ => return false,
        }

        let ring: LineString = self
            .points
            .iter()
            .map(|vertex| {
                (
                    geodesy::longitude_difference(point.longitude, vertex.longitude),
                    vertex.latitude,
                )
            })
            .collect();

        Polygon::new(ring, vec![]).contains(&geo::Point::new(0.0, point.latitude))
    }

    /// Distance to the closest boundary point and the bearing toward it
    ///
    /// Edges are great-circle arcs. The distance is never negative; combine
    /// with [`Area::contains`] for interior semantics.
    pub fn range(&self, point: &GeoPoint) -> BoundaryRange {
        let mut ring: LineString = self.points.iter().map(|p| geo::Point::from(*p)).collect();
        ring.close();

        match ring.haversine_closest_point(&geo::Point::from(*point)) {
            Closest::SinglePoint(closest) => {
                let target = GeoPoint::from(closest);
                BoundaryRange {
                    distance: geodesy::distance(point, &target),
                    bearing: geodesy::bearing(point, &target),
                }
            }
            Closest::Intersection(_) => BoundaryRange {
                distance: 0.0,
                bearing: 0.0,
            },
            Closest::Indeterminate => BoundaryRange {
                distance: f64::INFINITY,
                bearing: 0.0,
            },
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct AreaParts {
    record: AirspaceRecord,
    points: Vec<GeoPoint>,
}

#[cfg(feature = "serde")]
impl From<AreaParts> for Area {
    fn from(parts: AreaParts) -> Self {
        Area::new(parts.record, parts.points)
    }
}

#[cfg(feature = "serde")]
impl From<Area> for AreaParts {
    fn from(area: Area) -> Self {
        AreaParts {
            record: area.record,
            points: area.points,
        }
    }
}

impl Airspace for Area {
    fn record(&self) -> &AirspaceRecord {
        &self.record
    }

    fn contains(&self, point: &GeoPoint) -> bool {
        Area::contains(self, point)
    }

    fn signed_range(&self, point: &GeoPoint) -> BoundaryRange {
        let mut range = self.range(point);
        if self.contains(point) {
            range.distance = -range.distance;
        }
        range
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesy::distance;
    use geo::{Destination, Haversine};

    fn record() -> AirspaceRecord {
        AirspaceRecord::new(
            AirspaceClass::Danger,
            AltitudeLimit::Fixed(0.0),
            AltitudeLimit::Fixed(3000.0),
        )
    }

    fn square(lat: f64, lon: f64, half: f64) -> Area {
        Area::new(
            record(),
            vec![
                GeoPoint::new(lat - half, lon - half),
                GeoPoint::new(lat - half, lon + half),
                GeoPoint::new(lat + half, lon + half),
                GeoPoint::new(lat + half, lon - half),
            ],
        )
    }

    fn offset(origin: GeoPoint, bearing: f64, meters: f64) -> GeoPoint {
        Haversine
            .destination(geo::Point::from(origin), bearing, meters)
            .into()
    }

    #[test]
    fn circle_distance_sign() {
        let center = GeoPoint::new(47.0, 8.0);
        let circle = Circle::new(record(), center, 5000.0);

        let inside = offset(center, 45.0, 1000.0);
        let outside = offset(center, 45.0, 9000.0);

        assert!((circle.distance(&inside) + 4000.0).abs() < 1e-6);
        assert!((circle.distance(&outside) - 4000.0).abs() < 1e-6);
        assert!(circle.contains(&inside));
        assert!(!circle.contains(&outside));
    }

    #[test]
    fn circle_bearing_points_to_nearest_boundary() {
        let center = GeoPoint::new(47.0, 8.0);
        let circle = Circle::new(record(), center, 5000.0);

        // outside, north of the center: boundary is to the south
        let north = offset(center, 0.0, 8000.0);
        assert!((circle.range(&north).bearing - 180.0).abs() < 1e-6);

        // inside, north of the center: boundary is to the north
        let range = circle.range(&offset(center, 0.0, 2000.0));
        assert!(range.distance < 0.0);
        assert!(range.bearing < 1e-6 || range.bearing > 360.0 - 1e-6);
    }

    #[test]
    fn area_contains() {
        let area = square(47.0, 8.0, 0.5);
        assert!(area.contains(&GeoPoint::new(47.0, 8.0)));
        assert!(area.contains(&GeoPoint::new(47.4, 8.4)));
        assert!(!area.contains(&GeoPoint::new(47.6, 8.0)));
        assert!(!area.contains(&GeoPoint::new(47.0, 9.0)));
    }

    #[test]
    fn area_contains_concave() {
        // U shape open to the north
        let area = Area::new(
            record(),
            vec![
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(0.0, 3.0),
                GeoPoint::new(3.0, 3.0),
                GeoPoint::new(3.0, 2.0),
                GeoPoint::new(1.0, 2.0),
                GeoPoint::new(1.0, 1.0),
                GeoPoint::new(3.0, 1.0),
                GeoPoint::new(3.0, 0.0),
            ],
        );
        assert!(area.contains(&GeoPoint::new(2.0, 0.5)));
        assert!(area.contains(&GeoPoint::new(2.0, 2.5)));
        assert!(area.contains(&GeoPoint::new(0.5, 1.5)));
        assert!(!area.contains(&GeoPoint::new(2.0, 1.5)));
    }

    #[test]
    fn area_contains_across_antimeridian() {
        let area = Area::new(
            record(),
            vec![
                GeoPoint::new(-10.0, 170.0),
                GeoPoint::new(-10.0, -170.0),
                GeoPoint::new(10.0, -170.0),
                GeoPoint::new(10.0, 170.0),
            ],
        );
        assert!(area.contains(&GeoPoint::new(0.0, 175.0)));
        assert!(area.contains(&GeoPoint::new(0.0, -175.0)));
        assert!(area.contains(&GeoPoint::new(0.0, 180.0)));
        assert!(!area.contains(&GeoPoint::new(0.0, 0.0)));
        assert!(!area.contains(&GeoPoint::new(0.0, 165.0)));
    }

    #[test]
    fn area_range_to_nearest_edge() {
        let area = square(0.0, 0.0, 0.5);

        // 0.1 degree east of the eastern edge
        let point = GeoPoint::new(0.0, 0.6);
        let range = area.range(&point);
        let expected = distance(&point, &GeoPoint::new(0.0, 0.5));
        assert!((range.distance - expected).abs() < 1.0, "{range:?}");
        assert!((range.bearing - 270.0).abs() < 0.01, "{range:?}");

        // range is unsigned, signed_range is negative inside
        let center = GeoPoint::new(0.0, 0.0);
        let range = area.range(&center);
        assert!(range.distance > 0.0);
        assert_eq!(area.signed_range(&center).distance, -range.distance);
    }

    #[test]
    fn area_range_to_vertex() {
        let area = square(0.0, 0.0, 0.5);
        let point = GeoPoint::new(-0.6, -0.6);
        let range = area.range(&point);
        let expected = distance(&point, &GeoPoint::new(-0.5, -0.5));
        assert!((range.distance - expected).abs() < 1.0, "{range:?}");
        assert!((range.bearing - 45.0).abs() < 0.1, "{range:?}");
    }

    #[test]
    fn area_boundary_is_outside() {
        let area = square(0.0, 0.0, 0.5);
        assert!(!area.contains(&GeoPoint::new(0.0, 0.5)));
        assert!(!area.contains(&GeoPoint::new(0.5, 0.5)));
        assert_eq!(area.range(&GeoPoint::new(-0.5, -0.5)).distance, 0.0);
    }

    #[test]
    fn area_range_across_antimeridian() {
        let area = Area::new(
            record(),
            vec![
                GeoPoint::new(-10.0, 170.0),
                GeoPoint::new(-10.0, -170.0),
                GeoPoint::new(10.0, -170.0),
                GeoPoint::new(10.0, 170.0),
            ],
        );

        let point = GeoPoint::new(0.0, 179.5);
        let range = area.signed_range(&point);
        let expected = distance(&point, &GeoPoint::new(0.0, 170.0));
        assert!((range.distance + expected).abs() < 1.0, "{range:?}");
        assert!((range.bearing - 270.0).abs() < 0.01, "{range:?}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn area_serde_rebuilds_bounds() {
        let area = square(10.0, 20.0, 0.5);
        let json = serde_json::to_string(&area).unwrap();
        assert!(!json.contains("bounds"));

        let parsed: Area = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, area);
        assert!(parsed.contains(&GeoPoint::new(10.0, 20.0)));
    }

    #[test]
    fn drop_closing_vertex() {
        let mut area = Area::new(
            record(),
            vec![
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(0.0, 1.0),
                GeoPoint::new(1.0, 1.0),
                GeoPoint::new(0.0, 0.0),
            ],
        );
        assert!(area.drop_closing_vertex());
        assert_eq!(area.points().len(), 3);
        assert!(!area.drop_closing_vertex());
    }
}

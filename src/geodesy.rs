//! Great-circle helpers and antimeridian-aware longitude tests

use crate::GeoPoint;
use geo::{Bearing, Distance, Haversine};

/// Great-circle distance in meters
pub fn distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
    Haversine.distance(geo::Point::from(*from), geo::Point::from(*to))
}

/// Initial great-circle bearing in degrees from true north, in `[0, 360)`
pub fn bearing(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let bearing = Haversine.bearing(geo::Point::from(*from), geo::Point::from(*to));
    normalize_bearing(bearing)
}

pub(crate) fn normalize_bearing(bearing: f64) -> f64 {
    let bearing = bearing.rem_euclid(360.0);
    // rem_euclid may round up to exactly 360 for tiny negative inputs
    if bearing >= 360.0 { 0.0 } else { bearing }
}

/// Signed longitude difference `to - from`, wrapped to `[-180, 180)`
pub fn longitude_difference(from: f64, to: f64) -> f64 {
    (to - from + 180.0).rem_euclid(360.0) - 180.0
}

/// Check whether a longitude lies strictly between two bounds
///
/// A range with `lon_min > lon_max` crosses the antimeridian: `lon_min` is
/// the eastern-hemisphere edge and `lon_max` the western-hemisphere edge, so
/// the test becomes "greater than the minimum OR less than the maximum".
pub fn check_inside_longitude(longitude: f64, lon_min: f64, lon_max: f64) -> bool {
    if lon_min <= lon_max {
        longitude > lon_min && longitude < lon_max
    } else {
        longitude > lon_min || longitude < lon_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_longitude_normal_range() {
        assert!(check_inside_longitude(5.0, 0.0, 10.0));
        assert!(!check_inside_longitude(0.0, 0.0, 10.0));
        assert!(!check_inside_longitude(10.0, 0.0, 10.0));
        assert!(!check_inside_longitude(-5.0, 0.0, 10.0));
    }

    #[test]
    fn inside_longitude_wrapped_range() {
        assert!(check_inside_longitude(175.0, 170.0, -170.0));
        assert!(check_inside_longitude(-175.0, 170.0, -170.0));
        assert!(check_inside_longitude(180.0, 170.0, -170.0));
        assert!(!check_inside_longitude(0.0, 170.0, -170.0));
        assert!(!check_inside_longitude(170.0, 170.0, -170.0));
        assert!(!check_inside_longitude(-170.0, 170.0, -170.0));
    }

    #[test]
    fn longitude_difference_wraps() {
        assert_eq!(longitude_difference(170.0, -170.0), 20.0);
        assert_eq!(longitude_difference(-170.0, 170.0), -20.0);
        assert_eq!(longitude_difference(10.0, 30.0), 20.0);
        assert_eq!(longitude_difference(0.0, 180.0), -180.0);
    }

    #[test]
    fn distance_one_degree_of_latitude() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        let d = distance(&a, &b);
        assert!((d - 111_195.0).abs() < 10.0, "{d}");
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = GeoPoint::new(45.0, 7.0);
        let north = bearing(&origin, &GeoPoint::new(46.0, 7.0));
        assert!(north < 1e-6 || north > 360.0 - 1e-6, "{north}");
        assert!((bearing(&origin, &GeoPoint::new(44.0, 7.0)) - 180.0).abs() < 1e-6);
        let west = bearing(&origin, &GeoPoint::new(45.0, 6.9));
        assert!((west - 270.0).abs() < 0.1, "{west}");
        assert!((0.0..360.0).contains(&west));
    }

    #[test]
    fn normalize_bearing_range() {
        assert_eq!(normalize_bearing(-90.0), 270.0);
        assert_eq!(normalize_bearing(360.0), 0.0);
        assert_eq!(normalize_bearing(-1e-20), 0.0);
    }
}

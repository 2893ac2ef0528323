//! Nearest visible airspace search over circles and areas

use crate::settings::AirspaceSettings;
use crate::store::Airspaces;
use crate::types::{Airspace, GeoPoint};
use crate::visibility::check_airspace_altitude;

/// Search cutoff in meters; nothing outside at or beyond this range is reported
pub const SEARCH_RADIUS: f64 = 100_000.0;

/// Best candidate of one airspace family
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestHit {
    /// Handle into the family's collection
    pub index: usize,
    /// Signed meters to the boundary, negative when inside
    pub distance: f64,
    /// Degrees true toward the closest boundary point
    pub bearing: f64,
}

/// Outcome of [`Airspaces::find_nearest`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NearestAirspace {
    #[default]
    None,
    Circle(NearestHit),
    Area(NearestHit),
}

impl NearestAirspace {
    pub fn hit(&self) -> Option<&NearestHit> {
        match self {
            NearestAirspace::None => None,
            NearestAirspace::Circle(hit) | NearestAirspace::Area(hit) => Some(hit),
        }
    }

    pub fn circle_index(&self) -> Option<usize> {
        match self {
            NearestAirspace::Circle(hit) => Some(hit.index),
            _ => None,
        }
    }

    pub fn area_index(&self) -> Option<usize> {
        match self {
            NearestAirspace::Area(hit) => Some(hit.index),
            _ => None,
        }
    }

    pub fn is_inside(&self) -> bool {
        self.hit().is_some_and(|hit| hit.distance < 0.0)
    }
}

/// Aircraft state for a proximity query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestQuery {
    pub location: GeoPoint,
    /// Aircraft altitude above mean sea level, meters
    pub altitude: f64,
    /// Terrain altitude at `location`, meters
    pub terrain_altitude: f64,
    /// Only keep airspaces whose resolved base/top strictly enclose this altitude
    pub height_band: Option<f64>,
}

impl NearestQuery {
    pub fn new(location: GeoPoint, altitude: f64, terrain_altitude: f64) -> Self {
        Self {
            location,
            altitude,
            terrain_altitude,
            height_band: None,
        }
    }

    pub fn with_height_band(mut self, height: f64) -> Self {
        self.height_band = Some(height);
        self
    }
}

/// Merge the per-family winners
///
/// A lone candidate wins outright. With two, the one with the strictly
/// smaller signed distance wins, so being inside beats being near, and an
/// exact tie goes to the area. The winner must lie below [`SEARCH_RADIUS`].
pub fn merge_nearest(circle: Option<NearestHit>, area: Option<NearestHit>) -> NearestAirspace {
    match (circle, area) {
        (Some(circle), None) => NearestAirspace::Circle(circle),
        (None, Some(area)) => NearestAirspace::Area(area),
        (None, None) => NearestAirspace::None,
        (Some(circle), Some(area)) => {
            if circle.distance < area.distance {
                if circle.distance < SEARCH_RADIUS {
                    return NearestAirspace::Circle(circle);
                }
            } else if area.distance < SEARCH_RADIUS {
                return NearestAirspace::Area(area);
            }
            NearestAirspace::None
        }
    }
}

impl Airspaces {
    /// Nearest visible circle within [`SEARCH_RADIUS`]
    pub fn nearest_circle(
        &self,
        query: &NearestQuery,
        settings: &AirspaceSettings,
    ) -> Option<NearestHit> {
        self.nearest(self.circles(), query, settings)
    }

    /// Nearest visible area within [`SEARCH_RADIUS`]
    pub fn nearest_area(&self, query: &NearestQuery, settings: &AirspaceSettings) -> Option<NearestHit> {
        self.nearest(self.areas(), query, settings)
    }

    /// Nearest visible airspace of either shape
    ///
    /// Distance is signed: negative means the aircraft is already inside.
    pub fn find_nearest(&self, query: &NearestQuery, settings: &AirspaceSettings) -> NearestAirspace {
        let circle = self.nearest_circle(query, settings);
        let area = self.nearest_area(query, settings);
        merge_nearest(circle, area)
    }

    fn nearest<A: Airspace>(
        &self,
        airspaces: &[A],
        query: &NearestQuery,
        settings: &AirspaceSettings,
    ) -> Option<NearestHit> {
        let mut nearest: Option<NearestHit> = None;

        for (index, airspace) in airspaces.iter().enumerate() {
            let record = airspace.record();
            if !settings.classes.get(record.class).warning {
                continue;
            }

            let (base, top) = self.resolve_limits(record, query.terrain_altitude);
            if !check_airspace_altitude(base, top, query.altitude, &settings.altitude) {
                continue;
            }
            if let Some(height) = query.height_band {
                if !(height > base && height < top) {
                    continue;
                }
            }

            // interior hits are never cut off, however deep
            let range = airspace.signed_range(&query.location);
            if range.distance >= SEARCH_RADIUS {
                continue;
            }
            let distance = range.distance.abs();
            if nearest.is_some_and(|best| best.distance.abs() <= distance) {
                continue;
            }

            nearest = Some(NearestHit {
                index,
                distance: range.distance,
                bearing: range.bearing,
            });
        }

        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(index: usize, distance: f64) -> NearestHit {
        NearestHit {
            index,
            distance,
            bearing: 90.0,
        }
    }

    #[test]
    fn merge_single_candidates() {
        assert_eq!(
            merge_nearest(Some(hit(3, 1200.0)), None),
            NearestAirspace::Circle(hit(3, 1200.0))
        );
        assert_eq!(
            merge_nearest(None, Some(hit(7, 800.0))),
            NearestAirspace::Area(hit(7, 800.0))
        );
        assert_eq!(merge_nearest(None, None), NearestAirspace::None);
    }

    #[test]
    fn merge_prefers_strictly_closer() {
        assert_eq!(
            merge_nearest(Some(hit(0, 4999.0)), Some(hit(1, 5000.0))),
            NearestAirspace::Circle(hit(0, 4999.0))
        );
        assert_eq!(
            merge_nearest(Some(hit(0, 5001.0)), Some(hit(1, 5000.0))),
            NearestAirspace::Area(hit(1, 5000.0))
        );
    }

    #[test]
    fn merge_tie_goes_to_area() {
        let merged = merge_nearest(Some(hit(0, 5000.0)), Some(hit(1, 5000.0)));
        assert_eq!(merged, NearestAirspace::Area(hit(1, 5000.0)));
        assert_eq!(merged.circle_index(), None);
        assert_eq!(merged.area_index(), Some(1));
    }

    #[test]
    fn merge_prefers_inside() {
        // deep inside a circle versus close to an area edge
        let merged = merge_nearest(Some(hit(0, -3000.0)), Some(hit(1, 500.0)));
        assert_eq!(merged, NearestAirspace::Circle(hit(0, -3000.0)));
        assert!(merged.is_inside());
        assert_eq!(merged.area_index(), None);

        // inside both, the deeper one wins
        let merged = merge_nearest(Some(hit(0, -300.0)), Some(hit(1, -800.0)));
        assert_eq!(merged, NearestAirspace::Area(hit(1, -800.0)));
    }

    #[test]
    fn merge_keeps_deep_interior_hits() {
        let merged = merge_nearest(Some(hit(0, -150_000.0)), Some(hit(1, 2000.0)));
        assert_eq!(merged.circle_index(), Some(0));
    }

    #[test]
    fn merge_rechecks_cutoff() {
        assert_eq!(
            merge_nearest(Some(hit(0, 150_000.0)), Some(hit(1, 160_000.0))),
            NearestAirspace::None
        );
        assert_eq!(
            merge_nearest(Some(hit(0, SEARCH_RADIUS)), Some(hit(1, SEARCH_RADIUS))),
            NearestAirspace::None
        );
    }

    #[test]
    fn default_is_none() {
        let nearest = NearestAirspace::default();
        assert_eq!(nearest.hit(), None);
        assert!(!nearest.is_inside());
        insta::assert_debug_snapshot!(nearest, @"None");
    }
}

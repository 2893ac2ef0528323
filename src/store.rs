//! Immutable record store and per-record geometry queries

use crate::error::{Error, RecordKind, Result, Warning};
use crate::pressure::STANDARD_PRESSURE;
use crate::types::{AirspaceRecord, Area, BoundaryRange, Circle, GeoPoint};

/// Loaded circles and areas plus the current QNH
///
/// Handles are indices into [`Airspaces::circles`] and [`Airspaces::areas`]
/// and stay valid until the next load or clear. Single-record queries panic
/// on an out-of-range handle.
#[derive(Debug, Clone)]
pub struct Airspaces {
    circles: Vec<Circle>,
    areas: Vec<Area>,
    qnh: f64,
}

impl Default for Airspaces {
    fn default() -> Self {
        Self {
            circles: Vec::new(),
            areas: Vec::new(),
            qnh: STANDARD_PRESSURE,
        }
    }
}

impl Airspaces {
    /// Validate and take ownership of a finished set of records
    ///
    /// Fails on the first malformed record. Recoverable oddities are
    /// returned as warnings.
    pub fn new(circles: Vec<Circle>, mut areas: Vec<Area>) -> Result<(Self, Vec<Warning>)> {
        let mut warnings = Vec::new();

        for (index, circle) in circles.iter().enumerate() {
            if !circle.center.is_valid() {
                return Err(Error::CoordinateOutOfRange {
                    point: circle.center,
                });
            }
            if !(circle.radius.is_finite() && circle.radius > 0.0) {
                return Err(Error::InvalidRadius {
                    index,
                    radius: circle.radius,
                });
            }
            check_limits(&circle.record, RecordKind::Circle, index, &mut warnings);
        }

        for (index, area) in areas.iter_mut().enumerate() {
            if let Some(point) = area.points().iter().find(|point| !point.is_valid()) {
                return Err(Error::CoordinateOutOfRange { point: *point });
            }
            if area.drop_closing_vertex() {
                warnings.push(Warning::ClosingVertexDropped { index });
            }
            if area.points().len() < 3 {
                return Err(Error::TooFewVertices {
                    index,
                    count: area.points().len(),
                });
            }
            check_limits(&area.record, RecordKind::Area, index, &mut warnings);
        }

        let airspaces = Self {
            circles,
            areas,
            qnh: STANDARD_PRESSURE,
        };
        Ok((airspaces, warnings))
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty() && self.areas.is_empty()
    }

    /// Current QNH in hPa
    pub fn qnh(&self) -> f64 {
        self.qnh
    }

    /// Record a new QNH
    ///
    /// Flight-level limits are resolved against the store's QNH on every
    /// query, so nothing else needs updating.
    pub fn set_qnh(&mut self, qnh: f64) {
        self.qnh = qnh;
    }

    /// Resolve a record's `(base, top)` at the given terrain altitude
    pub fn resolve_limits(&self, record: &AirspaceRecord, terrain_altitude: f64) -> (f64, f64) {
        record.resolve_limits(terrain_altitude, self.qnh)
    }

    /// Signed distance from `point` to the boundary of circle `index`
    ///
    /// Negative means inside.
    pub fn circle_distance(&self, point: &GeoPoint, index: usize) -> f64 {
        self.circles[index].distance(point)
    }

    pub fn inside_circle(&self, point: &GeoPoint, index: usize) -> bool {
        self.circle_distance(point, index) < 0.0
    }

    pub fn inside_area(&self, point: &GeoPoint, index: usize) -> bool {
        self.areas[index].contains(point)
    }

    /// Unsigned distance and bearing from `point` to the boundary of area `index`
    pub fn range_area(&self, point: &GeoPoint, index: usize) -> BoundaryRange {
        self.areas[index].range(point)
    }
}

fn check_limits(
    record: &AirspaceRecord,
    kind: RecordKind,
    index: usize,
    warnings: &mut Vec<Warning>,
) {
    if let (Some(base), Some(top)) = (record.base.fixed(), record.top.fixed()) {
        if base >= top {
            warnings.push(Warning::InvertedLimits { kind, index });
        }
    }
}

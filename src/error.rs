use crate::types::GeoPoint;

/// Errors raised while loading airspace records
///
/// Queries never fail; these only surface from [`AirspaceDatabase::load`]
/// and the checked QNH setter.
///
/// [`AirspaceDatabase::load`]: crate::AirspaceDatabase::load
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Area {index} has {count} vertices (at least 3 required)")]
    TooFewVertices { index: usize, count: usize },

    #[error("Circle {index} has invalid radius {radius} m")]
    InvalidRadius { index: usize, radius: f64 },

    #[error("Coordinate out of range: {point:?}")]
    CoordinateOutOfRange { point: GeoPoint },

    #[error("Invalid QNH: {0} hPa")]
    InvalidQnh(f64),
}

/// Which family a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Circle,
    Area,
}

/// Non-fatal issues encountered while loading
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// Both limits are fixed and the base is not below the top
    InvertedLimits { kind: RecordKind, index: usize },

    /// Polygon repeated its first vertex at the end, duplicate was dropped
    ClosingVertexDropped { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

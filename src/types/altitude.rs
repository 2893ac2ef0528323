use crate::pressure::flight_level_to_altitude;

/// Vertical limit of an airspace as declared
///
/// Limits are resolved to an altitude above mean sea level (meters) at query
/// time, so a QNH change never leaves a stale value behind.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AltitudeLimit {
    /// Altitude above mean sea level in meters
    Fixed(f64),
    /// Height above the terrain at the query point, in meters
    Agl(f64),
    /// Flight level (hundreds of feet of pressure altitude)
    FlightLevel(f64),
}

impl AltitudeLimit {
    /// Resolve into an altitude above mean sea level
    pub fn resolve(&self, terrain_altitude: f64, qnh: f64) -> f64 {
        match *self {
            AltitudeLimit::Fixed(altitude) => altitude,
            AltitudeLimit::Agl(offset) => offset + terrain_altitude,
            AltitudeLimit::FlightLevel(level) => flight_level_to_altitude(level, qnh),
        }
    }

    /// Fixed altitude, if the limit does not depend on terrain or QNH
    pub fn fixed(&self) -> Option<f64> {
        match *self {
            AltitudeLimit::Fixed(altitude) => Some(altitude),
            _ => None,
        }
    }
}

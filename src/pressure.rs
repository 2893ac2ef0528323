//! Barometric conversions between pressure altitude and QNH altitude
//!
//! Pressures are in hectopascal, altitudes in meters. The constants are the
//! usual power-law fit of the ICAO standard atmosphere troposphere.

/// ICAO standard sea level pressure in hPa
pub const STANDARD_PRESSURE: f64 = 1013.25;

pub const FEET_TO_METERS: f64 = 0.3048;

const K1: f64 = 0.190263;
const K2: f64 = 8.417286e-5;

/// Static pressure at `altitude` above the `qnh` reference level
pub fn altitude_to_static_pressure(altitude: f64, qnh: f64) -> f64 {
    (qnh.powf(K1) - K2 * altitude).powf(1.0 / K1)
}

/// Pressure altitude (relative to standard pressure) of a static pressure
pub fn static_pressure_to_altitude(pressure: f64) -> f64 {
    (STANDARD_PRESSURE.powf(K1) - pressure.powf(K1)) / K2
}

/// Altitude shift applied to pressure altitudes at the given QNH
///
/// Positive when `qnh` is above standard pressure.
pub fn qnh_correction(qnh: f64) -> f64 {
    (qnh.powf(K1) - STANDARD_PRESSURE.powf(K1)) / K2
}

/// Convert a standard-atmosphere pressure altitude into an altitude above
/// mean sea level for the given QNH
pub fn pressure_altitude_to_qnh_altitude(pressure_altitude: f64, qnh: f64) -> f64 {
    let pressure = altitude_to_static_pressure(pressure_altitude, STANDARD_PRESSURE);
    (qnh.powf(K1) - pressure.powf(K1)) / K2
}

/// Altitude above mean sea level of a flight level at the given QNH
///
/// Flight level `n` is `n * 100` feet of pressure altitude.
pub fn flight_level_to_altitude(level: f64, qnh: f64) -> f64 {
    pressure_altitude_to_qnh_altitude(level * 100.0 * FEET_TO_METERS, qnh)
}

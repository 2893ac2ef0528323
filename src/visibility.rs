//! Altitude-based candidate filter

use crate::AltitudeMode;
use crate::settings::AltitudeFilter;

/// Decide whether an airspace is a candidate for display or warning
///
/// `base` and `top` are resolved altitudes above mean sea level, `altitude`
/// is the aircraft altitude. Pure function of the filter policy.
///
/// | mode | visible when |
/// |---|---|
/// | `AllOn` | always |
/// | `Clip` | `base < clip_altitude` |
/// | `Auto` | `base - margin <= altitude <= top + margin`, limits included |
/// | `AllBelow` | `base - margin < altitude` |
/// | `Inside` | `base <= altitude < top` |
/// | `AllOff` | never |
pub fn check_airspace_altitude(base: f64, top: f64, altitude: f64, filter: &AltitudeFilter) -> bool {
    let margin = filter.warning_margin;
    match filter.mode {
        AltitudeMode::AllOn => true,
        AltitudeMode::Clip => base < filter.clip_altitude,
        AltitudeMode::Auto => altitude >= base - margin && altitude <= top + margin,
        AltitudeMode::AllBelow => base - margin < altitude,
        AltitudeMode::Inside => altitude >= base && altitude < top,
        AltitudeMode::AllOff => false,
    }
}

//! Geographic calculations for navigation
//!
//! Pure functions converting two coordinates (and a device heading) into
//! bearing, relative arrow angle and great-circle distance.

use libm::{atan2, cos, sin, sqrt};

use super::types::Coordinate;

/// Mean Earth radius used by the haversine distance, in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

const DEG_TO_RAD: f64 = core::f64::consts::PI / 180.0;
const RAD_TO_DEG: f64 = 180.0 / core::f64::consts::PI;

/// Forward azimuth from `from` to `to` in degrees, in `[0, 360)`
///
/// 0 is true north, 90 east.
pub fn bearing_between(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude * DEG_TO_RAD;
    let lat2 = to.latitude * DEG_TO_RAD;
    let delta_lon = (to.longitude - from.longitude) * DEG_TO_RAD;

    let y = sin(delta_lon) * cos(lat2);
    let x = cos(lat1) * sin(lat2) - sin(lat1) * cos(lat2) * cos(delta_lon);
    let mut bearing = atan2(y, x) * RAD_TO_DEG;
    if bearing < 0.0 {
        bearing += 360.0;
    }
    // Tiny negative angles round up to exactly 360.0
    if bearing >= 360.0 {
        bearing = 0.0;
    }
    bearing
}

/// Arrow rotation for a bearing seen from a device facing `heading_deg`
///
/// Not normalized: the result may be negative or exceed 360.
/// Use [`wrap_180`] or [`wrap_360`] when a bounded angle is needed.
#[inline]
pub fn relative_angle(bearing_deg: f64, heading_deg: f64) -> f64 {
    bearing_deg - heading_deg
}

/// Great-circle distance in meters (haversine)
pub fn distance_meters(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude * DEG_TO_RAD;
    let lat2 = to.latitude * DEG_TO_RAD;
    let delta_lat = (to.latitude - from.latitude) * DEG_TO_RAD;
    let delta_lon = (to.longitude - from.longitude) * DEG_TO_RAD;

    let sin_dlat = sin(delta_lat / 2.0);
    let sin_dlon = sin(delta_lon / 2.0);
    let a = sin_dlat * sin_dlat + cos(lat1) * cos(lat2) * sin_dlon * sin_dlon;
    // Rounding can push `a` a hair past 1.0 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * atan2(sqrt(a), sqrt(1.0 - a));
    EARTH_RADIUS_M * c
}

/// Normalize angle to the 0 to 360 range
pub fn wrap_360(angle: f64) -> f64 {
    let a = angle % 360.0;
    if a < 0.0 {
        a + 360.0
    } else {
        a
    }
}

/// Normalize angle to the -180 to +180 range
pub fn wrap_180(angle: f64) -> f64 {
    let mut a = angle % 360.0;
    if a > 180.0 {
        a -= 360.0;
    } else if a < -180.0 {
        a += 360.0;
    }
    a
}

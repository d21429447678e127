//! Navigation type definitions
//!
//! This module contains core value types used by the navigation subsystem:
//! - `Coordinate`: WGS-84 latitude/longitude pair
//! - `Place`: a search result or chosen destination
//! - `NavigationReading`: distance and arrow angle from one recompute

use alloc::string::String;
use core::fmt;

use super::geo::distance_meters;

/// Geographic position in degrees (WGS-84 assumed)
///
/// Values are not range-checked; out-of-range input passes straight
/// through the geo math.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to +90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to +180)
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// Opaque, unique place identity assigned by the search provider
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlaceId(String);

impl PlaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Point of interest returned by search or picked as a destination
///
/// Equality ignores `distance_m`: the same place seen from two user
/// positions is still the same place.
#[derive(Clone, Debug)]
pub struct Place {
    pub id: PlaceId,
    /// Display name
    pub name: String,
    /// Display address, one line
    pub address: String,
    pub coordinate: Coordinate,
    /// Last computed distance to the user in meters
    pub distance_m: Option<f64>,
}

impl Place {
    /// Create a place with no distance annotation
    pub fn new(
        id: PlaceId,
        name: impl Into<String>,
        address: impl Into<String>,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            coordinate,
            distance_m: None,
        }
    }

    /// Return a copy annotated with the distance from `user`
    pub fn with_distance_from(mut self, user: Coordinate) -> Self {
        self.distance_m = Some(distance_meters(user, self.coordinate));
        self
    }
}

impl PartialEq for Place {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.address == other.address
            && self.coordinate == other.coordinate
    }
}

/// Result of one navigation recompute
///
/// Both numbers are 0 when either the destination or the current fix
/// is unknown; `bearing_deg` is `None` in that case.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavigationReading {
    /// Great-circle distance to destination in meters
    pub distance_m: f64,
    /// Arrow rotation: bearing minus device heading, unnormalized
    pub direction_angle_deg: f64,
    /// Bearing to destination in degrees (0-360, true north)
    pub bearing_deg: Option<f64>,
}

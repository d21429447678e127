//! Async capability seams
//!
//! The navigator composes against these traits instead of platform
//! delegates. Location and heading arrive as independent, unordered
//! streams; search is a request/response call. Scripted implementations
//! live in [`crate::sim`].

use async_trait::async_trait;
use wayfinder_core::navigation::{AuthorizationStatus, Coordinate, Place};

use crate::error::SearchError;

/// One item from a location provider
#[derive(Debug, Clone, PartialEq)]
pub enum LocationEvent {
    /// New position fix
    Fix(Coordinate),
    /// Authorization changed
    Authorization(AuthorizationStatus),
    /// Provider reported an error; last-known fix stays in effect
    Failed(String),
}

/// One item from a heading/motion provider
#[derive(Debug, Clone, PartialEq)]
pub enum HeadingEvent {
    /// Device yaw in degrees (0 = north)
    Yaw(f64),
    /// Provider reported an error; last-known heading stays in effect
    Failed(String),
}

/// Source of location events.
///
/// Returns `None` once the provider has stopped for good.
#[async_trait]
pub trait LocationFeed: Send {
    async fn next_event(&mut self) -> Option<LocationEvent>;
}

/// Source of heading events, sampled at the configured interval.
///
/// Returns `None` once the provider has stopped for good.
#[async_trait]
pub trait HeadingFeed: Send {
    async fn next_event(&mut self) -> Option<HeadingEvent>;
}

/// Square region around the user that biases place search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRegion {
    pub center: Coordinate,
    /// North-south extent in meters
    pub latitudinal_m: f64,
    /// East-west extent in meters
    pub longitudinal_m: f64,
}

impl SearchRegion {
    pub fn square(center: Coordinate, side_m: f64) -> Self {
        Self {
            center,
            latitudinal_m: side_m,
            longitudinal_m: side_m,
        }
    }
}

/// External free-text place lookup.
///
/// Implementations must be `Send + Sync`; each lookup runs on its own
/// task while the navigator keeps processing input.
#[async_trait]
pub trait PlaceSearchProvider: Send + Sync {
    /// Look up `query`, optionally biased to `region`.
    ///
    /// Result order is preserved as returned.
    async fn search(
        &self,
        query: &str,
        region: Option<SearchRegion>,
    ) -> Result<Vec<Place>, SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_region_has_equal_sides() {
        let region = SearchRegion::square(Coordinate::new(35.0, 139.0), 5000.0);
        assert_eq!(region.latitudinal_m, 5000.0);
        assert_eq!(region.longitudinal_m, 5000.0);
        assert_eq!(region.center, Coordinate::new(35.0, 139.0));
    }
}

//! Published navigator state
//!
//! Both types are plain values sent through `tokio::sync::watch`; readers
//! always see the latest complete state, never a partial update.

use wayfinder_core::navigation::{
    AuthorizationStatus, Coordinate, NavigationSession, NavigationState, Place,
};

/// Navigation state as seen by a display
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationSnapshot {
    pub state: NavigationState,
    pub destination: Option<Coordinate>,
    pub selected_place: Option<Place>,
    pub arrived: bool,
    /// Meters to destination; 0 without a destination or fix
    pub distance_m: f64,
    /// Arrow rotation in degrees, unnormalized
    pub direction_angle_deg: f64,
    pub bearing_deg: Option<f64>,
    pub last_fix: Option<Coordinate>,
    pub heading_deg: f64,
    pub authorization: AuthorizationStatus,
}

impl NavigationSnapshot {
    pub(crate) fn capture(session: &NavigationSession, authorization: AuthorizationStatus) -> Self {
        let reading = session.reading();
        Self {
            state: session.state(),
            destination: session.destination(),
            selected_place: session.selected_place().cloned(),
            arrived: session.arrived(),
            distance_m: reading.distance_m,
            direction_angle_deg: reading.direction_angle_deg,
            bearing_deg: reading.bearing_deg,
            last_fix: session.last_fix(),
            heading_deg: session.heading_deg(),
            authorization,
        }
    }
}

/// Latest place search results
///
/// `places` keeps provider order. Each place carries its distance from
/// the most recent fix when one is known.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchResults {
    /// Query these results answer
    pub query: String,
    pub places: Vec<Place>,
}

impl SearchResults {
    pub(crate) fn new(query: impl Into<String>, places: Vec<Place>) -> Self {
        Self {
            query: query.into(),
            places,
        }
    }

    /// Recompute `distance_m` for every place from `user`
    pub(crate) fn annotate(&mut self, user: Coordinate) {
        for place in &mut self.places {
            *place = place.clone().with_distance_from(user);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_core::navigation::PlaceId;

    #[test]
    fn idle_session_snapshot() {
        let session = NavigationSession::default();
        let snapshot = NavigationSnapshot::capture(&session, AuthorizationStatus::Denied);
        assert_eq!(snapshot.state, NavigationState::Idle);
        assert_eq!(snapshot.distance_m, 0.0);
        assert!(snapshot.bearing_deg.is_none());
        assert_eq!(snapshot.authorization, AuthorizationStatus::Denied);
    }

    #[test]
    fn navigating_snapshot_copies_reading() {
        let mut session = NavigationSession::default();
        session.on_location_update(Coordinate::new(35.0, 139.0));
        let target = Place::new(
            PlaceId::new("p"),
            "Shrine",
            "1-1",
            Coordinate::new(35.001, 139.0),
        );
        session.set_destination(target.clone());

        let snapshot =
            NavigationSnapshot::capture(&session, AuthorizationStatus::AuthorizedWhenInUse);
        assert_eq!(snapshot.state, NavigationState::Navigating);
        assert_eq!(snapshot.selected_place, Some(target));
        assert!((snapshot.distance_m - 111.19).abs() < 1.0);
        assert!(snapshot.direction_angle_deg.abs() < 0.01);
    }

    #[test]
    fn annotate_sets_distances() {
        let mut results = SearchResults::new(
            "shrine",
            vec![Place::new(
                PlaceId::new("p"),
                "Shrine",
                "1-1",
                Coordinate::new(35.001, 139.0),
            )],
        );
        results.annotate(Coordinate::new(35.0, 139.0));
        let distance = results.places[0].distance_m.unwrap();
        assert!((distance - 111.19).abs() < 1.0);
    }
}

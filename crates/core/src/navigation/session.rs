//! Per-destination navigation session
//!
//! Tracks the chosen destination, recomputes distance and arrow angle on
//! every location or heading sample, and flags arrival once per approach.
//!
//! # State machine
//!
//! ```text
//! Idle --set_destination--> Navigating --check_arrival (d <= threshold)--> Arrived
//!   ^                           |                                             |
//!   +------clear_destination----+------------------clear_destination---------+
//! ```
//!
//! `Arrived` only leaves through `clear_destination` or a new
//! `set_destination`; further arrival checks are no-ops.

use super::geo::{bearing_between, distance_meters, relative_angle};
use super::sources::{FeedbackDevice, HeadingSource, LocationSource};
use super::types::{Coordinate, NavigationReading, Place};

/// Default arrival radius in meters
pub const DEFAULT_ARRIVAL_THRESHOLD_M: f64 = 20.0;

/// Navigation phase derived from the session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NavigationState {
    /// No destination chosen
    #[default]
    Idle,
    /// Destination set, not yet reached
    Navigating,
    /// Destination reached; stays here until cleared or re-targeted
    Arrived,
}

/// Navigation state for one user and at most one destination
#[derive(Clone, Debug)]
pub struct NavigationSession {
    destination: Option<Coordinate>,
    selected_place: Option<Place>,
    arrived: bool,
    arrival_threshold_m: f64,
    last_fix: Option<Coordinate>,
    heading_deg: f64,
    reading: NavigationReading,
}

impl Default for NavigationSession {
    fn default() -> Self {
        Self::new(DEFAULT_ARRIVAL_THRESHOLD_M)
    }
}

impl NavigationSession {
    /// Create an idle session with the given arrival radius
    pub fn new(arrival_threshold_m: f64) -> Self {
        Self {
            destination: None,
            selected_place: None,
            arrived: false,
            arrival_threshold_m,
            last_fix: None,
            heading_deg: 0.0,
            reading: NavigationReading::default(),
        }
    }

    /// Start navigating to `place`
    ///
    /// Clears any previous arrival so the next approach can fire again.
    pub fn set_destination(&mut self, place: Place) -> NavigationReading {
        self.destination = Some(place.coordinate);
        self.selected_place = Some(place);
        self.arrived = false;
        self.recompute()
    }

    /// Leave navigation and return to `Idle`
    pub fn clear_destination(&mut self) {
        self.destination = None;
        self.selected_place = None;
        self.arrived = false;
        self.reading = NavigationReading::default();
    }

    /// Record a new position fix and recompute
    pub fn on_location_update(&mut self, current: Coordinate) -> NavigationReading {
        self.last_fix = Some(current);
        self.recompute()
    }

    /// Record a new device heading and recompute
    pub fn on_heading_update(&mut self, heading_deg: f64) -> NavigationReading {
        self.heading_deg = heading_deg;
        self.recompute()
    }

    /// Pull the latest samples from injected sources and recompute
    ///
    /// A source with nothing to report leaves the last-known value in place.
    pub fn update_from<L, H>(&mut self, location: &L, heading: &H) -> NavigationReading
    where
        L: LocationSource + ?Sized,
        H: HeadingSource + ?Sized,
    {
        if let Some(fix) = location.latest_fix() {
            self.last_fix = Some(fix);
        }
        if heading.is_valid() {
            if let Some(deg) = heading.get_heading() {
                self.heading_deg = deg;
            }
        }
        self.recompute()
    }

    /// Periodic arrival check
    ///
    /// Fires `feedback` and returns true on the single tick where the
    /// session moves from `Navigating` to `Arrived`.
    ///
    /// Requires a position fix. Without one the reading reports a distance
    /// of 0, and a plain `distance <= threshold` test would fire arrival
    /// before the user's position is known. Arrival only counts after a
    /// real fix.
    pub fn check_arrival<F>(&mut self, feedback: &mut F) -> bool
    where
        F: FeedbackDevice + ?Sized,
    {
        if self.destination.is_none() || self.arrived || self.last_fix.is_none() {
            return false;
        }
        if self.reading.distance_m > self.arrival_threshold_m {
            return false;
        }
        self.arrived = true;
        feedback.pulse();
        true
    }

    /// Current navigation phase
    pub fn state(&self) -> NavigationState {
        match (self.destination.is_some(), self.arrived) {
            (false, _) => NavigationState::Idle,
            (true, false) => NavigationState::Navigating,
            (true, true) => NavigationState::Arrived,
        }
    }

    pub fn destination(&self) -> Option<Coordinate> {
        self.destination
    }

    pub fn selected_place(&self) -> Option<&Place> {
        self.selected_place.as_ref()
    }

    pub fn arrived(&self) -> bool {
        self.arrived
    }

    pub fn arrival_threshold_m(&self) -> f64 {
        self.arrival_threshold_m
    }

    /// Change the arrival radius; takes effect on the next check
    pub fn set_arrival_threshold_m(&mut self, threshold_m: f64) {
        self.arrival_threshold_m = threshold_m;
    }

    pub fn last_fix(&self) -> Option<Coordinate> {
        self.last_fix
    }

    pub fn heading_deg(&self) -> f64 {
        self.heading_deg
    }

    /// Result of the most recent recompute
    pub fn reading(&self) -> NavigationReading {
        self.reading
    }

    pub fn distance_to_destination_m(&self) -> f64 {
        self.reading.distance_m
    }

    pub fn direction_angle_deg(&self) -> f64 {
        self.reading.direction_angle_deg
    }

    fn recompute(&mut self) -> NavigationReading {
        self.reading = match (self.last_fix, self.destination) {
            (Some(current), Some(destination)) => {
                let bearing = bearing_between(current, destination);
                NavigationReading {
                    distance_m: distance_meters(current, destination),
                    direction_angle_deg: relative_angle(bearing, self.heading_deg),
                    bearing_deg: Some(bearing),
                }
            }
            _ => NavigationReading::default(),
        };
        self.reading
    }
}

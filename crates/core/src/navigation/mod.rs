//! Navigation types and utilities
//!
//! This module contains the geo math, the place/coordinate value types and
//! the per-destination navigation session with its arrival detection.

pub mod geo;
pub mod session;
pub mod sources;
mod types;

pub use geo::{bearing_between, distance_meters, relative_angle, wrap_180, wrap_360};
pub use session::{NavigationSession, NavigationState, DEFAULT_ARRIVAL_THRESHOLD_M};
pub use sources::{AuthorizationStatus, FeedbackDevice, HeadingSource, LocationSource};
pub use types::{Coordinate, NavigationReading, Place, PlaceId};

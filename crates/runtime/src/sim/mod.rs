//! Simulation backends
//!
//! Deterministic stand-ins for the platform collaborators. They run on
//! tokio time, so tests with paused time replay them instantly.

mod feedback;
mod feeds;
mod provider;
mod route;

pub use feedback::RecordingFeedback;
pub use feeds::{ScriptedHeadingFeed, ScriptedLocationFeed};
pub use provider::{SearchCall, StaticSearchProvider};
pub use route::{RoutePlace, RoutePoint, RouteScript};

//! wayfinder_runtime - tokio host for the wayfinder navigation kernel
//!
//! Binds the pure `wayfinder_core` kernel to an async executor:
//!
//! - [`navigator`]: single-owner actor holding the navigation session and
//!   search throttle; every mutation arrives as a message
//! - [`feeds`]: async capability seams for location, heading and place search
//! - [`config`]: parameter store to runtime durations and limits
//! - [`time`]: `TimeSource` backed by tokio's (pausable) clock
//! - [`sim`]: scripted feeds and canned providers for tests and `walk_sim`
//!
//! Logging macros (`log_info!`, `log_warn!`, `log_error!`, `log_debug!`,
//! `log_trace!`) are exported at the crate root.

pub mod logging;

pub mod config;
pub mod error;
pub mod feeds;
pub mod navigator;
pub mod sim;
pub mod time;

pub use config::NavigatorConfig;
pub use error::{NavigatorError, RouteError, SearchError};
pub use feeds::{
    HeadingEvent, HeadingFeed, LocationEvent, LocationFeed, PlaceSearchProvider, SearchRegion,
};
pub use navigator::{NavigationSnapshot, Navigator, NavigatorHandle, SearchResults};
pub use time::TokioTime;

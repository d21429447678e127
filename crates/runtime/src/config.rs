//! Navigator configuration
//!
//! Converts the parameter blocks from `wayfinder_core::parameters` into the
//! durations and limits the navigator actor runs with.

use std::time::Duration;

use wayfinder_core::parameters::{self, NavigationParams, ParameterStore, SearchParams};
use wayfinder_core::search::RateLimiter;

use crate::error::NavigatorError;

/// Capacity of the navigator's command channel
const DEFAULT_COMMAND_CAPACITY: usize = 64;

/// Runtime configuration for a [`crate::Navigator`]
#[derive(Debug, Clone)]
pub struct NavigatorConfig {
    /// Arrival radius in meters
    pub arrival_threshold_m: f64,
    /// Arrival check period
    pub check_interval: Duration,
    /// Heading sample interval requested from heading feeds
    pub heading_interval: Duration,
    /// Idle time before a typed query is submitted
    pub debounce: Duration,
    /// Provider lookups allowed per window
    pub rate_max: u32,
    /// Rate-limit window
    pub rate_window: Duration,
    /// Side of the square search region around the user, meters
    pub region_m: f64,
    /// Bound on queued commands before senders wait
    pub command_capacity: usize,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self::from_params(&NavigationParams::default(), &SearchParams::default())
    }
}

impl NavigatorConfig {
    fn from_params(nav: &NavigationParams, search: &SearchParams) -> Self {
        Self {
            arrival_threshold_m: f64::from(nav.arrival_radius_m),
            check_interval: Duration::from_millis(u64::from(nav.check_interval_ms)),
            heading_interval: Duration::from_millis(u64::from(nav.heading_interval_ms)),
            debounce: Duration::from_millis(u64::from(search.debounce_ms)),
            rate_max: search.rate_max,
            rate_window: Duration::from_secs(u64::from(search.rate_window_s)),
            region_m: f64::from(search.region_m),
            command_capacity: DEFAULT_COMMAND_CAPACITY,
        }
    }

    /// Build from validated parameter blocks
    pub fn try_from_params(
        nav: &NavigationParams,
        search: &SearchParams,
    ) -> Result<Self, NavigatorError> {
        if !nav.is_valid() {
            return Err(NavigatorError::InvalidConfig("navigation"));
        }
        if !search.is_valid() {
            return Err(NavigatorError::InvalidConfig("search"));
        }
        Ok(Self::from_params(nav, search))
    }

    /// Load every parameter block from `store`
    pub fn from_store(store: &ParameterStore) -> Result<Self, NavigatorError> {
        Self::try_from_params(
            &NavigationParams::from_store(store),
            &SearchParams::from_store(store),
        )
    }

    /// Store with every parameter registered and `NAME=VALUE` overrides applied
    pub fn parameter_store<'a, I>(overrides: I) -> Result<ParameterStore, NavigatorError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut store = ParameterStore::new();
        parameters::register_all(&mut store)?;
        for assignment in overrides {
            store.apply_override(assignment)?;
        }
        Ok(store)
    }

    /// Register defaults, apply `NAME=VALUE` overrides, and load
    pub fn with_overrides<'a, I>(overrides: I) -> Result<Self, NavigatorError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::from_store(&Self::parameter_store(overrides)?)
    }

    pub(crate) fn rate_limiter(&self) -> RateLimiter {
        RateLimiter::new(self.rate_max, self.rate_window.as_micros() as u64)
    }
}

//! Navigation Parameter Definitions
//!
//! # Parameters
//!
//! - `NAV_ARRIVE_RAD` - Arrival radius in meters
//! - `NAV_CHECK_MS` - Arrival check period in milliseconds
//! - `NAV_HDG_MS` - Heading sample interval requested from the motion feed

use super::error::ParameterError;
use super::storage::{load_float, load_int, ParamValue, ParameterStore};
use crate::navigation::DEFAULT_ARRIVAL_THRESHOLD_M;

// --- Defaults ---

const DEFAULT_ARRIVAL_RADIUS: f32 = DEFAULT_ARRIVAL_THRESHOLD_M as f32;
const DEFAULT_CHECK_MS: i32 = 1000;
const DEFAULT_HEADING_MS: i32 = 200;

// --- Ranges ---

const MIN_ARRIVAL_RADIUS: f32 = 1.0;
const MAX_ARRIVAL_RADIUS: f32 = 500.0;

const MIN_CHECK_MS: i32 = 100;
const MAX_CHECK_MS: i32 = 10_000;

const MIN_HEADING_MS: i32 = 20;
const MAX_HEADING_MS: i32 = 2_000;

/// Navigation parameters loaded from parameter store
#[derive(Debug, Clone)]
pub struct NavigationParams {
    /// Distance at or below which the destination counts as reached (meters)
    pub arrival_radius_m: f32,
    /// Period of the arrival check, independent of location cadence (ms)
    pub check_interval_ms: u32,
    /// Heading sample interval (ms)
    pub heading_interval_ms: u32,
}

impl Default for NavigationParams {
    fn default() -> Self {
        Self {
            arrival_radius_m: DEFAULT_ARRIVAL_RADIUS,
            check_interval_ms: DEFAULT_CHECK_MS as u32,
            heading_interval_ms: DEFAULT_HEADING_MS as u32,
        }
    }
}

impl NavigationParams {
    /// Register navigation parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register("NAV_ARRIVE_RAD", ParamValue::Float(DEFAULT_ARRIVAL_RADIUS))?;
        store.register("NAV_CHECK_MS", ParamValue::Int(DEFAULT_CHECK_MS))?;
        store.register("NAV_HDG_MS", ParamValue::Int(DEFAULT_HEADING_MS))?;

        Ok(())
    }

    /// Load navigation parameters from parameter store
    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            arrival_radius_m: load_float(
                store,
                "NAV_ARRIVE_RAD",
                DEFAULT_ARRIVAL_RADIUS,
                MIN_ARRIVAL_RADIUS,
                MAX_ARRIVAL_RADIUS,
            ),
            check_interval_ms: load_int(
                store,
                "NAV_CHECK_MS",
                DEFAULT_CHECK_MS,
                MIN_CHECK_MS,
                MAX_CHECK_MS,
            ) as u32,
            heading_interval_ms: load_int(
                store,
                "NAV_HDG_MS",
                DEFAULT_HEADING_MS,
                MIN_HEADING_MS,
                MAX_HEADING_MS,
            ) as u32,
        }
    }

    /// Validate navigation parameters
    pub fn is_valid(&self) -> bool {
        if !(MIN_ARRIVAL_RADIUS..=MAX_ARRIVAL_RADIUS).contains(&self.arrival_radius_m) {
            return false;
        }
        if !(MIN_CHECK_MS as u32..=MAX_CHECK_MS as u32).contains(&self.check_interval_ms) {
            return false;
        }
        if !(MIN_HEADING_MS as u32..=MAX_HEADING_MS as u32).contains(&self.heading_interval_ms) {
            return false;
        }
        true
    }
}

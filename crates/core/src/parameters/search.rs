//! Place Search Parameter Definitions
//!
//! # Parameters
//!
//! - `SRCH_DEBOUNCE_MS` - Idle time before a typed query is submitted
//! - `SRCH_RATE_MAX` - Provider lookups allowed per window
//! - `SRCH_RATE_WIN_S` - Rate-limit window length in seconds
//! - `SRCH_REGION_M` - Side of the square search region around the user, meters

use super::error::ParameterError;
use super::storage::{load_float, load_int, ParamValue, ParameterStore};

/// Default debounce delay in milliseconds
const DEFAULT_DEBOUNCE_MS: i32 = 500;

/// Default lookups per window
const DEFAULT_RATE_MAX: i32 = 50;

/// Default window length in seconds
const DEFAULT_RATE_WINDOW_S: i32 = 60;

/// Default region side in meters
const DEFAULT_REGION_M: f32 = 5000.0;

const MIN_DEBOUNCE_MS: i32 = 0;
const MAX_DEBOUNCE_MS: i32 = 5_000;

const MIN_RATE_MAX: i32 = 1;
const MAX_RATE_MAX: i32 = 1_000;

const MIN_RATE_WINDOW_S: i32 = 1;
const MAX_RATE_WINDOW_S: i32 = 3_600;

const MIN_REGION_M: f32 = 100.0;
const MAX_REGION_M: f32 = 50_000.0;

/// Search parameters loaded from parameter store
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Idle time before a typed query is submitted (ms)
    pub debounce_ms: u32,
    /// Provider lookups allowed per window
    pub rate_max: u32,
    /// Rate-limit window length (s)
    pub rate_window_s: u32,
    /// Side of the square search region centered on the user (m)
    pub region_m: f32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS as u32,
            rate_max: DEFAULT_RATE_MAX as u32,
            rate_window_s: DEFAULT_RATE_WINDOW_S as u32,
            region_m: DEFAULT_REGION_M,
        }
    }
}

impl SearchParams {
    /// Register search parameters with default values
    ///
    /// # Arguments
    ///
    /// * `store` - Parameter store to register parameters in
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register("SRCH_DEBOUNCE_MS", ParamValue::Int(DEFAULT_DEBOUNCE_MS))?;
        store.register("SRCH_RATE_MAX", ParamValue::Int(DEFAULT_RATE_MAX))?;
        store.register("SRCH_RATE_WIN_S", ParamValue::Int(DEFAULT_RATE_WINDOW_S))?;
        store.register("SRCH_REGION_M", ParamValue::Float(DEFAULT_REGION_M))?;

        Ok(())
    }

    /// Load search parameters from parameter store
    ///
    /// Out-of-range values are clamped into range.
    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            debounce_ms: load_int(
                store,
                "SRCH_DEBOUNCE_MS",
                DEFAULT_DEBOUNCE_MS,
                MIN_DEBOUNCE_MS,
                MAX_DEBOUNCE_MS,
            ) as u32,
            rate_max: load_int(
                store,
                "SRCH_RATE_MAX",
                DEFAULT_RATE_MAX,
                MIN_RATE_MAX,
                MAX_RATE_MAX,
            ) as u32,
            rate_window_s: load_int(
                store,
                "SRCH_RATE_WIN_S",
                DEFAULT_RATE_WINDOW_S,
                MIN_RATE_WINDOW_S,
                MAX_RATE_WINDOW_S,
            ) as u32,
            region_m: load_float(
                store,
                "SRCH_REGION_M",
                DEFAULT_REGION_M,
                MIN_REGION_M,
                MAX_REGION_M,
            ),
        }
    }

    /// Validate search parameters
    pub fn is_valid(&self) -> bool {
        self.debounce_ms <= MAX_DEBOUNCE_MS as u32
            && (MIN_RATE_MAX as u32..=MAX_RATE_MAX as u32).contains(&self.rate_max)
            && (MIN_RATE_WINDOW_S as u32..=MAX_RATE_WINDOW_S as u32).contains(&self.rate_window_s)
            && (MIN_REGION_M..=MAX_REGION_M).contains(&self.region_m)
    }
}

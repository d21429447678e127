//! Parameter management types and utilities
//!
//! This module provides the fixed-capacity parameter store and the typed
//! parameter blocks for navigation and search. Conversion into runtime
//! durations and limiter settings happens in the runtime crate.

pub mod error;
pub mod navigation;
pub mod search;
pub mod storage;

pub use error::ParameterError;
pub use navigation::NavigationParams;
pub use search::SearchParams;
pub use storage::{ParamEntry, ParamValue, ParameterStore};
pub use storage::{MAX_PARAMS, PARAM_NAME_LEN};

/// Register every known parameter block with its defaults
pub fn register_all(store: &mut ParameterStore) -> Result<(), ParameterError> {
    NavigationParams::register_defaults(store)?;
    SearchParams::register_defaults(store)?;
    Ok(())
}

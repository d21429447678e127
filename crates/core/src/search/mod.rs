//! Place search policy
//!
//! Debouncing of free-text input, a fixed-window rate limiter for
//! external lookups, an exact-match result cache, and request sequencing
//! that keeps stale responses from overwriting newer results.
//!
//! # Flow
//!
//! ```text
//! edit -> Debouncer (0.5 s idle) -> SearchThrottle::submit
//!            Cached(places)     -> publish
//!            Dropped            -> nothing (stale results stay)
//!            Dispatch(ticket)   -> provider -> complete()/fail() -> publish if current
//! ```

pub mod cache;
pub mod debounce;
pub mod rate_limiter;
pub mod throttle;

pub use cache::SearchCache;
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_US};
pub use rate_limiter::{RateLimiter, DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW_US};
pub use throttle::{SearchDecision, SearchThrottle, SearchTicket};

//! wayfinder_core - Pure no_std kernel for walking navigation and place search
//!
//! This crate contains platform-agnostic algorithms and types
//! that can be tested on host without any async runtime.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **no_std + alloc**: Place names and search results need heap strings
//! - **Trait abstractions**: Location, heading, feedback and time injected via traits
//!
//! # Modules
//!
//! - [`traits`]: Platform-agnostic trait abstractions (TimeSource)
//! - [`navigation`]: Geo math, places, and the per-destination navigation session
//! - [`search`]: Debounce, rate limiting, result cache and stale-response filtering
//! - [`parameters`]: Parameter store and typed parameter blocks

#![no_std]

extern crate alloc;

pub mod navigation;
pub mod parameters;
pub mod search;
pub mod traits;

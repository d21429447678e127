//! Core traits for platform-agnostic navigation functionality.
//!
//! This module provides trait abstractions that decouple kernel logic
//! from runtime-specific implementations (tokio, etc.).
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Runtime implementations (tokio) live in the runtime crate
//!
//! Location, heading and feedback capabilities live next to the
//! navigation session in [`crate::navigation::sources`].

pub mod time;

pub use time::{MockTime, TimeSource};

//! Fiscal-year timeline engine.
//!
//! # Responsibility
//! - Project a family profile and its dreams onto a fixed window of fiscal years.
//! - Propose canonical life events (school transitions, coming of age, kanreki).
//!
//! # Invariants
//! - Every function here is pure: no I/O, no logging, no shared state.
//! - Inputs are never mutated; outputs are freshly built records.
//! - Year arithmetic wraps at the `i32` bounds instead of panicking.

pub mod generator;
pub mod projector;

/// Number of fiscal years covered by a projection and by the persistence window.
pub const TIMELINE_HORIZON_YEARS: i32 = 20;

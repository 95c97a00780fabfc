//! Domain model for family profiles, planned events and the fiscal calendar.
//!
//! # Responsibility
//! - Define the record shapes read from and written to storage.
//! - Hold the calendar and school-grade arithmetic shared by the timeline engine.
//!
//! # Invariants
//! - Wire names follow the document-store schema (`startFY`, `birthYear`, ...).
//! - Model types never perform I/O.

pub mod dream;
pub mod family;
pub mod fiscal;
pub mod school;
pub mod validation;

//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls and the timeline engine into caller flows.
//! - Keep CLI layers decoupled from storage details.

pub mod planner_service;

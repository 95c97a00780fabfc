//! Core domain logic for the family dream planner.
//!
//! The timeline engine (`timeline`) is pure; storage, services and logging
//! wrap it for callers that need persisted profiles and dreams.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod timeline;

pub use config::{AppConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::dream::{DreamCategory, DreamEvent, DreamId, NewDream};
pub use model::family::{FamilyMember, FamilyProfile, Gender, Role};
pub use model::fiscal::{default_start_fy, fiscal_month_index, fiscal_year_of, FY_MONTHS};
pub use model::school::SchoolGrade;
pub use model::validation::ValidationError;
pub use repo::dream_repo::{DreamListQuery, DreamRepository, SqliteDreamRepository};
pub use repo::profile_repo::{ProfileRepository, SqliteProfileRepository};
pub use repo::{RepoError, RepoResult};
pub use service::planner_service::{PlannerError, PlannerResult, PlannerService};
pub use timeline::generator::{generate, generate_within_window, within_window, CandidateEvent};
pub use timeline::projector::{project, FiscalYearSnapshot, MemberYear};
pub use timeline::TIMELINE_HORIZON_YEARS;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Planner use-case service.
//!
//! # Responsibility
//! - Route timeline requests to profile setup when no profile exists.
//! - Re-read profile and dreams on every projection; nothing is cached.
//! - Persist generated life events inside the fiscal-year window.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Generated events are inserted one by one; a failure keeps the already
//!   inserted subset.

use crate::model::dream::{DreamEvent, DreamId, NewDream};
use crate::model::family::FamilyProfile;
use crate::repo::dream_repo::{DreamListQuery, DreamRepository};
use crate::repo::profile_repo::ProfileRepository;
use crate::repo::{RepoError, RepoResult};
use crate::timeline::generator::generate_within_window;
use crate::timeline::projector::{project, FiscalYearSnapshot};
use chrono::Utc;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Service error for planner use-cases.
#[derive(Debug)]
pub enum PlannerError {
    /// No family profile is stored yet; the caller must run profile setup.
    MissingProfile,
    /// Target dream does not exist.
    DreamNotFound(DreamId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for PlannerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingProfile => write!(f, "family profile is not set up"),
            Self::DreamNotFound(id) => write!(f, "dream not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PlannerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for PlannerError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::DreamNotFound(id),
            other => Self::Repo(other),
        }
    }
}

pub type PlannerResult<T> = Result<T, PlannerError>;

/// Planner facade over profile and dream repositories.
pub struct PlannerService<P: ProfileRepository, D: DreamRepository> {
    profiles: P,
    dreams: D,
}

impl<P: ProfileRepository, D: DreamRepository> PlannerService<P, D> {
    pub fn new(profiles: P, dreams: D) -> Self {
        Self { profiles, dreams }
    }

    pub fn load_profile(&self) -> RepoResult<Option<FamilyProfile>> {
        self.profiles.get_profile()
    }

    /// Replaces the singleton profile; members without a name are rejected.
    pub fn save_profile(&self, profile: &FamilyProfile, updated_by: Option<&str>) -> RepoResult<()> {
        self.profiles.save_profile(profile, updated_by)
    }

    /// Projects the stored profile and dreams onto the fiscal-year window.
    ///
    /// Returns `MissingProfile` instead of an empty timeline when setup has not
    /// happened yet.
    pub fn timeline(&self) -> PlannerResult<Vec<FiscalYearSnapshot>> {
        let profile = self.require_profile()?;
        let dreams = self.dreams.list_dreams(&DreamListQuery::default())?;
        Ok(project(&profile, &dreams))
    }

    /// Inserts a new dream authored by `user_id`.
    pub fn add_dream(&self, new_dream: NewDream, user_id: &str) -> PlannerResult<DreamEvent> {
        let dream = new_dream.into_event(Uuid::new_v4(), user_id, Utc::now());
        self.dreams.create_dream(&dream)?;
        info!(
            "event=dream_add module=service status=ok fy={} month={} category={}",
            dream.fy,
            dream.month,
            dream.category.as_str()
        );
        Ok(dream)
    }

    /// Replaces a stored dream with `dream`, stamping `updated_at`.
    pub fn edit_dream(&self, dream: &DreamEvent) -> PlannerResult<DreamEvent> {
        let mut replacement = dream.clone();
        replacement.updated_at = Some(Utc::now());
        self.dreams.replace_dream(&replacement)?;
        Ok(replacement)
    }

    pub fn delete_dream(&self, id: DreamId) -> PlannerResult<()> {
        self.dreams.delete_dream(id)?;
        info!("event=dream_delete module=service status=ok");
        Ok(())
    }

    pub fn get_dream(&self, id: DreamId) -> RepoResult<Option<DreamEvent>> {
        self.dreams.get_dream(id)
    }

    pub fn list_dreams(&self) -> RepoResult<Vec<DreamEvent>> {
        self.dreams.list_dreams(&DreamListQuery::default())
    }

    /// Generates life events from the stored profile and persists those inside
    /// `[startFY, startFY + 20)`.
    ///
    /// Existing dreams are not checked, so running this twice stores duplicates.
    pub fn generate_life_events(&self, user_id: &str) -> PlannerResult<Vec<DreamEvent>> {
        let profile = self.require_profile()?;
        let candidates = generate_within_window(&profile);
        let mut created = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            let dream = NewDream::from(candidate).into_event(Uuid::new_v4(), user_id, Utc::now());
            if let Err(err) = self.dreams.create_dream(&dream) {
                error!(
                    "event=life_events_generate module=service status=error created={} error={}",
                    created.len(),
                    err
                );
                return Err(err.into());
            }
            created.push(dream);
        }

        info!(
            "event=life_events_generate module=service status=ok member_count={} created={}",
            profile.members.len(),
            created.len()
        );
        Ok(created)
    }

    fn require_profile(&self) -> PlannerResult<FamilyProfile> {
        self.profiles
            .get_profile()?
            .ok_or(PlannerError::MissingProfile)
    }
}

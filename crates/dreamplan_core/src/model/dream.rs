//! Planned event ("dream") model.
//!
//! # Responsibility
//! - Define stored dream records and the id-less write shape.
//! - Provide the closed category set with storage strings and labels.
//!
//! # Invariants
//! - `id` is assigned on insert and never reused.
//! - Edits replace the full record; `created_at` is carried over unchanged.

use crate::model::validation::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier assigned by storage on insert.
pub type DreamId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DreamCategory {
    Education,
    Travel,
    Financial,
    Life,
    Career,
}

impl DreamCategory {
    pub const ALL: [DreamCategory; 5] = [
        Self::Education,
        Self::Travel,
        Self::Financial,
        Self::Life,
        Self::Career,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Travel => "travel",
            Self::Financial => "financial",
            Self::Life => "life",
            Self::Career => "career",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
    }

    /// Display label used by the timeline renderer.
    pub fn label(self) -> &'static str {
        match self {
            Self::Education => "教育",
            Self::Travel => "旅行",
            Self::Financial => "家計・投資",
            Self::Life => "ライフ・夢",
            Self::Career => "仕事",
        }
    }
}

/// Write shape for a new dream; storage fills `id` and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDream {
    pub fy: i32,
    pub month: u8,
    pub category: DreamCategory,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewDream {
    pub fn new(fy: i32, month: u8, category: DreamCategory, title: impl Into<String>) -> Self {
        Self {
            fy,
            month,
            category,
            title: title.into(),
            description: None,
        }
    }

    /// Builds the stored record authored by `user_id` at `created_at`.
    pub fn into_event(
        self,
        id: DreamId,
        user_id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> DreamEvent {
        DreamEvent {
            id,
            fy: self.fy,
            month: self.month,
            category: self.category,
            title: self.title,
            description: self.description,
            created_at,
            updated_at: None,
            user_id: user_id.into(),
        }
    }
}

/// Stored planned event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamEvent {
    pub id: DreamId,
    /// Fiscal year this event belongs to.
    pub fy: i32,
    /// Calendar month within `fy`.
    pub month: u8,
    pub category: DreamCategory,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub user_id: String,
}

impl DreamEvent {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }
}

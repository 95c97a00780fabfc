//! Family profile model.
//!
//! # Responsibility
//! - Define the singleton profile and its ordered members.
//! - Enforce the only save-time rule: every member has a name.
//!
//! # Invariants
//! - Member order is significant and preserved by storage and projection.
//! - `id` is unique within one profile.

use crate::model::validation::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Family role; decides whether school-grade facts are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Parent,
    Child,
    Student,
}

impl Role {
    /// Returns whether members with this role get grades and school events.
    pub fn attends_school(self) -> bool {
        matches!(self, Self::Child | Self::Student)
    }

    /// Stable storage string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Child => "child",
            Self::Student => "student",
        }
    }

    /// Parses a storage string.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "parent" => Some(Self::Parent),
            "child" => Some(Self::Child),
            "student" => Some(Self::Student),
            _ => None,
        }
    }
}

/// Presentation hint only; never affects derived facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }
}

/// One family member as stored in the profile document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub id: String,
    pub name: String,
    pub birth_year: i32,
    /// Calendar month, 1-12.
    pub birth_month: u8,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl FamilyMember {
    /// Creates a member with a freshly generated `mem_` id.
    pub fn new(name: impl Into<String>, birth_year: i32, birth_month: u8, role: Role) -> Self {
        Self::with_id(
            format!("mem_{}", Uuid::new_v4().simple()),
            name,
            birth_year,
            birth_month,
            role,
        )
    }

    /// Creates a member with a caller-provided id (import paths).
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        birth_year: i32,
        birth_month: u8,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth_year,
            birth_month,
            role,
            gender: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::InvalidMember {
                member_id: self.id.clone(),
            });
        }
        Ok(())
    }
}

/// Singleton family profile: first projected fiscal year plus ordered members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyProfile {
    #[serde(rename = "startFY")]
    pub start_fy: i32,
    #[serde(default)]
    pub members: Vec<FamilyMember>,
}

impl FamilyProfile {
    pub fn new(start_fy: i32, members: Vec<FamilyMember>) -> Self {
        Self { start_fy, members }
    }

    /// Removes the member with `member_id`, keeping the order of the rest.
    pub fn remove_member(&mut self, member_id: &str) -> Option<FamilyMember> {
        let position = self
            .members
            .iter()
            .position(|member| member.id == member_id)?;
        Some(self.members.remove(position))
    }

    /// Rejects the profile when any member lacks a name.
    ///
    /// An empty member list is accepted here; requiring at least one member is
    /// a concern of the setup flow.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.members.iter().try_for_each(FamilyMember::validate)
    }
}

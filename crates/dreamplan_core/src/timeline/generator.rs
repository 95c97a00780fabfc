//! Life-event generation.
//!
//! # Responsibility
//! - Derive canonical dated events for each member from the birth date alone.
//! - Keep the school-transition rules in one declarative table.
//!
//! # Invariants
//! - Existing events are never consulted; repeated runs yield duplicates.
//! - Callers persist only candidates accepted by [`within_window`].

use crate::model::dream::{DreamCategory, NewDream};
use crate::model::family::{FamilyMember, FamilyProfile};
use crate::model::school::{elementary_entrance_fy, is_early_bird};
use crate::timeline::TIMELINE_HORIZON_YEARS;
use serde::Serialize;

/// Rule anchored on the elementary entrance fiscal year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeStageRule {
    /// Fiscal years after elementary entrance.
    pub offset: i32,
    /// Calendar month of the event.
    pub month: u8,
    pub category: DreamCategory,
    /// Appended to the member name in the event title.
    pub label: &'static str,
}

const fn rule(offset: i32, month: u8, category: DreamCategory, label: &'static str) -> LifeStageRule {
    LifeStageRule {
        offset,
        month,
        category,
        label,
    }
}

/// Rules applied to members who attend school.
pub const LIFE_STAGE_RULES: &[LifeStageRule] = &[
    rule(0, 4, DreamCategory::Education, "小学校入学"),
    rule(6, 3, DreamCategory::Education, "小学校卒業"),
    rule(6, 4, DreamCategory::Education, "中学校入学"),
    rule(9, 3, DreamCategory::Education, "中学校卒業"),
    rule(9, 4, DreamCategory::Education, "高校入学"),
    rule(12, 3, DreamCategory::Education, "高校卒業"),
    rule(12, 4, DreamCategory::Education, "大学入学"),
    rule(16, 3, DreamCategory::Education, "大学卒業"),
    rule(13, 1, DreamCategory::Life, "成人式"),
];

const KANREKI_LABEL: &str = "還暦";

/// Proposed event without storage identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateEvent {
    pub fy: i32,
    pub title: String,
    pub category: DreamCategory,
    pub month: u8,
}

impl From<CandidateEvent> for NewDream {
    fn from(value: CandidateEvent) -> Self {
        NewDream::new(value.fy, value.month, value.category, value.title)
    }
}

/// Fiscal year of the 60th-year milestone.
pub fn kanreki_fy(birth_year: i32, birth_month: u8) -> i32 {
    if is_early_bird(birth_month) {
        birth_year.wrapping_add(59)
    } else {
        birth_year.wrapping_add(60)
    }
}

/// Generates candidate events for every member of `profile`, in member order.
///
/// The kanreki event is dropped only when it falls before `start_fy`; no upper
/// bound is applied here.
pub fn generate(profile: &FamilyProfile) -> Vec<CandidateEvent> {
    let mut candidates = Vec::new();
    for member in &profile.members {
        if member.role.attends_school() {
            candidates.extend(school_events(member));
        }

        let fy = kanreki_fy(member.birth_year, member.birth_month);
        if fy >= profile.start_fy {
            candidates.push(CandidateEvent {
                fy,
                title: titled(member, KANREKI_LABEL),
                category: DreamCategory::Life,
                month: member.birth_month,
            });
        }
    }
    candidates
}

/// Returns whether `fy` lies in the half-open window `[start_fy, start_fy + 20)`.
pub fn within_window(profile: &FamilyProfile, fy: i32) -> bool {
    let distance = i64::from(fy) - i64::from(profile.start_fy);
    (0..i64::from(TIMELINE_HORIZON_YEARS)).contains(&distance)
}

/// [`generate`] followed by the persistence window filter.
pub fn generate_within_window(profile: &FamilyProfile) -> Vec<CandidateEvent> {
    generate(profile)
        .into_iter()
        .filter(|candidate| within_window(profile, candidate.fy))
        .collect()
}

fn school_events(member: &FamilyMember) -> impl Iterator<Item = CandidateEvent> + '_ {
    let anchor = elementary_entrance_fy(member.birth_year, member.birth_month);
    LIFE_STAGE_RULES.iter().map(move |rule| CandidateEvent {
        fy: anchor.wrapping_add(rule.offset),
        title: titled(member, rule.label),
        category: rule.category,
        month: rule.month,
    })
}

fn titled(member: &FamilyMember, label: &str) -> String {
    format!("{} {}", member.name, label)
}

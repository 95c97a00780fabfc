//! Timeline projection.
//!
//! Builds one snapshot per fiscal year in `[startFY, startFY + 20)`, each with
//! per-member age/grade facts and the dreams assigned to that year in fiscal
//! month order.

use crate::model::dream::DreamEvent;
use crate::model::family::{FamilyMember, FamilyProfile, Gender, Role};
use crate::model::fiscal::fiscal_month_index;
use crate::model::school::SchoolGrade;
use crate::timeline::TIMELINE_HORIZON_YEARS;
use serde::Serialize;

/// Member facts for one fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberYear {
    pub id: String,
    pub name: String,
    pub birth_year: i32,
    pub birth_month: u8,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// `fy - birth_year`, without month-of-birth adjustment.
    pub age: i32,
    /// `None` for members that do not attend school.
    pub grade: Option<SchoolGrade>,
}

impl MemberYear {
    fn derive(member: &FamilyMember, fy: i32) -> Self {
        let grade = member
            .role
            .attends_school()
            .then(|| SchoolGrade::for_fiscal_year(member.birth_year, member.birth_month, fy));

        Self {
            id: member.id.clone(),
            name: member.name.clone(),
            birth_year: member.birth_year,
            birth_month: member.birth_month,
            role: member.role,
            gender: member.gender,
            age: age_in_fiscal_year(member.birth_year, fy),
            grade,
        }
    }
}

/// Render-ready data for one fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FiscalYearSnapshot {
    pub fy: i32,
    /// Same length and order as the profile members.
    pub members: Vec<MemberYear>,
    /// Dreams with matching `fy`, sorted by fiscal month.
    pub year_dreams: Vec<DreamEvent>,
}

/// Age a member reaches during fiscal year `fy`.
pub fn age_in_fiscal_year(birth_year: i32, fy: i32) -> i32 {
    fy.wrapping_sub(birth_year)
}

/// Projects `profile` and `events` onto the fixed fiscal-year window.
///
/// Events whose `fy` falls outside the window are left out. Sorting is stable,
/// so events sharing a month keep their input order.
pub fn project(profile: &FamilyProfile, events: &[DreamEvent]) -> Vec<FiscalYearSnapshot> {
    (0..TIMELINE_HORIZON_YEARS)
        .map(|offset| {
            let fy = profile.start_fy.wrapping_add(offset);
            FiscalYearSnapshot {
                fy,
                members: profile
                    .members
                    .iter()
                    .map(|member| MemberYear::derive(member, fy))
                    .collect(),
                year_dreams: dreams_for_year(events, fy),
            }
        })
        .collect()
}

/// Returns the events of `fy` sorted in April-first order.
pub fn dreams_for_year(events: &[DreamEvent], fy: i32) -> Vec<DreamEvent> {
    let mut year_dreams: Vec<DreamEvent> = events
        .iter()
        .filter(|event| event.fy == fy)
        .cloned()
        .collect();
    year_dreams.sort_by_key(|event| fiscal_month_index(event.month));
    year_dreams
}

//! School-grade arithmetic for the April-start school year.
//!
//! Members born January to March ("early birds") enter elementary school one
//! fiscal year before peers born later in the same calendar year.

use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

const ELEMENTARY_YEARS: i32 = 6;
const JUNIOR_HIGH_END: i32 = 9;
const SENIOR_HIGH_END: i32 = 12;
const UNIVERSITY_END: i32 = 16;

/// Returns whether a member born in `birth_month` is an early bird.
pub fn is_early_bird(birth_month: u8) -> bool {
    birth_month <= 3
}

/// Fiscal year in which the member starts elementary school.
pub fn elementary_entrance_fy(birth_year: i32, birth_month: u8) -> i32 {
    if is_early_bird(birth_month) {
        birth_year.wrapping_add(6)
    } else {
        birth_year.wrapping_add(7)
    }
}

/// School stage reached in a given fiscal year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchoolGrade {
    PreSchool,
    Elementary(u8),
    JuniorHigh(u8),
    SeniorHigh(u8),
    University(u8),
    WorkingAdult,
}

impl SchoolGrade {
    /// Maps 1-based years since elementary entrance onto a stage.
    ///
    /// Each band is inclusive on its upper bound: 1..=6, 7..=9, 10..=12, 13..=16.
    pub fn from_years_since_entrance(years: i32) -> Self {
        if years < 1 {
            Self::PreSchool
        } else if years <= ELEMENTARY_YEARS {
            Self::Elementary(years as u8)
        } else if years <= JUNIOR_HIGH_END {
            Self::JuniorHigh((years - ELEMENTARY_YEARS) as u8)
        } else if years <= SENIOR_HIGH_END {
            Self::SeniorHigh((years - JUNIOR_HIGH_END) as u8)
        } else if years <= UNIVERSITY_END {
            Self::University((years - SENIOR_HIGH_END) as u8)
        } else {
            Self::WorkingAdult
        }
    }

    /// Grade of a member born in `birth_year`/`birth_month` during fiscal year `fy`.
    pub fn for_fiscal_year(birth_year: i32, birth_month: u8, fy: i32) -> Self {
        let entrance_fy = elementary_entrance_fy(birth_year, birth_month);
        Self::from_years_since_entrance(fy.wrapping_sub(entrance_fy).wrapping_add(1))
    }

    /// Display label in the source calendar convention (`小1`, `中2`, ...).
    pub fn label(&self) -> String {
        match self {
            Self::PreSchool => "未就学".to_string(),
            Self::Elementary(n) => format!("小{n}"),
            Self::JuniorHigh(n) => format!("中{n}"),
            Self::SeniorHigh(n) => format!("高{n}"),
            Self::University(n) => format!("大{n}"),
            Self::WorkingAdult => "社会人".to_string(),
        }
    }
}

impl Display for SchoolGrade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

// Serialized as the plain label so snapshots keep the `grade: string | null` shape.
impl Serialize for SchoolGrade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::{elementary_entrance_fy, SchoolGrade};

    #[test]
    fn bands_are_inclusive_on_upper_bound() {
        assert_eq!(SchoolGrade::from_years_since_entrance(0), SchoolGrade::PreSchool);
        assert_eq!(SchoolGrade::from_years_since_entrance(1), SchoolGrade::Elementary(1));
        assert_eq!(SchoolGrade::from_years_since_entrance(6), SchoolGrade::Elementary(6));
        assert_eq!(SchoolGrade::from_years_since_entrance(7), SchoolGrade::JuniorHigh(1));
        assert_eq!(SchoolGrade::from_years_since_entrance(9), SchoolGrade::JuniorHigh(3));
        assert_eq!(SchoolGrade::from_years_since_entrance(10), SchoolGrade::SeniorHigh(1));
        assert_eq!(SchoolGrade::from_years_since_entrance(12), SchoolGrade::SeniorHigh(3));
        assert_eq!(SchoolGrade::from_years_since_entrance(13), SchoolGrade::University(1));
        assert_eq!(SchoolGrade::from_years_since_entrance(16), SchoolGrade::University(4));
        assert_eq!(SchoolGrade::from_years_since_entrance(17), SchoolGrade::WorkingAdult);
    }

    #[test]
    fn early_bird_enters_one_year_earlier() {
        assert_eq!(elementary_entrance_fy(2015, 4), 2022);
        assert_eq!(elementary_entrance_fy(2015, 3), 2021);
    }

    #[test]
    fn labels_follow_source_convention() {
        assert_eq!(SchoolGrade::PreSchool.label(), "未就学");
        assert_eq!(SchoolGrade::JuniorHigh(2).to_string(), "中2");
        assert_eq!(SchoolGrade::WorkingAdult.label(), "社会人");
    }
}

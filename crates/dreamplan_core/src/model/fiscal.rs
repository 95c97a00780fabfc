//! Fiscal-year calendar helpers.
//!
//! A fiscal year `Y` spans calendar month 4 of `Y` through month 3 of `Y + 1`
//! and is labeled by the year it starts in.

use chrono::{Datelike, NaiveDate};

/// Calendar months in fiscal order (April first).
pub const FY_MONTHS: [u8; 12] = [4, 5, 6, 7, 8, 9, 10, 11, 12, 1, 2, 3];

/// First calendar month of a fiscal year.
pub const FISCAL_YEAR_START_MONTH: u8 = 4;

/// Returns the position of `month` inside [`FY_MONTHS`].
///
/// Months outside `1..=12` map to `-1`, so they sort ahead of April.
pub fn fiscal_month_index(month: u8) -> i32 {
    match month {
        4..=12 => i32::from(month) - 4,
        1..=3 => i32::from(month) + 8,
        _ => -1,
    }
}

/// Returns the fiscal year a calendar date falls in.
pub fn fiscal_year_of(date: NaiveDate) -> i32 {
    if date.month() < u32::from(FISCAL_YEAR_START_MONTH) {
        date.year() - 1
    } else {
        date.year()
    }
}

/// Start FY proposed for a new profile: the fiscal year containing `today`.
pub fn default_start_fy(today: NaiveDate) -> i32 {
    fiscal_year_of(today)
}

/// Short display label for a calendar month, e.g. `4月`.
pub fn month_label(month: u8) -> String {
    format!("{month}月")
}

#[cfg(test)]
mod tests {
    use super::{fiscal_month_index, fiscal_year_of, FY_MONTHS};
    use chrono::NaiveDate;

    #[test]
    fn fiscal_month_index_matches_fy_month_positions() {
        for (position, month) in FY_MONTHS.iter().enumerate() {
            assert_eq!(fiscal_month_index(*month), position as i32);
        }
    }

    #[test]
    fn out_of_domain_months_map_to_minus_one() {
        assert_eq!(fiscal_month_index(0), -1);
        assert_eq!(fiscal_month_index(13), -1);
    }

    #[test]
    fn january_to_march_belong_to_previous_fiscal_year() {
        let march = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        let april = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        assert_eq!(fiscal_year_of(march), 2024);
        assert_eq!(fiscal_year_of(april), 2025);
    }
}

//! Policy term in whole months

use chrono::{Datelike, NaiveDate};

/// Whole months between two dates
///
/// Returns 0 when either date is missing or the end is not after the start.
/// A final month is only counted once its day-of-month is reached; any
/// positive span counts as at least one month.
pub fn calculate_policy_term(start: Option<NaiveDate>, end: Option<NaiveDate>) -> u32 {
    let (Some(start), Some(end)) = (start, end) else {
        return 0;
    };
    if end <= start {
        return 0;
    }

    let mut months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if end.day() < start.day() {
        months -= 1;
    }

    months.max(1) as u32
}

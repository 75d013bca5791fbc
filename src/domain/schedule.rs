//! Monthly schedule arithmetic

use chrono::{Datelike, Days, Months, NaiveDate};

/// Add calendar months to a date, keeping the day of month.
///
/// A day past the end of the target month rolls over into the following
/// month instead of being clamped: 31-01-2025 plus one month is 03-03-2025.
/// Returns None if the result falls outside chrono's date range.
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    let first_of_target = date.with_day(1)?.checked_add_months(Months::new(months))?;
    first_of_target.checked_add_days(Days::new(u64::from(date.day() - 1)))
}

/// Date one calendar month after `date`
pub fn one_month_after(date: NaiveDate) -> Option<NaiveDate> {
    add_months(date, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_mid_month() {
        assert_eq!(one_month_after(date(2025, 5, 20)), Some(date(2025, 6, 20)));
    }

    #[test]
    fn test_year_boundary() {
        assert_eq!(one_month_after(date(2024, 12, 15)), Some(date(2025, 1, 15)));
    }

    #[test]
    fn test_end_of_month_rolls_over() {
        assert_eq!(one_month_after(date(2025, 1, 31)), Some(date(2025, 3, 3)));
        // Leap year February has 29 days
        assert_eq!(one_month_after(date(2024, 1, 31)), Some(date(2024, 3, 2)));
        assert_eq!(one_month_after(date(2025, 3, 31)), Some(date(2025, 5, 1)));
    }

    #[test]
    fn test_add_multiple_months() {
        assert_eq!(add_months(date(2025, 11, 30), 3), Some(date(2026, 3, 2)));
        assert_eq!(add_months(date(2025, 6, 1), 0), Some(date(2025, 6, 1)));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(one_month_after(NaiveDate::MAX), None);
    }
}

//! Internal calendar helpers.
//!
//! These utilities are **not** part of the public API. They centralize the
//! month arithmetic so the engine produces dense, leap-year-correct month
//! grids regardless of what the storage query returns.

use chrono::{Datelike, NaiveDate};

use crate::{EngineError, ResultEngine};

/// First and last day of the given `(year, month)`.
pub(crate) fn month_bounds(year: i32, month: u32) -> ResultEngine<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| EngineError::InvalidDate(format!("invalid month: {year}-{month:02}")))?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| EngineError::InvalidDate(format!("invalid month: {year}-{month:02}")))?;
    Ok((first, next_first.pred_opt().unwrap_or(first)))
}

/// Number of calendar days in `(year, month)`, leap years included.
pub(crate) fn days_in_month(year: i32, month: u32) -> ResultEngine<u32> {
    let (_, last) = month_bounds(year, month)?;
    Ok(last.day())
}

/// First and last day of the given year.
pub(crate) fn year_bounds(year: i32) -> ResultEngine<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| EngineError::InvalidDate(format!("invalid year: {year}")))?;
    let last = NaiveDate::from_ymd_opt(year, 12, 31)
        .ok_or_else(|| EngineError::InvalidDate(format!("invalid year: {year}")))?;
    Ok((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 1).unwrap(), 31);
        assert_eq!(days_in_month(2024, 4).unwrap(), 30);
        assert_eq!(days_in_month(2024, 12).unwrap(), 31);
    }

    #[test]
    fn february_follows_leap_years() {
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
    }

    #[test]
    fn out_of_range_month_is_rejected() {
        assert!(matches!(
            days_in_month(2024, 0),
            Err(EngineError::InvalidDate(_))
        ));
        assert!(matches!(
            days_in_month(2024, 13),
            Err(EngineError::InvalidDate(_))
        ));
    }

    #[test]
    fn bounds_cover_the_whole_month() {
        let (first, last) = month_bounds(2024, 2).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }
}

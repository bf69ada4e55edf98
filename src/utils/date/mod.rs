// Date utility functions
// Calendar-day arithmetic shared by the grid and the session

use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub fn is_same_day(date1: NaiveDate, date2: NaiveDate) -> bool {
    date1 == date2
}

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let last = last_day_of_month(date.year(), date.month());
    date + Duration::days(i64::from(last - date.day()))
}

/// Walk backward from `date` to the nearest `week_start` (inclusive).
///
/// Saturates at `NaiveDate::MIN` at the edge of chrono's range.
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    date.checked_sub_signed(Duration::days(days_since_week_start(date.weekday(), week_start)))
        .unwrap_or(NaiveDate::MIN)
}

/// Walk forward from `date` to the last day of its week (inclusive).
///
/// Saturates at `NaiveDate::MAX` at the edge of chrono's range.
pub fn end_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let remaining = 6 - days_since_week_start(date.weekday(), week_start);
    date.checked_add_signed(Duration::days(remaining))
        .unwrap_or(NaiveDate::MAX)
}

pub fn is_same_month(date1: NaiveDate, date2: NaiveDate) -> bool {
    date1.year() == date2.year() && date1.month() == date2.month()
}

/// Number of days in the given month (28..=31).
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// Shift by whole months, clamping the day to the target month's length.
///
/// Returns `None` only when the result would leave chrono's supported range.
pub fn shift_month_preserving_day(current: NaiveDate, delta_months: i32) -> Option<NaiveDate> {
    let total_months =
        i64::from(current.year()) * 12 + i64::from(current.month0()) + i64::from(delta_months);
    let new_year = i32::try_from(total_months.div_euclid(12)).ok()?;
    let new_month = total_months.rem_euclid(12) as u32 + 1;
    clamp_day(new_year, new_month, current.day())
}

fn clamp_day(year: i32, month: u32, desired_day: u32) -> Option<NaiveDate> {
    let day = desired_day.min(last_day_of_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
}

fn days_since_week_start(weekday: Weekday, week_start: Weekday) -> i64 {
    let offset = weekday.num_days_from_sunday() as i64 - week_start.num_days_from_sunday() as i64;
    offset.rem_euclid(7)
}

//! Month grid computation.
//!
//! Produces the week-aligned run of days a month view displays: the whole
//! reference month plus the leading and trailing days of the neighbouring
//! months that complete the first and last rows.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::calendar_day::CalendarDay;
use crate::models::settings::Settings;
use crate::services::clock::Clock;
use crate::utils::date::{
    end_of_month, end_of_week, shift_month_preserving_day, start_of_month, start_of_week,
};

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Computes visible days for a fixed week-start convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarGrid {
    week_start: Weekday,
}

impl CalendarGrid {
    pub fn new(week_start: Weekday) -> Self {
        Self { week_start }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.week_start())
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// First and last displayed dates for `reference`'s month, both inclusive.
    pub fn visible_range(&self, reference: NaiveDate) -> (NaiveDate, NaiveDate) {
        let start = start_of_week(start_of_month(reference), self.week_start);
        let end = end_of_week(end_of_month(reference), self.week_start);
        (start, end)
    }

    /// Every displayed day for `reference`'s month, in ascending order.
    ///
    /// The clock is read once per call; classifications are never cached
    /// across calls.
    pub fn compute_visible_days(&self, reference: NaiveDate, clock: &impl Clock) -> Vec<CalendarDay> {
        self.compute_visible_days_at(reference, clock.today())
    }

    /// Same as [`CalendarGrid::compute_visible_days`] with an explicit today.
    pub fn compute_visible_days_at(&self, reference: NaiveDate, today: NaiveDate) -> Vec<CalendarDay> {
        let (start, end) = self.visible_range(reference);
        start
            .iter_days()
            .take_while(|date| *date <= end)
            .map(|date| CalendarDay::classify(date, reference, today))
            .collect()
    }

    /// Move `reference` by whole months, clamping the day to the target
    /// month's length.
    ///
    /// A shift past chrono's supported range leaves the date unchanged.
    pub fn shift_month(reference: NaiveDate, delta_months: i32) -> NaiveDate {
        shift_month_preserving_day(reference, delta_months).unwrap_or_else(|| {
            log::warn!(
                "Cannot shift {} by {} months: outside supported range",
                reference,
                delta_months
            );
            reference
        })
    }

    /// Split a computed grid into display rows of seven days.
    pub fn weeks(days: &[CalendarDay]) -> Vec<&[CalendarDay]> {
        days.chunks(7).collect()
    }

    /// Short weekday names for the header row, starting at the week start.
    pub fn weekday_labels(&self) -> [&'static str; 7] {
        let start = self.week_start.num_days_from_sunday() as usize;
        std::array::from_fn(|i| DAY_NAMES[(start + i) % 7])
    }

    /// Title for the displayed month, e.g. "March 2024".
    pub fn month_title(reference: NaiveDate) -> String {
        reference.format("%B %Y").to_string()
    }
}

impl Default for CalendarGrid {
    fn default() -> Self {
        Self::new(Weekday::Sun)
    }
}

/// ISO week number of the row's middle day, as shown in the week column.
pub fn week_number(row: &[CalendarDay]) -> Option<u32> {
    row.get(row.len() / 2).map(|day| day.date.iso_week().week())
}

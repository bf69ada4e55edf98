//! Calendar day model.
//!
//! One cell of the month grid. Derived from a reference date and the current
//! day every time the grid is computed; never stored or mutated.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::utils::date::is_same_month;

/// A classified date in the visible month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// The date lies in the reference month (not a leading/trailing filler day)
    pub in_current_month: bool,
    pub is_today: bool,
    /// Today or later; event creation is only offered on these days
    pub is_future_or_today: bool,
}

impl CalendarDay {
    /// Classify `date` against the reference month and today's date.
    pub fn classify(date: NaiveDate, reference: NaiveDate, today: NaiveDate) -> Self {
        Self {
            date,
            in_current_month: is_same_month(date, reference),
            is_today: date == today,
            is_future_or_today: date >= today,
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub fn is_past(&self) -> bool {
        !self.is_future_or_today
    }
}

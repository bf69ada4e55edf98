// Test fixtures - reusable test data
// Provides consistent dates and sessions across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use month_calendar::models::settings::Settings;
use month_calendar::services::clock::FixedClock;
use month_calendar::services::session::CalendarSession;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Mar 15, 2024 (a Friday)
    pub fn march_15_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    /// Returns Mar 20, 2024
    pub fn march_20_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Returns Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}

/// Sample sessions for testing
pub mod sessions {
    use super::*;

    /// A Sunday-first session whose "today" is Mar 15, 2024
    pub fn march_2024() -> CalendarSession<FixedClock> {
        with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> CalendarSession<FixedClock> {
        CalendarSession::with_clock(&settings, FixedClock(dates::march_15_2024()))
    }
}

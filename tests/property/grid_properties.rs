// Property-based tests for month grid computation
// Checks the week-alignment guarantees over random reference dates

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use month_calendar::services::calendar_grid::CalendarGrid;
use month_calendar::utils::date::last_day_of_month;
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1900..2200i32, 1..=12u32, 1..=31u32).prop_map(|(year, month, day)| {
        let day = day.min(last_day_of_month(year, month));
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    })
}

fn any_weekday() -> impl Strategy<Value = Weekday> {
    prop::sample::select(vec![
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ])
}

proptest! {
    /// Property: the grid is whole weeks starting on the configured weekday
    #[test]
    fn prop_grid_is_whole_weeks(reference in any_date(), week_start in any_weekday()) {
        let grid = CalendarGrid::new(week_start);
        let days = grid.compute_visible_days_at(reference, reference);

        prop_assert_eq!(days.len() % 7, 0);
        prop_assert!(days.len() >= 28 && days.len() <= 42);
        prop_assert_eq!(days[0].date.weekday(), week_start);
    }

    /// Property: every day of the reference month is present, in order
    #[test]
    fn prop_grid_contains_whole_month(reference in any_date(), week_start in any_weekday()) {
        let days = CalendarGrid::new(week_start).compute_visible_days_at(reference, reference);

        let in_month: Vec<u32> = days
            .iter()
            .filter(|d| d.in_current_month)
            .map(|d| d.date.day())
            .collect();
        let expected: Vec<u32> = (1..=last_day_of_month(reference.year(), reference.month())).collect();
        prop_assert_eq!(in_month, expected);

        for pair in days.windows(2) {
            prop_assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    /// Property: leading and trailing filler never spans a full week
    #[test]
    fn prop_filler_is_less_than_a_week(reference in any_date(), week_start in any_weekday()) {
        let days = CalendarGrid::new(week_start).compute_visible_days_at(reference, reference);

        let leading = days.iter().take_while(|d| !d.in_current_month).count();
        let trailing = days.iter().rev().take_while(|d| !d.in_current_month).count();
        prop_assert!(leading < 7);
        prop_assert!(trailing < 7);
    }

    /// Property: any two dates in the same month give the same grid
    #[test]
    fn prop_same_month_same_grid(reference in any_date(), other_day in 1..=31u32, today in any_date()) {
        let other_day = other_day.min(last_day_of_month(reference.year(), reference.month()));
        let other = reference.with_day(other_day).unwrap();
        let grid = CalendarGrid::default();

        prop_assert_eq!(
            grid.compute_visible_days_at(reference, today),
            grid.compute_visible_days_at(other, today)
        );
    }

    /// Property: exactly the days on or after today are open for creation
    #[test]
    fn prop_future_flag_matches_today(reference in any_date(), today in any_date()) {
        let days = CalendarGrid::default().compute_visible_days_at(reference, today);

        for day in &days {
            prop_assert_eq!(day.is_future_or_today, day.date >= today);
            prop_assert_eq!(day.is_today, day.date == today);
        }
    }

    /// Property: shifting forward then back returns to the same month
    #[test]
    fn prop_shift_month_round_trips_month(reference in any_date(), delta in -240..240i32) {
        let shifted = CalendarGrid::shift_month(reference, delta);
        let back = CalendarGrid::shift_month(shifted, -delta);

        prop_assert_eq!((back.year(), back.month()), (reference.year(), reference.month()));
        prop_assert!(back.day() <= reference.day());
    }
}

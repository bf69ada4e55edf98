//! Plain-text rendering of the month grid.
//!
//! Each week is one row of day cells followed by the events that fall in
//! that week. Cells use `[d]` for today and `(d)` for days outside the
//! displayed month; a trailing `*` marks days with events.

use chrono::{Datelike, NaiveDate};
use std::fmt::Write;

use crate::models::calendar_day::CalendarDay;
use crate::models::event::Event;
use crate::services::calendar_grid::{week_number, CalendarGrid};
use crate::services::clock::Clock;
use crate::services::session::CalendarSession;

/// Width of one day cell including the event marker
const CELL_WIDTH: usize = 6;
/// Width of the week number column
const WEEK_NUMBER_WIDTH: usize = 4;
/// Longest title shown in the event list before truncation
const MAX_TITLE_CHARS: usize = 40;

pub struct MonthView;

impl MonthView {
    pub fn render<C: Clock>(session: &CalendarSession<C>, show_week_numbers: bool) -> String {
        let days = session.visible_days();
        let store = session.store();
        let events_by_day = store.events_by_day(&days);
        let mut out = String::new();

        let _ = writeln!(out, "{}", session.month_title());

        if show_week_numbers {
            let _ = write!(out, "{:<width$}", "Wk", width = WEEK_NUMBER_WIDTH);
        }
        for label in session.grid().weekday_labels() {
            let _ = write!(out, "{:^5} ", label);
        }
        out.truncate(out.trim_end().len());
        out.push('\n');

        for week in CalendarGrid::weeks(&days) {
            if show_week_numbers {
                let number = week_number(week).unwrap_or_default();
                let _ = write!(out, "{:<width$}", number, width = WEEK_NUMBER_WIDTH);
            }

            let mut row = String::new();
            for day in week {
                let has_events = events_by_day
                    .get(&day.date)
                    .is_some_and(|events| !events.is_empty());
                row.push_str(&Self::format_cell(day, has_events));
            }
            let _ = writeln!(out, "{}", row.trim_end());

            for day in week {
                for event in events_by_day.get(&day.date).into_iter().flatten() {
                    let _ = writeln!(out, "{}", Self::format_event_line(event));
                }
            }
        }

        if let Some(draft) = session.draft() {
            let _ = writeln!(
                out,
                "New event on {}: \"{}\" (save / cancel)",
                draft.date, draft.title
            );
        }
        if let Some(id) = session.editing() {
            let _ = writeln!(out, "Editing event #{} (rename <text> / cancel)", id);
        }

        out
    }

    /// One-line summary of the events on a single day.
    pub fn render_day<C: Clock>(session: &CalendarSession<C>, date: NaiveDate) -> String {
        let events = session.events_on(date);
        let mut out = format!("{}", date.format("%A %-d %B %Y"));
        if events.is_empty() {
            out.push_str(": no events");
            if session.can_create_on(date) {
                out.push_str(" (add available)");
            }
            return out;
        }
        for event in events {
            out.push('\n');
            out.push_str(&Self::format_event_line(event));
        }
        out
    }

    fn format_cell(day: &CalendarDay, has_events: bool) -> String {
        let number = day.date.day();
        let label = if day.is_today {
            format!("[{}]", number)
        } else if !day.in_current_month {
            format!("({})", number)
        } else {
            number.to_string()
        };
        let marker = if has_events { '*' } else { ' ' };
        format!("{:>4}{:<width$}", label, marker, width = CELL_WIDTH - 4)
    }

    fn format_event_line(event: &Event) -> String {
        format!(
            "    {}  #{} {} <{}>",
            event.date.format("%b %d"),
            event.id,
            truncate_to_chars(&event.title, MAX_TITLE_CHARS),
            event.color
        )
    }
}

/// Truncate text to at most `max_chars` characters, appending "…" when cut.
fn truncate_to_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

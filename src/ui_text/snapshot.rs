//! Serializable view of the visible month, for the `json` command.

use serde::Serialize;

use crate::models::calendar_day::CalendarDay;
use crate::models::event::Event;
use crate::services::clock::Clock;
use crate::services::session::CalendarSession;

#[derive(Debug, Serialize)]
pub struct MonthSnapshot<'a> {
    pub title: String,
    pub days: Vec<DaySnapshot<'a>>,
}

#[derive(Debug, Serialize)]
pub struct DaySnapshot<'a> {
    #[serde(flatten)]
    pub day: CalendarDay,
    pub events: Vec<&'a Event>,
}

impl<'a> MonthSnapshot<'a> {
    pub fn capture<C: Clock>(session: &'a CalendarSession<C>) -> Self {
        let days = session.visible_days();
        let mut events_by_day = session.store().events_by_day(&days);
        let days = days
            .into_iter()
            .map(|day| DaySnapshot {
                events: events_by_day.remove(&day.date).unwrap_or_default(),
                day,
            })
            .collect();

        Self {
            title: session.month_title(),
            days,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

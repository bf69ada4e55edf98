use super::EventStore;
use crate::models::calendar_day::CalendarDay;
use crate::models::event::{Event, EventId};
use chrono::NaiveDate;
use std::collections::BTreeMap;

impl EventStore {
    /// All events on the given calendar day, in insertion order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|event| event.is_on(date)).collect()
    }

    /// Events whose date lies in `[start, end]`, in insertion order.
    pub fn events_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.date >= start && event.date <= end)
            .collect()
    }

    /// Group events onto the days of a computed grid.
    ///
    /// Every grid day gets an entry, empty days included.
    pub fn events_by_day(&self, days: &[CalendarDay]) -> BTreeMap<NaiveDate, Vec<&Event>> {
        let mut grouped: BTreeMap<NaiveDate, Vec<&Event>> =
            days.iter().map(|day| (day.date, Vec::new())).collect();

        for event in &self.events {
            if let Some(bucket) = grouped.get_mut(&event.date) {
                bucket.push(event);
            }
        }

        grouped
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

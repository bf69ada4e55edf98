use super::shared::pick_color;
use super::EventStore;
use crate::models::event::{normalize_title, Event, EventId, EventValidationError};
use chrono::NaiveDate;

impl EventStore {
    /// Create a new event on `date`.
    ///
    /// The title is trimmed and must not be empty. Any date is accepted;
    /// callers that only allow today-or-later creation check that first.
    pub fn create(
        &mut self,
        date: NaiveDate,
        title: impl AsRef<str>,
    ) -> Result<Event, EventValidationError> {
        let id = self.next_id;
        let color = pick_color(self.color_assignment, id, self.created_count);
        let event = Event::new(id, title, date, color)?;

        self.next_id += 1;
        self.created_count += 1;
        self.events.push(event.clone());

        log::debug!("Created event {} on {} ({})", event.id, event.date, event.color);
        Ok(event)
    }

    /// Replace the title of an existing event.
    ///
    /// Returns `false` without touching anything when the id is unknown or
    /// the new title is blank after trimming.
    pub fn rename(&mut self, id: EventId, new_title: impl AsRef<str>) -> bool {
        let Some(event) = self.events.iter_mut().find(|event| event.id == id) else {
            log::debug!("Ignoring rename of unknown event {}", id);
            return false;
        };

        match normalize_title(new_title.as_ref()) {
            Ok(title) => {
                event.title = title;
                log::debug!("Renamed event {}", id);
                true
            }
            Err(err) => {
                log::debug!("Ignoring rename of event {}: {}", id, err);
                false
            }
        }
    }

    /// Delete an event by ID, returning it if it was present.
    pub fn delete(&mut self, id: EventId) -> Option<Event> {
        let index = self.events.iter().position(|event| event.id == id)?;
        let removed = self.events.remove(index);
        log::debug!("Deleted event {} from {}", removed.id, removed.date);
        Some(removed)
    }
}

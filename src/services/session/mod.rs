//! Calendar session state.
//!
//! Owns everything a month view needs between user actions: the reference
//! date, the event store, the pending "new event" draft and the event being
//! edited. Presentation layers hold one `CalendarSession` and route every
//! navigation and edit through it.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::calendar_day::CalendarDay;
use crate::models::event::{Event, EventId, EventValidationError};
use crate::models::settings::Settings;
use crate::services::calendar_grid::CalendarGrid;
use crate::services::clock::{Clock, SystemClock};
use crate::services::event::EventStore;

/// Errors surfaced by session-level edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Cannot create events in the past ({0})")]
    PastDate(NaiveDate),
    #[error("No new event is being drafted")]
    NoDraft,
    #[error("No event is being edited")]
    NotEditing,
    #[error("Event {0} does not exist")]
    UnknownEvent(EventId),
    #[error(transparent)]
    Validation(#[from] EventValidationError),
}

/// Title being typed for a not-yet-created event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub date: NaiveDate,
    pub title: String,
}

pub struct CalendarSession<C: Clock = SystemClock> {
    reference_date: NaiveDate,
    grid: CalendarGrid,
    store: EventStore,
    clock: C,
    draft: Option<EventDraft>,
    editing: Option<EventId>,
}

impl CalendarSession<SystemClock> {
    /// Start a session on today's month using the wall clock.
    pub fn new(settings: &Settings) -> Self {
        Self::with_clock(settings, SystemClock)
    }
}

impl<C: Clock> CalendarSession<C> {
    pub fn with_clock(settings: &Settings, clock: C) -> Self {
        let reference_date = clock.today();
        Self {
            reference_date,
            grid: CalendarGrid::from_settings(settings),
            store: EventStore::with_color_assignment(settings.color_assignment),
            clock,
            draft: None,
            editing: None,
        }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn grid(&self) -> &CalendarGrid {
        &self.grid
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn draft(&self) -> Option<&EventDraft> {
        self.draft.as_ref()
    }

    pub fn editing(&self) -> Option<EventId> {
        self.editing
    }

    // ── Navigation ──────────────────────────────────────────────────

    pub fn previous_month(&mut self) {
        self.reference_date = CalendarGrid::shift_month(self.reference_date, -1);
    }

    pub fn next_month(&mut self) {
        self.reference_date = CalendarGrid::shift_month(self.reference_date, 1);
    }

    pub fn jump_to_today(&mut self) {
        self.reference_date = self.clock.today();
    }

    pub fn go_to(&mut self, date: NaiveDate) {
        self.reference_date = date;
    }

    /// Grid for the current reference month, classified against today.
    pub fn visible_days(&self) -> Vec<CalendarDay> {
        self.grid.compute_visible_days(self.reference_date, &self.clock)
    }

    pub fn month_title(&self) -> String {
        CalendarGrid::month_title(self.reference_date)
    }

    // ── Event creation ──────────────────────────────────────────────

    /// Events may only be created today or later.
    pub fn can_create_on(&self, date: NaiveDate) -> bool {
        date >= self.clock.today()
    }

    /// Open an empty draft on `date`, replacing any previous draft.
    pub fn begin_new_event(&mut self, date: NaiveDate) -> Result<(), SessionError> {
        if !self.can_create_on(date) {
            log::info!("Refusing to draft event on past date {}", date);
            return Err(SessionError::PastDate(date));
        }
        self.draft = Some(EventDraft {
            date,
            title: String::new(),
        });
        Ok(())
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) -> Result<(), SessionError> {
        let draft = self.draft.as_mut().ok_or(SessionError::NoDraft)?;
        draft.title = title.into();
        Ok(())
    }

    /// Turn the draft into a stored event.
    ///
    /// A blank title keeps the draft open so the input is not lost.
    pub fn commit_draft(&mut self) -> Result<Event, SessionError> {
        let draft = self.draft.as_ref().ok_or(SessionError::NoDraft)?;
        // The day may have rolled over since the draft was opened
        if !self.can_create_on(draft.date) {
            return Err(SessionError::PastDate(draft.date));
        }

        let event = self.store.create(draft.date, &draft.title)?;
        self.draft = None;
        log::info!("Added event {} \"{}\" on {}", event.id, event.title, event.date);
        Ok(event)
    }

    pub fn cancel_draft(&mut self) {
        self.draft = None;
    }

    // ── Editing ─────────────────────────────────────────────────────

    pub fn begin_edit(&mut self, id: EventId) -> Result<(), SessionError> {
        if self.store.get(id).is_none() {
            return Err(SessionError::UnknownEvent(id));
        }
        self.editing = Some(id);
        Ok(())
    }

    /// Rename the event being edited and leave editing mode.
    ///
    /// Returns whether the title changed; a blank title leaves it as it was.
    pub fn commit_edit(&mut self, title: &str) -> Result<bool, SessionError> {
        let id = self.editing.take().ok_or(SessionError::NotEditing)?;
        Ok(self.store.rename(id, title))
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Rename any event directly; unknown ids are ignored.
    pub fn rename_event(&mut self, id: EventId, title: &str) -> bool {
        self.store.rename(id, title)
    }

    /// Delete an event; unknown ids are ignored.
    pub fn delete_event(&mut self, id: EventId) -> Option<Event> {
        if self.editing == Some(id) {
            self.editing = None;
        }
        let removed = self.store.delete(id);
        if let Some(event) = &removed {
            log::info!("Removed event {} \"{}\"", event.id, event.title);
        }
        removed
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.store.events_on(date)
    }
}

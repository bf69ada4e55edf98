// Event module
// Single-day calendar event held by the in-session store

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::models::color_tag::ColorTag;

/// Identifier handed out by the event store; never reused within a session.
pub type EventId = i64;

/// A single-day, non-recurring event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    pub color: ColorTag,
}

/// Validation errors raised when building or renaming an event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventValidationError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
}

impl Event {
    /// Create a new event with a validated title
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the store
    /// * `title` - Event title; surrounding whitespace is trimmed
    /// * `date` - Calendar day the event belongs to
    /// * `color` - Cosmetic colour tag
    ///
    /// # Returns
    /// Returns `Err(EventValidationError::EmptyTitle)` for blank titles
    ///
    /// # Examples
    /// ```
    /// use month_calendar::models::color_tag::ColorTag;
    /// use month_calendar::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
    /// let event = Event::new(1, "  Demo  ", date, ColorTag::Blue).unwrap();
    /// assert_eq!(event.title, "Demo");
    /// ```
    pub fn new(
        id: EventId,
        title: impl AsRef<str>,
        date: NaiveDate,
        color: ColorTag,
    ) -> Result<Self, EventValidationError> {
        Ok(Self {
            id,
            title: normalize_title(title.as_ref())?,
            date,
            color,
        })
    }

    /// Check whether the event falls on the given calendar day
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}

/// Trim a title and reject it if nothing is left.
pub fn normalize_title(title: &str) -> Result<String, EventValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(EventValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

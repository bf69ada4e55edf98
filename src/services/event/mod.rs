//! Calendar event store entry point.
//! Provides the in-session event collection with mutations and day queries
//! organized across focused submodules.

use crate::models::event::{Event, EventId};
use crate::models::settings::ColorAssignment;

pub mod crud;
pub mod queries;
mod shared;

/// In-memory collection of single-day events, owned by one session.
///
/// Events keep their insertion order; ids come from a counter that only
/// moves forward, so an id is never handed out twice.
#[derive(Debug, Clone)]
pub struct EventStore {
    pub(crate) events: Vec<Event>,
    pub(crate) next_id: EventId,
    pub(crate) created_count: usize,
    pub(crate) color_assignment: ColorAssignment,
}

impl EventStore {
    /// Create an empty store using the default colour assignment
    pub fn new() -> Self {
        Self::with_color_assignment(ColorAssignment::default())
    }

    /// Create an empty store with an explicit colour policy
    pub fn with_color_assignment(color_assignment: ColorAssignment) -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
            created_count: 0,
            color_assignment,
        }
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

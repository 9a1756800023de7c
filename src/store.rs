//! The event store: date-keyed event lists and the derived date index.

use std::collections::{BTreeMap, BTreeSet};

use crate::event::{Event, EventDraft};
use crate::id::generate_event_id;

/// Where an event lives in the store: the owning date key, the position
/// within that date's list, and the event itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocatedEvent<'a> {
    pub date: &'a str,
    pub index: usize,
    pub event: &'a Event,
}

/// Sole owner of the widget's event state.
///
/// One instance is created at application start and handed by reference to
/// the rendering layer. All operations are synchronous and infallible:
/// update/delete on an unknown id is a silent no-op, and date keys are
/// matched exactly without validation.
///
/// Lists are most-recent-first: adds prepend. Event ids are store-assigned
/// and unique across all dates, so an id names at most one event anywhere
/// in the map.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: BTreeMap<String, Vec<Event>>,
}

impl EventStore {
    pub fn new() -> Self {
        EventStore::default()
    }

    /// Events for a date, in current stored order.
    ///
    /// Empty for dates the store has never seen as well as for dates whose
    /// list has been emptied by deletion.
    pub fn events(&self, date: &str) -> &[Event] {
        self.events.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Add an event to a date and return the date's updated list.
    ///
    /// Initializes the date's list if absent, assigns a fresh id and puts
    /// the new event at the front.
    pub fn add_event(&mut self, date: &str, draft: EventDraft) -> &[Event] {
        let list = self.events.entry(date.to_string()).or_default();
        list.insert(0, Event::from_draft(generate_event_id(), draft));
        list
    }

    /// Replace a stored event with the given record, matched by id.
    ///
    /// Full replacement at the same list position, not a field merge:
    /// callers pass back the complete record, so every field (extras
    /// included) ends up exactly as given. Unknown ids are ignored.
    pub fn update_event(&mut self, event: Event) {
        for list in self.events.values_mut() {
            if let Some(slot) = list.iter_mut().find(|e| e.id == event.id) {
                *slot = event;
                return;
            }
        }
    }

    /// Remove the event with the given id, wherever it is stored.
    ///
    /// The owning date keeps its key even when the removal empties its
    /// list; the date simply stops appearing in [`Self::dates_with_events`].
    /// Unknown ids are ignored.
    pub fn delete_event(&mut self, event_id: &str) {
        for list in self.events.values_mut() {
            if let Some(index) = list.iter().position(|e| e.id == event_id) {
                list.remove(index);
                return;
            }
        }
    }

    /// Locate an event by id with a linear scan over all dates' lists.
    ///
    /// `None` is the normal not-found outcome, not an error. Ids are unique
    /// store-wide, so at most one match exists and the scan order across
    /// dates is not observable to callers.
    pub fn find_event_by_id(&self, event_id: &str) -> Option<LocatedEvent<'_>> {
        for (date, list) in &self.events {
            if let Some(index) = list.iter().position(|e| e.id == event_id) {
                return Some(LocatedEvent {
                    date,
                    index,
                    event: &list[index],
                });
            }
        }
        None
    }

    /// Date keys currently holding at least one event.
    ///
    /// Derived from the map on every call, so an observer can never see it
    /// stale relative to a mutation.
    pub fn dates_with_events(&self) -> BTreeSet<String> {
        self.events
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(date, _)| date.clone())
            .collect()
    }

    /// True when no date holds any event.
    pub fn is_empty(&self) -> bool {
        self.events.values().all(Vec::is_empty)
    }

    /// Total number of events across all dates.
    pub fn event_count(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }
}

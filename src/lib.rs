//! Core event store for the calgrid calendar widget.
//!
//! This crate provides the widget's only stateful piece:
//! - `Event` and related types for calendar events
//! - `EventStore` for date-keyed event storage, lookup and the derived
//!   index of dates that currently hold events
//! - `date_key` helpers for the canonical `YYYY-MM-DD` key format

pub mod date_key;
pub mod error;
pub mod event;
pub mod id;
pub mod store;

// Re-export the main types at crate root for convenience
pub use error::{CalGridError, CalGridResult};
pub use event::{CreateEventRequest, Event, EventDraft};
pub use store::{EventStore, LocatedEvent};

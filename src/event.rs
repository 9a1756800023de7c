//! Event types for the calgrid widget.
//!
//! Events are open records: beyond the fixed fields, callers may attach
//! arbitrary extra fields. The store treats those opaquely and carries them
//! verbatim through updates, so the rendering layer can round-trip whatever
//! it put in.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A calendar event attached to exactly one date key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Store-assigned identifier, unique across all dates.
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Caller-defined extra fields, flattened into the record.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    /// Build an event from a draft plus a store-assigned id.
    pub(crate) fn from_draft(id: String, draft: EventDraft) -> Self {
        Event {
            id,
            title: draft.title,
            text: draft.text,
            extra: draft.extra,
        }
    }
}

/// Event fields as supplied by the caller; the store assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EventDraft {
    pub fn new(title: &str) -> Self {
        EventDraft {
            title: title.to_string(),
            ..EventDraft::default()
        }
    }
}

/// Payload a rendering layer submits from its event form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub date: String,
    pub event: EventDraft,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_serializes_as_flat_open_record() {
        let mut extra = Map::new();
        extra.insert("color".to_string(), json!("#ff0000"));

        let event = Event {
            id: "abc123XYZ0".to_string(),
            title: "Dentist".to_string(),
            text: None,
            extra,
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "abc123XYZ0",
                "title": "Dentist",
                "color": "#ff0000"
            })
        );
    }

    #[test]
    fn event_deserializes_unknown_fields_into_extra() {
        let event: Event = serde_json::from_value(json!({
            "id": "abc123XYZ0",
            "title": "Standup",
            "text": "daily",
            "location": "room 4",
            "attendees": 3
        }))
        .unwrap();

        assert_eq!(event.text.as_deref(), Some("daily"));
        assert_eq!(event.extra["location"], json!("room 4"));
        assert_eq!(event.extra["attendees"], json!(3));
    }

    #[test]
    fn draft_roundtrips_through_json() {
        let draft: EventDraft = serde_json::from_value(json!({
            "title": "Lunch",
            "tags": ["food"]
        }))
        .unwrap();

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value, json!({"title": "Lunch", "tags": ["food"]}));
    }

    #[test]
    fn create_event_request_carries_date_and_draft() {
        let request: CreateEventRequest = serde_json::from_value(json!({
            "date": "2024-05-01",
            "event": {"title": "Review"}
        }))
        .unwrap();

        assert_eq!(request.date, "2024-05-01");
        assert_eq!(request.event.title, "Review");
        assert!(request.event.extra.is_empty());
    }
}

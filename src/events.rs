use serde::Deserialize;

/// An opaque event record. The API defines its shape; the SDK passes it through
/// unmodified in both directions.
pub type Event = serde_json::Value;

/// Numeric identifier of a persisted event.
pub type EventId = u64;

/// Selects the success notification a fetch publishes, letting the store distinguish
/// append-at-top (latest) from append-at-bottom (older) pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Publish [`Notification::GetLatestEvents`](crate::Notification::GetLatestEvents).
    Latest,
    /// Publish [`Notification::GetOlderEvents`](crate::Notification::GetOlderEvents).
    Older,
}

/// One page of events, as carried by the fetch success notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct EventPage {
    /// Events of this page, in server order.
    pub items: Vec<Event>,
    /// Total number of events known to the server.
    pub total: u64,
    /// Page size the server applied.
    pub limit: u64,
    /// Offset the server applied.
    pub offset: u64,
}

pub(crate) const DEFAULT_LIMIT: u64 = 10;
pub(crate) const DEFAULT_OFFSET: u64 = 0;

/// Raw list-response body, `{"data": {"data": {...}}}`. Every level and field is
/// optional; missing pieces fall back to the documented defaults, so defaulting rules
/// live in one place.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListEnvelope {
    #[serde(default)]
    data: ListData,
}

#[derive(Debug, Default, Deserialize)]
struct ListData {
    #[serde(default)]
    data: EventList,
}

#[derive(Debug, Deserialize)]
struct EventList {
    #[serde(default)]
    events: Vec<Event>,
    #[serde(default)]
    total: u64,
    #[serde(default = "default_limit")]
    limit: u64,
    #[serde(default = "default_offset")]
    offset: u64,
}

impl Default for EventList {
    fn default() -> Self {
        EventList {
            events: Vec::new(),
            total: 0,
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

fn default_offset() -> u64 {
    DEFAULT_OFFSET
}

impl ListEnvelope {
    pub(crate) fn into_page(self) -> EventPage {
        let EventList {
            events,
            total,
            limit,
            offset,
        } = self.data.data;
        EventPage {
            items: events,
            total,
            limit,
            offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{EventPage, ListEnvelope};

    #[test]
    fn decodes_full_envelope() {
        let envelope: ListEnvelope = serde_json::from_value(json!({
            "data": {
                "data": {
                    "events": [{"id": 1}, {"id": 2}],
                    "total": 2,
                    "limit": 10,
                    "offset": 0,
                }
            }
        }))
        .unwrap();

        assert_eq!(
            envelope.into_page(),
            EventPage {
                items: vec![json!({"id": 1}), json!({"id": 2})],
                total: 2,
                limit: 10,
                offset: 0,
            }
        );
    }

    #[test]
    fn defaults_when_nesting_is_missing() {
        let envelope: ListEnvelope = serde_json::from_str("{}").unwrap();

        assert_eq!(
            envelope.into_page(),
            EventPage {
                items: vec![],
                total: 0,
                limit: 10,
                offset: 0,
            }
        );
    }

    #[test]
    fn defaults_missing_fields_individually() {
        let envelope: ListEnvelope = serde_json::from_value(json!({
            "data": {"data": {"events": [{"id": 7}]}}
        }))
        .unwrap();

        let page = envelope.into_page();
        assert_eq!(page.items, vec![json!({"id": 7})]);
        assert_eq!(page.total, 0);
        assert_eq!(page.limit, 10);
        assert_eq!(page.offset, 0);
    }
}

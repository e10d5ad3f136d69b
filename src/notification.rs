use crate::{
    events::{EventId, EventPage},
    Error,
};

/// A discrete message describing a state transition, published to the store for
/// downstream state reduction.
///
/// Notifications are ephemeral: each is constructed, published once and discarded within
/// a single request/response cycle.
#[derive(Debug, Clone)]
pub enum Notification {
    /// A view-event request has been issued.
    StartToViewEvent,
    /// The event was successfully marked as viewed.
    ViewedEvent {
        /// Identifier of the event that was marked.
        event_id: EventId,
    },
    /// Marking the event as viewed failed.
    ErrorToViewEvent {
        /// The underlying transport error, unchanged.
        error: Error,
        /// Identifier of the event the request was for.
        event_id: EventId,
    },
    /// An event-list request has been issued.
    StartToGetEvents {
        /// The fully-qualified URL being fetched.
        url: String,
    },
    /// A page of the latest events arrived (append-at-top semantics).
    GetLatestEvents(EventPage),
    /// A page of older events arrived (append-at-bottom semantics).
    GetOlderEvents(EventPage),
    /// An event-list request failed.
    ErrorToGetEvents {
        /// The underlying transport error, unchanged.
        error: Error,
    },
}

/// Receiver for [`Notification`]s, decoupling the SDK from any specific store
/// implementation.
///
/// Implemented for any `Fn(Notification)`, so a store's dispatch function can be passed
/// as a closure.
pub trait NotificationPublisher {
    /// Publish a single notification. Expected to handle it synchronously.
    fn publish(&self, notification: Notification);
}

pub(crate) struct NoopPublisher;
impl NotificationPublisher for NoopPublisher {
    fn publish(&self, _notification: Notification) {}
}

impl<T: Fn(Notification)> NotificationPublisher for T {
    fn publish(&self, notification: Notification) {
        self(notification);
    }
}

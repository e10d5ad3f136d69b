use serde::Serialize;

use crate::{
    events::{EventPage, ListEnvelope, PageKind},
    notification::Notification,
    url_builder::form_api_url,
    ClientConfig, Error, Event, EventId, Result,
};

/// Relative path of the "new events" endpoint, used both for creation and listing.
const NEW_EVENTS_ENDPOINT: &str = "new-alarm-events/";

/// Relative path of the "event viewed" endpoint.
const VIEW_EVENT_ENDPOINT: &str = "event-viewed/event-id/";

/// Conventional page size for the paginated fetchers. Rust has no default arguments;
/// callers that don't care pass this.
pub const DEFAULT_FETCH_LIMIT: u64 = 5;

/// Conventional starting offset for the paginated fetchers.
pub const DEFAULT_FETCH_OFFSET: u64 = 0;

/// A client for the alarm events API.
///
/// In order to create a client instance, first create [`ClientConfig`].
///
/// # Examples
/// ```
/// # use alarm_events::{EventApiClient, ClientConfig};
/// EventApiClient::new(ClientConfig::new());
/// ```
pub struct EventApiClient<'a> {
    // Client holds a connection pool internally, so we're reusing it between requests.
    http: reqwest::blocking::Client,
    config: ClientConfig<'a>,
}

#[derive(Serialize)]
struct ViewEventBody {
    event_id: EventId,
}

impl<'a> EventApiClient<'a> {
    /// Create a new `EventApiClient` using the specified configuration.
    ///
    /// ```
    /// # use alarm_events::{ClientConfig, EventApiClient};
    /// let client = EventApiClient::new(ClientConfig::new());
    /// ```
    pub fn new(config: ClientConfig<'a>) -> Self {
        EventApiClient {
            http: reqwest::blocking::Client::new(),
            config,
        }
    }

    /// Build a fully-qualified API URL from a relative path.
    ///
    /// With `encode`, the path is percent-encoded with `encodeURI` semantics: unsafe
    /// characters are escaped while valid URI syntax such as `/`, `?`, `&` and `=` is
    /// preserved.
    pub fn api_url(&self, path: &str, encode: bool) -> String {
        form_api_url(&self.config, path, encode)
    }

    fn publish(&self, notification: Notification) {
        self.config.publisher.publish(notification);
    }

    /// Submit a new event record.
    ///
    /// The event shape is defined by the API; it is passed through unmodified. A network
    /// error, timeout or non-2xx status is returned to the caller unchanged. No
    /// notification is published for this operation.
    pub fn create_event(&self, event: &Event) -> Result<()> {
        let url = self.api_url(NEW_EVENTS_ENDPOINT, true);
        log::debug!(target: "alarm_events", url; "creating event");
        self.http
            .post(&url)
            .timeout(self.config.timeout)
            .json(event)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|err| {
                log::warn!(target: "alarm_events", "failed to create event: {:?}", err);
                Error::from(err)
            })?;
        Ok(())
    }

    /// Mark the event identified by `event_id` as viewed.
    ///
    /// Publishes [`Notification::StartToViewEvent`], then exactly one of
    /// [`Notification::ViewedEvent`] or [`Notification::ErrorToViewEvent`]. On failure
    /// the same error value recorded in the notification is also returned to the caller.
    pub fn view_event(&self, event_id: EventId) -> Result<()> {
        let url = self.api_url(VIEW_EVENT_ENDPOINT, true);
        self.publish(Notification::StartToViewEvent);

        let result = self
            .http
            .post(&url)
            .timeout(self.config.timeout)
            .json(&ViewEventBody { event_id })
            .send()
            .and_then(|response| response.error_for_status());

        match result {
            Ok(_) => {
                log::debug!(target: "alarm_events", event_id; "event marked as viewed");
                self.publish(Notification::ViewedEvent { event_id });
                Ok(())
            }
            Err(err) => {
                log::warn!(target: "alarm_events", event_id; "failed to mark event as viewed: {:?}", err);
                let error = Error::from(err);
                self.publish(Notification::ErrorToViewEvent {
                    error: error.clone(),
                    event_id,
                });
                Err(error)
            }
        }
    }

    /// Fetch a page of events from a fully-formed URL.
    ///
    /// Publishes [`Notification::StartToGetEvents`], then either the success
    /// notification selected by `kind` or [`Notification::ErrorToGetEvents`]. Failures
    /// are fully absorbed into the error notification: unlike
    /// [`create_event`](EventApiClient::create_event) and
    /// [`view_event`](EventApiClient::view_event), the fetch family never reports an
    /// error to the caller.
    pub fn fetch_events(&self, url: &str, kind: PageKind) {
        self.publish(Notification::StartToGetEvents {
            url: url.to_owned(),
        });

        match self.get_event_page(url) {
            Ok(page) => {
                log::debug!(target: "alarm_events", url; "fetched events page");
                self.publish(match kind {
                    PageKind::Latest => Notification::GetLatestEvents(page),
                    PageKind::Older => Notification::GetOlderEvents(page),
                });
            }
            Err(error) => {
                log::warn!(target: "alarm_events", url; "failed to fetch events: {:?}", error);
                self.publish(Notification::ErrorToGetEvents { error });
            }
        }
    }

    fn get_event_page(&self, url: &str) -> Result<EventPage> {
        let response = self
            .http
            .get(url)
            .timeout(self.config.timeout)
            .send()?
            .error_for_status()?;
        let envelope: ListEnvelope = response.json()?;
        Ok(envelope.into_page())
    }

    /// Fetch the newest page of events.
    ///
    /// Requests `new-alarm-events/?limit={limit}&offset={offset}` and publishes
    /// [`Notification::GetLatestEvents`] on success.
    pub fn fetch_latest_events(&self, offset: u64, limit: u64) {
        let path = format!("{NEW_EVENTS_ENDPOINT}?limit={limit}&offset={offset}");
        let url = self.api_url(&path, true);
        self.fetch_events(&url, PageKind::Latest)
    }

    /// Fetch a page of older events.
    ///
    /// Identical to [`fetch_latest_events`](EventApiClient::fetch_latest_events) except
    /// that success publishes [`Notification::GetOlderEvents`], which is what lets the
    /// store append the page at the bottom instead of the top.
    pub fn fetch_older_events(&self, offset: u64, limit: u64) {
        let path = format!("{NEW_EVENTS_ENDPOINT}?limit={limit}&offset={offset}");
        let url = self.api_url(&path, true);
        self.fetch_events(&url, PageKind::Older)
    }
}

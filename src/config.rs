use std::time::Duration;

use crate::{
    notification::{NoopPublisher, NotificationPublisher},
    EventApiClient,
};

/// Configuration for [`EventApiClient`].
///
/// Fixed once the client is constructed; none of the settings are mutated at runtime.
pub struct ClientConfig<'a> {
    pub(crate) protocol: String,
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) version_prefix: String,
    pub(crate) timeout: Duration,
    pub(crate) publisher: Box<dyn NotificationPublisher + Send + Sync + 'a>,
}

impl<'a> ClientConfig<'a> {
    /// Default protocol for API calls.
    pub const DEFAULT_PROTOCOL: &'static str = "http";

    /// Default API host.
    pub const DEFAULT_HOST: &'static str = "localhost";

    /// Default API port.
    pub const DEFAULT_PORT: u16 = 8080;

    /// Default API version prefix. Joined verbatim between the authority and the
    /// request path.
    pub const DEFAULT_VERSION_PREFIX: &'static str = "/v1/";

    /// Default per-request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3000);

    /// Create a configuration pointing at the default local API endpoint, with a
    /// publisher that drops all notifications.
    ///
    /// ```
    /// # use alarm_events::ClientConfig;
    /// ClientConfig::new();
    /// ```
    pub fn new() -> Self {
        ClientConfig {
            protocol: Self::DEFAULT_PROTOCOL.to_owned(),
            host: Self::DEFAULT_HOST.to_owned(),
            port: Self::DEFAULT_PORT,
            version_prefix: Self::DEFAULT_VERSION_PREFIX.to_owned(),
            timeout: Self::DEFAULT_TIMEOUT,
            publisher: Box::new(NoopPublisher),
        }
    }

    /// Override the protocol for API calls.
    pub fn protocol(&mut self, protocol: impl Into<String>) -> &mut Self {
        self.protocol = protocol.into();
        self
    }

    /// Override the API host.
    pub fn host(&mut self, host: impl Into<String>) -> &mut Self {
        self.host = host.into();
        self
    }

    /// Override the API port.
    pub fn port(&mut self, port: u16) -> &mut Self {
        self.port = port;
        self
    }

    /// Override the API version prefix.
    pub fn version_prefix(&mut self, version_prefix: impl Into<String>) -> &mut Self {
        self.version_prefix = version_prefix.into();
        self
    }

    /// Override the per-request timeout. On expiry the request settles as a failure,
    /// routed through the same failure branch as any other transport error.
    pub fn timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeout = timeout;
        self
    }

    /// Set the notification publisher that receives store notifications.
    ///
    /// ```
    /// # use alarm_events::ClientConfig;
    /// let mut config = ClientConfig::new();
    /// config.notification_publisher(|notification| {
    ///     println!("{:?}", notification);
    /// });
    /// ```
    pub fn notification_publisher(
        &mut self,
        publisher: impl NotificationPublisher + Send + Sync + 'a,
    ) -> &mut Self {
        self.publisher = Box::new(publisher);
        self
    }

    /// Create a new [`EventApiClient`] using this configuration.
    ///
    /// ```
    /// # use alarm_events::{ClientConfig, EventApiClient};
    /// let client: EventApiClient = ClientConfig::new().to_client();
    /// ```
    pub fn to_client(self) -> EventApiClient<'a> {
        EventApiClient::new(self)
    }
}

impl Default for ClientConfig<'_> {
    fn default() -> Self {
        Self::new()
    }
}

use alarm_events::{ClientConfig, Notification};

pub fn main() {
    env_logger::init();

    let mut config = ClientConfig::new();
    config.notification_publisher(|notification: Notification| {
        println!("{:?}", notification);
    });
    let client = config.to_client();

    // Submit an event; the record's shape is defined by the API.
    client
        .create_event(&serde_json::json!({
            "name": "overheat",
            "severity": "critical",
        }))
        .expect("failed to create event");

    // Page through events: the newest five, then the five after those.
    client.fetch_latest_events(0, 5);
    client.fetch_older_events(5, 5);

    // Mark the first event as viewed.
    client.view_event(1).expect("failed to view event");
}

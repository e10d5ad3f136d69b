//! Client SDK for the alarm events API.
//!
//! # Overview
//!
//! The SDK revolves around an [`EventApiClient`] that issues requests against the alarm
//! events HTTP API and publishes a [`Notification`] for every state transition to an
//! injected [`NotificationPublisher`] (typically the dispatch function of a client-side
//! store). A [`ClientConfig`] describes the API endpoint (protocol, host, port, version
//! prefix) and the per-request timeout.
//!
//! Three operations are supported: submitting a new event, marking an event as viewed,
//! and paginated retrieval of event lists (latest or older pages).
//!
//! # Error Handling
//!
//! Errors are represented by the [`Error`] enum. Note that the two write operations
//! ([`EventApiClient::create_event`], [`EventApiClient::view_event`]) return failures to
//! the caller, while the fetch family absorbs failures into a
//! [`Notification::ErrorToGetEvents`] notification and returns normally. The asymmetry is
//! intentional: fetch failures are observable only through the store.
//!
//! # Logging
//!
//! The package uses the [`log`](https://docs.rs/log/latest/log/) crate for logging
//! messages. Consider integrating a `log`-compatible logger implementation for better
//! visibility into SDK operations.

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(missing_docs)]

mod client;
mod config;
mod error;
mod events;
mod notification;
mod url_builder;

pub use client::{EventApiClient, DEFAULT_FETCH_LIMIT, DEFAULT_FETCH_OFFSET};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use events::{Event, EventId, EventPage, PageKind};
pub use notification::{Notification, NotificationPublisher};

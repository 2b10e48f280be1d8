//! HTTP server-sent-events connector.

use super::{
    Connection, ConnectionId, Connector, EventSender, StreamEvent, StreamEventKind, SENTINEL,
};
use crate::error::StreamError;
use eventsource_stream::Eventsource;
use futures::StreamExt;
use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE};
use std::time::Duration;
use tokio::sync::mpsc;
use url::Url;

const EVENT_STREAM_MIME: &str = "text/event-stream";

/// Opens one `GET` event stream per turn using a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct SseConnector {
    http: reqwest::Client,
}

impl SseConnector {
    /// Build a connector whose connection establishment is bounded by
    /// `connect_timeout`. Streams themselves are never timed out.
    pub fn new(connect_timeout: Duration) -> Self {
        Self {
            http: build_http_client(connect_timeout),
        }
    }
}

impl Connector for SseConnector {
    fn connect(
        &self,
        url: Url,
        id: ConnectionId,
        events: mpsc::UnboundedSender<StreamEvent>,
    ) -> Connection {
        let http = self.http.clone();
        Connection::spawn(id, events, move |sender| run_stream(http, url, sender))
    }
}

fn build_http_client(connect_timeout: Duration) -> reqwest::Client {
    // Fall back to reqwest defaults if builder creation fails for any reason.
    reqwest::Client::builder()
        .connect_timeout(connect_timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

async fn run_stream(http: reqwest::Client, url: Url, events: EventSender) {
    tracing::debug!(connection = events.id(), %url, "opening event stream");
    if let Err(err) = pump_events(&http, url, &events).await {
        tracing::warn!(connection = events.id(), error = %err, "event stream failed");
        events.send(StreamEventKind::Error(err));
    }
}

/// Forward `message` events until the sentinel, a failure, or the session
/// closing the connection.
async fn pump_events(
    http: &reqwest::Client,
    url: Url,
    events: &EventSender,
) -> Result<(), StreamError> {
    let response = http
        .get(url)
        .header(ACCEPT, EVENT_STREAM_MIME)
        .header(CACHE_CONTROL, "no-cache")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(StreamError::Status(status.as_u16(), body.trim().to_string()));
    }
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    if !is_event_stream(&content_type) {
        return Err(StreamError::NotEventStream(content_type));
    }

    if !events.send(StreamEventKind::Opened) {
        return Ok(());
    }

    let mut stream = response.bytes_stream().eventsource();
    while let Some(item) = stream.next().await {
        let event = item.map_err(|err| StreamError::Stream(err.to_string()))?;
        // Named events never reach a plain `onmessage` listener.
        if !is_message_event(&event.event) || event.data.is_empty() {
            continue;
        }
        let done = event.data == SENTINEL;
        if !events.send(StreamEventKind::Message(event.data)) || done {
            return Ok(());
        }
    }
    Err(StreamError::Closed)
}

fn is_event_stream(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(EVENT_STREAM_MIME))
}

fn is_message_event(event_type: &str) -> bool {
    event_type.is_empty() || event_type == "message"
}

//! Streaming connections to the chat endpoint.
//!
//! Each connection runs as its own task and forwards events over a shared
//! channel, tagged with the id of the connection that produced them. The
//! session owns at most one [`Connection`]; dropping it closes the stream.

mod connection;
mod request;
mod sse;

pub use connection::{Connection, ConnectionId, ConnectionWatch, EventSender};
pub use request::{build_request_url, MESSAGE_PARAM};
pub use sse::SseConnector;

use crate::error::StreamError;
use tokio::sync::mpsc;
use url::Url;

/// Payload that marks the end of a streamed reply.
pub const SENTINEL: &str = "[DONE]";

/// One event delivered by a streaming connection.
#[derive(Debug)]
pub struct StreamEvent {
    /// Connection that produced the event.
    pub connection: ConnectionId,
    pub kind: StreamEventKind,
}

#[derive(Debug)]
pub enum StreamEventKind {
    /// The endpoint accepted the request and started streaming.
    Opened,
    /// One `message` event payload, delivered verbatim.
    Message(String),
    /// The connection failed; no further events follow.
    Error(StreamError),
}

/// Opens streaming connections.
///
/// `SseConnector` is the HTTP implementation; tests substitute scripted
/// connectors to drive the session without a network.
pub trait Connector {
    /// Start streaming `url`, forwarding events tagged with `id` to `events`.
    fn connect(
        &self,
        url: Url,
        id: ConnectionId,
        events: mpsc::UnboundedSender<StreamEvent>,
    ) -> Connection;
}

//! Chat session controller.
//!
//! A [`Session`] owns the per-turn state: the single live connection and the
//! reply buffer. Input lines start turns; stream events advance them. Events
//! are tagged with their connection id, so anything produced by a connection
//! the session already released is dropped.
//!
//! ```text
//!          non-empty line                 [DONE] / error
//!   Idle ─────────────────▶ Streaming ─────────────────────▶ Idle
//!                            │    ▲
//!                            └────┘ token / new line (replaces connection)
//! ```

mod buffer;
mod run;

pub use buffer::{is_join_punctuation, ResponseBuffer, JOIN_PUNCTUATION};
pub use run::run_interactive;

use crate::stream::{
    build_request_url, Connection, ConnectionId, Connector, StreamEvent, StreamEventKind,
    SENTINEL,
};
use crate::ui::RenderSink;
use tokio::sync::mpsc;
use url::Url;

/// Where the session is in the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for user input.
    Idle,
    /// A connection is held and its reply is being rendered.
    Streaming,
}

/// Result of submitting one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank line; prompt shown again, no request made.
    Ignored,
    /// A new turn started on the given connection.
    Started(ConnectionId),
}

/// Process-wide state of one chat client run.
pub struct Session<C, R> {
    endpoint: Url,
    connector: C,
    renderer: R,
    events: mpsc::UnboundedSender<StreamEvent>,
    connection: Option<Connection>,
    buffer: ResponseBuffer,
    next_connection_id: ConnectionId,
}

impl<C, R> Session<C, R>
where
    C: Connector,
    R: RenderSink,
{
    /// Create an idle session plus the receiver its connections report to.
    pub fn new(
        endpoint: Url,
        connector: C,
        renderer: R,
    ) -> (Self, mpsc::UnboundedReceiver<StreamEvent>) {
        let (events, events_rx) = mpsc::unbounded_channel();
        let session = Self {
            endpoint,
            connector,
            renderer,
            events,
            connection: None,
            buffer: ResponseBuffer::new(),
            next_connection_id: 1,
        };
        (session, events_rx)
    }

    pub fn state(&self) -> TurnState {
        if self.connection.is_some() {
            TurnState::Streaming
        } else {
            TurnState::Idle
        }
    }

    /// Reply text accumulated so far in the current (or last failed) turn.
    pub fn buffer(&self) -> &str {
        self.buffer.as_str()
    }

    /// Id of the live connection, if a turn is streaming.
    pub fn active_connection(&self) -> Option<ConnectionId> {
        self.connection.as_ref().map(Connection::id)
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Handle one line of user input.
    pub fn submit_line(&mut self, line: &str) -> LineOutcome {
        let message = line.trim();
        if message.is_empty() {
            self.renderer.prompt();
            return LineOutcome::Ignored;
        }
        self.renderer.user_message(message);
        LineOutcome::Started(self.begin_turn(message))
    }

    /// Start a turn for `message`, closing any in-flight connection first.
    fn begin_turn(&mut self, message: &str) -> ConnectionId {
        if self.release_connection() {
            tracing::info!("replaced in-flight turn");
        }
        self.buffer.clear();

        let id = self.next_connection_id;
        self.next_connection_id += 1;
        let url = build_request_url(&self.endpoint, message);
        tracing::debug!(connection = id, "starting turn");
        self.connection = Some(self.connector.connect(url, id, self.events.clone()));
        id
    }

    /// Apply one stream event to the session.
    pub fn handle_event(&mut self, event: StreamEvent) {
        if self.active_connection() != Some(event.connection) {
            tracing::debug!(connection = event.connection, "dropping stale stream event");
            return;
        }
        match event.kind {
            StreamEventKind::Opened => {
                tracing::debug!(connection = event.connection, "stream connected");
                self.renderer.connected();
            }
            StreamEventKind::Message(payload) if payload == SENTINEL => {
                self.renderer.turn_ended();
                self.buffer.clear();
                self.release_connection();
                tracing::debug!(connection = event.connection, "turn complete");
                self.renderer.prompt();
            }
            StreamEventKind::Message(token) => {
                self.buffer.push_token(&token);
                self.renderer.bot_line(self.buffer.as_str());
            }
            StreamEventKind::Error(err) => {
                self.renderer.stream_error(&err);
                // The partial reply stays until the next turn clears it.
                self.release_connection();
                self.renderer.prompt();
            }
        }
    }

    /// Release any live connection. Returns whether one was held.
    pub fn shutdown(&mut self) -> bool {
        self.release_connection()
    }

    fn release_connection(&mut self) -> bool {
        match self.connection.take() {
            Some(connection) => {
                connection.close();
                true
            }
            None => false,
        }
    }
}

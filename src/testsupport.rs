//! Shared test fixtures for session and stream test modules.
//!
//! `ScriptedConnector` replays per-connection event scripts without a
//! network. Rendering is captured with [`crate::ui::RecordingSink`].

use crate::error::StreamError;
use crate::session::{Session, TurnState};
use crate::stream::{
    Connection, ConnectionId, ConnectionWatch, Connector, StreamEvent, StreamEventKind, SENTINEL,
};
use crate::ui::RenderSink;
pub use crate::ui::{RecordingSink, Rendered};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use url::Url;

/// Endpoint used by session tests.
pub fn endpoint() -> Url {
    Url::parse("http://chat.test/chat").expect("valid test endpoint")
}

/// Process events until the session returns to idle.
pub async fn drain_turn<C, R>(
    session: &mut Session<C, R>,
    events: &mut mpsc::UnboundedReceiver<StreamEvent>,
) where
    C: Connector,
    R: RenderSink,
{
    while session.state() == TurnState::Streaming {
        let event = events.recv().await.expect("event channel open");
        session.handle_event(event);
    }
}

// ---------------------------------------------------------------------------
// Connections
// ---------------------------------------------------------------------------

/// One scripted action of a fake connection.
#[derive(Debug, Clone)]
pub enum ScriptStep {
    Open,
    Token(String),
    Done,
    /// Emit a stream error and finish.
    Fail(String),
    /// Stay open forever.
    Hold,
}

impl ScriptStep {
    pub fn token(text: &str) -> Self {
        Self::Token(text.to_string())
    }
}

#[derive(Debug, Default)]
struct ScriptedState {
    scripts: VecDeque<Vec<ScriptStep>>,
    urls: Vec<String>,
    watches: Vec<ConnectionWatch>,
    overlapping_opens: usize,
}

/// Connector that replays queued scripts, one per opened connection.
///
/// Connections without a queued script hold open forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConnector {
    state: Arc<Mutex<ScriptedState>>,
}

impl ScriptedConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_script(&self, steps: Vec<ScriptStep>) {
        self.state.lock().expect("connector lock").scripts.push_back(steps);
    }

    /// Request URLs in connect order.
    pub fn urls(&self) -> Vec<String> {
        self.state.lock().expect("connector lock").urls.clone()
    }

    /// Watches for every connection opened so far.
    pub fn watches(&self) -> Vec<ConnectionWatch> {
        self.state.lock().expect("connector lock").watches.clone()
    }

    /// Number of earlier connections still open at the moment a new one was
    /// requested, summed over all connects.
    pub fn overlapping_opens(&self) -> usize {
        self.state.lock().expect("connector lock").overlapping_opens
    }
}

impl Connector for ScriptedConnector {
    fn connect(
        &self,
        url: Url,
        id: ConnectionId,
        events: mpsc::UnboundedSender<StreamEvent>,
    ) -> Connection {
        let mut state = self.state.lock().expect("connector lock");
        let still_open = state.watches.iter().filter(|w| !w.is_closed()).count();
        state.overlapping_opens += still_open;
        state.urls.push(url.to_string());
        let script = state.scripts.pop_front().unwrap_or_else(|| vec![ScriptStep::Hold]);

        let connection = Connection::spawn(id, events, move |sender| async move {
            for step in script {
                match step {
                    ScriptStep::Open => {
                        sender.send(StreamEventKind::Opened);
                    }
                    ScriptStep::Token(text) => {
                        sender.send(StreamEventKind::Message(text));
                    }
                    ScriptStep::Done => {
                        sender.send(StreamEventKind::Message(SENTINEL.to_string()));
                    }
                    ScriptStep::Fail(msg) => {
                        sender.send(StreamEventKind::Error(StreamError::Stream(msg)));
                        return;
                    }
                    ScriptStep::Hold => std::future::pending::<()>().await,
                }
            }
        });
        state.watches.push(connection.watch());
        connection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_keeps_call_order() {
        let sink = RecordingSink::new();
        sink.prompt();
        sink.bot_line("x");
        assert_eq!(sink.entries(), vec![Rendered::Prompt, Rendered::Bot("x".into())]);
        sink.clear();
        assert!(sink.entries().is_empty());
    }
}

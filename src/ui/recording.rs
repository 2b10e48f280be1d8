//! In-memory render sink.
//!
//! Records every rendering call in order instead of drawing it, for callers
//! that want to inspect a session transcript (tests, embedding hosts).

use super::RenderSink;
use crate::error::StreamError;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One rendered UI action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    StartupHint,
    Prompt,
    User(String),
    Connected,
    Bot(String),
    TurnEnded,
    Error(String),
}

/// Render sink that records every call in order.
///
/// Clones share the same transcript.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    entries: Arc<Mutex<Vec<Rendered>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Rendered> {
        self.lock().clone()
    }

    /// Every `Bot:` redraw, in order.
    pub fn bot_lines(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|entry| match entry {
                Rendered::Bot(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Every reported stream error message, in order.
    pub fn errors(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|entry| match entry {
                Rendered::Error(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn push(&self, entry: Rendered) {
        self.lock().push(entry);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Rendered>> {
        // A panicking holder cannot leave a Vec half-written.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RenderSink for RecordingSink {
    fn startup_hint(&self) {
        self.push(Rendered::StartupHint);
    }

    fn prompt(&self) {
        self.push(Rendered::Prompt);
    }

    fn user_message(&self, message: &str) {
        self.push(Rendered::User(message.to_string()));
    }

    fn connected(&self) {
        self.push(Rendered::Connected);
    }

    fn bot_line(&self, text: &str) {
        self.push(Rendered::Bot(text.to_string()));
    }

    fn turn_ended(&self) {
        self.push(Rendered::TurnEnded);
    }

    fn stream_error(&self, err: &StreamError) {
        self.push(Rendered::Error(err.to_string()));
    }
}

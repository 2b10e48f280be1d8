//! Rendering contract consumed by the chat session.
//!
//! `Renderer` is the terminal implementation; tests substitute a recording
//! sink so session behavior can be asserted without a TTY.

use crate::error::StreamError;

/// Injectable rendering interface used by the session controller.
pub trait RenderSink {
    /// One-time hint printed before the first prompt.
    fn startup_hint(&self);
    /// Render the input prompt.
    fn prompt(&self);
    /// Echo a submitted user message.
    fn user_message(&self, message: &str);
    /// The stream for the current turn is open.
    fn connected(&self);
    /// Redraw the reply line with the full accumulated text.
    fn bot_line(&self, text: &str);
    /// The reply finished with the sentinel.
    fn turn_ended(&self);
    /// The current turn failed.
    fn stream_error(&self, err: &StreamError);
}

impl<T: RenderSink + ?Sized> RenderSink for &T {
    fn startup_hint(&self) {
        (**self).startup_hint();
    }

    fn prompt(&self) {
        (**self).prompt();
    }

    fn user_message(&self, message: &str) {
        (**self).user_message(message);
    }

    fn connected(&self) {
        (**self).connected();
    }

    fn bot_line(&self, text: &str) {
        (**self).bot_line(text);
    }

    fn turn_ended(&self) {
        (**self).turn_ended();
    }

    fn stream_error(&self, err: &StreamError) {
        (**self).stream_error(err);
    }
}

//! Terminal renderer built on crossterm.
//!
//! Chat output goes to stdout; failures go to stderr. Every write is flushed
//! immediately because the prompt and the reply line are partial lines.

use super::render::RenderSink;
use super::settings;
use crate::error::StreamError;
use crossterm::cursor::MoveToColumn;
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Write};

/// Default terminal implementation of [`RenderSink`].
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Print an `error:`-prefixed line to stderr.
    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {msg}",
                settings::LABEL_ERROR.with(settings::COLOR_ERROR).bold()
            );
        } else {
            eprintln!("{} {msg}", settings::LABEL_ERROR);
        }
    }

    fn status_line(&self, text: &str) {
        if self.color {
            println!("{}", text.with(settings::COLOR_STATUS));
        } else {
            println!("{text}");
        }
    }

    fn write_stdout(&self, write: impl FnOnce(&mut io::Stdout, bool) -> io::Result<()>) {
        let mut stdout = io::stdout();
        // A closed stdout leaves nothing useful to report to.
        if let Err(err) = write(&mut stdout, self.color) {
            tracing::debug!(error = %err, "stdout write failed");
        }
    }
}

impl RenderSink for Renderer {
    fn startup_hint(&self) {
        self.status_line(settings::STARTUP_HINT);
    }

    fn prompt(&self) {
        self.write_stdout(write_prompt);
    }

    fn user_message(&self, message: &str) {
        println!();
        if self.color {
            println!(
                "{}{message}",
                settings::LABEL_USER.with(settings::COLOR_USER).bold()
            );
        } else {
            println!("{}{message}", settings::LABEL_USER);
        }
    }

    fn connected(&self) {
        self.status_line(settings::CONNECTED_INDICATOR);
    }

    fn bot_line(&self, text: &str) {
        self.write_stdout(|out, color| write_bot_line(out, color, text));
    }

    fn turn_ended(&self) {
        println!();
        self.status_line(settings::TURN_END_MARKER);
    }

    fn stream_error(&self, err: &StreamError) {
        eprintln!();
        self.error(&format!("stream failed: {err}"));
    }
}

/// Queue and flush the input prompt.
pub(crate) fn write_prompt<W>(out: &mut W, color: bool) -> io::Result<()>
where
    W: Write + ?Sized,
{
    if color {
        out.queue(PrintStyledContent(
            settings::PROMPT_PRIMARY.with(settings::COLOR_PROMPT).bold(),
        ))?;
    } else {
        out.queue(Print(settings::PROMPT_PRIMARY))?;
    }
    out.flush()
}

/// Erase the current line and redraw it as `Bot: <text>`.
///
/// The full text is rewritten each time so the line never drifts from the
/// accumulated buffer.
pub(crate) fn write_bot_line<W>(out: &mut W, color: bool, text: &str) -> io::Result<()>
where
    W: Write + ?Sized,
{
    out.queue(Clear(ClearType::CurrentLine))?;
    out.queue(MoveToColumn(0))?;
    if color {
        out.queue(PrintStyledContent(
            settings::LABEL_BOT.with(settings::COLOR_BOT).bold(),
        ))?;
    } else {
        out.queue(Print(settings::LABEL_BOT))?;
    }
    out.queue(Print(text))?;
    out.flush()
}

//! Unified error types for the chat client.

use std::fmt;

// ---------------------------------------------------------------------------
// BannerError
// ---------------------------------------------------------------------------

/// Errors raised while rendering the startup banner.
#[derive(Debug)]
pub enum BannerError {
    /// The bundled FIGlet font could not be loaded.
    Font(String),
    /// The font has no glyphs for the requested title.
    Render(String),
}

impl fmt::Display for BannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Font(msg) => write!(f, "banner font: {msg}"),
            Self::Render(title) => write!(f, "banner render failed for `{title}`"),
        }
    }
}

impl std::error::Error for BannerError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// StreamError
// ---------------------------------------------------------------------------

/// Errors from the streaming connection. All of them end the current turn.
#[derive(Debug)]
pub enum StreamError {
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Non-2xx status from the endpoint.
    Status(u16, String),
    /// The endpoint answered with something other than `text/event-stream`.
    NotEventStream(String),
    /// The event stream failed mid-flight.
    Stream(String),
    /// The server closed the stream before sending `[DONE]`.
    Closed,
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status(code, body) if body.is_empty() => write!(f, "status {code}"),
            Self::Status(code, body) => write!(f, "status {code}: {body}"),
            Self::NotEventStream(content_type) => {
                write!(f, "expected text/event-stream, got `{content_type}`")
            }
            Self::Stream(msg) => write!(f, "stream: {msg}"),
            Self::Closed => write!(f, "stream closed before [DONE]"),
        }
    }
}

impl std::error::Error for StreamError {}

impl From<reqwest::Error> for StreamError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

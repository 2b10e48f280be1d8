//! S3GeN Chat: a terminal client for server-sent-events chat endpoints.
//!
//! Each submitted line is sent as `GET <endpoint>?message=<text>`; the reply
//! arrives as a stream of `data:` tokens terminated by `[DONE]` and is
//! redrawn on a single `Bot:` line as it grows.
//!
//! # Quick start
//!
//! ```no_run
//! use s3gen_chat::config::{load_config, parse_endpoint};
//! use s3gen_chat::input::spawn_stdin_lines;
//! use s3gen_chat::session::run_interactive;
//! use s3gen_chat::stream::SseConnector;
//! use s3gen_chat::ui::Renderer;
//! use std::time::Duration;
//!
//! # async fn example() {
//! let config = load_config(None, None).unwrap();
//! let endpoint = parse_endpoint(&config.chat.endpoint).unwrap();
//! let connector = SseConnector::new(Duration::from_secs(30));
//! run_interactive(
//!     endpoint,
//!     connector,
//!     Renderer::new(true),
//!     spawn_stdin_lines(),
//!     std::future::pending(),
//! )
//! .await;
//! # }
//! ```

pub mod banner;
pub mod build_info;
pub mod config;
pub mod error;
pub mod input;
pub mod session;
pub mod stream;
#[cfg(test)]
pub mod testsupport;
pub mod ui;

//! CLI entry point for s3gen-chat.

mod cli;

use clap::Parser;
use s3gen_chat::banner::print_banner;
use s3gen_chat::build_info;
use s3gen_chat::config::{load_config, parse_endpoint};
use s3gen_chat::input::spawn_stdin_lines;
use s3gen_chat::session::run_interactive;
use s3gen_chat::stream::SseConnector;
use s3gen_chat::ui::Renderer;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Env var holding the `tracing` filter directive.
const LOG_ENV: &str = "S3GEN_LOG";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli::Args::parse();
    init_tracing();

    let mut config = match load_config(args.config.as_deref(), args.endpoint.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            Renderer::new(!args.no_color).error(&e.to_string());
            std::process::exit(1);
        }
    };

    if args.no_color {
        config.display.color = false;
    }

    let renderer = Renderer::new(config.display.color);
    let endpoint = match parse_endpoint(&config.chat.endpoint) {
        Ok(url) => url,
        Err(e) => {
            renderer.error(&e.to_string());
            std::process::exit(1);
        }
    };

    if let Err(e) = print_banner(config.display.color, &build_info::startup_metadata_line()) {
        renderer.error(&format!("failed to render banner: {e}"));
        std::process::exit(1);
    }

    tracing::info!(endpoint = %endpoint, "starting chat session");
    let connector =
        SseConnector::new(Duration::from_secs(config.network.connect_timeout_secs.max(1)));
    run_interactive(
        endpoint,
        connector,
        renderer,
        spawn_stdin_lines(),
        interrupt_signal(),
    )
    .await;
    println!();

    // A pending stdin read cannot be cancelled and would block runtime
    // shutdown until the next newline.
    std::process::exit(0);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn interrupt_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for Ctrl+C");
        // Without a handler, the default SIGINT behavior still ends the process.
        std::future::pending::<()>().await;
    }
}

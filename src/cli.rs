//! CLI argument parsing via clap.

use clap::Parser;
use s3gen_chat::build_info::LONG_VERSION;

/// Chat with a streaming endpoint from the terminal.
#[derive(Debug, Parser)]
#[command(name = "s3gen-chat", version, long_version = LONG_VERSION)]
pub struct Args {
    /// Streaming chat endpoint (overrides config and S3GEN_ENDPOINT).
    #[arg(long = "endpoint", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Path to config file (default: ./s3gen.toml or ~/.config/s3gen/s3gen.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

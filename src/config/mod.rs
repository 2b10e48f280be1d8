//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. `--endpoint` CLI flag
//! 2. Environment variables (`S3GEN_ENDPOINT`, `S3GEN_CONNECT_TIMEOUT_SECS`)
//! 3. TOML file specified via `--config`
//! 4. `./s3gen.toml` in the current directory
//! 5. `$XDG_CONFIG_HOME/s3gen/s3gen.toml` (or `~/.config/s3gen/s3gen.toml`)
//! 6. Built-in defaults

mod defaults;
mod env;
mod loader;
mod sources;
mod types;

pub use env::{ENV_CONNECT_TIMEOUT_SECS, ENV_ENDPOINT};
pub use loader::{load_config, parse_endpoint};
pub use types::{ChatConfig, Config, DisplayConfig, NetworkConfig};

//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use url::Url;

use crate::error::ConfigError;

use super::env::apply_runtime_env_overrides;
use super::sources::{config_root_dir, read_config_text_with_sources, ConfigSource};
use super::Config;

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from `--config`).
/// `endpoint_override` (from `--endpoint`) beats every other endpoint source
/// and is applied before the endpoint is validated.
pub fn load_config(
    path_override: Option<&str>,
    endpoint_override: Option<&str>,
) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        endpoint_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    endpoint_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    match &source {
        ConfigSource::Explicit(path) | ConfigSource::Global(path) => {
            tracing::debug!(path = %path.display(), "loaded config file");
        }
        ConfigSource::Local => tracing::debug!("loaded ./s3gen.toml"),
        ConfigSource::BuiltInDefaults => tracing::debug!("no config file found; using defaults"),
    }
    let mut config: Config = toml::from_str(&config_text)?;
    apply_runtime_env_overrides(&mut config, &env_lookup)?;
    if let Some(endpoint) = endpoint_override {
        config.chat.endpoint = endpoint.to_string();
    }
    parse_endpoint(&config.chat.endpoint)?;
    Ok(config)
}

/// Parse and validate a streaming endpoint URL.
///
/// Only absolute `http`/`https` URLs are accepted.
pub fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid("chat endpoint is empty".to_string()));
    }
    let url = Url::parse(trimmed)
        .map_err(|e| ConfigError::Invalid(format!("invalid chat endpoint `{trimmed}`: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Invalid(format!(
            "unsupported chat endpoint scheme `{other}` (expected http or https)"
        ))),
    }
}

//! Environment overrides applied on top of file configuration.

use crate::error::ConfigError;

use super::Config;

/// Endpoint override variable.
pub const ENV_ENDPOINT: &str = "S3GEN_ENDPOINT";
/// Connect-timeout override variable (whole seconds).
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "S3GEN_CONNECT_TIMEOUT_SECS";

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(endpoint) = env_lookup(ENV_ENDPOINT) {
        let trimmed = endpoint.trim();
        if !trimmed.is_empty() {
            config.chat.endpoint = trimmed.to_string();
        }
    }
    if let Some(timeout) = env_lookup(ENV_CONNECT_TIMEOUT_SECS) {
        let parsed = timeout.trim().parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid {ENV_CONNECT_TIMEOUT_SECS} value `{timeout}`: expected positive integer seconds"
            ))
        })?;
        // Zero would mean "fail every connect"; clamp to one second.
        config.network.connect_timeout_secs = parsed.max(1);
    }
    Ok(())
}

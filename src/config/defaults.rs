//! Default configuration constants.

/// Streaming chat endpoint used when nothing else is configured.
pub(super) const DEFAULT_ENDPOINT_URL: &str = "https://yuchan5386-api-0.hf.space/chat";
/// Upper bound on establishing the HTTP connection. The stream itself is untimed.
pub(super) const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;
/// Config file name looked up locally and under the global config root.
pub(super) const CONFIG_FILE_NAME: &str = "s3gen.toml";
/// Directory name under the global config root.
pub(super) const CONFIG_DIR_NAME: &str = "s3gen";

//! Compile-time build metadata exposed to the CLI and banner.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("S3GEN_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("S3GEN_BUILD_TIMESTAMP");

/// Long version block shown by `s3gen-chat --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("S3GEN_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("S3GEN_BUILD_TIMESTAMP")
);

/// Render the metadata line printed under the startup banner.
pub fn startup_metadata_line() -> String {
    format!("v{VERSION} ({GIT_COMMIT}, built {BUILD_TIMESTAMP})")
}

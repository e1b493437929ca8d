//! Client configuration.

use std::path::PathBuf;

/// Default whitelist location, relative to the working directory.
pub const DEFAULT_WHITELIST_PATH: &str = "whitelist.txt";

/// Configuration for a [`Client`](crate::Client).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Path to the whitelist file (one address per line)
    pub whitelist_path: PathBuf,
}

impl ClientConfig {
    /// Use a different whitelist file.
    #[must_use]
    pub fn with_whitelist_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.whitelist_path = path.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { whitelist_path: PathBuf::from(DEFAULT_WHITELIST_PATH) }
    }
}

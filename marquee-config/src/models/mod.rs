pub mod sources;

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_IMAGE_BASE_URL,
    DEFAULT_RESOURCE_TIMEOUT_MS,
};

/// Fully resolved client configuration.
///
/// Built by [`crate::ConfigLoader`] or by hand in tests, then passed down to
/// the API client. There is no process-wide instance.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service root without a trailing slash, e.g. `https://api.example.com`.
    pub base_url: String,
    /// Bearer token sent with every request. Empty only in stub mode.
    pub auth_token: String,
    pub connect_timeout_ms: u64,
    pub resource_timeout_ms: u64,
    /// Image CDN prefix joined with `poster_path`/`backdrop_path`.
    pub image_base_url: String,
    /// Serve bundled fixtures instead of talking to the network.
    pub stub_mode: bool,
    pub metadata: ConfigMetadata,
}

impl ClientConfig {
    /// Configuration with defaults for everything except the base URL and
    /// token.
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_token: auth_token.into(),
            ..Self::default()
        }
    }

    /// Stub-mode configuration; no token required.
    pub fn stub() -> Self {
        Self {
            stub_mode: true,
            ..Self::default()
        }
    }

    pub fn with_timeouts(mut self, connect_ms: u64, resource_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.resource_timeout_ms = resource_ms;
        self
    }

    pub fn with_image_base_url(mut self, base: impl Into<String>) -> Self {
        self.image_base_url = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn resource_timeout(&self) -> Duration {
        Duration::from_millis(self.resource_timeout_ms)
    }

    pub fn has_auth_token(&self) -> bool {
        !self.auth_token.trim().is_empty()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            auth_token: String::new(),
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            resource_timeout_ms: DEFAULT_RESOURCE_TIMEOUT_MS,
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            stub_mode: false,
            metadata: ConfigMetadata::default(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.has_auth_token() {
            "<redacted>"
        } else {
            "<unset>"
        };
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("auth_token", &token)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("resource_timeout_ms", &self.resource_timeout_ms)
            .field("image_base_url", &self.image_base_url)
            .field("stub_mode", &self.stub_mode)
            .field("metadata", &self.metadata)
            .finish()
    }
}

/// Where the resolved values came from.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_never_contains_the_token() {
        let config = ClientConfig::new("https://api.example.com/", "s3cr3t-token");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("s3cr3t-token"));
        assert!(rendered.contains("<redacted>"));
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn timeouts_convert_to_durations() {
        let config = ClientConfig::stub().with_timeouts(1_500, 250);
        assert_eq!(config.connect_timeout(), Duration::from_millis(1_500));
        assert_eq!(config.resource_timeout(), Duration::from_millis(250));
        assert!(!config.has_auth_token());
    }
}

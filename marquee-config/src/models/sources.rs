use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::env;
use crate::util::{non_empty_var, parse_bool_var};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub api: FileApiConfig,
    #[serde(default)]
    pub images: FileImagesConfig,
    pub stub_mode: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileApiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_timeout_ms: Option<u64>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileImagesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Values read from the process environment.
///
/// Timeouts stay raw strings here; `validation::resolve_timeout` parses them
/// so a typo is reported against the variable instead of silently falling
/// back to the default.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub api_base_url: Option<String>,
    pub api_token: Option<String>,
    pub api_token_file: Option<PathBuf>,
    pub connect_timeout_ms: Option<String>,
    pub resource_timeout_ms: Option<String>,
    pub image_base_url: Option<String>,
    pub stub_mode: Option<bool>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            config_path: non_empty_var(env::CONFIG_PATH).map(PathBuf::from),
            api_base_url: non_empty_var(env::API_BASE_URL),
            api_token: non_empty_var(env::API_TOKEN),
            api_token_file: non_empty_var(env::API_TOKEN_FILE).map(PathBuf::from),
            connect_timeout_ms: non_empty_var(env::CONNECT_TIMEOUT_MS),
            resource_timeout_ms: non_empty_var(env::RESOURCE_TIMEOUT_MS),
            image_base_url: non_empty_var(env::IMAGE_BASE_URL),
            stub_mode: parse_bool_var(env::STUB_MODE),
        }
    }
}

impl std::fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvConfig")
            .field("config_path", &self.config_path)
            .field("api_base_url", &self.api_base_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("api_token_file", &self.api_token_file)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("resource_timeout_ms", &self.resource_timeout_ms)
            .field("image_base_url", &self.image_base_url)
            .field("stub_mode", &self.stub_mode)
            .finish()
    }
}

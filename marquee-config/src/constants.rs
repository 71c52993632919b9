//! Defaults and environment variable names.

/// Base URL used when neither the environment nor a config file sets one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

pub use marquee_model::DEFAULT_IMAGE_BASE_URL;

pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 20_000;
pub const DEFAULT_RESOURCE_TIMEOUT_MS: u64 = 20_000;

/// Config files probed, in order, when no explicit path is given.
pub const DEFAULT_CONFIG_LOCATIONS: &[&str] =
    &["marquee.toml", "config/marquee.toml"];

pub mod env {
    pub const API_BASE_URL: &str = "MARQUEE_API_BASE_URL";
    pub const API_TOKEN: &str = "MARQUEE_API_TOKEN";
    pub const API_TOKEN_FILE: &str = "MARQUEE_API_TOKEN_FILE";
    pub const CONNECT_TIMEOUT_MS: &str = "MARQUEE_CONNECT_TIMEOUT_MS";
    pub const RESOURCE_TIMEOUT_MS: &str = "MARQUEE_RESOURCE_TIMEOUT_MS";
    pub const IMAGE_BASE_URL: &str = "MARQUEE_IMAGE_BASE_URL";
    pub const STUB_MODE: &str = "MARQUEE_STUB_MODE";
    pub const CONFIG_PATH: &str = "MARQUEE_CONFIG_PATH";
}

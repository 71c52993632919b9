//! Shared configuration library for Marquee.
//!
//! This crate turns environment variables, an optional `.env` file and an
//! optional `marquee.toml` into a validated [`ClientConfig`]. The client
//! crate takes the result by value; nothing here is global.

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{ClientConfig, ConfigMetadata};
pub use validation::{ConfigWarning, ConfigWarnings};

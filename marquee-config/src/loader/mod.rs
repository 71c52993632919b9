pub mod error;

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_CONFIG_LOCATIONS, DEFAULT_CONNECT_TIMEOUT_MS,
    DEFAULT_IMAGE_BASE_URL, DEFAULT_RESOURCE_TIMEOUT_MS,
};
use crate::models::sources::{EnvConfig, FileApiConfig, FileConfig};
use crate::models::{ClientConfig, ConfigMetadata};
use crate::validation::{self, ConfigWarnings};
use error::ConfigLoadError;

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// Overrides every other stub-mode source when set.
    pub stub_mode: Option<bool>,
}

/// Resolves a [`ClientConfig`] from environment, `.env` and TOML sources.
///
/// Precedence, highest first: process environment, config file, built-in
/// defaults. An explicitly requested config file (builder or
/// `MARQUEE_CONFIG_PATH`) must exist; the default locations are optional.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

/// Result of a successful load: the config plus anything worth telling the
/// operator about.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: ClientConfig,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_stub_mode(mut self, enabled: bool) -> Self {
        self.options.stub_mode = Some(enabled);
        self
    }

    /// Load `.env` (if any) into the process environment, then resolve.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        self.resolve(EnvConfig::gather(), env_file_loaded)
    }

    /// Resolve against an already gathered environment. Neither reads `.env`
    /// nor touches process variables.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        self.resolve(env, false)
    }

    fn resolve(
        &self,
        env: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        let (config, warnings) = compose_config(
            file_config,
            env,
            config_path,
            env_file_loaded,
            self.options.stub_mode,
        )?;

        info!(
            base_url = %config.base_url,
            stub_mode = config.stub_mode,
            warnings = warnings.len(),
            "client configuration resolved"
        );

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let (path, explicit) = if let Some(path) = &self.options.config_path {
            (path.clone(), true)
        } else if let Some(path) = &env.config_path {
            (path.clone(), true)
        } else {
            match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists())
            {
                Some(path) => (path, false),
                None => return Ok((None, None)),
            }
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        debug!(path = %path.display(), "reading configuration file");
        let contents =
            fs::read_to_string(&path).map_err(|source| ConfigLoadError::Io {
                path: path.clone(),
                source,
            })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|source| {
                ConfigLoadError::Parse {
                    path: path.clone(),
                    source,
                }
            })?;

        Ok((Some(file_config), Some(path)))
    }
}

fn compose_config(
    file_config: Option<FileConfig>,
    env: EnvConfig,
    config_path: Option<PathBuf>,
    env_file_loaded: bool,
    stub_override: Option<bool>,
) -> Result<(ClientConfig, ConfigWarnings), ConfigLoadError> {
    let mut warnings = ConfigWarnings::default();

    if config_path.is_none() {
        warnings.push_with_hint(
            "No marquee.toml detected; falling back to environment variables",
            "Create marquee.toml or set MARQUEE_CONFIG_PATH",
        );
    }

    let FileConfig {
        api: file_api,
        images: file_images,
        stub_mode: file_stub_mode,
    } = file_config.unwrap_or_default();

    let stub_mode = stub_override
        .or(env.stub_mode)
        .or(file_stub_mode)
        .unwrap_or(false);

    let base_url = validation::normalize_http_url(
        "api.base_url",
        env.api_base_url
            .as_deref()
            .or(file_api.base_url.as_deref())
            .unwrap_or(DEFAULT_API_BASE_URL),
    )?;

    let image_base_url = validation::normalize_http_url(
        "images.base_url",
        env.image_base_url
            .as_deref()
            .or(file_images.base_url.as_deref())
            .unwrap_or(DEFAULT_IMAGE_BASE_URL),
    )?;

    let connect_timeout_ms = validation::resolve_timeout(
        "api.connect_timeout_ms",
        env.connect_timeout_ms.as_deref(),
        file_api.connect_timeout_ms,
        DEFAULT_CONNECT_TIMEOUT_MS,
    )?;
    let resource_timeout_ms = validation::resolve_timeout(
        "api.resource_timeout_ms",
        env.resource_timeout_ms.as_deref(),
        file_api.resource_timeout_ms,
        DEFAULT_RESOURCE_TIMEOUT_MS,
    )?;

    let auth_token = match resolve_auth_token(&env, &file_api)? {
        Some((token, TokenSource::ConfigFile)) => {
            warnings.push_with_hint(
                "API token is stored in the config file",
                "Prefer MARQUEE_API_TOKEN_FILE so the token stays out of version control",
            );
            token
        }
        Some((token, _)) => token,
        None if stub_mode => String::new(),
        None => return Err(ConfigLoadError::MissingAuthToken),
    };

    if stub_mode {
        warnings.push("Stub mode enabled; bundled fixtures are served and no requests leave the process");
    }

    let config = ClientConfig {
        base_url,
        auth_token,
        connect_timeout_ms,
        resource_timeout_ms,
        image_base_url,
        stub_mode,
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded,
        },
    };

    Ok((config, warnings))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenSource {
    Env,
    SecretFile,
    ConfigFile,
}

fn resolve_auth_token(
    env: &EnvConfig,
    file_api: &FileApiConfig,
) -> Result<Option<(String, TokenSource)>, ConfigLoadError> {
    if let Some(token) = env
        .api_token
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
    {
        return Ok(Some((token.to_string(), TokenSource::Env)));
    }

    for path in [env.api_token_file.as_ref(), file_api.auth_token_file.as_ref()]
        .into_iter()
        .flatten()
    {
        if let Some(secret) = read_secret_file(path)? {
            return Ok(Some((secret, TokenSource::SecretFile)));
        }
    }

    Ok(file_api
        .auth_token
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|token| (token.to_string(), TokenSource::ConfigFile)))
}

fn read_secret_file(path: &Path) -> Result<Option<String>, ConfigLoadError> {
    let contents = fs::read_to_string(path).map_err(|source| {
        ConfigLoadError::SecretFileIo {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

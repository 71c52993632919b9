use url::Url;

use crate::loader::error::ConfigLoadError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

/// Parse `raw` as an http(s) URL and return it without a trailing slash.
pub fn normalize_http_url(
    field: &'static str,
    raw: &str,
) -> Result<String, ConfigLoadError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed)
        .map_err(|source| ConfigLoadError::InvalidUrl { field, source })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ConfigLoadError::UnsupportedScheme {
                field,
                scheme: other.to_string(),
            });
        }
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Resolve a timeout from a raw env string, a file value and a default.
pub fn resolve_timeout(
    field: &'static str,
    env_raw: Option<&str>,
    file_value: Option<u64>,
    default: u64,
) -> Result<u64, ConfigLoadError> {
    let value = match env_raw {
        Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
            ConfigLoadError::InvalidTimeout {
                field,
                value: raw.to_string(),
            }
        })?,
        None => file_value.unwrap_or(default),
    };

    if value == 0 {
        return Err(ConfigLoadError::InvalidTimeout {
            field,
            value: value.to_string(),
        });
    }
    Ok(value)
}

//! Request descriptions and the error type shared by every layer of the
//! pipeline.

use std::fmt;

use reqwest::Method;
use thiserror::Error;

use crate::infra::constants::routes;

pub type ApiResult<T> = Result<T, ApiError>;

/// The fixed set of calls the remote service supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    HomeFeed,
    MovieDetail { id: String },
}

impl ApiRequest {
    pub fn movie_detail(id: impl Into<String>) -> Self {
        Self::MovieDetail { id: id.into() }
    }

    /// Short name used in logs and [`ApiError::NotFound`].
    pub fn resource(&self) -> &'static str {
        match self {
            Self::HomeFeed => "home feed",
            Self::MovieDetail { .. } => "movie detail",
        }
    }

    pub fn resource_id(&self) -> String {
        match self {
            Self::HomeFeed => String::new(),
            Self::MovieDetail { id } => id.clone(),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::HomeFeed => routes::HOME_MOVIES.to_string(),
            Self::MovieDetail { id } => routes::movie_details(id),
        }
    }

    /// Path split into raw segments, ready to be percent-encoded onto a base
    /// URL.
    pub fn path_segments(&self) -> Vec<&str> {
        match self {
            Self::HomeFeed => routes::HOME_MOVIES
                .split('/')
                .filter(|segment| !segment.is_empty())
                .collect(),
            Self::MovieDetail { id } => routes::MOVIE_DETAILS_PREFIX
                .split('/')
                .filter(|segment| !segment.is_empty())
                .chain(std::iter::once(id.as_str()))
                .collect(),
        }
    }

    /// Method, path, headers and body for this call. Pure: the same request
    /// and token always yield the same descriptor.
    pub fn descriptor(&self, auth_token: &str) -> RequestDescriptor {
        RequestDescriptor {
            method: Method::GET,
            path: self.path(),
            headers: vec![
                (
                    reqwest::header::AUTHORIZATION.as_str().to_string(),
                    format!("Bearer {auth_token}"),
                ),
                (
                    reqwest::header::ACCEPT.as_str().to_string(),
                    "application/json".to_string(),
                ),
            ],
            body: None,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl RequestDescriptor {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case("authorization") {
                    (name.as_str(), "Bearer <redacted>")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();
        f.debug_struct("RequestDescriptor")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("headers", &headers)
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .finish()
    }
}

/// Coarse classification of an [`ApiError`], handy for UI branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Network,
    HttpStatus,
    Decode,
    NotFound,
}

/// Failure of a remote call. Repository and use cases pass it through
/// unchanged; only the view model turns it into state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error{}: {message}", timeout_suffix(.timed_out))]
    Network { message: String, timed_out: bool },
    #[error("request failed with status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("failed to decode response: {message}")]
    Decode { message: String },
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } => ErrorKind::Network,
            Self::HttpStatus { .. } => ErrorKind::HttpStatus,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::NotFound { .. } => ErrorKind::NotFound,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network { timed_out: true, .. })
    }
}

fn timeout_suffix(timed_out: &bool) -> &'static str {
    if *timed_out { " (timed out)" } else { "" }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::Decode {
                message: err.to_string(),
            };
        }
        Self::Network {
            timed_out: err.is_timeout(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode {
            message: err.to_string(),
        }
    }
}

use log::{debug, info, warn};
use marquee_config::ClientConfig;
use marquee_model::{HomePayload, MovieDetail};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::infra::api_types::{ApiError, ApiRequest, ApiResult};

/// Longest error body kept in [`ApiError::HttpStatus`].
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Error)]
pub enum ClientBuildError {
    #[error("invalid base URL '{url}'")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("base URL '{0}' cannot carry path segments")]
    OpaqueBaseUrl(String),
    #[error("failed to build HTTP client")]
    Http(#[from] reqwest::Error),
}

/// HTTP client for the home-feed service.
///
/// Built once from a [`ClientConfig`] and shared; every request carries the
/// configured bearer token and `Accept: application/json`.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: Url,
    auth_token: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("has_token", &!self.auth_token.is_empty())
            .finish()
    }
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientBuildError> {
        let raw = config.base_url.trim().trim_end_matches('/');
        let base_url = Url::parse(raw).map_err(|source| {
            ClientBuildError::InvalidBaseUrl {
                url: raw.to_string(),
                source,
            }
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientBuildError::OpaqueBaseUrl(raw.to_string()));
        }

        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.resource_timeout())
            .build()?;

        info!(
            "[ApiClient] Creating API client with base URL: {} (connect {:?}, resource {:?})",
            base_url,
            config.connect_timeout(),
            config.resource_timeout()
        );

        Ok(Self {
            client,
            base_url,
            auth_token: config.auth_token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Absolute URL for `request`, with the id percent-encoded as a single
    /// path segment.
    pub fn url_for(&self, request: &ApiRequest) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(request.path_segments());
        }
        url
    }

    /// Issue `request` and decode a 2xx body as `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> ApiResult<T> {
        let descriptor = request.descriptor(&self.auth_token);
        let url = self.url_for(request);
        debug!("[ApiClient] {} {}", descriptor.method, descriptor.path);

        let mut builder = self.client.request(descriptor.method.clone(), url);
        for (name, value) in &descriptor.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = descriptor.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|err| {
            warn!(
                "[ApiClient] {} request failed: {}",
                request.resource(),
                err
            );
            ApiError::from(err)
        })?;

        match response.status() {
            status if status.is_success() => {
                let bytes = response.bytes().await?;
                serde_json::from_slice::<T>(&bytes).map_err(|err| {
                    warn!(
                        "[ApiClient] Failed to decode {} response: {}",
                        request.resource(),
                        err
                    );
                    ApiError::from(err)
                })
            }
            StatusCode::NOT_FOUND => Err(ApiError::NotFound {
                resource: request.resource(),
                id: request.resource_id(),
            }),
            status => {
                let mut body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                truncate_at_char_boundary(&mut body, MAX_ERROR_BODY);
                warn!(
                    "[ApiClient] {} request failed with status {}",
                    request.resource(),
                    status
                );
                Err(ApiError::HttpStatus {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    pub async fn fetch_home_feed(&self) -> ApiResult<HomePayload> {
        let payload: HomePayload = self.execute(&ApiRequest::HomeFeed).await?;

        let duplicates = payload.duplicate_ids();
        if !duplicates.is_empty() {
            warn!(
                "[ApiClient] Home feed repeats movie ids within a list: {:?}",
                duplicates
            );
        }
        info!(
            "[ApiClient] Home feed loaded: {} banner movies, {} categories",
            payload.banner_movies.len(),
            payload.categories.len()
        );

        Ok(payload)
    }

    pub async fn fetch_movie_detail(&self, id: &str) -> ApiResult<MovieDetail> {
        self.execute(&ApiRequest::movie_detail(id)).await
    }
}

fn truncate_at_char_boundary(text: &mut String, max: usize) {
    if text.len() <= max {
        return;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}

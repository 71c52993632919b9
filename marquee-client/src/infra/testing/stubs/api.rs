use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use log::debug;
use marquee_model::{HomePayload, MovieDetail};

use crate::infra::api_types::{ApiError, ApiRequest, ApiResult};
use crate::infra::services::api::ApiService;

/// Home feed served in stub mode, same shape as the live response.
pub const HOME_FIXTURE: &str = include_str!("../../../../fixtures/home_movies.json");

/// Detail record for the first banner movie of [`HOME_FIXTURE`].
pub const DUNE_PART_TWO_DETAIL_FIXTURE: &str =
    include_str!("../../../../fixtures/movie_detail_693134.json");

pub const DUNE_PART_TWO_ID: &str = "693134";

/// [`ApiService`] that decodes bundled JSON instead of talking to a server.
///
/// Every call decodes its fixture afresh, so repeated calls yield equal
/// values and a broken fixture surfaces as [`ApiError::Decode`] exactly like
/// a broken live response would.
#[derive(Debug, Clone)]
pub struct StubApiService {
    inner: Arc<RwLock<StubState>>,
}

#[derive(Debug, Clone)]
struct StubState {
    home: String,
    details: HashMap<String, String>,
}

impl Default for StubApiService {
    fn default() -> Self {
        Self::new()
    }
}

impl StubApiService {
    pub fn new() -> Self {
        let mut details = HashMap::new();
        details.insert(
            DUNE_PART_TWO_ID.to_string(),
            DUNE_PART_TWO_DETAIL_FIXTURE.to_string(),
        );
        Self {
            inner: Arc::new(RwLock::new(StubState {
                home: HOME_FIXTURE.to_string(),
                details,
            })),
        }
    }

    /// Replace the home fixture, e.g. with deliberately malformed JSON.
    pub fn with_home_fixture(self, json: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.home = json.into();
        }
        self
    }

    pub fn with_movie_detail(
        self,
        id: impl Into<String>,
        json: impl Into<String>,
    ) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.details.insert(id.into(), json.into());
        }
        self
    }

    fn home_json(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.home.clone())
            .unwrap_or_default()
    }

    fn detail_json(&self, id: &str) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.details.get(id).cloned())
    }
}

#[async_trait]
impl ApiService for StubApiService {
    async fn fetch_home_feed(&self) -> ApiResult<HomePayload> {
        debug!("[StubApiService] Serving bundled home feed");
        Ok(serde_json::from_str(&self.home_json())?)
    }

    async fn fetch_movie_detail(&self, id: &str) -> ApiResult<MovieDetail> {
        let request = ApiRequest::movie_detail(id);
        match self.detail_json(id) {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Err(ApiError::NotFound {
                resource: request.resource(),
                id: request.resource_id(),
            }),
        }
    }
}

//! Data access for the home screen.
//!
//! Repositories are thin: they forward to an [`ApiService`] and hand results
//! and errors back untouched. Nothing is cached here.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use marquee_model::{HomePayload, MovieDetail};

use crate::infra::api_types::ApiResult;
use crate::infra::services::api::ApiService;

#[async_trait]
pub trait HomeRepository: Send + Sync + Debug {
    async fn fetch_home(&self) -> ApiResult<HomePayload>;
}

#[async_trait]
pub trait MovieDetailRepository: Send + Sync + Debug {
    async fn fetch_movie_detail(&self, id: &str) -> ApiResult<MovieDetail>;
}

/// Both repositories backed by one shared [`ApiService`].
#[derive(Debug, Clone)]
pub struct ApiMovieRepository {
    api: Arc<dyn ApiService>,
}

impl ApiMovieRepository {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl HomeRepository for ApiMovieRepository {
    async fn fetch_home(&self) -> ApiResult<HomePayload> {
        debug!("[HomeRepository] Fetching home feed");
        self.api.fetch_home_feed().await
    }
}

#[async_trait]
impl MovieDetailRepository for ApiMovieRepository {
    async fn fetch_movie_detail(&self, id: &str) -> ApiResult<MovieDetail> {
        debug!("[MovieDetailRepository] Fetching movie {}", id);
        self.api.fetch_movie_detail(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::api_types::ApiError;
    use crate::infra::testing::stubs::StubApiService;

    #[tokio::test]
    async fn home_payload_passes_through_unchanged() {
        let stub = StubApiService::new();
        let expected = stub.fetch_home_feed().await.expect("stub payload");

        let repo = ApiMovieRepository::new(Arc::new(stub));
        assert_eq!(repo.fetch_home().await.expect("repo payload"), expected);
    }

    #[tokio::test]
    async fn errors_pass_through_unchanged() {
        let repo = ApiMovieRepository::new(Arc::new(StubApiService::new()));
        let err = repo.fetch_movie_detail("404").await.expect_err("unknown id");
        assert_eq!(
            err,
            ApiError::NotFound {
                resource: "movie detail",
                id: "404".into()
            }
        );
    }
}

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use marquee_model::{HomePayload, MovieDetail};

use crate::infra::api_types::ApiResult;
use crate::infra::repository::{HomeRepository, MovieDetailRepository};

/// Produces the home payload for the view model. Exists so tests can swap
/// in a scripted double.
#[async_trait]
pub trait FetchHomeUseCase: Send + Sync + Debug {
    async fn execute(&self) -> ApiResult<HomePayload>;
}

#[async_trait]
pub trait FetchMovieDetailUseCase: Send + Sync + Debug {
    async fn execute(&self, id: &str) -> ApiResult<MovieDetail>;
}

#[derive(Debug, Clone)]
pub struct DefaultFetchHomeUseCase {
    repository: Arc<dyn HomeRepository>,
}

impl DefaultFetchHomeUseCase {
    pub fn new(repository: Arc<dyn HomeRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl FetchHomeUseCase for DefaultFetchHomeUseCase {
    async fn execute(&self) -> ApiResult<HomePayload> {
        self.repository.fetch_home().await
    }
}

#[derive(Debug, Clone)]
pub struct DefaultFetchMovieDetailUseCase {
    repository: Arc<dyn MovieDetailRepository>,
}

impl DefaultFetchMovieDetailUseCase {
    pub fn new(repository: Arc<dyn MovieDetailRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl FetchMovieDetailUseCase for DefaultFetchMovieDetailUseCase {
    async fn execute(&self, id: &str) -> ApiResult<MovieDetail> {
        self.repository.fetch_movie_detail(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::api_types::ApiError;

    #[derive(Debug)]
    struct FailingRepository;

    #[async_trait]
    impl HomeRepository for FailingRepository {
        async fn fetch_home(&self) -> ApiResult<HomePayload> {
            Err(ApiError::HttpStatus {
                status: 503,
                body: "maintenance".into(),
            })
        }
    }

    #[async_trait]
    impl MovieDetailRepository for FailingRepository {
        async fn fetch_movie_detail(&self, id: &str) -> ApiResult<MovieDetail> {
            Err(ApiError::NotFound {
                resource: "movie detail",
                id: id.to_string(),
            })
        }
    }

    #[tokio::test]
    async fn home_use_case_forwards_repository_errors() {
        let use_case = DefaultFetchHomeUseCase::new(Arc::new(FailingRepository));
        assert_eq!(
            use_case.execute().await,
            Err(ApiError::HttpStatus {
                status: 503,
                body: "maintenance".into()
            })
        );
    }

    #[tokio::test]
    async fn detail_use_case_forwards_requested_id() {
        let use_case =
            DefaultFetchMovieDetailUseCase::new(Arc::new(FailingRepository));
        let err = use_case.execute("27205").await.expect_err("scripted failure");
        assert_eq!(
            err,
            ApiError::NotFound {
                resource: "movie detail",
                id: "27205".into()
            }
        );
    }
}

//! API service trait and its HTTP implementation
//!
//! Repositories depend on this trait rather than on [`ApiClient`], so a stub
//! can stand in for the network.

use std::fmt::Debug;

use async_trait::async_trait;
use marquee_model::{HomePayload, MovieDetail};

use crate::infra::api_client::ApiClient;
use crate::infra::api_types::ApiResult;

#[async_trait]
pub trait ApiService: Send + Sync + Debug {
    /// `GET /home/movie`
    async fn fetch_home_feed(&self) -> ApiResult<HomePayload>;

    /// `GET /details/movie/{id}`
    async fn fetch_movie_detail(&self, id: &str) -> ApiResult<MovieDetail>;
}

#[async_trait]
impl ApiService for ApiClient {
    async fn fetch_home_feed(&self) -> ApiResult<HomePayload> {
        ApiClient::fetch_home_feed(self).await
    }

    async fn fetch_movie_detail(&self, id: &str) -> ApiResult<MovieDetail> {
        ApiClient::fetch_movie_detail(self, id).await
    }
}

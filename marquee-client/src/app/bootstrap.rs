use std::sync::Arc;

use log::info;
use marquee_config::ClientConfig;

use crate::domains::home::{
    DefaultFetchHomeUseCase, DefaultFetchMovieDetailUseCase,
    FetchMovieDetailUseCase, HomeViewModel,
};
use crate::infra::api_client::{ApiClient, ClientBuildError};
use crate::infra::repository::ApiMovieRepository;
use crate::infra::services::api::ApiService;
use crate::infra::testing::stubs::StubApiService;

/// Everything the home screen needs, wired from one [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct HomeScreen {
    pub view_model: HomeViewModel,
    pub movie_details: Arc<dyn FetchMovieDetailUseCase>,
}

impl HomeScreen {
    /// Build the live pipeline, or the fixture-backed one when
    /// `config.stub_mode` is set.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientBuildError> {
        let api: Arc<dyn ApiService> = if config.stub_mode {
            info!("[Bootstrap] Stub mode enabled; serving bundled fixtures");
            Arc::new(StubApiService::new())
        } else {
            Arc::new(ApiClient::new(config)?)
        };

        Ok(Self::with_api(api, config.image_base_url.clone()))
    }

    pub fn with_api(
        api: Arc<dyn ApiService>,
        image_base_url: impl Into<String>,
    ) -> Self {
        let repository = Arc::new(ApiMovieRepository::new(api));
        let home = DefaultFetchHomeUseCase::new(repository.clone());
        let movie_details = DefaultFetchMovieDetailUseCase::new(repository);

        Self {
            view_model: HomeViewModel::new(Arc::new(home), image_base_url),
            movie_details: Arc::new(movie_details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::home::FetchOutcome;

    #[tokio::test]
    async fn stub_config_wires_a_working_screen() {
        let screen = HomeScreen::from_config(
            &ClientConfig::stub().with_image_base_url("https://img.example/w300/"),
        )
        .expect("stub screen");

        assert_eq!(screen.view_model.fetch().await, FetchOutcome::Loaded);
        assert!(
            screen.view_model.banner_image_urls()[0]
                .starts_with("https://img.example/w300/")
        );

        let detail = screen
            .movie_details
            .execute("693134")
            .await
            .expect("bundled detail");
        assert_eq!(detail.runtime, "167");
    }

    #[test]
    fn live_config_with_bad_base_url_fails_to_build() {
        let config = ClientConfig::new("::not-a-url::", "tok");
        assert!(HomeScreen::from_config(&config).is_err());
    }
}

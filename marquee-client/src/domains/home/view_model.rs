//! Home screen view model.
//!
//! Owns the only writable copy of [`ViewState`] and publishes it through a
//! `tokio::sync::watch` channel. A fetch outcome (loading flag, payload and
//! error) is always applied in a single `send_modify`, so a receiver never
//! observes half of it.

use std::sync::Arc;

use log::{debug, info, warn};
use marquee_model::prelude::{HomePayload, MovieSummary};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domains::home::use_case::FetchHomeUseCase;
use crate::infra::api_types::ApiError;

/// Snapshot of what the home screen should render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub payload: Option<HomePayload>,
    /// True only while a fetch is in flight.
    pub is_loading: bool,
    pub error: Option<ApiError>,
}

impl ViewState {
    pub fn is_idle(&self) -> bool {
        !self.is_loading && self.payload.is_none() && self.error.is_none()
    }
}

/// What a call to [`HomeViewModel::fetch`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded,
    Failed,
    /// Another fetch was already in flight; state was left alone.
    AlreadyLoading,
}

/// Text shown over the banner carousel for the movie under the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerInfo {
    pub title: String,
    pub display_date: Option<String>,
    pub display_year: Option<String>,
    pub rating: String,
}

/// One horizontally scrolling row of posters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub title: String,
    pub poster_urls: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct HomeViewModel {
    use_case: Arc<dyn FetchHomeUseCase>,
    image_base_url: String,
    state: Arc<watch::Sender<ViewState>>,
}

impl HomeViewModel {
    pub fn new(
        use_case: Arc<dyn FetchHomeUseCase>,
        image_base_url: impl Into<String>,
    ) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self {
            use_case,
            image_base_url: image_base_url.into(),
            state: Arc::new(state),
        }
    }

    pub fn image_base_url(&self) -> &str {
        &self.image_base_url
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Load the home feed.
    ///
    /// Ignored while another fetch is in flight. A failure keeps whatever
    /// payload an earlier fetch produced. Dropping the future (timeout,
    /// abort, panic) clears `is_loading` so a later retry can start.
    pub async fn fetch(&self) -> FetchOutcome {
        let started = self.state.send_if_modified(|state| {
            if state.is_loading {
                return false;
            }
            state.is_loading = true;
            state.error = None;
            true
        });

        if !started {
            debug!("[HomeViewModel] Fetch requested while loading; ignoring");
            return FetchOutcome::AlreadyLoading;
        }

        let mut loading = LoadingGuard::new(&self.state);

        match self.use_case.execute().await {
            Ok(payload) => {
                info!(
                    "[HomeViewModel] Home feed ready: {} banner movies, {} categories",
                    payload.banner_movies.len(),
                    payload.categories.len()
                );
                loading.disarm();
                self.state.send_modify(|state| {
                    state.payload = Some(payload);
                    state.is_loading = false;
                    state.error = None;
                });
                FetchOutcome::Loaded
            }
            Err(err) => {
                warn!("[HomeViewModel] Home feed fetch failed: {}", err);
                loading.disarm();
                self.state.send_modify(|state| {
                    state.error = Some(err);
                    state.is_loading = false;
                });
                FetchOutcome::Failed
            }
        }
    }

    pub async fn retry(&self) -> FetchOutcome {
        self.fetch().await
    }

    /// Run [`fetch`](Self::fetch) on the tokio runtime and return at once.
    pub fn spawn_fetch(&self) -> JoinHandle<FetchOutcome> {
        let view_model = self.clone();
        tokio::spawn(async move { view_model.fetch().await })
    }

    /// Poster URLs of the banner movies, in banner order. Empty until a
    /// payload is loaded.
    pub fn banner_image_urls(&self) -> Vec<String> {
        self.map_banner(|movie| movie.poster_url(&self.image_base_url))
    }

    pub fn banner_backdrop_urls(&self) -> Vec<String> {
        self.map_banner(|movie| movie.backdrop_url(&self.image_base_url))
    }

    pub fn banner_movie(&self, index: usize) -> Option<MovieSummary> {
        self.state
            .borrow()
            .payload
            .as_ref()
            .and_then(|payload| payload.banner_movies.get(index).cloned())
    }

    pub fn banner_info(&self, index: usize) -> Option<BannerInfo> {
        self.banner_movie(index).map(|movie| BannerInfo {
            display_date: movie.display_release_date(),
            display_year: movie.release_year(),
            rating: movie.rating_label(),
            title: movie.title,
        })
    }

    pub fn category_rows(&self) -> Vec<CategoryRow> {
        let state = self.state.borrow();
        let Some(payload) = state.payload.as_ref() else {
            return Vec::new();
        };
        payload
            .categories
            .iter()
            .map(|category| CategoryRow {
                title: category.title.clone(),
                poster_urls: category
                    .items
                    .iter()
                    .map(|movie| movie.poster_url(&self.image_base_url))
                    .collect(),
            })
            .collect()
    }

    fn map_banner<F>(&self, f: F) -> Vec<String>
    where
        F: Fn(&MovieSummary) -> String,
    {
        self.state
            .borrow()
            .payload
            .as_ref()
            .map(|payload| payload.banner_movies.iter().map(f).collect())
            .unwrap_or_default()
    }
}

/// Clears `is_loading` if a fetch is dropped or unwinds before its outcome
/// is published.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<ViewState>,
    armed: bool,
}

impl<'a> LoadingGuard<'a> {
    fn new(state: &'a watch::Sender<ViewState>) -> Self {
        Self { state, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            warn!("[HomeViewModel] Fetch abandoned before completion");
            self.state.send_modify(|state| state.is_loading = false);
        }
    }
}

pub mod use_case;
pub mod view_model;

pub use use_case::{
    DefaultFetchHomeUseCase, DefaultFetchMovieDetailUseCase, FetchHomeUseCase,
    FetchMovieDetailUseCase,
};
pub use view_model::{
    BannerInfo, CategoryRow, FetchOutcome, HomeViewModel, ViewState,
};

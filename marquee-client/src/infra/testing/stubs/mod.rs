pub mod api;

pub use api::StubApiService;

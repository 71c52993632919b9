pub mod api_client;
pub mod api_types;
pub mod constants;
pub mod repository;
pub mod services;
pub mod testing;

pub mod bootstrap;

pub use bootstrap::HomeScreen;

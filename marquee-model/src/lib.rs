//! Core data model definitions shared across Marquee crates.
#![allow(missing_docs)]

#[cfg(feature = "chrono")]
pub mod display;
pub mod home;
pub mod image;
pub mod movie;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
#[cfg(feature = "chrono")]
pub use display::{display_date, display_year, round_to_places};
pub use home::{HomePayload, MovieCategory};
pub use image::{DEFAULT_IMAGE_BASE_URL, image_url};
pub use movie::{Genre, MovieDetail, MovieSummary};

//! Player/UI focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in marquee-client or other presentation layers.

#[cfg(feature = "chrono")]
pub use super::display::{display_date, display_year, round_to_places};
pub use super::home::{HomePayload, MovieCategory};
pub use super::image::{DEFAULT_IMAGE_BASE_URL, image_url};
pub use super::movie::{Genre, MovieDetail, MovieSummary};

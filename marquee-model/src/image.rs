//! Image CDN URL construction.
//!
//! Movie records only carry partial paths (`/abc.jpg`). The image loader
//! collaborator needs an absolute URL, so every path is joined onto a CDN
//! base before it leaves the core. Image bytes are never fetched here.

/// TMDB CDN base for 780px wide renditions.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w780";

/// Join a CDN base and a partial image path.
///
/// This is plain concatenation so `("{base}", "/a.jpg")` yields
/// `"{base}/a.jpg"`. A trailing slash on `base` is dropped first so a
/// configured `https://cdn/w780/` does not produce `//a.jpg`.
pub fn image_url(base: &str, path: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    format!("{base}{path}")
}

//! Paths of the remote home-feed service, relative to the configured base.

/// Home feed: banner movies plus categorized rows.
pub const HOME_MOVIES: &str = "/home/movie";

/// Prefix of the per-movie detail endpoint; the id is appended as one
/// path segment.
pub const MOVIE_DETAILS_PREFIX: &str = "/details/movie";

pub fn movie_details(id: &str) -> String {
    format!("{MOVIE_DETAILS_PREFIX}/{id}")
}

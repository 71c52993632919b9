use crate::image::image_url;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// A movie as it appears in the home feed lists and the banner carousel.
///
/// `poster_path` and `backdrop_path` are partial CDN paths such as
/// `/kqjL17yufvn9OVLyXYpvtyrFfak.jpg`; use [`MovieSummary::poster_url`] or
/// [`image_url`] to turn them into something an image loader can fetch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieSummary {
    pub adult: bool,
    pub backdrop_path: String,
    pub id: u64,
    pub original_title: String,
    pub title: String,
    pub overview: String,
    pub popularity: f64,
    pub poster_path: String,
    /// ISO date, `yyyy-MM-dd`
    pub release_date: String,
    pub vote_average: f64,
    pub vote_count: u64,
}

impl MovieSummary {
    pub fn poster_url(&self, image_base: &str) -> String {
        image_url(image_base, &self.poster_path)
    }

    pub fn backdrop_url(&self, image_base: &str) -> String {
        image_url(image_base, &self.backdrop_path)
    }

    /// Release date as shown under the banner title, e.g. `01 Mar 2024`.
    #[cfg(feature = "chrono")]
    pub fn display_release_date(&self) -> Option<String> {
        crate::display::display_date(&self.release_date)
    }

    #[cfg(feature = "chrono")]
    pub fn release_year(&self) -> Option<String> {
        crate::display::display_year(&self.release_date)
    }

    /// Vote average rounded to one decimal place.
    #[cfg(feature = "chrono")]
    pub fn rating_label(&self) -> String {
        format!("{:.1}", crate::display::round_to_places(self.vote_average, 1))
    }
}

/// Full record returned by the per-movie detail endpoint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieDetail {
    pub adult: bool,
    pub backdrop_path: String,
    pub budget: u64,
    pub genres: Vec<Genre>,
    pub id: u64,
    pub imdb_id: String,
    pub original_title: String,
    pub overview: String,
    pub popularity: f64,
    pub poster_path: String,
    pub release_date: String,
    pub runtime: String,
    pub vote_average: f64,
    pub vote_count: u64,
}

impl MovieDetail {
    pub fn poster_url(&self, image_base: &str) -> String {
        image_url(image_base, &self.poster_path)
    }

    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(|genre| genre.name.as_str()).collect()
    }
}

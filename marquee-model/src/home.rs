use std::collections::HashSet;

use crate::movie::MovieSummary;

/// A titled row of movies on the home screen, e.g. "Trending".
///
/// `items` keeps the order the service sent; rows render left to right in
/// that order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieCategory {
    pub title: String,
    #[cfg_attr(feature = "serde", serde(rename = "data"))]
    pub items: Vec<MovieSummary>,
}

/// Root aggregate of the home feed: banner carousel plus category rows.
///
/// Built once per successful fetch and never patched afterwards; a later
/// fetch replaces the whole value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HomePayload {
    pub banner_movies: Vec<MovieSummary>,
    #[cfg_attr(feature = "serde", serde(rename = "home_movies"))]
    pub categories: Vec<MovieCategory>,
}

impl HomePayload {
    pub fn category(&self, title: &str) -> Option<&MovieCategory> {
        self.categories.iter().find(|category| category.title == title)
    }

    pub fn category_titles(&self) -> Vec<&str> {
        self.categories
            .iter()
            .map(|category| category.title.as_str())
            .collect()
    }

    /// Look a movie up by id, banner first, then categories in order.
    pub fn find_movie(&self, id: u64) -> Option<&MovieSummary> {
        self.banner_movies
            .iter()
            .chain(self.categories.iter().flat_map(|c| c.items.iter()))
            .find(|movie| movie.id == id)
    }

    /// Ids that occur more than once inside the banner list or inside a
    /// single category. The service promises none; callers log these.
    pub fn duplicate_ids(&self) -> Vec<u64> {
        let mut duplicates = Vec::new();
        let lists = std::iter::once(&self.banner_movies)
            .chain(self.categories.iter().map(|c| &c.items));

        for list in lists {
            let mut seen = HashSet::with_capacity(list.len());
            for movie in list {
                if !seen.insert(movie.id) && !duplicates.contains(&movie.id) {
                    duplicates.push(movie.id);
                }
            }
        }

        duplicates
    }

    pub fn is_empty(&self) -> bool {
        self.banner_movies.is_empty()
            && self.categories.iter().all(|c| c.items.is_empty())
    }
}

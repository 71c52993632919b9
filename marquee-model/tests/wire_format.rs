#![cfg(feature = "serde")]

use marquee_model::{HomePayload, MovieDetail};

const HOME: &str = include_str!("../../marquee-client/fixtures/home_movies.json");
const DETAIL: &str =
    include_str!("../../marquee-client/fixtures/movie_detail_693134.json");

fn ids(payload: &HomePayload) -> Vec<Vec<u64>> {
    std::iter::once(&payload.banner_movies)
        .chain(payload.categories.iter().map(|c| &c.items))
        .map(|list| list.iter().map(|movie| movie.id).collect())
        .collect()
}

#[test]
fn reencoding_preserves_category_and_item_order() {
    let decoded: HomePayload = serde_json::from_str(HOME).expect("fixture decodes");
    let encoded = serde_json::to_string(&decoded).expect("encode");
    let again: HomePayload = serde_json::from_str(&encoded).expect("re-decode");

    assert_eq!(again, decoded);
    assert_eq!(again.category_titles(), decoded.category_titles());
    assert_eq!(ids(&again), ids(&decoded));
}

#[test]
fn fixture_uses_wire_field_names() {
    let raw: serde_json::Value = serde_json::from_str(HOME).expect("json");
    assert!(raw.get("banner_movies").is_some());
    assert!(raw["home_movies"][0].get("data").is_some());
    assert!(raw["banner_movies"][0].get("poster_path").is_some());
}

#[test]
fn ids_are_unique_within_each_list() {
    let payload: HomePayload = serde_json::from_str(HOME).expect("fixture decodes");
    assert!(payload.duplicate_ids().is_empty());
    assert!(!payload.is_empty());
}

#[test]
fn detail_fixture_decodes() {
    let detail: MovieDetail = serde_json::from_str(DETAIL).expect("detail decodes");
    assert_eq!(detail.id, 693134);
    assert_eq!(detail.runtime, "167");
}

#[test]
fn wrong_type_for_numeric_field_is_rejected() {
    let broken = HOME.replacen("\"id\": 693134", "\"id\": \"693134\"", 1);
    assert_ne!(broken, HOME, "fixture layout changed");
    assert!(serde_json::from_str::<HomePayload>(&broken).is_err());
}

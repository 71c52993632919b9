//! ApiClient behaviour against an in-process HTTP server.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use marquee_client::infra::api_client::ApiClient;
use marquee_client::infra::api_types::{ApiError, ErrorKind};
use marquee_client::infra::services::ApiService;
use marquee_client::infra::testing::stubs::StubApiService;
use marquee_client::infra::testing::stubs::api::{
    DUNE_PART_TWO_DETAIL_FIXTURE, HOME_FIXTURE,
};
use marquee_config::ClientConfig;
use tokio::net::TcpListener;

const TOKEN: &str = "test-token-123";

#[derive(Clone, Default)]
struct Recorded {
    headers: Arc<Mutex<Vec<HeaderMap>>>,
}

async fn spawn_server(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server runs");
    });
    addr
}

fn client_for(addr: SocketAddr) -> ApiClient {
    ApiClient::new(&ClientConfig::new(format!("http://{addr}"), TOKEN))
        .expect("client builds")
}

fn json(body: &'static str) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], body)
}

#[tokio::test]
async fn home_request_carries_bearer_and_accept_headers() {
    let recorded = Recorded::default();
    let router = Router::new()
        .route(
            "/home/movie",
            get(|State(recorded): State<Recorded>, headers: HeaderMap| async move {
                recorded.headers.lock().expect("lock").push(headers);
                json(HOME_FIXTURE)
            }),
        )
        .with_state(recorded.clone());
    let addr = spawn_server(router).await;

    let payload = client_for(addr).fetch_home_feed().await.expect("home feed");
    assert_eq!(payload.banner_movies.len(), 5);

    let headers = recorded.headers.lock().expect("lock");
    assert_eq!(headers.len(), 1);
    assert_eq!(
        headers[0].get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()),
        Some("Bearer test-token-123")
    );
    assert_eq!(
        headers[0].get(header::ACCEPT).and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
}

#[tokio::test]
async fn live_decode_matches_stub_and_keeps_order() {
    let stub = StubApiService::new().fetch_home_feed().await.expect("stub");
    let encoded = serde_json::to_string(&stub).expect("encode");
    let router = Router::new().route(
        "/home/movie",
        get(move || {
            let body = encoded.clone();
            async move { ([(header::CONTENT_TYPE, "application/json")], body) }
        }),
    );
    let addr = spawn_server(router).await;

    let live = client_for(addr).fetch_home_feed().await.expect("home feed");
    assert_eq!(live, stub);
    assert_eq!(live.category_titles(), vec!["Trending", "Top Rated", "Upcoming"]);
    let trending: Vec<u64> = live.categories[0].items.iter().map(|m| m.id).collect();
    assert_eq!(trending, vec![929590, 786892, 1022789]);
}

#[tokio::test]
async fn detail_request_hits_the_id_path() {
    let router = Router::new().route(
        "/details/movie/{id}",
        get(|Path(id): Path<String>| async move {
            if id == "693134" {
                json(DUNE_PART_TWO_DETAIL_FIXTURE).into_response()
            } else {
                StatusCode::NOT_FOUND.into_response()
            }
        }),
    );
    let addr = spawn_server(router).await;
    let client = client_for(addr);

    let detail = client.fetch_movie_detail("693134").await.expect("detail");
    assert_eq!(detail.id, 693134);
    assert_eq!(detail.budget, 190_000_000);

    let err = client.fetch_movie_detail("1").await.expect_err("unknown id");
    assert_eq!(
        err,
        ApiError::NotFound {
            resource: "movie detail",
            id: "1".into()
        }
    );
}

#[tokio::test]
async fn non_success_status_maps_to_http_status_error() {
    let router = Router::new().route(
        "/home/movie",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance") }),
    );
    let addr = spawn_server(router).await;

    let err = client_for(addr).fetch_home_feed().await.expect_err("503");
    assert_eq!(
        err,
        ApiError::HttpStatus {
            status: 503,
            body: "down for maintenance".into()
        }
    );
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let router = Router::new().route(
        "/home/movie",
        get(|| async { json("{\"banner_movies\": [") }),
    );
    let addr = spawn_server(router).await;

    let err = client_for(addr).fetch_home_feed().await.expect_err("bad json");
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn movie_without_id_is_a_decode_error() {
    const NO_ID: &str = r#"{
        "banner_movies": [{
            "adult": false,
            "backdrop_path": "/b.jpg",
            "original_title": "Nameless",
            "title": "Nameless",
            "overview": "",
            "popularity": 1.0,
            "poster_path": "/p.jpg",
            "release_date": "2024-01-01",
            "vote_average": 5.0,
            "vote_count": 1
        }],
        "home_movies": []
    }"#;
    let router = Router::new().route("/home/movie", get(|| async { json(NO_ID) }));
    let addr = spawn_server(router).await;

    let err = client_for(addr).fetch_home_feed().await.expect_err("missing id");
    match err {
        ApiError::Decode { message } => assert!(message.contains("id"), "{message}"),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_response_times_out_as_network_error() {
    let router = Router::new().route(
        "/home/movie",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            json(HOME_FIXTURE)
        }),
    );
    let addr = spawn_server(router).await;
    let config =
        ClientConfig::new(format!("http://{addr}"), TOKEN).with_timeouts(1_000, 200);
    let client = ApiClient::new(&config).expect("client builds");

    let err = client.fetch_home_feed().await.expect_err("timeout");
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(err.is_timeout(), "{err:?}");
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = client_for(addr).fetch_home_feed().await.expect_err("refused");
    assert!(matches!(err, ApiError::Network { timed_out: false, .. }), "{err:?}");
}

#[tokio::test]
async fn repeated_id_within_a_row_is_tolerated() {
    let mut payload = StubApiService::new().fetch_home_feed().await.expect("stub");
    let repeated = payload.categories[0].items[0].clone();
    payload.categories[0].items.push(repeated.clone());
    let encoded = serde_json::to_string(&payload).expect("encode");

    let router = Router::new().route(
        "/home/movie",
        get(move || {
            let body = encoded.clone();
            async move { ([(header::CONTENT_TYPE, "application/json")], body) }
        }),
    );
    let addr = spawn_server(router).await;

    let live = client_for(addr)
        .fetch_home_feed()
        .await
        .expect("duplicates do not fail the fetch");
    assert_eq!(live, payload);
    assert_eq!(live.categories[0].items.len(), 4);
    assert_eq!(live.duplicate_ids(), vec![repeated.id]);
}

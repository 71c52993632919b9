//! Marquee client library
//!
//! The home-feed pipeline of the Marquee movie browser, leaf to root:
//! [`infra::api_client`] talks HTTP, [`infra::repository`] hands results
//! through, [`domains::home::use_case`] wraps the repository and
//! [`domains::home::view_model`] turns outcomes into observable state.
//! [`app::bootstrap`] wires the chain from a
//! [`ClientConfig`](marquee_config::ClientConfig).
//!
//! Rendering, image loading and platform lifecycle live elsewhere; this
//! crate only produces state and URLs.

pub mod app;
pub mod domains;
pub mod infra;

//! Serve the home page, embedded at build time.
//!
//! Every request gets the same bytes, whatever its method or body. Paths
//! other than `/` fall through to the router's default 404.

use axum::response::Html;
use axum::routing::any;
use axum::Router;

const PAGE: &str = include_str!("page.html");

async fn any_handler() -> Html<&'static str> {
    Html(PAGE)
}

pub fn service() -> Router {
    Router::new().route("/", any(any_handler))
}

mod units;
mod utils;

use axum::Router;
use std::io;
use std::net::SocketAddr;
use std::process;
use std::thread;

/// Route bindings happen here, once, before the listener accepts anything.
fn app() -> Router {
    Router::new().merge(units::home::service())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    thread::spawn(|| loop {
        let input = &mut String::new();
        io::stdin().read_line(input).unwrap();
        if input.trim() == ":q" {
            process::exit(0);
        }
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], 9306));
    crate::log!("server addr = {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn app_serves_root() {
        let res = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = res.into_body().collect().await.unwrap().to_bytes();
        assert!(!body.is_empty());
    }

    #[tokio::test]
    async fn app_falls_back_to_404() {
        let req = Request::get("/nonexistent-path").body(Body::empty()).unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}

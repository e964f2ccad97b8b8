//! HTTP host for the static site.
//!
//! The hosting document is rendered once and every page route answers with
//! the same shared bytes; the client router decides what to show.

use axum::Router;
use axum::body::Bytes;
use axum::http::header::{self, InvalidHeaderValue};
use axum::http::HeaderValue;
use axum::response::Html;
use axum::routing::get;
use leptos::prelude::LeptosOptions;
use tower::ServiceBuilder;
use tower_http::compression::{CompressionLayer, CompressionLevel};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::app::render_shell;
use crate::core::config::Config;

/// Build the site router.
///
/// Fails only when the configured cache lifetime does not form a valid
/// header value.
pub fn router(options: &LeptosOptions, config: &Config) -> Result<Router, InvalidHeaderValue> {
    let site_root = options.site_root.to_string();
    let pkg_dir = format!("{site_root}/{}", options.site_pkg_dir);

    // The hosting document never changes, render it once
    let index = Html(Bytes::from(render_shell(
        options.clone(),
        config.canonical_url.clone(),
    )));
    let page = move || {
        let index = index.clone();
        async move { index }
    };

    // Pre-compressed bundle (.br / .gz) with a cache lifetime
    let cache_control = HeaderValue::from_str(&config.asset_cache_control())?;
    let pkg_service = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            cache_control,
        ))
        .service(
            ServeDir::new(pkg_dir)
                .precompressed_br()
                .precompressed_gzip(),
        );

    // Unknown paths that are not public files get the document with a 404,
    // the client router shows its not found page
    let public_files = ServeDir::new(&site_root).not_found_service(get(page.clone()));

    let app = Router::new()
        .route("/", get(page))
        .route("/healthz", get(|| async { "ok" }))
        .nest_service(&format!("/{}", options.site_pkg_dir), pkg_service)
        .fallback_service(public_files)
        // Add compression with Brotli priority (best compression for web)
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    Ok(app)
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    fn options() -> LeptosOptions {
        LeptosOptions::builder()
            .output_name("bridge-landing")
            .site_root("target/bridge-landing-test-site")
            .build()
    }

    async fn get_path(app: Router, path: &str) -> (StatusCode, Option<HeaderValue>, Bytes) {
        let response = app
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let cache = response.headers().get(header::CACHE_CONTROL).cloned();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, cache, body)
    }

    #[tokio::test]
    async fn test_index_serves_shell() {
        let app = router(&options(), &Config::default()).unwrap();
        let (status, _, body) = get_path(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("<div id=\"root\"></div>"));
    }

    #[tokio::test]
    async fn test_every_page_shares_one_document() {
        let app = router(&options(), &Config::default()).unwrap();
        let (_, _, first) = get_path(app.clone(), "/").await;
        let (_, _, second) = get_path(app, "/").await;

        assert_eq!(first, second);
        assert_eq!(
            first,
            Bytes::from(render_shell(options(), None))
        );
    }

    #[tokio::test]
    async fn test_unknown_path_gets_shell_with_404() {
        let app = router(&options(), &Config::default()).unwrap();
        let (status, _, body) = get_path(app, "/no-such-page").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(String::from_utf8_lossy(&body).contains("<div id=\"root\"></div>"));
    }

    #[tokio::test]
    async fn test_healthz() {
        let app = router(&options(), &Config::default()).unwrap();
        let (status, _, body) = get_path(app, "/healthz").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_bundle_responses_carry_cache_control() {
        let app = router(&options(), &Config::default()).unwrap();
        let (_, cache, _) = get_path(app, "/pkg/bridge-landing.js").await;

        assert_eq!(
            cache,
            Some(HeaderValue::from_static("public, max-age=3600"))
        );
    }
}

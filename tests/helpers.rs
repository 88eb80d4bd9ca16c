//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use metasnap::{create_router, Analyzer, Config, HttpFetcher};

/// Page that satisfies every check.
pub const FULL_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Example Domain</title>
  <meta name="description" content="An illustrative page">
  <meta name="robots" content="index, follow">
  <link rel="canonical" href="https://example.com/">
  <meta property="og:title" content="Example OG">
  <meta property="og:description" content="OG description">
  <meta property="og:image" content="https://example.com/og.png">
  <meta name="twitter:title" content="Example Tw">
  <meta name="twitter:description" content="Twitter description">
  <meta name="twitter:image" content="https://example.com/tw.png">
  <script type="application/ld+json">{"@context":"https://schema.org","@type":"WebSite"}</script>
</head>
<body><p>Hello</p></body>
</html>"#;

/// Page with only a title.
pub const TITLE_ONLY_PAGE: &str =
    "<html><head><title>Just a title</title></head><body></body></html>";

pub const TEST_ORIGIN: &str = "http://localhost:5173";

pub fn test_config() -> Config {
    Config {
        timeout_seconds: 2,
        ..Default::default()
    }
}

pub fn test_analyzer() -> Analyzer {
    let fetcher = HttpFetcher::from_config(&test_config()).expect("client should build");
    Analyzer::new(fetcher)
}

/// Serves the API on an ephemeral port and returns its address.
pub async fn spawn_api() -> SocketAddr {
    let router =
        create_router(Arc::new(test_analyzer()), TEST_ORIGIN).expect("router should build");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server runs");
    });
    addr
}

pub fn api_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("client should build")
}

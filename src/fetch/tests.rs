//! Fetch module tests.

use super::*;
use crate::error_handling::RequestFailure;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_fetcher(timeout: Duration) -> HttpFetcher {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(crate::config::DEFAULT_USER_AGENT)
        .build()
        .expect("test client should build");
    HttpFetcher::new(Arc::new(client))
}

#[test]
fn test_validate_url_rejects_blank() {
    assert!(matches!(validate_url(""), Err(FetchError::EmptyUrl)));
    assert!(matches!(validate_url("   "), Err(FetchError::EmptyUrl)));
}

#[test]
fn test_validate_url_rejects_malformed() {
    assert!(matches!(
        validate_url("example.com"),
        Err(FetchError::InvalidUrl { .. })
    ));
    assert!(matches!(
        validate_url("http://"),
        Err(FetchError::InvalidUrl { .. })
    ));
}

#[test]
fn test_validate_url_rejects_other_schemes() {
    match validate_url("ftp://example.com/file") {
        Err(FetchError::UnsupportedScheme(scheme)) => assert_eq!(scheme, "ftp"),
        other => panic!("expected UnsupportedScheme, got {:?}", other),
    }
    assert!(matches!(
        validate_url("file:///etc/passwd"),
        Err(FetchError::UnsupportedScheme(_))
    ));
}

#[test]
fn test_validate_url_trims_and_accepts_http() {
    let url = validate_url("  https://example.com/page  ").expect("valid URL");
    assert_eq!(url.as_str(), "https://example.com/page");
}

#[tokio::test]
async fn test_fetch_returns_body_and_sends_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .and(header("user-agent", crate::config::DEFAULT_USER_AGENT))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><head><title>Hi</title></head></html>"),
        )
        .mount(&server)
        .await;

    let fetcher = test_fetcher(Duration::from_secs(5));
    let raw = fetcher
        .fetch(&format!("{}/page", server.uri()))
        .await
        .expect("fetch should succeed");
    assert_eq!(raw.status, 200);
    assert!(raw.body.contains("<title>Hi</title>"));
    assert!(raw.final_url.ends_with("/page"));
}

#[tokio::test]
async fn test_fetch_follows_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", format!("{}/new", server.uri())),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string("moved here"))
        .mount(&server)
        .await;

    let fetcher = test_fetcher(Duration::from_secs(5));
    let raw = fetcher
        .fetch(&format!("{}/old", server.uri()))
        .await
        .expect("redirect should be followed");
    assert_eq!(raw.body, "moved here");
    assert!(raw.final_url.ends_with("/new"));
}

#[tokio::test]
async fn test_fetch_non_success_status_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = test_fetcher(Duration::from_secs(5));
    match fetcher.fetch(&format!("{}/missing", server.uri())).await {
        Err(FetchError::HttpStatus { status, url }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/missing"));
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_timeout_is_categorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let fetcher = test_fetcher(Duration::from_millis(200));
    match fetcher.fetch(&server.uri()).await {
        Err(FetchError::Request { kind, .. }) => assert_eq!(kind, RequestFailure::Timeout),
        other => panic!("expected timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_truncates_oversized_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("a".repeat(10_000)))
        .mount(&server)
        .await;

    let fetcher = test_fetcher(Duration::from_secs(5)).with_max_body_size(1_000);
    let raw = fetcher.fetch(&server.uri()).await.expect("fetch should succeed");
    assert_eq!(raw.body.len(), 1_000);
}

#[tokio::test]
async fn test_fetch_blank_url_never_hits_network() {
    let fetcher = test_fetcher(Duration::from_secs(5));
    assert!(matches!(fetcher.fetch("").await, Err(FetchError::EmptyUrl)));
}

#[tokio::test]
async fn test_fetch_decodes_declared_charset() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latin1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            b"<html><head><title>Caf\xe9</title></head></html>".to_vec(),
            "text/html; charset=iso-8859-1",
        ))
        .mount(&server)
        .await;

    let fetcher = test_fetcher(Duration::from_secs(5));
    let raw = fetcher
        .fetch(&format!("{}/latin1", server.uri()))
        .await
        .expect("fetch should succeed");
    assert!(raw.body.contains("<title>Café</title>"), "body: {}", raw.body);
    assert!(!raw.body.contains('\u{FFFD}'));
}

#[tokio::test]
async fn test_fetch_without_charset_reads_utf8() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "<title>Crème brûlée</title>".as_bytes().to_vec(),
            "text/html",
        ))
        .mount(&server)
        .await;

    let fetcher = test_fetcher(Duration::from_secs(5));
    let raw = fetcher.fetch(&server.uri()).await.expect("fetch should succeed");
    assert_eq!(raw.body, "<title>Crème brûlée</title>");
}

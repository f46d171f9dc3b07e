use crate::{http_fetcher, refused_url};
use std::time::Duration;
use title_sweep::config::FetchConfig;
use title_sweep::crawler::{FetchTitle, TitleFetcher};
use title_sweep::record::{FetchStatus, FETCH_FAILED_TITLE, NO_TITLE};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts a GET route answering with raw bytes and the given content type
async fn mount_page(server: &MockServer, route: &str, content_type: &str, body: &[u8]) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", content_type)
                .set_body_bytes(body.to_vec()),
        )
        .mount(server)
        .await;
}

/// Host and port of the mock server, as reported in the domain column
fn server_domain(server: &MockServer) -> String {
    server.uri().trim_start_matches("http://").to_string()
}

#[tokio::test]
async fn test_extracts_title_from_page() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        "text/html; charset=utf-8",
        br#"<html><head><TITLE class="x">  Hello World  </TITLE></head><body></body></html>"#,
    )
    .await;

    let url = format!("{}/", mock_server.uri());
    let record = http_fetcher(10).fetch(&url).await;

    assert_eq!(record.status(), FetchStatus::Success);
    assert_eq!(record.url(), url);
    assert_eq!(record.title(), "Hello World");
    assert_eq!(record.domain(), server_domain(&mock_server));
    assert_eq!(record.status_code(), Some(200));
    assert_eq!(record.error(), None);
}

#[tokio::test]
async fn test_scheme_is_added_to_bare_address() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/bare", "text/html", b"<title>Bare</title>").await;

    let bare = format!("{}/bare", server_domain(&mock_server));
    let record = http_fetcher(10).fetch(&bare).await;

    assert_eq!(record.url(), format!("http://{}", bare));
    assert_eq!(record.title(), "Bare");
}

#[tokio::test]
async fn test_decodes_declared_charset() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/latin1",
        "text/html; charset=iso-8859-1",
        b"<html><head><title>Caf\xe9 cr\xe8me</title></head></html>",
    )
    .await;

    let record = http_fetcher(10)
        .fetch(&format!("{}/latin1", mock_server.uri()))
        .await;

    assert!(record.is_success());
    assert_eq!(record.title(), "Café crème");
}

#[tokio::test]
async fn test_invalid_bytes_are_replaced() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/broken",
        "text/html",
        b"<title>bad \xff byte</title>",
    )
    .await;

    let record = http_fetcher(10)
        .fetch(&format!("{}/broken", mock_server.uri()))
        .await;

    assert!(record.is_success());
    assert_eq!(record.title(), "bad \u{FFFD} byte");
}

#[tokio::test]
async fn test_page_without_title_is_success() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/untitled",
        "text/html",
        b"<html><body><h1>No head here</h1></body></html>",
    )
    .await;

    let record = http_fetcher(10)
        .fetch(&format!("{}/untitled", mock_server.uri()))
        .await;

    assert_eq!(record.status(), FetchStatus::Success);
    assert_eq!(record.title(), NO_TITLE);
    assert_eq!(record.status_code(), Some(200));
}

#[tokio::test]
async fn test_not_found_is_http_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<title>Not here</title>"))
        .mount(&mock_server)
        .await;

    let record = http_fetcher(10)
        .fetch(&format!("{}/missing", mock_server.uri()))
        .await;

    assert_eq!(record.status(), FetchStatus::Error);
    assert_eq!(record.status_code(), Some(404));
    assert_eq!(record.title(), FETCH_FAILED_TITLE);
    assert_eq!(record.domain(), server_domain(&mock_server));
    assert_eq!(record.error(), Some("HTTP Error 404: Not Found"));
}

#[tokio::test]
async fn test_server_error_is_http_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let record = http_fetcher(10).fetch(&mock_server.uri()).await;

    assert_eq!(record.status(), FetchStatus::Error);
    assert_eq!(record.status_code(), Some(503));
}

#[tokio::test]
async fn test_redirect_is_followed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/new"))
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/new", "text/html", b"<title>Moved</title>").await;

    let url = format!("{}/old", mock_server.uri());
    let record = http_fetcher(10).fetch(&url).await;

    assert!(record.is_success());
    assert_eq!(record.url(), url);
    assert_eq!(record.title(), "Moved");
    assert_eq!(record.status_code(), Some(200));
}

#[tokio::test]
async fn test_configured_user_agent_is_sent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ua"))
        .and(header("user-agent", "TitleSweep-Test/1.0"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_bytes(b"<title>Identified</title>".to_vec()),
        )
        .mount(&mock_server)
        .await;

    let config = FetchConfig {
        user_agent: "TitleSweep-Test/1.0".to_string(),
        ..FetchConfig::default()
    };
    let fetcher = TitleFetcher::from_config(&config).expect("Failed to build HTTP client");
    let record = fetcher.fetch(&format!("{}/ua", mock_server.uri())).await;

    // Without the expected header wiremock answers 404
    assert!(record.is_success(), "unexpected record: {:?}", record);
    assert_eq!(record.title(), "Identified");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let url = refused_url();

    let record = http_fetcher(10).fetch(&url).await;

    assert_eq!(record.status(), FetchStatus::Error);
    assert_eq!(record.status_code(), None);
    assert_eq!(record.title(), FETCH_FAILED_TITLE);
    assert!(record.domain().starts_with("127.0.0.1:"));
    assert!(!record.error().unwrap_or("").is_empty());
}

#[tokio::test]
async fn test_unresolvable_host_is_transport_error() {
    let record = http_fetcher(10).fetch("no-such-host.invalid").await;

    assert_eq!(record.status(), FetchStatus::Error);
    assert_eq!(record.url(), "http://no-such-host.invalid");
    assert_eq!(record.status_code(), None);
    assert!(!record.error().unwrap_or("").is_empty());
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<title>Too late</title>")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let record = http_fetcher(1)
        .fetch(&format!("{}/slow", mock_server.uri()))
        .await;

    assert_eq!(record.status(), FetchStatus::Error);
    assert_eq!(record.status_code(), None);
    assert!(
        record.error().unwrap_or("").contains("timed out"),
        "unexpected error: {:?}",
        record.error()
    );
}

#[tokio::test]
async fn test_truncated_body_is_unexpected_error() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local addr");

    // Declares a longer body than it sends, then hangs up
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("Failed to accept");
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await;
        let _ = socket
            .write_all(
                b"HTTP/1.1 200 OK\r\n\
                  Content-Type: text/html\r\n\
                  Content-Length: 1000\r\n\
                  \r\n\
                  <title>x</title>",
            )
            .await;
        let _ = socket.shutdown().await;
    });

    let record = http_fetcher(10).fetch(&format!("http://{}/", addr)).await;

    assert_eq!(record.status(), FetchStatus::Error);
    assert_eq!(record.status_code(), None);
    assert_eq!(record.title(), FETCH_FAILED_TITLE);
    assert!(
        record.error().unwrap_or("").starts_with("failed to read body"),
        "unexpected error: {:?}",
        record.error()
    );
}

use crate::{http_fetcher, refused_url};
use std::time::Duration;
use title_sweep::crawler::{Dispatcher, SilentProgress};
use title_sweep::output::{format_csv_report, summarize, write_csv_report};
use title_sweep::record::FetchStatus;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts an HTML page with the given title and response delay
async fn mount_titled(server: &MockServer, route: &str, title: &str, delay_ms: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_bytes(format!("<html><head><title>{}</title></head></html>", title))
                .set_delay(Duration::from_millis(delay_ms)),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_mixed_batch_keeps_input_order() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_titled(&mock_server, "/slow", "Slow", 300).await;
    mount_titled(&mock_server, "/fast", "Fast", 0).await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(410))
        .mount(&mock_server)
        .await;

    let urls = vec![
        format!("{}/slow", base_url),
        format!("{}/gone", base_url),
        refused_url(),
        format!("{}/fast", base_url),
        format!("{}/slow", base_url),
    ];

    let dispatcher = Dispatcher::new(http_fetcher(10), 3).with_progress(SilentProgress);
    let records = dispatcher.run(&urls).await;

    assert_eq!(records.len(), urls.len());
    for (record, url) in records.iter().zip(&urls) {
        assert_eq!(record.url(), url);
    }

    assert_eq!(records[0].title(), "Slow");
    assert_eq!(records[1].status(), FetchStatus::Error);
    assert_eq!(records[1].status_code(), Some(410));
    assert_eq!(records[2].status(), FetchStatus::Error);
    assert_eq!(records[2].status_code(), None);
    assert_eq!(records[3].title(), "Fast");
    assert_eq!(records[4].title(), "Slow");

    let summary = summarize(&records);
    assert_eq!(summary.succeeded, 3);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.http_errors, 1);
}

#[tokio::test]
async fn test_duplicate_urls_are_fetched_per_occurrence() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dup"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_bytes(b"<title>Dup</title>".to_vec()),
        )
        .expect(3)
        .mount(&mock_server)
        .await;

    let url = format!("{}/dup", mock_server.uri());
    let urls = vec![url.clone(), url.clone(), url];

    let records = Dispatcher::new(http_fetcher(10), 2)
        .with_progress(SilentProgress)
        .run(&urls)
        .await;

    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.title() == "Dup"));

    // One request per occurrence, not per distinct URL
    mock_server.verify().await;
}

#[tokio::test]
async fn test_repeat_runs_give_same_results() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    for i in 0..6 {
        mount_titled(&mock_server, &format!("/p{}", i), &format!("Page {}", i), 0).await;
    }
    let urls: Vec<String> = (0..8).map(|i| format!("{}/p{}", base_url, i)).collect();

    let dispatcher = Dispatcher::new(http_fetcher(10), 4).with_progress(SilentProgress);
    let first = dispatcher.run(&urls).await;
    let second = dispatcher.run(&urls).await;

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.title(), b.title());
        assert_eq!(a.domain(), b.domain());
        assert_eq!(a.status(), b.status());
    }
    assert_eq!(first[7].status_code(), Some(404));
}

#[tokio::test]
async fn test_report_written_for_batch() {
    let mock_server = MockServer::start().await;
    mount_titled(&mock_server, "/a", "Alpha, Inc.", 0).await;

    let urls = vec![
        format!("{}/a", mock_server.uri()),
        format!("{}/missing", mock_server.uri()),
    ];
    let records = Dispatcher::new(http_fetcher(10), 2)
        .with_progress(SilentProgress)
        .run(&urls)
        .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let report_path = dir.path().join("url_titles.csv");
    write_csv_report(&records, &report_path).expect("Failed to write report");

    let written = std::fs::read_to_string(&report_path).expect("Failed to read report");
    assert_eq!(written, format_csv_report(&records));

    let rows: Vec<&str> = written.split("\r\n").filter(|r| !r.is_empty()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], "url,title,domain,status,status_code,error");
    assert!(rows[1].contains("\"Alpha, Inc.\""));
    assert!(rows[1].contains(",success,200,"));
    assert!(rows[2].ends_with(",error,404,HTTP Error 404: Not Found"));
}

//! Popularity resolution and the YouTube lookup's degradation paths.

use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use byeai_consensus::{FlagSource, PopularityResolver, PopularitySource, YouTubeLookup};
use byeai_core::config::LookupConfig;
use byeai_core::traits::IPopularityLookup;

const FALLBACK: u64 = 100_000;

/// Lookup returning a fixed reading and counting calls.
struct FixedLookup {
    reading: u64,
    calls: AtomicUsize,
}

impl FixedLookup {
    fn new(reading: u64) -> Self {
        Self {
            reading,
            calls: AtomicUsize::new(0),
        }
    }
}

impl IPopularityLookup for FixedLookup {
    async fn lookup(&self, _item_id: &str) -> u64 {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reading
    }
}

#[tokio::test]
async fn reported_reading_is_used_as_is() {
    let resolver = PopularityResolver::new(FixedLookup::new(5), FALLBACK);
    let resolved = resolver.resolve("vid", 42, &FlagSource::Thumbnail).await;
    assert_eq!(resolved.value, 42);
    assert_eq!(resolved.source, PopularitySource::Reported);
    assert_eq!(resolver.lookup().calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn zero_from_watch_page_is_trusted() {
    let resolver = PopularityResolver::new(FixedLookup::new(5), FALLBACK);
    let source = FlagSource::parse("inline_button");
    let resolved = resolver.resolve("vid", 0, &source).await;
    assert_eq!(resolved.value, 0);
    assert_eq!(resolved.source, PopularitySource::Reported);
    assert_eq!(resolver.lookup().calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn thumbnail_without_reading_asks_the_lookup() {
    let resolver = PopularityResolver::new(FixedLookup::new(2_500), FALLBACK);
    for source in ["thumbnail", "context_menu"] {
        let resolved = resolver.resolve("vid", 0, &FlagSource::parse(source)).await;
        assert_eq!(resolved.value, 2_500);
        assert_eq!(resolved.source, PopularitySource::Lookup);
    }
    assert_eq!(resolver.lookup().calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn lookup_without_data_falls_back() {
    let resolver = PopularityResolver::new(FixedLookup::new(0), FALLBACK);
    let resolved = resolver.resolve("vid", 0, &FlagSource::ContextMenu).await;
    assert_eq!(resolved.value, FALLBACK);
    assert_eq!(resolved.source, PopularitySource::Fallback);
}

#[test]
fn flag_source_round_trips_names() {
    for name in ["thumbnail", "context_menu", "inline_button", "unknown"] {
        assert_eq!(FlagSource::parse(name).to_string(), name);
    }
    assert!(!FlagSource::parse("unknown").lacks_reading());
}

// --- YouTubeLookup ---

/// Serve exactly one HTTP response on a local port and return its base URL.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 4096];
        let mut read = 0;
        loop {
            let n = socket.read(&mut buf[read..]).await.unwrap();
            read += n;
            if n == 0 || buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });
    format!("http://{addr}")
}

/// Local responders must not be routed through an ambient proxy.
fn youtube(config: LookupConfig) -> YouTubeLookup {
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(std::time::Duration::from_secs(config.timeout_secs))
        .build()
        .unwrap();
    YouTubeLookup::with_client(config, client)
}

fn config(base_url: String) -> LookupConfig {
    LookupConfig {
        api_key: Some("test-key".to_string()),
        base_url,
        timeout_secs: 5,
        daily_quota: 10,
        fallback_popularity: FALLBACK,
    }
}

#[tokio::test]
async fn ok_response_yields_view_count() {
    let url = serve_once("200 OK", r#"{"items":[{"statistics":{"viewCount":"4000000"}}]}"#).await;
    let lookup = youtube(config(url));
    assert_eq!(lookup.lookup("vid").await, 4_000_000);
    assert_eq!(lookup.quota_status().requests_used, 1);
}

#[tokio::test]
async fn ok_response_without_statistics_is_zero() {
    let url = serve_once("200 OK", r#"{"items":[]}"#).await;
    let lookup = youtube(config(url));
    assert_eq!(lookup.lookup("vid").await, 0);
}

#[tokio::test]
async fn forbidden_degrades_to_fallback() {
    let url = serve_once("403 Forbidden", r#"{"error":{}}"#).await;
    let lookup = youtube(config(url));
    assert_eq!(lookup.lookup("vid").await, FALLBACK);
    assert_eq!(lookup.quota_status().requests_used, 1);
}

#[tokio::test]
async fn server_error_degrades_to_fallback() {
    let url = serve_once("500 Internal Server Error", "{}").await;
    let lookup = youtube(config(url));
    assert_eq!(lookup.lookup("vid").await, FALLBACK);
}

#[tokio::test]
async fn unreachable_service_degrades_without_using_quota() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let lookup = youtube(config(format!("http://127.0.0.1:{port}")));
    assert_eq!(lookup.lookup("vid").await, FALLBACK);
    assert_eq!(lookup.quota_status().requests_used, 0);
}

const SECRET_KEY: &str = "SECRETKEY123";

#[tokio::test]
async fn transport_error_never_exposes_api_key() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let mut cfg = config(format!("http://127.0.0.1:{port}"));
    cfg.api_key = Some(SECRET_KEY.to_string());
    let lookup = youtube(cfg);

    let err = lookup.fetch_view_count("vid").await.unwrap_err();
    let rendered = format!("{err} {err:?}");
    assert!(!rendered.contains(SECRET_KEY), "key leaked: {rendered}");
    assert!(!rendered.contains("key="), "query leaked: {rendered}");
}

#[tokio::test]
async fn undecodable_body_never_exposes_api_key() {
    let url = serve_once("200 OK", "not json at all").await;
    let mut cfg = config(url);
    cfg.api_key = Some(SECRET_KEY.to_string());
    let lookup = youtube(cfg);

    let err = lookup.fetch_view_count("vid").await.unwrap_err();
    let rendered = format!("{err} {err:?}");
    assert!(!rendered.contains(SECRET_KEY), "key leaked: {rendered}");
    // The service did answer, so the slot stays spent.
    assert_eq!(lookup.quota_status().requests_used, 1);
}

#[tokio::test]
async fn missing_api_key_degrades_to_fallback() {
    let mut cfg = config("http://127.0.0.1:9".to_string());
    cfg.api_key = None;
    let lookup = YouTubeLookup::new(cfg).unwrap();
    assert_eq!(lookup.lookup("vid").await, FALLBACK);
    assert_eq!(lookup.quota_status().requests_used, 0);
}

#[tokio::test]
async fn exhausted_quota_skips_the_request() {
    let mut cfg = config("http://127.0.0.1:9".to_string());
    cfg.daily_quota = 0;
    let lookup = YouTubeLookup::new(cfg).unwrap();
    assert_eq!(lookup.lookup("vid").await, FALLBACK);
    let status = lookup.quota_status();
    assert_eq!(status.requests_used, 0);
    assert_eq!(status.requests_remaining, 0);
}

#[tokio::test]
async fn resolver_over_real_lookup_reports_lookup_source() {
    let url = serve_once("200 OK", r#"{"items":[{"statistics":{"viewCount":"777"}}]}"#).await;
    let resolver = PopularityResolver::new(youtube(config(url)), FALLBACK);
    let resolved = resolver.resolve("vid", 0, &FlagSource::Thumbnail).await;
    assert_eq!(resolved.value, 777);
    assert_eq!(resolved.source, PopularitySource::Lookup);
}
